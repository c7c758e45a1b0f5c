mod invoice;

pub use invoice::{CreateInvoiceRequest, Invoice, InvoiceStatus};
