mod quotation;

pub use quotation::{CreateQuotationRequest, Quotation, QuotationStatus};
