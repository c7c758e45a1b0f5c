// Invoices module

pub mod models;
pub mod repositories;
pub mod services;

pub use models::{CreateInvoiceRequest, Invoice, InvoiceStatus};
pub use repositories::InvoiceRepository;
pub use services::{InvoiceService, InvoiceStats};
