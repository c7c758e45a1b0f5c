// Quotations module

pub mod models;
pub mod repositories;
pub mod services;

pub use models::{CreateQuotationRequest, Quotation, QuotationStatus};
pub use repositories::QuotationRepository;
pub use services::QuotationService;
