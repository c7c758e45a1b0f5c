mod invoice_service;
mod invoice_stats;

pub use invoice_service::InvoiceService;
pub use invoice_stats::InvoiceStats;
