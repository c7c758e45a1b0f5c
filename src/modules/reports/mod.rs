// Reports module

pub mod models;
pub mod services;

pub use models::DashboardSummary;
pub use services::ReportService;
