// Service catalog module

pub mod models;
pub mod repositories;
pub mod services;

pub use models::{
    CreateServiceRequest, ServiceCategory, ServiceItem, ServiceStatus, UpdateServiceRequest,
};
pub use repositories::CatalogRepository;
pub use services::CatalogService;
