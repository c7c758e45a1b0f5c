mod service_item;

pub use service_item::{
    CreateServiceRequest, ServiceCategory, ServiceItem, ServiceStatus, UpdateServiceRequest,
};
