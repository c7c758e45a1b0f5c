// Customers module

pub mod models;
pub mod repositories;
pub mod services;

pub use models::{CreateCustomerRequest, Customer, CustomerType, UpdateCustomerRequest};
pub use repositories::CustomerRepository;
pub use services::CustomerService;
