mod customer;

pub use customer::{CreateCustomerRequest, Customer, CustomerType, UpdateCustomerRequest};
