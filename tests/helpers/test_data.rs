// Test Data Factory
//
// Builders for the entities the integration tests exercise. Names and
// figures mirror a small Indian CA practice so assertions read naturally.
// Each test target pulls this file in by path, so not every builder is
// used everywhere.
#![allow(dead_code)]

use chrono::NaiveDate;
use rust_decimal::Decimal;

use firmdesk::catalog::{CreateServiceRequest, ServiceCategory, ServiceStatus};
use firmdesk::customers::{CreateCustomerRequest, CustomerType};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

pub fn individual_customer(name: &str, email: &str, phone: &str) -> CreateCustomerRequest {
    CreateCustomerRequest {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        business_name: None,
        customer_type: CustomerType::Individual,
        pan: "ABCPK1234F".to_string(),
        gstin: String::new(),
    }
}

pub fn business_customer(name: &str, email: &str, phone: &str) -> CreateCustomerRequest {
    CreateCustomerRequest {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        business_name: Some(name.to_string()),
        customer_type: CustomerType::Business,
        pan: "AAACT5678Q".to_string(),
        gstin: "27AAACT5678Q1Z5".to_string(),
    }
}

pub fn catalog_service(name: &str, category: ServiceCategory, price: i64) -> CreateServiceRequest {
    CreateServiceRequest {
        name: name.to_string(),
        description: format!("{} services", name),
        category,
        price: Decimal::from(price),
        status: ServiceStatus::Active,
    }
}
