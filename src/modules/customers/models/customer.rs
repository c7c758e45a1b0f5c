// Customer model with validation
//
// A customer is either an individual or a registered business. Email and
// phone are mandatory contact points; PAN and GSTIN are the tax ids shown
// on quotations and invoices.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{AppError, Result, Searchable, StoredEntity};

/// Customer classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerType {
    Individual,
    Business,
}

impl Default for CustomerType {
    fn default() -> Self {
        CustomerType::Individual
    }
}

impl std::fmt::Display for CustomerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CustomerType::Individual => write!(f, "Individual"),
            CustomerType::Business => write!(f, "Business"),
        }
    }
}

impl std::str::FromStr for CustomerType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Individual" => Ok(CustomerType::Individual),
            "Business" => Ok(CustomerType::Business),
            _ => Err(format!("Invalid customer type: {}", s)),
        }
    }
}

/// Represents a customer of the practice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Unique customer ID (UUID)
    pub id: String,

    pub name: String,
    pub email: String,
    pub phone: String,

    /// Trading name, present for business customers
    pub business_name: Option<String>,

    pub customer_type: CustomerType,

    /// Permanent Account Number
    pub pan: String,

    /// GST registration number
    pub gstin: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Create a new customer with validation
    pub fn new(request: CreateCustomerRequest) -> Result<Self> {
        Self::validate_name(&request.name)?;
        Self::validate_email(&request.email)?;
        Self::validate_phone(&request.phone)?;

        let now = Utc::now();

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name: request.name,
            email: request.email,
            phone: request.phone,
            business_name: request.business_name,
            customer_type: request.customer_type,
            pan: request.pan,
            gstin: request.gstin,
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply an update request, re-validating any changed contact fields
    pub fn apply(&mut self, patch: UpdateCustomerRequest) -> Result<()> {
        if let Some(name) = patch.name {
            Self::validate_name(&name)?;
            self.name = name;
        }
        if let Some(email) = patch.email {
            Self::validate_email(&email)?;
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            Self::validate_phone(&phone)?;
            self.phone = phone;
        }
        if let Some(business_name) = patch.business_name {
            self.business_name = business_name;
        }
        if let Some(customer_type) = patch.customer_type {
            self.customer_type = customer_type;
        }
        if let Some(pan) = patch.pan {
            self.pan = pan;
        }
        if let Some(gstin) = patch.gstin {
            self.gstin = gstin;
        }

        Ok(())
    }

    fn validate_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(AppError::validation("Customer name cannot be empty"));
        }

        Ok(())
    }

    fn validate_email(email: &str) -> Result<()> {
        if email.trim().is_empty() {
            return Err(AppError::validation("Customer email cannot be empty"));
        }

        if !email.contains('@') {
            return Err(AppError::validation(format!(
                "Customer email '{}' is not a valid address",
                email
            )));
        }

        Ok(())
    }

    fn validate_phone(phone: &str) -> Result<()> {
        if phone.trim().is_empty() {
            return Err(AppError::validation("Customer phone cannot be empty"));
        }

        Ok(())
    }
}

impl StoredEntity for Customer {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind() -> &'static str {
        "Customer"
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

impl Searchable for Customer {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.phone.as_str()]
    }
}

/// Request to create a customer, decoupled from any form widget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCustomerRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub customer_type: CustomerType,
    #[serde(default)]
    pub pan: String,
    #[serde(default)]
    pub gstin: String,
}

/// Partial update; `None` fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCustomerRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub business_name: Option<Option<String>>,
    pub customer_type: Option<CustomerType>,
    pub pan: Option<String>,
    pub gstin: Option<String>,
}
