// Service catalog item
//
// A service the firm offers (GST registration, audit, bookkeeping, ...).
// Inactive items stay on record for historical documents but cannot be
// placed on new quotations.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{money, AppError, Result, Searchable, StoredEntity};

/// Fixed set of practice areas a service belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceCategory {
    Tax,
    Audit,
    Corporate,
    Accounting,
    Consulting,
}

impl std::fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceCategory::Tax => write!(f, "Tax"),
            ServiceCategory::Audit => write!(f, "Audit"),
            ServiceCategory::Corporate => write!(f, "Corporate"),
            ServiceCategory::Accounting => write!(f, "Accounting"),
            ServiceCategory::Consulting => write!(f, "Consulting"),
        }
    }
}

impl std::str::FromStr for ServiceCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Tax" => Ok(ServiceCategory::Tax),
            "Audit" => Ok(ServiceCategory::Audit),
            "Corporate" => Ok(ServiceCategory::Corporate),
            "Accounting" => Ok(ServiceCategory::Accounting),
            "Consulting" => Ok(ServiceCategory::Consulting),
            _ => Err(format!("Invalid service category: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Active,
    Inactive,
}

impl Default for ServiceStatus {
    fn default() -> Self {
        ServiceStatus::Active
    }
}

impl ServiceStatus {
    /// Flip active <-> inactive
    pub fn toggled(self) -> Self {
        match self {
            ServiceStatus::Active => ServiceStatus::Inactive,
            ServiceStatus::Inactive => ServiceStatus::Active,
        }
    }
}

impl std::fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceStatus::Active => write!(f, "active"),
            ServiceStatus::Inactive => write!(f, "inactive"),
        }
    }
}

/// A billable service in the firm's catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceItem {
    /// Unique service ID (UUID)
    pub id: String,

    pub name: String,
    pub description: String,
    pub category: ServiceCategory,

    /// List price, currency-agnostic unit
    pub price: Decimal,

    pub status: ServiceStatus,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ServiceItem {
    /// Create a new catalog item with validation
    pub fn new(request: CreateServiceRequest) -> Result<Self> {
        if request.name.trim().is_empty() {
            return Err(AppError::validation("Service name cannot be empty"));
        }
        money::validate_amount("Service price", request.price)?;

        let now = Utc::now();

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name: request.name,
            description: request.description,
            category: request.category,
            price: request.price,
            status: request.status,
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply an update request
    pub fn apply(&mut self, patch: UpdateServiceRequest) -> Result<()> {
        if let Some(name) = patch.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Service name cannot be empty"));
            }
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(price) = patch.price {
            money::validate_amount("Service price", price)?;
            self.price = price;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }

        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.status == ServiceStatus::Active
    }
}

impl StoredEntity for ServiceItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind() -> &'static str {
        "Service"
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

impl Searchable for ServiceItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.category.as_str()]
    }
}

impl ServiceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCategory::Tax => "Tax",
            ServiceCategory::Audit => "Audit",
            ServiceCategory::Corporate => "Corporate",
            ServiceCategory::Accounting => "Accounting",
            ServiceCategory::Consulting => "Consulting",
        }
    }
}

/// Request to add a catalog item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateServiceRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: ServiceCategory,
    pub price: Decimal,
    #[serde(default)]
    pub status: ServiceStatus,
}

/// Partial update; `None` fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateServiceRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<ServiceCategory>,
    pub price: Option<Decimal>,
    pub status: Option<ServiceStatus>,
}
