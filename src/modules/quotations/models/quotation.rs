// Quotation model with status lifecycle
//
// A quotation collects catalog services for a customer, applies a tax
// rate, and walks a one-way lifecycle: draft -> sent -> accepted/rejected.
// Accepted and rejected are terminal. Only an accepted quotation can be
// converted to an invoice.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{money, AppError, Result, Searchable, StoredEntity};

/// Quotation status lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuotationStatus {
    /// Being composed, not yet shared with the customer
    Draft,

    /// Delivered to the customer, awaiting a decision
    Sent,

    /// Customer agreed; eligible for invoice conversion
    Accepted,

    /// Customer declined
    Rejected,
}

impl Default for QuotationStatus {
    fn default() -> Self {
        QuotationStatus::Draft
    }
}

impl QuotationStatus {
    /// Terminal states permit no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, QuotationStatus::Accepted | QuotationStatus::Rejected)
    }
}

impl std::fmt::Display for QuotationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuotationStatus::Draft => write!(f, "draft"),
            QuotationStatus::Sent => write!(f, "sent"),
            QuotationStatus::Accepted => write!(f, "accepted"),
            QuotationStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for QuotationStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "draft" => Ok(QuotationStatus::Draft),
            "sent" => Ok(QuotationStatus::Sent),
            "accepted" => Ok(QuotationStatus::Accepted),
            "rejected" => Ok(QuotationStatus::Rejected),
            _ => Err(format!("Invalid quotation status: {}", s)),
        }
    }
}

/// Represents a price quotation offered to a customer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quotation {
    /// Unique quotation ID (UUID)
    pub id: String,

    /// Human-readable document number, unique per session
    pub quotation_no: String,

    pub customer_id: String,

    /// Customer name captured at issue time for display and search
    pub customer_name: String,

    /// Issue date
    pub date: NaiveDate,

    /// Names of the quoted services, in selection order
    pub services: Vec<String>,

    /// Sum of the selected services' list prices
    pub sub_total: Decimal,

    /// Tax rate in percent
    pub tax_rate: Decimal,

    /// sub_total × (1 + tax_rate / 100), rounded to the engine scale
    pub total: Decimal,

    pub status: QuotationStatus,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Quotation {
    /// Create a new draft quotation with validation
    ///
    /// # Arguments
    /// * `quotation_no` - Issued document number
    /// * `customer_id` / `customer_name` - Customer the quotation is for
    /// * `date` - Issue date
    /// * `services` - Names of the quoted services (must not be empty)
    /// * `sub_total` - Sum of the selected services' prices
    /// * `tax_rate` - Percentage tax rate
    pub fn new(
        quotation_no: String,
        customer_id: String,
        customer_name: String,
        date: NaiveDate,
        services: Vec<String>,
        sub_total: Decimal,
        tax_rate: Decimal,
    ) -> Result<Self> {
        if services.is_empty() {
            return Err(AppError::validation(
                "Quotation must include at least one service",
            ));
        }
        money::validate_amount("Quotation sub-total", sub_total)?;
        money::validate_rate("Quotation tax rate", tax_rate)?;

        let total = money::apply_tax(sub_total, tax_rate);
        let now = Utc::now();

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            quotation_no,
            customer_id,
            customer_name,
            date,
            services,
            sub_total,
            tax_rate,
            total,
            status: QuotationStatus::Draft,
            created_at: now,
            updated_at: now,
        })
    }

    /// Update status along the lifecycle
    ///
    /// Valid edges: draft -> sent, sent -> accepted, sent -> rejected.
    /// Anything else fails with `InvalidTransition`.
    pub fn update_status(&mut self, new_status: QuotationStatus) -> Result<()> {
        match (self.status, new_status) {
            (QuotationStatus::Draft, QuotationStatus::Sent)
            | (QuotationStatus::Sent, QuotationStatus::Accepted)
            | (QuotationStatus::Sent, QuotationStatus::Rejected) => {
                self.status = new_status;
                Ok(())
            }
            _ => Err(AppError::invalid_transition(format!(
                "Quotation {} cannot move from {} to {}",
                self.quotation_no, self.status, new_status
            ))),
        }
    }

    /// Whether the quotation may be converted to an invoice
    pub fn is_convertible(&self) -> bool {
        self.status == QuotationStatus::Accepted
    }
}

impl StoredEntity for Quotation {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind() -> &'static str {
        "Quotation"
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

impl Searchable for Quotation {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.quotation_no.as_str(), self.customer_name.as_str()]
    }
}

/// Request to create a quotation from selected catalog services
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateQuotationRequest {
    pub customer_id: String,
    pub date: NaiveDate,

    /// Catalog ids of the services being quoted
    pub service_ids: Vec<String>,

    /// Percentage tax rate; falls back to the configured default when absent
    #[serde(default)]
    pub tax_rate: Option<Decimal>,
}
