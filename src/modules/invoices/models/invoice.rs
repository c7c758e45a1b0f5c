// Invoice model with payment tracking
//
// An invoice carries a fixed amount and accumulates payments. The stored
// status only ever holds pending/partial/paid; overdue is derived at read
// time from the due date and payment state, never persisted.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{money, AppError, Result, Searchable, StoredEntity};

/// Invoice status
///
/// `Overdue` appears only as a derived value from `effective_status`; the
/// record store never holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Issued, nothing received yet
    Pending,

    /// Partly paid, balance remaining
    Partial,

    /// Fully settled
    Paid,

    /// Past due and not fully paid (derived, never stored)
    Overdue,
}

impl Default for InvoiceStatus {
    fn default() -> Self {
        InvoiceStatus::Pending
    }
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvoiceStatus::Pending => write!(f, "pending"),
            InvoiceStatus::Partial => write!(f, "partial"),
            InvoiceStatus::Paid => write!(f, "paid"),
            InvoiceStatus::Overdue => write!(f, "overdue"),
        }
    }
}

impl std::str::FromStr for InvoiceStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pending" => Ok(InvoiceStatus::Pending),
            "partial" => Ok(InvoiceStatus::Partial),
            "paid" => Ok(InvoiceStatus::Paid),
            "overdue" => Ok(InvoiceStatus::Overdue),
            _ => Err(format!("Invalid invoice status: {}", s)),
        }
    }
}

/// Represents an issued invoice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique invoice ID (UUID)
    pub id: String,

    /// Human-readable document number, unique per session
    pub invoice_no: String,

    pub customer_id: String,

    /// Customer name captured at issue time for display and search
    pub customer_name: String,

    /// Issue date
    pub date: NaiveDate,

    /// Payment due date
    pub due_date: NaiveDate,

    /// Invoiced amount
    pub amount: Decimal,

    /// Total received so far
    pub amount_paid: Decimal,

    /// Stored status: pending, partial, or paid
    pub status: InvoiceStatus,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Invoice {
    /// Create a new pending invoice with validation
    pub fn new(
        invoice_no: String,
        customer_id: String,
        customer_name: String,
        date: NaiveDate,
        due_date: NaiveDate,
        amount: Decimal,
    ) -> Result<Self> {
        money::validate_amount("Invoice amount", amount)?;

        if due_date < date {
            return Err(AppError::validation(format!(
                "Invoice due date {} precedes issue date {}",
                due_date, date
            )));
        }

        let now = Utc::now();

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            invoice_no,
            customer_id,
            customer_name,
            date,
            due_date,
            amount,
            amount_paid: Decimal::ZERO,
            status: InvoiceStatus::Pending,
            created_at: now,
            updated_at: now,
        })
    }

    /// Status as of a given date
    ///
    /// An invoice past its due date that is not fully paid reads as
    /// overdue; the stored status is untouched.
    pub fn effective_status(&self, as_of: NaiveDate) -> InvoiceStatus {
        if self.status != InvoiceStatus::Paid && self.due_date < as_of {
            InvoiceStatus::Overdue
        } else {
            self.status
        }
    }

    /// Unpaid balance
    pub fn balance_due(&self) -> Decimal {
        self.amount - self.amount_paid
    }

    /// Record a payment against the invoice
    ///
    /// Moves the stored status to `Paid` once the accumulated payments
    /// cover the amount, otherwise to `Partial`. Payments against a
    /// settled invoice or in excess of the balance are rejected.
    pub fn apply_payment(&mut self, amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(AppError::invalid_amount(format!(
                "Payment amount must be positive, got {}",
                amount
            )));
        }
        money::validate_amount("Payment amount", amount)?;

        if self.status == InvoiceStatus::Paid {
            return Err(AppError::invalid_transition(format!(
                "Invoice {} is already paid",
                self.invoice_no
            )));
        }

        let balance = self.balance_due();
        if amount > balance {
            return Err(AppError::validation(format!(
                "Payment {} exceeds balance due {} on invoice {}",
                amount, balance, self.invoice_no
            )));
        }

        self.amount_paid += amount;
        self.status = if self.amount_paid >= self.amount {
            InvoiceStatus::Paid
        } else {
            InvoiceStatus::Partial
        };

        Ok(())
    }
}

impl StoredEntity for Invoice {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind() -> &'static str {
        "Invoice"
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

impl Searchable for Invoice {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.invoice_no.as_str(), self.customer_name.as_str()]
    }
}

/// Request to create an invoice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInvoiceRequest {
    pub customer_id: String,
    pub date: NaiveDate,
    pub due_date: NaiveDate,
    pub amount: Decimal,
}
