// Customer ledger entry
//
// One entry per customer, accumulating invoiced amounts and received
// payments against an opening balance. The outstanding figure is always
// re-derived from the arithmetic identity after a posting; it is clamped
// at zero, with the unclamped sign deciding "cleared".

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{money, Result, Searchable, StoredEntity};

/// Running account balance for a single customer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Unique entry ID (UUID)
    pub id: String,

    pub customer_id: String,

    /// Customer name captured for display and search
    pub customer_name: String,

    /// Balance carried in from before the engine's records begin
    pub opening_balance: Decimal,

    /// Sum of invoiced amounts
    pub total_invoices: Decimal,

    /// Sum of recorded payments
    pub total_payments: Decimal,

    /// max(0, opening_balance + total_invoices - total_payments)
    pub outstanding: Decimal,

    /// Date of the most recent posting
    pub last_transaction: NaiveDate,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LedgerEntry {
    /// Open a ledger entry for a customer
    pub fn new(
        customer_id: String,
        customer_name: String,
        opening_balance: Decimal,
        as_of: NaiveDate,
    ) -> Result<Self> {
        money::validate_amount("Opening balance", opening_balance)?;

        let now = Utc::now();
        let mut entry = Self {
            id: Uuid::new_v4().to_string(),
            customer_id,
            customer_name,
            opening_balance,
            total_invoices: Decimal::ZERO,
            total_payments: Decimal::ZERO,
            outstanding: Decimal::ZERO,
            last_transaction: as_of,
            created_at: now,
            updated_at: now,
        };
        entry.recompute();

        Ok(entry)
    }

    /// Post an invoiced amount
    pub fn post_invoice(&mut self, amount: Decimal, date: NaiveDate) -> Result<()> {
        money::validate_amount("Invoice amount", amount)?;

        self.total_invoices += amount;
        self.last_transaction = date;
        self.recompute();
        Ok(())
    }

    /// Post a received payment
    pub fn post_payment(&mut self, amount: Decimal, date: NaiveDate) -> Result<()> {
        money::validate_amount("Payment amount", amount)?;

        self.total_payments += amount;
        self.last_transaction = date;
        self.recompute();
        Ok(())
    }

    /// Replace the opening balance
    pub fn set_opening_balance(&mut self, amount: Decimal) -> Result<()> {
        money::validate_amount("Opening balance", amount)?;

        self.opening_balance = amount;
        self.recompute();
        Ok(())
    }

    /// Whether the customer owes nothing
    ///
    /// Cleared means the unclamped balance is zero or negative, i.e. the
    /// customer has paid at least as much as was ever owed.
    pub fn is_cleared(&self) -> bool {
        self.raw_balance() <= Decimal::ZERO
    }

    fn raw_balance(&self) -> Decimal {
        self.opening_balance + self.total_invoices - self.total_payments
    }

    fn recompute(&mut self) {
        self.outstanding = self.raw_balance().max(Decimal::ZERO);
    }
}

impl StoredEntity for LedgerEntry {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind() -> &'static str {
        "Ledger entry"
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

impl Searchable for LedgerEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.customer_name.as_str()]
    }
}
