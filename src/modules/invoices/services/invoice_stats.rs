// Invoice statistics derivation
//
// Pure aggregation over an invoice snapshot: same snapshot and as-of date
// always produce the same stats, and nothing is mutated. Overdue counts
// come from the derived status, not the stored one.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{money, Result};
use crate::modules::invoices::models::{Invoice, InvoiceStatus};

/// Aggregate statistics over an invoice snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceStats {
    /// Number of invoices in the snapshot
    pub total: usize,

    /// Counts by effective status as of the given date
    pub paid: usize,
    pub pending: usize,
    pub partial: usize,
    pub overdue: usize,

    /// Sum of `amount` over fully settled invoices
    pub total_revenue: Decimal,
}

impl InvoiceStats {
    /// Compute statistics for a snapshot as of a date
    ///
    /// # Errors
    /// Fails with `InvalidAmount` if any invoice carries a negative
    /// amount; a derivation over corrupt data would silently misreport.
    pub fn compute(invoices: &[Invoice], as_of: NaiveDate) -> Result<Self> {
        let mut stats = InvoiceStats {
            total: invoices.len(),
            paid: 0,
            pending: 0,
            partial: 0,
            overdue: 0,
            total_revenue: Decimal::ZERO,
        };

        for invoice in invoices {
            money::validate_amount("Invoice amount", invoice.amount)?;

            match invoice.effective_status(as_of) {
                InvoiceStatus::Paid => stats.paid += 1,
                InvoiceStatus::Pending => stats.pending += 1,
                InvoiceStatus::Partial => stats.partial += 1,
                InvoiceStatus::Overdue => stats.overdue += 1,
            }

            if invoice.status == InvoiceStatus::Paid {
                stats.total_revenue += invoice.amount;
            }
        }

        stats.total_revenue = money::round(stats.total_revenue);
        Ok(stats)
    }
}
