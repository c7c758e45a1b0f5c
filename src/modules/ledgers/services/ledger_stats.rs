// Ledger statistics derivation
//
// Pure aggregation over a ledger snapshot; no mutation, no hidden state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{money, Result};
use crate::modules::ledgers::models::LedgerEntry;

/// Aggregate statistics over a ledger snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerStats {
    /// Sum of outstanding balances
    pub total_outstanding: Decimal,

    /// Sum of invoiced amounts across all entries
    pub total_invoices: Decimal,

    /// Sum of recorded payments across all entries
    pub total_payments: Decimal,

    /// Entries with an outstanding balance above zero
    pub customers_with_balance: usize,
}

impl LedgerStats {
    /// Compute statistics for a ledger snapshot
    ///
    /// # Errors
    /// Fails with `InvalidAmount` if any entry carries a negative figure.
    pub fn compute(entries: &[LedgerEntry]) -> Result<Self> {
        let mut stats = LedgerStats {
            total_outstanding: Decimal::ZERO,
            total_invoices: Decimal::ZERO,
            total_payments: Decimal::ZERO,
            customers_with_balance: 0,
        };

        for entry in entries {
            money::validate_amount("Ledger outstanding", entry.outstanding)?;
            money::validate_amount("Ledger invoice total", entry.total_invoices)?;
            money::validate_amount("Ledger payment total", entry.total_payments)?;

            stats.total_outstanding += entry.outstanding;
            stats.total_invoices += entry.total_invoices;
            stats.total_payments += entry.total_payments;

            if entry.outstanding > Decimal::ZERO {
                stats.customers_with_balance += 1;
            }
        }

        stats.total_outstanding = money::round(stats.total_outstanding);
        stats.total_invoices = money::round(stats.total_invoices);
        stats.total_payments = money::round(stats.total_payments);
        Ok(stats)
    }
}
