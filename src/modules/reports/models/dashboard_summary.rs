use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::invoices::models::Invoice;

/// Practice-wide summary for the dashboard screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_customers: usize,
    pub active_services: usize,

    /// Invoices not yet fully settled, overdue ones included
    pub pending_invoices: usize,

    /// Sum of fully settled invoice amounts
    pub total_revenue: Decimal,

    /// Sum of outstanding ledger balances
    pub total_outstanding: Decimal,

    /// Most recently issued invoices, newest first
    pub recent_invoices: Vec<Invoice>,
}
