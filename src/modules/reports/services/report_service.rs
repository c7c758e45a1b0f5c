use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::core::traits::Repository;
use crate::core::Result;
use crate::modules::catalog::repositories::CatalogRepository;
use crate::modules::customers::repositories::CustomerRepository;
use crate::modules::invoices::repositories::InvoiceRepository;
use crate::modules::invoices::services::InvoiceStats;
use crate::modules::ledgers::repositories::LedgerRepository;
use crate::modules::ledgers::services::LedgerStats;
use crate::modules::reports::models::DashboardSummary;

/// How many recent invoices the dashboard lists
const RECENT_INVOICE_COUNT: usize = 5;

/// Service for cross-domain summary reporting
pub struct ReportService {
    customers: Arc<CustomerRepository>,
    catalog: Arc<CatalogRepository>,
    invoices: Arc<InvoiceRepository>,
    ledgers: Arc<LedgerRepository>,
}

impl ReportService {
    pub fn new(
        customers: Arc<CustomerRepository>,
        catalog: Arc<CatalogRepository>,
        invoices: Arc<InvoiceRepository>,
        ledgers: Arc<LedgerRepository>,
    ) -> Self {
        Self {
            customers,
            catalog,
            invoices,
            ledgers,
        }
    }

    /// Compute the dashboard summary as of a date
    ///
    /// Aggregates over snapshots of every collection; repeated calls on
    /// unmutated stores return identical summaries.
    pub fn dashboard_summary(&self, as_of: NaiveDate) -> Result<DashboardSummary> {
        let invoices = self.invoices.list();
        let invoice_stats = InvoiceStats::compute(&invoices, as_of)?;
        let ledger_stats = LedgerStats::compute(&self.ledgers.list())?;

        let mut recent = invoices;
        recent.sort_by(|a, b| b.date.cmp(&a.date));
        recent.truncate(RECENT_INVOICE_COUNT);

        let pending_invoices =
            invoice_stats.pending + invoice_stats.partial + invoice_stats.overdue;

        let summary = DashboardSummary {
            total_customers: self.customers.count(),
            active_services: self.catalog.list_active().len(),
            pending_invoices,
            total_revenue: invoice_stats.total_revenue,
            total_outstanding: ledger_stats.total_outstanding,
            recent_invoices: recent,
        };

        info!(
            customers = summary.total_customers,
            pending = summary.pending_invoices,
            revenue = %summary.total_revenue,
            "dashboard summary computed"
        );
        Ok(summary)
    }
}
