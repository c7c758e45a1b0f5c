// Engine facade
//
// Wires the repositories and services together and exposes one method per
// inbound operation. A UI shell embeds this type and renders whatever the
// calls return; rendering and user notification stay on the shell's side
// of the boundary.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::core::traits::Repository;
use crate::core::Result;
use crate::modules::catalog::models::{CreateServiceRequest, ServiceItem, UpdateServiceRequest};
use crate::modules::catalog::repositories::CatalogRepository;
use crate::modules::catalog::services::CatalogService;
use crate::modules::customers::models::{
    CreateCustomerRequest, Customer, UpdateCustomerRequest,
};
use crate::modules::customers::repositories::CustomerRepository;
use crate::modules::customers::services::CustomerService;
use crate::modules::invoices::models::{CreateInvoiceRequest, Invoice};
use crate::modules::invoices::repositories::InvoiceRepository;
use crate::modules::invoices::services::{InvoiceService, InvoiceStats};
use crate::modules::ledgers::models::LedgerEntry;
use crate::modules::ledgers::repositories::LedgerRepository;
use crate::modules::ledgers::services::{LedgerService, LedgerStats};
use crate::modules::quotations::models::{CreateQuotationRequest, Quotation};
use crate::modules::quotations::repositories::QuotationRepository;
use crate::modules::quotations::services::QuotationService;
use crate::modules::reports::models::DashboardSummary;
use crate::modules::reports::services::ReportService;

/// Point-in-time copy of every collection, for the persistence collaborator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub customers: Vec<Customer>,
    pub services: Vec<ServiceItem>,
    pub quotations: Vec<Quotation>,
    pub invoices: Vec<Invoice>,
    pub ledgers: Vec<LedgerEntry>,
}

/// The embeddable billing ledger engine
pub struct BillingEngine {
    customer_repo: Arc<CustomerRepository>,
    catalog_repo: Arc<CatalogRepository>,
    quotation_repo: Arc<QuotationRepository>,
    invoice_repo: Arc<InvoiceRepository>,
    ledger_repo: Arc<LedgerRepository>,

    customers: CustomerService,
    catalog: CatalogService,
    quotations: QuotationService,
    invoices: InvoiceService,
    ledgers: LedgerService,
    reports: ReportService,
}

impl BillingEngine {
    pub fn new(config: EngineConfig) -> Self {
        let customer_repo = Arc::new(CustomerRepository::new());
        let catalog_repo = Arc::new(CatalogRepository::new());
        let quotation_repo = Arc::new(QuotationRepository::new());
        let invoice_repo = Arc::new(InvoiceRepository::new());
        let ledger_repo = Arc::new(LedgerRepository::new());

        let customers = CustomerService::new(
            Arc::clone(&customer_repo),
            Arc::clone(&quotation_repo),
            Arc::clone(&invoice_repo),
            Arc::clone(&ledger_repo),
        );
        let catalog = CatalogService::new(Arc::clone(&catalog_repo));
        let quotations = QuotationService::new(
            Arc::clone(&quotation_repo),
            Arc::clone(&customer_repo),
            Arc::clone(&catalog_repo),
            &config,
        );
        let invoices = InvoiceService::new(
            Arc::clone(&invoice_repo),
            Arc::clone(&customer_repo),
            Arc::clone(&ledger_repo),
            &config,
        );
        let ledgers = LedgerService::new(Arc::clone(&ledger_repo), Arc::clone(&customer_repo));
        let reports = ReportService::new(
            Arc::clone(&customer_repo),
            Arc::clone(&catalog_repo),
            Arc::clone(&invoice_repo),
            Arc::clone(&ledger_repo),
        );

        Self {
            customer_repo,
            catalog_repo,
            quotation_repo,
            invoice_repo,
            ledger_repo,
            customers,
            catalog,
            quotations,
            invoices,
            ledgers,
            reports,
        }
    }

    // Customers

    pub fn add_customer(&self, request: CreateCustomerRequest) -> Result<Customer> {
        self.customers.create(request)
    }

    pub fn update_customer(&self, id: &str, patch: UpdateCustomerRequest) -> Result<Customer> {
        self.customers.update(id, patch)
    }

    pub fn remove_customer(&self, id: &str) -> Result<()> {
        self.customers.delete(id)
    }

    pub fn get_customer(&self, id: &str) -> Result<Customer> {
        self.customers.get(id)
    }

    pub fn customers(&self) -> Vec<Customer> {
        self.customers.list()
    }

    pub fn search_customers(&self, query: &str) -> Vec<Customer> {
        self.customers.search(query)
    }

    // Service catalog

    pub fn add_service(&self, request: CreateServiceRequest) -> Result<ServiceItem> {
        self.catalog.create(request)
    }

    pub fn update_service(&self, id: &str, patch: UpdateServiceRequest) -> Result<ServiceItem> {
        self.catalog.update(id, patch)
    }

    pub fn toggle_service_status(&self, id: &str) -> Result<ServiceItem> {
        self.catalog.toggle_status(id)
    }

    pub fn remove_service(&self, id: &str) -> Result<()> {
        self.catalog.delete(id)
    }

    pub fn services(&self) -> Vec<ServiceItem> {
        self.catalog.list()
    }

    pub fn active_services(&self) -> Vec<ServiceItem> {
        self.catalog.list_active()
    }

    pub fn search_services(&self, query: &str) -> Vec<ServiceItem> {
        self.catalog.search(query)
    }

    // Quotations

    pub fn create_quotation(&self, request: CreateQuotationRequest) -> Result<Quotation> {
        self.quotations.create(request)
    }

    pub fn send_quotation(&self, id: &str) -> Result<Quotation> {
        self.quotations.send(id)
    }

    pub fn accept_quotation(&self, id: &str) -> Result<Quotation> {
        self.quotations.accept(id)
    }

    pub fn reject_quotation(&self, id: &str) -> Result<Quotation> {
        self.quotations.reject(id)
    }

    pub fn remove_quotation(&self, id: &str) -> Result<()> {
        self.quotations.delete(id)
    }

    pub fn get_quotation(&self, id: &str) -> Result<Quotation> {
        self.quotations.get(id)
    }

    pub fn quotations(&self) -> Vec<Quotation> {
        self.quotations.list()
    }

    pub fn search_quotations(&self, query: &str) -> Vec<Quotation> {
        self.quotations.search(query)
    }

    /// Convert an accepted quotation into a pending invoice
    ///
    /// The quotation is left untouched; the new invoice carries its total.
    pub fn convert_quotation_to_invoice(
        &self,
        quotation_id: &str,
        date: NaiveDate,
        due_date: NaiveDate,
    ) -> Result<Invoice> {
        let quotation = self.quotations.require_convertible(quotation_id)?;
        self.invoices.create_from_quotation(&quotation, date, due_date)
    }

    // Invoices

    pub fn create_invoice(&self, request: CreateInvoiceRequest) -> Result<Invoice> {
        self.invoices.create(request)
    }

    pub fn record_payment(
        &self,
        invoice_id: &str,
        amount: Decimal,
        date: NaiveDate,
    ) -> Result<Invoice> {
        self.invoices.record_payment(invoice_id, amount, date)
    }

    pub fn remove_invoice(&self, id: &str) -> Result<()> {
        self.invoices.delete(id)
    }

    pub fn get_invoice(&self, id: &str) -> Result<Invoice> {
        self.invoices.get(id)
    }

    pub fn invoices(&self) -> Vec<Invoice> {
        self.invoices.list()
    }

    pub fn search_invoices(&self, query: &str) -> Vec<Invoice> {
        self.invoices.search(query)
    }

    pub fn invoice_stats(&self, as_of: NaiveDate) -> Result<InvoiceStats> {
        self.invoices.stats(as_of)
    }

    // Ledgers

    pub fn set_opening_balance(
        &self,
        customer_id: &str,
        amount: Decimal,
        as_of: NaiveDate,
    ) -> Result<LedgerEntry> {
        self.ledgers.set_opening_balance(customer_id, amount, as_of)
    }

    pub fn ledger_for_customer(&self, customer_id: &str) -> Option<LedgerEntry> {
        self.ledgers.for_customer(customer_id)
    }

    pub fn ledgers(&self) -> Vec<LedgerEntry> {
        self.ledgers.list()
    }

    pub fn search_ledgers(&self, query: &str) -> Vec<LedgerEntry> {
        self.ledgers.search(query)
    }

    pub fn ledger_stats(&self) -> Result<LedgerStats> {
        self.ledgers.stats()
    }

    // Reports

    pub fn dashboard_summary(&self, as_of: NaiveDate) -> Result<DashboardSummary> {
        self.reports.dashboard_summary(as_of)
    }

    // Persistence boundary

    /// Point-in-time copy of every collection
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            customers: self.customer_repo.list(),
            services: self.catalog_repo.list(),
            quotations: self.quotation_repo.list(),
            invoices: self.invoice_repo.list(),
            ledgers: self.ledger_repo.list(),
        }
    }

    /// Replace all collections with a previously taken snapshot
    pub fn restore(&self, snapshot: EngineSnapshot) {
        self.customer_repo.replace_all(snapshot.customers);
        self.catalog_repo.replace_all(snapshot.services);
        self.quotation_repo.replace_all(snapshot.quotations);
        self.invoice_repo.replace_all(snapshot.invoices);
        self.ledger_repo.replace_all(snapshot.ledgers);
    }
}

impl Default for BillingEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
