use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use tracing::info;

use crate::config::EngineConfig;
use crate::core::traits::Repository;
use crate::core::{search, AppError, Result};
use crate::modules::customers::repositories::CustomerRepository;
use crate::modules::invoices::models::{CreateInvoiceRequest, Invoice};
use crate::modules::invoices::repositories::InvoiceRepository;
use crate::modules::invoices::services::InvoiceStats;
use crate::modules::ledgers::repositories::LedgerRepository;
use crate::modules::quotations::models::Quotation;

/// Service for invoice business logic
///
/// Every issued invoice and recorded payment is posted through to the
/// customer's ledger entry so the outstanding balance stays consistent.
pub struct InvoiceService {
    invoices: Arc<InvoiceRepository>,
    customers: Arc<CustomerRepository>,
    ledgers: Arc<LedgerRepository>,
    document_prefix: String,
}

impl InvoiceService {
    pub fn new(
        invoices: Arc<InvoiceRepository>,
        customers: Arc<CustomerRepository>,
        ledgers: Arc<LedgerRepository>,
        config: &EngineConfig,
    ) -> Self {
        Self {
            invoices,
            customers,
            ledgers,
            document_prefix: config.numbering.invoice_prefix.clone(),
        }
    }

    /// Create a new pending invoice and post it to the customer's ledger
    pub fn create(&self, request: CreateInvoiceRequest) -> Result<Invoice> {
        let customer = self
            .customers
            .find_by_id(&request.customer_id)
            .ok_or_else(|| AppError::not_found(format!("Customer {}", request.customer_id)))?;

        let invoice_no = self
            .invoices
            .next_document_no(&self.document_prefix, request.date.year());

        let invoice = Invoice::new(
            invoice_no,
            customer.id.clone(),
            customer.name.clone(),
            request.date,
            request.due_date,
            request.amount,
        )?;
        let invoice = self.invoices.create(invoice)?;

        let entry = self
            .ledgers
            .find_or_create(&customer.id, &customer.name, request.date)?;
        self.ledgers
            .modify(&entry.id, |entry| entry.post_invoice(request.amount, request.date))?;

        info!(
            invoice_no = %invoice.invoice_no,
            customer = %invoice.customer_name,
            amount = %invoice.amount,
            "invoice created"
        );
        Ok(invoice)
    }

    /// Create an invoice from an accepted quotation
    ///
    /// The caller has already checked convertibility; the new invoice
    /// carries the quotation's total and customer, and the quotation
    /// itself is left untouched.
    pub fn create_from_quotation(
        &self,
        quotation: &Quotation,
        date: NaiveDate,
        due_date: NaiveDate,
    ) -> Result<Invoice> {
        let invoice = self.create(CreateInvoiceRequest {
            customer_id: quotation.customer_id.clone(),
            date,
            due_date,
            amount: quotation.total,
        })?;

        info!(
            invoice_no = %invoice.invoice_no,
            quotation_no = %quotation.quotation_no,
            "quotation converted to invoice"
        );
        Ok(invoice)
    }

    /// Record a payment against an invoice and post it to the ledger
    pub fn record_payment(&self, id: &str, amount: Decimal, date: NaiveDate) -> Result<Invoice> {
        let invoice = self
            .invoices
            .modify(id, |invoice| invoice.apply_payment(amount))?;

        let entry = self
            .ledgers
            .find_or_create(&invoice.customer_id, &invoice.customer_name, date)?;
        self.ledgers
            .modify(&entry.id, |entry| entry.post_payment(amount, date))?;

        info!(
            invoice_no = %invoice.invoice_no,
            amount = %amount,
            status = %invoice.status,
            "payment recorded"
        );
        Ok(invoice)
    }

    /// Delete an invoice
    pub fn delete(&self, id: &str) -> Result<()> {
        let invoice = self.invoices.delete(id)?;
        info!(invoice_no = %invoice.invoice_no, "invoice deleted");
        Ok(())
    }

    pub fn get(&self, id: &str) -> Result<Invoice> {
        self.invoices
            .find_by_id(id)
            .ok_or_else(|| AppError::not_found(format!("Invoice {}", id)))
    }

    pub fn list(&self) -> Vec<Invoice> {
        self.invoices.list()
    }

    /// Case-insensitive substring search over invoice number and customer name
    pub fn search(&self, query: &str) -> Vec<Invoice> {
        search::filter(&self.invoices.list(), query)
    }

    /// Aggregate statistics over the current invoice snapshot
    pub fn stats(&self, as_of: NaiveDate) -> Result<InvoiceStats> {
        InvoiceStats::compute(&self.invoices.list(), as_of)
    }
}
