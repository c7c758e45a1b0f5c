use std::sync::Arc;

use chrono::Datelike;
use rust_decimal::Decimal;
use tracing::info;

use crate::config::EngineConfig;
use crate::core::traits::Repository;
use crate::core::{search, AppError, Result};
use crate::modules::catalog::repositories::CatalogRepository;
use crate::modules::customers::repositories::CustomerRepository;
use crate::modules::quotations::models::{CreateQuotationRequest, Quotation, QuotationStatus};
use crate::modules::quotations::repositories::QuotationRepository;

/// Service for quotation business logic
pub struct QuotationService {
    quotations: Arc<QuotationRepository>,
    customers: Arc<CustomerRepository>,
    catalog: Arc<CatalogRepository>,
    document_prefix: String,
    default_tax_rate: Decimal,
}

impl QuotationService {
    pub fn new(
        quotations: Arc<QuotationRepository>,
        customers: Arc<CustomerRepository>,
        catalog: Arc<CatalogRepository>,
        config: &EngineConfig,
    ) -> Self {
        Self {
            quotations,
            customers,
            catalog,
            document_prefix: config.numbering.quotation_prefix.clone(),
            default_tax_rate: config.tax.default_rate,
        }
    }

    /// Create a new draft quotation from selected catalog services
    ///
    /// The customer must exist and every selected service must be an
    /// active catalog item; the sub-total is the sum of their list prices.
    pub fn create(&self, request: CreateQuotationRequest) -> Result<Quotation> {
        let customer = self
            .customers
            .find_by_id(&request.customer_id)
            .ok_or_else(|| AppError::not_found(format!("Customer {}", request.customer_id)))?;

        if request.service_ids.is_empty() {
            return Err(AppError::validation(
                "Quotation must include at least one service",
            ));
        }

        let mut names = Vec::with_capacity(request.service_ids.len());
        let mut sub_total = Decimal::ZERO;
        for service_id in &request.service_ids {
            let item = self
                .catalog
                .find_by_id(service_id)
                .ok_or_else(|| AppError::not_found(format!("Service {}", service_id)))?;

            if !item.is_active() {
                return Err(AppError::validation(format!(
                    "Service '{}' is inactive and cannot be quoted",
                    item.name
                )));
            }

            sub_total += item.price;
            names.push(item.name);
        }

        let tax_rate = request.tax_rate.unwrap_or(self.default_tax_rate);
        let quotation_no = self
            .quotations
            .next_document_no(&self.document_prefix, request.date.year());

        let quotation = Quotation::new(
            quotation_no,
            customer.id,
            customer.name,
            request.date,
            names,
            sub_total,
            tax_rate,
        )?;
        let quotation = self.quotations.create(quotation)?;

        info!(
            quotation_no = %quotation.quotation_no,
            customer = %quotation.customer_name,
            total = %quotation.total,
            "quotation created"
        );
        Ok(quotation)
    }

    /// Mark a draft quotation as sent to the customer
    pub fn send(&self, id: &str) -> Result<Quotation> {
        self.transition(id, QuotationStatus::Sent)
    }

    /// Record the customer's acceptance
    pub fn accept(&self, id: &str) -> Result<Quotation> {
        self.transition(id, QuotationStatus::Accepted)
    }

    /// Record the customer's rejection
    pub fn reject(&self, id: &str) -> Result<Quotation> {
        self.transition(id, QuotationStatus::Rejected)
    }

    fn transition(&self, id: &str, new_status: QuotationStatus) -> Result<Quotation> {
        let quotation = self
            .quotations
            .modify(id, |quotation| quotation.update_status(new_status))?;

        info!(
            quotation_no = %quotation.quotation_no,
            status = %quotation.status,
            "quotation status updated"
        );
        Ok(quotation)
    }

    /// Fetch a quotation that is eligible for invoice conversion
    ///
    /// Fails with `InvalidTransition` unless the quotation is accepted.
    pub fn require_convertible(&self, id: &str) -> Result<Quotation> {
        let quotation = self.get(id)?;

        if !quotation.is_convertible() {
            return Err(AppError::invalid_transition(format!(
                "Quotation {} is {}; only accepted quotations can be converted to an invoice",
                quotation.quotation_no, quotation.status
            )));
        }

        Ok(quotation)
    }

    /// Delete a quotation
    pub fn delete(&self, id: &str) -> Result<()> {
        let quotation = self.quotations.delete(id)?;
        info!(quotation_no = %quotation.quotation_no, "quotation deleted");
        Ok(())
    }

    pub fn get(&self, id: &str) -> Result<Quotation> {
        self.quotations
            .find_by_id(id)
            .ok_or_else(|| AppError::not_found(format!("Quotation {}", id)))
    }

    pub fn list(&self) -> Vec<Quotation> {
        self.quotations.list()
    }

    /// Case-insensitive substring search over quotation number and customer name
    pub fn search(&self, query: &str) -> Vec<Quotation> {
        search::filter(&self.quotations.list(), query)
    }
}
