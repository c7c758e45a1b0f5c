use std::sync::Arc;

use tracing::info;

use crate::core::traits::Repository;
use crate::core::{search, AppError, Result};
use crate::modules::customers::models::{Customer, CreateCustomerRequest, UpdateCustomerRequest};
use crate::modules::customers::repositories::CustomerRepository;
use crate::modules::invoices::repositories::InvoiceRepository;
use crate::modules::ledgers::repositories::LedgerRepository;
use crate::modules::quotations::repositories::QuotationRepository;

/// Service for customer record management
pub struct CustomerService {
    customers: Arc<CustomerRepository>,
    quotations: Arc<QuotationRepository>,
    invoices: Arc<InvoiceRepository>,
    ledgers: Arc<LedgerRepository>,
}

impl CustomerService {
    pub fn new(
        customers: Arc<CustomerRepository>,
        quotations: Arc<QuotationRepository>,
        invoices: Arc<InvoiceRepository>,
        ledgers: Arc<LedgerRepository>,
    ) -> Self {
        Self {
            customers,
            quotations,
            invoices,
            ledgers,
        }
    }

    /// Create a new customer record
    pub fn create(&self, request: CreateCustomerRequest) -> Result<Customer> {
        let customer = Customer::new(request)?;
        let customer = self.customers.create(customer)?;

        info!(customer_id = %customer.id, name = %customer.name, "customer created");
        Ok(customer)
    }

    /// Update an existing customer
    pub fn update(&self, id: &str, patch: UpdateCustomerRequest) -> Result<Customer> {
        self.customers.modify(id, |customer| customer.apply(patch))
    }

    /// Delete a customer record
    ///
    /// Refuses with `Conflict` while any quotation, invoice, or ledger
    /// entry still references the customer; deleting would leave dangling
    /// document references.
    pub fn delete(&self, id: &str) -> Result<()> {
        let customer = self
            .customers
            .find_by_id(id)
            .ok_or_else(|| AppError::not_found(format!("Customer {}", id)))?;

        if self.quotations.exists_for_customer(id)
            || self.invoices.exists_for_customer(id)
            || self.ledgers.exists_for_customer(id)
        {
            return Err(AppError::conflict(format!(
                "Customer '{}' is referenced by existing documents",
                customer.name
            )));
        }

        self.customers.delete(id)?;
        info!(customer_id = %id, "customer deleted");
        Ok(())
    }

    pub fn get(&self, id: &str) -> Result<Customer> {
        self.customers
            .find_by_id(id)
            .ok_or_else(|| AppError::not_found(format!("Customer {}", id)))
    }

    pub fn list(&self) -> Vec<Customer> {
        self.customers.list()
    }

    /// Case-insensitive substring search over name, email, and phone
    pub fn search(&self, query: &str) -> Vec<Customer> {
        search::filter(&self.customers.list(), query)
    }
}
