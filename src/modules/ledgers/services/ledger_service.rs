use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::info;

use crate::core::traits::Repository;
use crate::core::{search, AppError, Result};
use crate::modules::customers::repositories::CustomerRepository;
use crate::modules::ledgers::models::LedgerEntry;
use crate::modules::ledgers::repositories::LedgerRepository;
use crate::modules::ledgers::services::LedgerStats;

/// Service for customer ledger queries and adjustments
pub struct LedgerService {
    ledgers: Arc<LedgerRepository>,
    customers: Arc<CustomerRepository>,
}

impl LedgerService {
    pub fn new(ledgers: Arc<LedgerRepository>, customers: Arc<CustomerRepository>) -> Self {
        Self { ledgers, customers }
    }

    /// Set a customer's opening balance, creating the entry if needed
    pub fn set_opening_balance(
        &self,
        customer_id: &str,
        amount: Decimal,
        as_of: NaiveDate,
    ) -> Result<LedgerEntry> {
        let customer = self
            .customers
            .find_by_id(customer_id)
            .ok_or_else(|| AppError::not_found(format!("Customer {}", customer_id)))?;

        let entry = self
            .ledgers
            .find_or_create(&customer.id, &customer.name, as_of)?;
        let entry = self
            .ledgers
            .modify(&entry.id, |entry| entry.set_opening_balance(amount))?;

        info!(
            customer = %entry.customer_name,
            opening_balance = %entry.opening_balance,
            "opening balance set"
        );
        Ok(entry)
    }

    /// The ledger entry for a customer, if one exists
    pub fn for_customer(&self, customer_id: &str) -> Option<LedgerEntry> {
        self.ledgers.find_by_customer(customer_id)
    }

    pub fn list(&self) -> Vec<LedgerEntry> {
        self.ledgers.list()
    }

    /// Case-insensitive substring search over customer name
    pub fn search(&self, query: &str) -> Vec<LedgerEntry> {
        search::filter(&self.ledgers.list(), query)
    }

    /// Aggregate statistics over the current ledger snapshot
    pub fn stats(&self) -> Result<LedgerStats> {
        LedgerStats::compute(&self.ledgers.list())
    }
}
