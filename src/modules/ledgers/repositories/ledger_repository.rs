use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::core::traits::Repository;
use crate::core::{Collection, Result};
use crate::modules::ledgers::models::LedgerEntry;

/// In-memory record store for customer ledger entries
///
/// Holds at most one entry per customer; posting operations create the
/// entry on first use.
#[derive(Clone, Default)]
pub struct LedgerRepository {
    store: Collection<LedgerEntry>,
}

impl LedgerRepository {
    pub fn new() -> Self {
        Self {
            store: Collection::new(),
        }
    }

    pub fn find_by_customer(&self, customer_id: &str) -> Option<LedgerEntry> {
        self.store.find(|entry| entry.customer_id == customer_id)
    }

    /// The customer's entry, created with a zero opening balance if absent
    pub fn find_or_create(
        &self,
        customer_id: &str,
        customer_name: &str,
        as_of: NaiveDate,
    ) -> Result<LedgerEntry> {
        if let Some(entry) = self.find_by_customer(customer_id) {
            return Ok(entry);
        }

        let entry = LedgerEntry::new(
            customer_id.to_string(),
            customer_name.to_string(),
            Decimal::ZERO,
            as_of,
        )?;
        Ok(self.store.insert(entry))
    }

    pub fn modify(
        &self,
        id: &str,
        apply: impl FnOnce(&mut LedgerEntry) -> Result<()>,
    ) -> Result<LedgerEntry> {
        self.store.modify(id, apply)
    }

    pub fn exists_for_customer(&self, customer_id: &str) -> bool {
        self.store.any(|entry| entry.customer_id == customer_id)
    }

    pub fn replace_all(&self, entries: Vec<LedgerEntry>) {
        self.store.replace_all(entries)
    }
}

impl Repository<LedgerEntry> for LedgerRepository {
    fn create(&self, entity: LedgerEntry) -> Result<LedgerEntry> {
        Ok(self.store.insert(entity))
    }

    fn find_by_id(&self, id: &str) -> Option<LedgerEntry> {
        self.store.get(id)
    }

    fn delete(&self, id: &str) -> Result<LedgerEntry> {
        self.store.remove(id)
    }

    fn list(&self) -> Vec<LedgerEntry> {
        self.store.snapshot()
    }
}
