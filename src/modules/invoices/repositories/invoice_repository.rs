use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::core::traits::Repository;
use crate::core::{Collection, Result};
use crate::modules::invoices::models::Invoice;

/// In-memory record store for invoices
///
/// Issues the human-readable invoice numbers from a session-monotonic
/// sequence.
#[derive(Clone, Default)]
pub struct InvoiceRepository {
    store: Collection<Invoice>,
    sequence: Arc<AtomicU64>,
}

impl InvoiceRepository {
    pub fn new() -> Self {
        Self {
            store: Collection::new(),
            sequence: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Issue the next document number, e.g. "INV-2025-001"
    pub fn next_document_no(&self, prefix: &str, year: i32) -> String {
        let next = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{}-{}-{:03}", prefix, year, next)
    }

    pub fn modify(
        &self,
        id: &str,
        apply: impl FnOnce(&mut Invoice) -> Result<()>,
    ) -> Result<Invoice> {
        self.store.modify(id, apply)
    }

    pub fn exists_for_customer(&self, customer_id: &str) -> bool {
        self.store.any(|invoice| invoice.customer_id == customer_id)
    }

    pub fn replace_all(&self, invoices: Vec<Invoice>) {
        let count = invoices.len() as u64;
        self.store.replace_all(invoices);
        self.sequence.store(count, Ordering::SeqCst);
    }
}

impl Repository<Invoice> for InvoiceRepository {
    fn create(&self, entity: Invoice) -> Result<Invoice> {
        Ok(self.store.insert(entity))
    }

    fn find_by_id(&self, id: &str) -> Option<Invoice> {
        self.store.get(id)
    }

    fn delete(&self, id: &str) -> Result<Invoice> {
        self.store.remove(id)
    }

    fn list(&self) -> Vec<Invoice> {
        self.store.snapshot()
    }
}
