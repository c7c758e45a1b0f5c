use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::core::traits::Repository;
use crate::core::{Collection, Result};
use crate::modules::quotations::models::Quotation;

/// In-memory record store for quotations
///
/// Also issues the human-readable document numbers; the sequence is
/// monotonic within a session so numbers never collide.
#[derive(Clone, Default)]
pub struct QuotationRepository {
    store: Collection<Quotation>,
    sequence: Arc<AtomicU64>,
}

impl QuotationRepository {
    pub fn new() -> Self {
        Self {
            store: Collection::new(),
            sequence: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Issue the next document number, e.g. "QT-2025-001"
    pub fn next_document_no(&self, prefix: &str, year: i32) -> String {
        let next = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{}-{}-{:03}", prefix, year, next)
    }

    pub fn modify(
        &self,
        id: &str,
        apply: impl FnOnce(&mut Quotation) -> Result<()>,
    ) -> Result<Quotation> {
        self.store.modify(id, apply)
    }

    pub fn exists_for_customer(&self, customer_id: &str) -> bool {
        self.store.any(|q| q.customer_id == customer_id)
    }

    pub fn replace_all(&self, quotations: Vec<Quotation>) {
        let count = quotations.len() as u64;
        self.store.replace_all(quotations);
        self.sequence.store(count, Ordering::SeqCst);
    }
}

impl Repository<Quotation> for QuotationRepository {
    fn create(&self, entity: Quotation) -> Result<Quotation> {
        Ok(self.store.insert(entity))
    }

    fn find_by_id(&self, id: &str) -> Option<Quotation> {
        self.store.get(id)
    }

    fn delete(&self, id: &str) -> Result<Quotation> {
        self.store.remove(id)
    }

    fn list(&self) -> Vec<Quotation> {
        self.store.snapshot()
    }
}
