use crate::core::traits::Repository;
use crate::core::{Collection, Result};
use crate::modules::customers::models::Customer;

/// In-memory record store for customers
#[derive(Clone, Default)]
pub struct CustomerRepository {
    store: Collection<Customer>,
}

impl CustomerRepository {
    pub fn new() -> Self {
        Self {
            store: Collection::new(),
        }
    }

    /// Apply a fallible mutation to a stored customer
    pub fn modify(
        &self,
        id: &str,
        apply: impl FnOnce(&mut Customer) -> Result<()>,
    ) -> Result<Customer> {
        self.store.modify(id, apply)
    }

    pub fn count(&self) -> usize {
        self.store.len()
    }

    pub fn replace_all(&self, customers: Vec<Customer>) {
        self.store.replace_all(customers)
    }
}

impl Repository<Customer> for CustomerRepository {
    fn create(&self, entity: Customer) -> Result<Customer> {
        Ok(self.store.insert(entity))
    }

    fn find_by_id(&self, id: &str) -> Option<Customer> {
        self.store.get(id)
    }

    fn delete(&self, id: &str) -> Result<Customer> {
        self.store.remove(id)
    }

    fn list(&self) -> Vec<Customer> {
        self.store.snapshot()
    }
}
