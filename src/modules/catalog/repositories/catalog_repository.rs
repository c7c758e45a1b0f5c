use crate::core::traits::Repository;
use crate::core::{Collection, Result};
use crate::modules::catalog::models::ServiceItem;

/// In-memory record store for the service catalog
#[derive(Clone, Default)]
pub struct CatalogRepository {
    store: Collection<ServiceItem>,
}

impl CatalogRepository {
    pub fn new() -> Self {
        Self {
            store: Collection::new(),
        }
    }

    pub fn modify(
        &self,
        id: &str,
        apply: impl FnOnce(&mut ServiceItem) -> Result<()>,
    ) -> Result<ServiceItem> {
        self.store.modify(id, apply)
    }

    /// Active items only, for new-quotation pickers
    pub fn list_active(&self) -> Vec<ServiceItem> {
        self.store
            .snapshot()
            .into_iter()
            .filter(|item| item.is_active())
            .collect()
    }

    pub fn replace_all(&self, items: Vec<ServiceItem>) {
        self.store.replace_all(items)
    }
}

impl Repository<ServiceItem> for CatalogRepository {
    fn create(&self, entity: ServiceItem) -> Result<ServiceItem> {
        Ok(self.store.insert(entity))
    }

    fn find_by_id(&self, id: &str) -> Option<ServiceItem> {
        self.store.get(id)
    }

    fn delete(&self, id: &str) -> Result<ServiceItem> {
        self.store.remove(id)
    }

    fn list(&self) -> Vec<ServiceItem> {
        self.store.snapshot()
    }
}
