use std::sync::Arc;

use tracing::info;

use crate::core::traits::Repository;
use crate::core::{search, AppError, Result};
use crate::modules::catalog::models::{CreateServiceRequest, ServiceItem, UpdateServiceRequest};
use crate::modules::catalog::repositories::CatalogRepository;

/// Service for catalog management
pub struct CatalogService {
    catalog: Arc<CatalogRepository>,
}

impl CatalogService {
    pub fn new(catalog: Arc<CatalogRepository>) -> Self {
        Self { catalog }
    }

    /// Add a new service to the catalog
    pub fn create(&self, request: CreateServiceRequest) -> Result<ServiceItem> {
        let item = ServiceItem::new(request)?;
        let item = self.catalog.create(item)?;

        info!(service_id = %item.id, name = %item.name, "catalog service added");
        Ok(item)
    }

    /// Update an existing catalog item
    pub fn update(&self, id: &str, patch: UpdateServiceRequest) -> Result<ServiceItem> {
        self.catalog.modify(id, |item| item.apply(patch))
    }

    /// Flip a service between active and inactive
    pub fn toggle_status(&self, id: &str) -> Result<ServiceItem> {
        let item = self.catalog.modify(id, |item| {
            item.status = item.status.toggled();
            Ok(())
        })?;

        info!(service_id = %id, status = %item.status, "catalog service toggled");
        Ok(item)
    }

    /// Remove a catalog item
    pub fn delete(&self, id: &str) -> Result<()> {
        self.catalog.delete(id)?;
        info!(service_id = %id, "catalog service deleted");
        Ok(())
    }

    pub fn get(&self, id: &str) -> Result<ServiceItem> {
        self.catalog
            .find_by_id(id)
            .ok_or_else(|| AppError::not_found(format!("Service {}", id)))
    }

    pub fn list(&self) -> Vec<ServiceItem> {
        self.catalog.list()
    }

    /// Active items only, for new-quotation pickers
    pub fn list_active(&self) -> Vec<ServiceItem> {
        self.catalog.list_active()
    }

    /// Case-insensitive substring search over name and category
    pub fn search(&self, query: &str) -> Vec<ServiceItem> {
        search::filter(&self.catalog.list(), query)
    }
}
