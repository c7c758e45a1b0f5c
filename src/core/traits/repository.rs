use crate::core::error::Result;

/// Base repository trait for CRUD operations
/// All repositories should implement this trait for consistency
pub trait Repository<T> {
    /// Create a new entity
    fn create(&self, entity: T) -> Result<T>;

    /// Find entity by ID
    fn find_by_id(&self, id: &str) -> Option<T>;

    /// Delete an entity by ID
    fn delete(&self, id: &str) -> Result<T>;

    /// Snapshot of all entities in insertion order
    fn list(&self) -> Vec<T>;
}
