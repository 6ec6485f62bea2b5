use async_trait::async_trait;

use crate::database::manager::DatabaseError;
use crate::resources::Resource;

/// Keyed record store for a single resource type
#[async_trait]
pub trait Repository<R: Resource>: Send + Sync {
    async fn find_all(&self) -> Result<Vec<R>, DatabaseError>;

    async fn find_by_id(&self, id: &R::Id) -> Result<Option<R>, DatabaseError>;

    /// Insert a new record and return it as stored, with its key assigned
    async fn save(&self, record: R) -> Result<R, DatabaseError>;

    /// Overwrite the stored record with the same key. `None` when no such record exists.
    async fn update(&self, record: &R) -> Result<Option<R>, DatabaseError>;

    /// Remove by key. `false` when nothing was removed.
    async fn delete(&self, id: &R::Id) -> Result<bool, DatabaseError>;
}
