use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::database::manager::DatabaseError;
use crate::database::repository::Repository;
use crate::resources::{Resource, ResourceId};

/// In-process repository used for local runs and tests.
/// Numeric keys come from a per-repository sequence starting at 1.
pub struct MemoryRepository<R> {
    rows: RwLock<Vec<R>>,
    sequence: AtomicI64,
}

impl<R> Default for MemoryRepository<R> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            sequence: AtomicI64::new(0),
        }
    }
}

impl<R> MemoryRepository<R> {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl<R: Resource> Repository<R> for MemoryRepository<R> {
    async fn find_all(&self) -> Result<Vec<R>, DatabaseError> {
        Ok(self.rows.read().await.clone())
    }

    async fn find_by_id(&self, id: &R::Id) -> Result<Option<R>, DatabaseError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|r| r.id().as_ref() == Some(id)).cloned())
    }

    async fn save(&self, mut record: R) -> Result<R, DatabaseError> {
        let mut rows = self.rows.write().await;

        let id = match record.id() {
            Some(id) => id,
            None => {
                let seq = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
                R::Id::from_sequence(seq).ok_or(DatabaseError::MissingIdentifier(R::NAME))?
            }
        };

        if rows.iter().any(|r| r.id().as_ref() == Some(&id)) {
            return Err(DatabaseError::Duplicate {
                entity: R::NAME,
                id: id.to_string(),
            });
        }

        record.set_id(id);
        rows.push(record.clone());
        Ok(record)
    }

    async fn update(&self, record: &R) -> Result<Option<R>, DatabaseError> {
        let id = record.id().ok_or(DatabaseError::MissingIdentifier(R::NAME))?;
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|r| r.id().as_ref() == Some(&id)) {
            Some(slot) => {
                *slot = record.clone();
                Ok(Some(record.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &R::Id) -> Result<bool, DatabaseError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|r| r.id().as_ref() != Some(id));
        Ok(rows.len() < before)
    }
}
