use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::{AccessPolicy, JwtKeys};
use crate::config::AppConfig;
use crate::database::{DatabaseManager, DatabaseError, MemoryRepository, PgRepository, Repository};
use crate::resources::Resource;

/// Backing store selected at startup
#[derive(Clone, Debug)]
pub enum Storage {
    Postgres(PgPool),
    Memory,
}

impl Storage {
    /// Fresh repository for one resource type
    pub fn repository<R: Resource>(&self) -> Arc<dyn Repository<R>> {
        match self {
            Storage::Postgres(pool) => Arc::new(PgRepository::<R>::new(pool.clone())),
            Storage::Memory => Arc::new(MemoryRepository::<R>::new()),
        }
    }

    pub async fn ping(&self) -> Result<(), DatabaseError> {
        match self {
            Storage::Postgres(pool) => DatabaseManager::health_check(pool).await,
            Storage::Memory => Ok(()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Storage::Postgres(_) => "postgres",
            Storage::Memory => "memory",
        }
    }
}

/// Shared application state handed to the router
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub storage: Storage,
    pub jwt: JwtKeys,
    pub policy: Arc<AccessPolicy>,
}

impl AppState {
    pub fn new(config: AppConfig, storage: Storage, jwt: JwtKeys) -> Self {
        Self {
            config: Arc::new(config),
            storage,
            jwt,
            policy: Arc::new(AccessPolicy::standard()),
        }
    }
}
