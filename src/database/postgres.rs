use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::query_builder::{bind_param_query, bind_param_query_as, QueryBuilder, SqlResult};
use crate::database::repository::Repository;
use crate::resources::Resource;

const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL-backed repository
pub struct PgRepository<R> {
    pool: PgPool,
    _phantom: PhantomData<R>,
}

impl<R> PgRepository<R> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _phantom: PhantomData,
        }
    }
}

impl<R: Resource> PgRepository<R> {
    async fn fetch_all(&self, sql: SqlResult) -> Result<Vec<R>, DatabaseError> {
        let mut q = sqlx::query_as::<_, R>(&sql.query);
        for p in sql.params.iter() {
            q = bind_param_query_as(q, p);
        }
        Ok(q.fetch_all(&self.pool).await?)
    }

    async fn fetch_optional(&self, sql: SqlResult) -> Result<Option<R>, DatabaseError> {
        let mut q = sqlx::query_as::<_, R>(&sql.query);
        for p in sql.params.iter() {
            q = bind_param_query_as(q, p);
        }
        Ok(q.fetch_optional(&self.pool).await?)
    }

    fn map_unique_violation(record: &R, err: sqlx::Error) -> DatabaseError {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
                return DatabaseError::Duplicate {
                    entity: R::NAME,
                    id: record.id().map(|id| id.to_string()).unwrap_or_default(),
                };
            }
        }
        DatabaseError::Sqlx(err)
    }
}

#[async_trait]
impl<R: Resource> Repository<R> for PgRepository<R> {
    async fn find_all(&self) -> Result<Vec<R>, DatabaseError> {
        self.fetch_all(QueryBuilder::<R>::select_all()).await
    }

    async fn find_by_id(&self, id: &R::Id) -> Result<Option<R>, DatabaseError> {
        self.fetch_optional(QueryBuilder::<R>::select_by_key(id)).await
    }

    async fn save(&self, record: R) -> Result<R, DatabaseError> {
        let sql = QueryBuilder::<R>::insert(&record);
        let mut q = sqlx::query_as::<_, R>(&sql.query);
        for p in sql.params.iter() {
            q = bind_param_query_as(q, p);
        }
        q.fetch_one(&self.pool)
            .await
            .map_err(|e| Self::map_unique_violation(&record, e))
    }

    async fn update(&self, record: &R) -> Result<Option<R>, DatabaseError> {
        let id = record.id().ok_or(DatabaseError::MissingIdentifier(R::NAME))?;
        self.fetch_optional(QueryBuilder::<R>::update(&id, record)).await
    }

    async fn delete(&self, id: &R::Id) -> Result<bool, DatabaseError> {
        let sql = QueryBuilder::<R>::delete(id);
        let mut q = sqlx::query(&sql.query);
        for p in sql.params.iter() {
            q = bind_param_query(q, p);
        }
        let result = q.execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
