use std::marker::PhantomData;

use chrono::NaiveDateTime;
use sqlx::{self, postgres::PgArguments, FromRow};

use crate::resources::{Resource, ResourceId};

/// A typed bind parameter
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Text(String),
    Bool(bool),
    BigInt(i64),
    Int(i32),
    Float(f64),
    Timestamp(NaiveDateTime),
}

/// Generated SQL plus its positional parameters
#[derive(Debug, Clone, PartialEq)]
pub struct SqlResult {
    pub query: String,
    pub params: Vec<SqlParam>,
}

/// SQL generation for a resource table. Identifiers come from the resource
/// descriptor and are always quoted; values are always bound.
pub struct QueryBuilder<R> {
    _phantom: PhantomData<R>,
}

impl<R: Resource> QueryBuilder<R> {
    pub fn select_all() -> SqlResult {
        SqlResult {
            query: format!("SELECT * FROM \"{}\"", R::TABLE),
            params: vec![],
        }
    }

    pub fn select_by_key(id: &R::Id) -> SqlResult {
        SqlResult {
            query: format!("SELECT * FROM \"{}\" WHERE \"{}\" = $1", R::TABLE, R::KEY_COLUMN),
            params: vec![id.to_param()],
        }
    }

    /// INSERT ... RETURNING *. The key column is included only when the record carries one.
    pub fn insert(record: &R) -> SqlResult {
        let mut columns: Vec<&str> = Vec::with_capacity(R::COLUMNS.len() + 1);
        let mut params = Vec::with_capacity(R::COLUMNS.len() + 1);

        if let Some(id) = record.id() {
            columns.push(R::KEY_COLUMN);
            params.push(id.to_param());
        }
        columns.extend_from_slice(R::COLUMNS);
        params.extend(record.column_values());

        let column_list = columns
            .iter()
            .map(|c| format!("\"{}\"", c))
            .collect::<Vec<_>>()
            .join(", ");
        let placeholders = (1..=params.len())
            .map(|i| format!("${}", i))
            .collect::<Vec<_>>()
            .join(", ");

        SqlResult {
            query: format!(
                "INSERT INTO \"{}\" ({}) VALUES ({}) RETURNING *",
                R::TABLE,
                column_list,
                placeholders
            ),
            params,
        }
    }

    /// UPDATE ... WHERE key = $1 RETURNING *. Matches nothing once the row is gone.
    pub fn update(id: &R::Id, record: &R) -> SqlResult {
        let assignments = R::COLUMNS
            .iter()
            .enumerate()
            .map(|(i, c)| format!("\"{}\" = ${}", c, i + 2))
            .collect::<Vec<_>>()
            .join(", ");

        let mut params = vec![id.to_param()];
        params.extend(record.column_values());

        SqlResult {
            query: format!(
                "UPDATE \"{}\" SET {} WHERE \"{}\" = $1 RETURNING *",
                R::TABLE,
                assignments,
                R::KEY_COLUMN
            ),
            params,
        }
    }

    pub fn delete(id: &R::Id) -> SqlResult {
        SqlResult {
            query: format!("DELETE FROM \"{}\" WHERE \"{}\" = $1", R::TABLE, R::KEY_COLUMN),
            params: vec![id.to_param()],
        }
    }
}

pub(crate) fn bind_param_query<'q>(
    q: sqlx::query::Query<'q, sqlx::Postgres, PgArguments>,
    v: &'q SqlParam,
) -> sqlx::query::Query<'q, sqlx::Postgres, PgArguments> {
    match v {
        SqlParam::Text(s) => q.bind(s.as_str()),
        SqlParam::Bool(b) => q.bind(*b),
        SqlParam::BigInt(i) => q.bind(*i),
        SqlParam::Int(i) => q.bind(*i),
        SqlParam::Float(f) => q.bind(*f),
        SqlParam::Timestamp(ts) => q.bind(*ts),
    }
}

pub(crate) fn bind_param_query_as<'q, O>(
    q: sqlx::query::QueryAs<'q, sqlx::Postgres, O, PgArguments>,
    v: &'q SqlParam,
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, PgArguments>
where
    O: for<'r> FromRow<'r, sqlx::postgres::PgRow>,
{
    match v {
        SqlParam::Text(s) => q.bind(s.as_str()),
        SqlParam::Bool(b) => q.bind(*b),
        SqlParam::BigInt(i) => q.bind(*i),
        SqlParam::Int(i) => q.bind(*i),
        SqlParam::Float(f) => q.bind(*f),
        SqlParam::Timestamp(ts) => q.bind(*ts),
    }
}
