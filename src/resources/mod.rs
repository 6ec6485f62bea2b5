//! Resource descriptors.
//!
//! Every record type served by the API implements [`Resource`], which tells the
//! generic handlers and repositories everything they need: the display name used in
//! messages, the URL segment, the table layout, how to build a record from create
//! parameters and how to copy an update payload onto a stored record.

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};
use sqlx::{postgres::PgRow, FromRow};

use crate::database::query_builder::SqlParam;

pub mod article;
pub mod dining_commons;
pub mod help_request;
pub mod menu_item;
pub mod menu_item_review;
pub mod organization;
pub mod recommendation_request;
pub mod ucsb_date;

pub use article::Articles;
pub use dining_commons::UCSBDiningCommons;
pub use help_request::HelpRequest;
pub use menu_item::UCSBDiningCommonsMenuItem;
pub use menu_item_review::MenuItemReview;
pub use organization::UCSBOrganization;
pub use recommendation_request::RecommendationRequest;
pub use ucsb_date::UCSBDate;

/// Identifier types: surrogate numeric keys or natural string keys
pub trait ResourceId:
    Clone + fmt::Debug + fmt::Display + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    fn to_param(&self) -> SqlParam;

    /// Key for the n-th record of a store that assigns its own identifiers.
    /// `None` for natural keys, which callers always supply.
    fn from_sequence(seq: i64) -> Option<Self>;
}

impl ResourceId for i64 {
    fn to_param(&self) -> SqlParam {
        SqlParam::BigInt(*self)
    }

    fn from_sequence(seq: i64) -> Option<Self> {
        Some(seq)
    }
}

impl ResourceId for String {
    fn to_param(&self) -> SqlParam {
        SqlParam::Text(self.clone())
    }

    fn from_sequence(_seq: i64) -> Option<Self> {
        None
    }
}

/// Entity-capability descriptor consumed by the generic CRUD handlers
pub trait Resource:
    Clone
    + fmt::Debug
    + Serialize
    + DeserializeOwned
    + for<'r> FromRow<'r, PgRow>
    + Send
    + Sync
    + Unpin
    + 'static
{
    type Id: ResourceId;

    /// Request parameters accepted by `POST /api/<path>/post`
    type CreateParams: DeserializeOwned + Send + 'static;

    /// Entity name used in not-found messages
    const NAME: &'static str;

    /// Entity name used in delete confirmations
    const DELETED_NAME: &'static str = Self::NAME;

    /// URL segment under `/api`
    const PATH: &'static str;

    const TABLE: &'static str;

    const KEY_COLUMN: &'static str = "id";

    /// Mutable columns, in the order produced by [`Resource::column_values`]
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> Option<Self::Id>;

    fn set_id(&mut self, id: Self::Id);

    fn from_params(params: Self::CreateParams) -> Self;

    /// Copy every mutable field from `incoming`. Never touches the key.
    fn overwrite_from(&mut self, incoming: Self);

    fn column_values(&self) -> Vec<SqlParam>;
}

/// Path segments of every resource the API serves
pub const RESOURCE_PATHS: [&str; 8] = [
    HelpRequest::PATH,
    RecommendationRequest::PATH,
    UCSBDiningCommonsMenuItem::PATH,
    UCSBOrganization::PATH,
    Articles::PATH,
    MenuItemReview::PATH,
    UCSBDate::PATH,
    UCSBDiningCommons::PATH,
];
