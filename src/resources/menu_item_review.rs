use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Resource;
use crate::database::query_builder::SqlParam;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemReview {
    #[serde(default)]
    pub id: Option<i64>,
    pub item_id: i64,
    pub reviewer_email: String,
    pub stars: i32,
    pub date_reviewed: NaiveDateTime,
    pub comments: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemReviewParams {
    pub item_id: i64,
    pub reviewer_email: String,
    pub stars: i32,
    pub date_reviewed: NaiveDateTime,
    pub comments: String,
}

impl Resource for MenuItemReview {
    type Id = i64;
    type CreateParams = MenuItemReviewParams;

    const NAME: &'static str = "MenuItemReview";
    const PATH: &'static str = "menuitemreview";
    const TABLE: &'static str = "menu_item_reviews";
    const COLUMNS: &'static [&'static str] =
        &["item_id", "reviewer_email", "stars", "date_reviewed", "comments"];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn from_params(params: MenuItemReviewParams) -> Self {
        Self {
            id: None,
            item_id: params.item_id,
            reviewer_email: params.reviewer_email,
            stars: params.stars,
            date_reviewed: params.date_reviewed,
            comments: params.comments,
        }
    }

    fn overwrite_from(&mut self, incoming: Self) {
        self.item_id = incoming.item_id;
        self.reviewer_email = incoming.reviewer_email;
        self.stars = incoming.stars;
        self.date_reviewed = incoming.date_reviewed;
        self.comments = incoming.comments;
    }

    fn column_values(&self) -> Vec<SqlParam> {
        vec![
            SqlParam::BigInt(self.item_id),
            SqlParam::Text(self.reviewer_email.clone()),
            SqlParam::Int(self.stars),
            SqlParam::Timestamp(self.date_reviewed),
            SqlParam::Text(self.comments.clone()),
        ]
    }
}
