use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Resource;
use crate::database::query_builder::SqlParam;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Articles {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub url: String,
    pub explanation: String,
    pub email: String,
    pub date_added: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleParams {
    pub title: String,
    pub url: String,
    pub explanation: String,
    pub email: String,
    pub date_added: NaiveDateTime,
}

impl Resource for Articles {
    type Id = i64;
    type CreateParams = ArticleParams;

    const NAME: &'static str = "Articles";
    const DELETED_NAME: &'static str = "Article";
    const PATH: &'static str = "articles";
    const TABLE: &'static str = "articles";
    const COLUMNS: &'static [&'static str] = &["title", "url", "explanation", "email", "date_added"];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn from_params(params: ArticleParams) -> Self {
        Self {
            id: None,
            title: params.title,
            url: params.url,
            explanation: params.explanation,
            email: params.email,
            date_added: params.date_added,
        }
    }

    fn overwrite_from(&mut self, incoming: Self) {
        self.title = incoming.title;
        self.url = incoming.url;
        self.explanation = incoming.explanation;
        self.email = incoming.email;
        self.date_added = incoming.date_added;
    }

    fn column_values(&self) -> Vec<SqlParam> {
        vec![
            SqlParam::Text(self.title.clone()),
            SqlParam::Text(self.url.clone()),
            SqlParam::Text(self.explanation.clone()),
            SqlParam::Text(self.email.clone()),
            SqlParam::Timestamp(self.date_added),
        ]
    }
}
