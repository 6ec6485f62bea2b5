use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Resource;
use crate::database::query_builder::SqlParam;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    #[serde(default)]
    pub id: Option<i64>,
    pub requester_email: String,
    pub professor_email: String,
    pub explanation: String,
    pub date_requested: NaiveDateTime,
    pub date_needed: NaiveDateTime,
    pub done: bool,
}

/// Create parameters. The completion flag is posted as `doneBool`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequestParams {
    pub requester_email: String,
    pub professor_email: String,
    pub explanation: String,
    pub date_requested: NaiveDateTime,
    pub date_needed: NaiveDateTime,
    pub done_bool: bool,
}

impl Resource for RecommendationRequest {
    type Id = i64;
    type CreateParams = RecommendationRequestParams;

    const NAME: &'static str = "RecommendationRequest";
    const PATH: &'static str = "recommendationrequests";
    const TABLE: &'static str = "recommendation_requests";
    const COLUMNS: &'static [&'static str] = &[
        "requester_email",
        "professor_email",
        "explanation",
        "date_requested",
        "date_needed",
        "done",
    ];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn from_params(params: RecommendationRequestParams) -> Self {
        Self {
            id: None,
            requester_email: params.requester_email,
            professor_email: params.professor_email,
            explanation: params.explanation,
            date_requested: params.date_requested,
            date_needed: params.date_needed,
            done: params.done_bool,
        }
    }

    fn overwrite_from(&mut self, incoming: Self) {
        self.requester_email = incoming.requester_email;
        self.professor_email = incoming.professor_email;
        self.explanation = incoming.explanation;
        self.date_requested = incoming.date_requested;
        self.date_needed = incoming.date_needed;
        self.done = incoming.done;
    }

    fn column_values(&self) -> Vec<SqlParam> {
        vec![
            SqlParam::Text(self.requester_email.clone()),
            SqlParam::Text(self.professor_email.clone()),
            SqlParam::Text(self.explanation.clone()),
            SqlParam::Timestamp(self.date_requested),
            SqlParam::Timestamp(self.date_needed),
            SqlParam::Bool(self.done),
        ]
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample() -> RecommendationRequest {
        RecommendationRequest {
            id: Some(10),
            requester_email: "student.c@university.edu".to_string(),
            professor_email: "prof.brown@university.edu".to_string(),
            explanation: "Please provide a recommendation for job application.".to_string(),
            date_requested: "2023-02-01T10:00:00".parse().unwrap(),
            date_needed: "2023-03-01T10:00:00".parse().unwrap(),
            done: false,
        }
    }

    #[test]
    fn done_bool_param_maps_to_done() {
        let params = RecommendationRequestParams {
            requester_email: "a@b.com".to_string(),
            professor_email: "p@b.com".to_string(),
            explanation: "grad school".to_string(),
            date_requested: "2023-02-01T10:00:00".parse().unwrap(),
            date_needed: "2023-02-01T10:00:00".parse().unwrap(),
            done_bool: true,
        };
        let request = RecommendationRequest::from_params(params);
        assert!(request.done);
        assert_eq!(request.id, None);
    }
}
