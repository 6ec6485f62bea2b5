use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Resource;
use crate::database::query_builder::SqlParam;

/// A request for help from a team during a lab session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct HelpRequest {
    #[serde(default)]
    pub id: Option<i64>,
    pub requester_email: String,
    pub team_id: String,
    pub table_or_breakout_room: String,
    pub request_time: NaiveDateTime,
    pub explanation: String,
    pub solved: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpRequestParams {
    pub requester_email: String,
    pub team_id: String,
    pub table_or_breakout_room: String,
    pub request_time: NaiveDateTime,
    pub explanation: String,
    pub solved: bool,
}

impl Resource for HelpRequest {
    type Id = i64;
    type CreateParams = HelpRequestParams;

    const NAME: &'static str = "HelpRequest";
    const PATH: &'static str = "helprequests";
    const TABLE: &'static str = "help_requests";
    const COLUMNS: &'static [&'static str] = &[
        "requester_email",
        "team_id",
        "table_or_breakout_room",
        "request_time",
        "explanation",
        "solved",
    ];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn from_params(params: HelpRequestParams) -> Self {
        Self {
            id: None,
            requester_email: params.requester_email,
            team_id: params.team_id,
            table_or_breakout_room: params.table_or_breakout_room,
            request_time: params.request_time,
            explanation: params.explanation,
            solved: params.solved,
        }
    }

    fn overwrite_from(&mut self, incoming: Self) {
        self.requester_email = incoming.requester_email;
        self.team_id = incoming.team_id;
        self.table_or_breakout_room = incoming.table_or_breakout_room;
        self.request_time = incoming.request_time;
        self.explanation = incoming.explanation;
        self.solved = incoming.solved;
    }

    fn column_values(&self) -> Vec<SqlParam> {
        vec![
            SqlParam::Text(self.requester_email.clone()),
            SqlParam::Text(self.team_id.clone()),
            SqlParam::Text(self.table_or_breakout_room.clone()),
            SqlParam::Timestamp(self.request_time),
            SqlParam::Text(self.explanation.clone()),
            SqlParam::Bool(self.solved),
        ]
    }
}
