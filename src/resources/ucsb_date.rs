use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Resource;
use crate::database::query_builder::SqlParam;

/// A named date within an academic quarter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UCSBDate {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "quarterYYYYQ")]
    pub quarter_yyyyq: String,
    pub name: String,
    pub local_date_time: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UCSBDateParams {
    #[serde(rename = "quarterYYYYQ")]
    pub quarter_yyyyq: String,
    pub name: String,
    pub local_date_time: NaiveDateTime,
}

impl Resource for UCSBDate {
    type Id = i64;
    type CreateParams = UCSBDateParams;

    const NAME: &'static str = "UCSBDate";
    const PATH: &'static str = "ucsbdates";
    const TABLE: &'static str = "ucsb_dates";
    const COLUMNS: &'static [&'static str] = &["quarter_yyyyq", "name", "local_date_time"];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn from_params(params: UCSBDateParams) -> Self {
        Self {
            id: None,
            quarter_yyyyq: params.quarter_yyyyq,
            name: params.name,
            local_date_time: params.local_date_time,
        }
    }

    fn overwrite_from(&mut self, incoming: Self) {
        self.quarter_yyyyq = incoming.quarter_yyyyq;
        self.name = incoming.name;
        self.local_date_time = incoming.local_date_time;
    }

    fn column_values(&self) -> Vec<SqlParam> {
        vec![
            SqlParam::Text(self.quarter_yyyyq.clone()),
            SqlParam::Text(self.name.clone()),
            SqlParam::Timestamp(self.local_date_time),
        ]
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample() -> UCSBDate {
        UCSBDate {
            id: Some(1),
            quarter_yyyyq: "20222".to_string(),
            name: "firstDayOfClasses".to_string(),
            local_date_time: "2022-01-03T00:00:00".parse().unwrap(),
        }
    }

    #[test]
    fn quarter_field_keeps_upper_case_name() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["quarterYYYYQ"], "20222");
        assert_eq!(value["localDateTime"], "2022-01-03T00:00:00");
    }
}
