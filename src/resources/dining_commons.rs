use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Resource;
use crate::database::query_builder::SqlParam;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UCSBDiningCommons {
    #[serde(default)]
    pub code: String,
    pub name: String,
    pub has_sack_meal: bool,
    pub has_take_out_meal: bool,
    pub has_dining_cam: bool,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningCommonsParams {
    pub code: String,
    pub name: String,
    pub has_sack_meal: bool,
    pub has_take_out_meal: bool,
    pub has_dining_cam: bool,
    pub latitude: f64,
    pub longitude: f64,
}

impl Resource for UCSBDiningCommons {
    type Id = String;
    type CreateParams = DiningCommonsParams;

    const NAME: &'static str = "UCSBDiningCommons";
    const PATH: &'static str = "ucsbdiningcommons";
    const TABLE: &'static str = "ucsb_dining_commons";
    const KEY_COLUMN: &'static str = "code";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "has_sack_meal",
        "has_take_out_meal",
        "has_dining_cam",
        "latitude",
        "longitude",
    ];

    fn id(&self) -> Option<String> {
        Some(self.code.clone())
    }

    fn set_id(&mut self, id: String) {
        self.code = id;
    }

    fn from_params(params: DiningCommonsParams) -> Self {
        Self {
            code: params.code,
            name: params.name,
            has_sack_meal: params.has_sack_meal,
            has_take_out_meal: params.has_take_out_meal,
            has_dining_cam: params.has_dining_cam,
            latitude: params.latitude,
            longitude: params.longitude,
        }
    }

    fn overwrite_from(&mut self, incoming: Self) {
        self.name = incoming.name;
        self.has_sack_meal = incoming.has_sack_meal;
        self.has_take_out_meal = incoming.has_take_out_meal;
        self.has_dining_cam = incoming.has_dining_cam;
        self.latitude = incoming.latitude;
        self.longitude = incoming.longitude;
    }

    fn column_values(&self) -> Vec<SqlParam> {
        vec![
            SqlParam::Text(self.name.clone()),
            SqlParam::Bool(self.has_sack_meal),
            SqlParam::Bool(self.has_take_out_meal),
            SqlParam::Bool(self.has_dining_cam),
            SqlParam::Float(self.latitude),
            SqlParam::Float(self.longitude),
        ]
    }
}
