use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Resource;
use crate::database::query_builder::SqlParam;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UCSBDiningCommonsMenuItem {
    #[serde(default)]
    pub id: Option<i64>,
    pub dining_commons_code: String,
    pub name: String,
    pub station: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemParams {
    pub dining_commons_code: String,
    pub name: String,
    pub station: String,
}

impl Resource for UCSBDiningCommonsMenuItem {
    type Id = i64;
    type CreateParams = MenuItemParams;

    const NAME: &'static str = "UCSBDiningCommonsMenuItem";
    const PATH: &'static str = "ucsbdiningcommonsmenuitem";
    const TABLE: &'static str = "ucsb_dining_commons_menu_items";
    const COLUMNS: &'static [&'static str] = &["dining_commons_code", "name", "station"];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn from_params(params: MenuItemParams) -> Self {
        Self {
            id: None,
            dining_commons_code: params.dining_commons_code,
            name: params.name,
            station: params.station,
        }
    }

    fn overwrite_from(&mut self, incoming: Self) {
        self.dining_commons_code = incoming.dining_commons_code;
        self.name = incoming.name;
        self.station = incoming.station;
    }

    fn column_values(&self) -> Vec<SqlParam> {
        vec![
            SqlParam::Text(self.dining_commons_code.clone()),
            SqlParam::Text(self.name.clone()),
            SqlParam::Text(self.station.clone()),
        ]
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample() -> UCSBDiningCommonsMenuItem {
        UCSBDiningCommonsMenuItem {
            id: Some(1),
            dining_commons_code: "ortega".to_string(),
            name: "Baked Pesto Pasta with Chicken".to_string(),
            station: "Entree Specials".to_string(),
        }
    }

    #[test]
    fn id_is_optional_in_payloads() {
        let item: UCSBDiningCommonsMenuItem = serde_json::from_str(
            r#"{"diningCommonsCode":"dlg","name":"Tofu Banh Mi Sandwich (v)","station":"Entree Specials"}"#,
        )
        .unwrap();
        assert_eq!(item.id, None);
        assert_eq!(item.dining_commons_code, "dlg");
    }
}
