use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Resource;
use crate::database::query_builder::SqlParam;

/// Student organization keyed by its organization code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UCSBOrganization {
    #[serde(default)]
    pub org_code: String,
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationParams {
    pub org_code: String,
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}

impl Resource for UCSBOrganization {
    type Id = String;
    type CreateParams = OrganizationParams;

    const NAME: &'static str = "UCSBOrganization";
    const PATH: &'static str = "ucsborganization";
    const TABLE: &'static str = "ucsb_organizations";
    const KEY_COLUMN: &'static str = "org_code";
    const COLUMNS: &'static [&'static str] = &["org_translation_short", "org_translation", "inactive"];

    /// Natural key: always present, even when empty
    fn id(&self) -> Option<String> {
        Some(self.org_code.clone())
    }

    fn set_id(&mut self, id: String) {
        self.org_code = id;
    }

    fn from_params(params: OrganizationParams) -> Self {
        Self {
            org_code: params.org_code,
            org_translation_short: params.org_translation_short,
            org_translation: params.org_translation,
            inactive: params.inactive,
        }
    }

    fn overwrite_from(&mut self, incoming: Self) {
        self.org_translation_short = incoming.org_translation_short;
        self.org_translation = incoming.org_translation;
        self.inactive = incoming.inactive;
    }

    fn column_values(&self) -> Vec<SqlParam> {
        vec![
            SqlParam::Text(self.org_translation_short.clone()),
            SqlParam::Text(self.org_translation.clone()),
            SqlParam::Bool(self.inactive),
        ]
    }
}
