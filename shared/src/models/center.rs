//! Center Model

use serde::{Deserialize, Serialize};

fn default_active() -> bool {
    true
}

/// Service center where appointments take place, belongs to a booth
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Center {
    pub id: i64,
    #[serde(default, alias = "centerName")]
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub slots_per_day: Option<i64>,
    pub booth_id: i64,
    #[serde(default, alias = "centerNo", skip_serializing_if = "Option::is_none")]
    pub center_number: Option<i64>,
}

impl Center {
    pub fn label(&self) -> String {
        match self.center_number {
            Some(number) => format!("{} - {}", number, self.name),
            None => self.name.clone(),
        }
    }
}

/// Create / update center payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CenterPayload {
    pub booth_id: i64,
    pub name: String,
    pub address: Option<String>,
    pub contact_number: Option<String>,
    pub contact_person: Option<String>,
    pub is_active: bool,
    pub slots_per_day: i64,
}
