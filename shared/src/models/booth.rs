//! Booth Model

use serde::{Deserialize, Serialize};

/// Polling booth, belongs to a constituency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booth {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "partNo", alias = "boothNumber")]
    pub part_number: Option<i64>,
    #[serde(default)]
    pub town: Option<String>,
    pub constituency_id: i64,
}

impl Booth {
    /// Selector label: "<part> - <name>"
    pub fn label(&self) -> String {
        match self.part_number {
            Some(part) => format!("{} - {}", part, self.name),
            None => self.name.clone(),
        }
    }
}

/// Create / update booth payload
///
/// Optional fields are sent as explicit `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoothPayload {
    pub name: String,
    pub constituency_id: i64,
    pub part_number: Option<i64>,
    pub town: Option<String>,
}
