//! Slot (slot time) Model

use serde::{Deserialize, Serialize};

fn default_active() -> bool {
    true
}

/// Bookable time window at a center
///
/// Times are kept as the backend's strings ("09:00" / "09:00:00").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub id: i64,
    pub center_id: i64,
    pub slot_type_id: i64,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub max_appointment: Option<i64>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl Slot {
    /// "09:00 - 10:00"
    pub fn window(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }
}

/// Create / update slot payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotPayload {
    pub center_id: i64,
    pub slot_type_id: i64,
    pub start_time: String,
    pub end_time: String,
    pub max_appointment: i64,
    pub is_active: bool,
}
