//! Slot Type Model

use serde::{Deserialize, Serialize};

/// Slot type (e.g. "Morning", "Evening")
///
/// The backend stores the label in a column named `slotType1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotType {
    pub id: i64,
    #[serde(rename = "slotType1", alias = "name", alias = "slotType", default)]
    pub label: String,
}

/// Create / update slot type payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotTypePayload {
    #[serde(rename = "slotType1")]
    pub label: String,
}
