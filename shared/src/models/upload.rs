//! Bulk import result

use serde::{Deserialize, Serialize};

/// Response of `POST /ExcelImport/UploadData`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadOutcome {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UploadOutcome {
    pub fn accepted() -> Self {
        Self {
            success: true,
            ..Self::default()
        }
    }
}
