//! Bulk constituency import
//!
//! Files are screened locally (type, size) before anything touches the
//! network.

use shared::models::UploadOutcome;
use thiserror::Error;

/// Import endpoint, relative to the API root
pub const UPLOAD_PATH: &str = "ExcelImport/UploadData";

/// Multipart field name expected by the backend
pub const UPLOAD_FIELD: &str = "file";

/// 50 MB
pub const MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

const ACCEPTED_EXTENSIONS: &[&str] = &[".xlsx", ".xls"];

/// Why a file was refused before upload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadRejection {
    #[error("Please select an Excel file (.xlsx or .xls)")]
    UnsupportedType { file_name: String },

    #[error("File size exceeds 50 MB limit")]
    TooLarge { size: u64 },
}

/// Extension check only; usable before the file is even opened
pub fn check_file_type(file_name: &str) -> Result<(), UploadRejection> {
    let lower = file_name.to_lowercase();
    if ACCEPTED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
        Ok(())
    } else {
        Err(UploadRejection::UnsupportedType {
            file_name: file_name.to_string(),
        })
    }
}

pub fn check_upload(file_name: &str, size: u64) -> Result<(), UploadRejection> {
    check_file_type(file_name)?;
    if size > MAX_UPLOAD_BYTES {
        return Err(UploadRejection::TooLarge { size });
    }
    Ok(())
}

/// Interpret the import response
///
/// A 2xx without a JSON object counts as success. When `success` is
/// missing, the presence of `error` decides.
pub(crate) fn parse_outcome(body: &[u8]) -> UploadOutcome {
    let value = match serde_json::from_slice::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(map)) => map,
        Ok(serde_json::Value::String(text)) => {
            return UploadOutcome {
                message: Some(text),
                ..UploadOutcome::accepted()
            };
        }
        _ => {
            let text = String::from_utf8_lossy(body).trim().to_string();
            return UploadOutcome {
                message: (!text.is_empty()).then_some(text),
                ..UploadOutcome::accepted()
            };
        }
    };

    let text = |key: &str| {
        value
            .get(key)
            .and_then(|v| v.as_str())
            .map(str::to_string)
    };
    let error = text("error");
    let success = value
        .get("success")
        .and_then(|v| v.as_bool())
        .unwrap_or(error.is_none());

    UploadOutcome {
        success,
        message: text("message"),
        error,
    }
}
