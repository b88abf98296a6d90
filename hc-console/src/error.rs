//! Console error types
//!
//! Three failure families: local validation (never reaches the network),
//! backend/transport failures (logged, surfaced with a generic alert), and
//! programming errors such as unknown fields.

use hc_client::ClientError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Pre-submission check failed; nothing was sent
    #[error("{0}")]
    Validation(String),

    #[error("Unknown field `{field}` for {entity}")]
    UnknownField { entity: &'static str, field: String },

    #[error("{entity} {id} is not loaded")]
    UnknownRecord { entity: &'static str, id: i64 },

    /// Backend or transport failure behind a user-facing alert
    #[error("{alert}")]
    Failed {
        alert: String,
        #[source]
        source: ClientError,
    },

    /// Import reached the backend but was refused
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error(transparent)]
    Client(#[from] ClientError),
}

impl ConsoleError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn failed(alert: impl Into<String>, source: ClientError) -> Self {
        Self::Failed {
            alert: alert.into(),
            source,
        }
    }

    /// True when the action was refused before any network call
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::UnknownField { .. } | Self::UnknownRecord { .. }
        )
    }

    /// Message shown to the operator
    pub fn alert(&self) -> String {
        self.to_string()
    }
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;
