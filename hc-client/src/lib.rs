//! HC Client - HTTP client for the health-card booking backend
//!
//! Thin proxies over the backend's REST resources. No retries and no
//! response validation: any transport or server failure surfaces as a
//! [`ClientError`].

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod resource;
pub mod upload;

pub use client::HcClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use resource::Resource;
pub use upload::{MAX_UPLOAD_BYTES, UploadRejection, check_upload};

// Re-export shared models for convenience
pub use shared::models;
