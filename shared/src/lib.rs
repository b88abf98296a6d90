//! Shared types for the health-card booking console
//!
//! Wire models exchanged with the booking backend. Every record here is a
//! transient copy; the backend owns persistence and referential integrity.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
