//! Data models
//!
//! Mirrors of the booking backend's REST resources.
//! All IDs are `i64`; JSON keys are camelCase on the wire.

pub mod booth;
pub mod center;
pub mod constituency;
pub mod family_booking;
pub mod holiday;
pub mod slot;
pub mod slot_type;
pub mod upload;

// Re-exports
pub use booth::*;
pub use center::*;
pub use constituency::*;
pub use family_booking::*;
pub use holiday::*;
pub use slot::*;
pub use slot_type::*;
pub use upload::*;
