//! Admin tab definitions, one per editable resource

mod booth;
mod center;
mod constituency;
mod holiday;
mod slot;
mod slot_type;

pub use booth::BoothDraft;
pub use center::CenterDraft;
pub use constituency::ConstituencyDraft;
pub use holiday::HolidayDraft;
pub use slot::SlotDraft;
pub use slot_type::SlotTypeDraft;

use crate::error::{ConsoleError, ConsoleResult};

/// Fail with "`what` required" when any value is blank
fn require(what: &str, values: &[&str]) -> ConsoleResult<()> {
    if values.iter().any(|v| v.trim().is_empty()) {
        return Err(ConsoleError::validation(format!("{what} required")));
    }
    Ok(())
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn number(value: Option<i64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}
