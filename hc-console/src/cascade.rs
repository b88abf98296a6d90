//! Dependent booth → center → slot selectors
//!
//! Only the selection state lives here; the choices for each level come from
//! [`MasterData::options_under`](crate::master::MasterData::options_under).

/// Parse a selector value; blank or non-numeric means "nothing chosen"
pub fn parse_id(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

/// Raw selector values for a booth, a center under it, and a slot under that
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionCascade {
    pub booth: String,
    pub center: String,
    pub slot: String,
}

impl SelectionCascade {
    /// Choosing a booth invalidates the center and slot beneath it
    pub fn select_booth(&mut self, value: impl Into<String>) {
        self.booth = value.into();
        self.center.clear();
        self.slot.clear();
    }

    pub fn select_center(&mut self, value: impl Into<String>) {
        self.center = value.into();
        self.slot.clear();
    }

    pub fn select_slot(&mut self, value: impl Into<String>) {
        self.slot = value.into();
    }

    pub fn booth_id(&self) -> Option<i64> {
        parse_id(&self.booth)
    }

    pub fn center_id(&self) -> Option<i64> {
        parse_id(&self.center)
    }

    pub fn slot_id(&self) -> Option<i64> {
        parse_id(&self.slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changing_booth_clears_children() {
        let mut cascade = SelectionCascade::default();
        cascade.select_booth("10");
        cascade.select_center("3");
        cascade.select_slot("7");

        cascade.select_booth("");
        assert_eq!(cascade, SelectionCascade::default());
    }

    #[test]
    fn test_changing_center_clears_slot() {
        let mut cascade = SelectionCascade::default();
        cascade.select_booth("10");
        cascade.select_center("3");
        cascade.select_slot("1");
        assert_eq!(cascade.slot_id(), Some(1));

        cascade.select_center("4");
        assert!(cascade.slot.is_empty());
        assert_eq!(cascade.center_id(), Some(4));
        assert_eq!(cascade.booth_id(), Some(10));
    }

    #[test]
    fn test_blank_or_garbage_is_unselected() {
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("  "), None);
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id(" 12 "), Some(12));
    }
}
