//! Holiday Model
//!
//! The backend has exposed the "global" flag under several names over time.
//! [`HolidayWire`] accepts all of them; the rest of the code only ever sees
//! [`Holiday::global_holiday`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A date on which booking is disallowed
///
/// Optionally scoped to a booth, center and/or slot. A holiday without a
/// slot covers the full day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "HolidayWire")]
pub struct Holiday {
    pub id: i64,
    pub booth_id: Option<i64>,
    pub center_id: Option<i64>,
    pub slot_id: Option<i64>,
    /// As received; may carry a time suffix ("2025-01-26T00:00:00")
    pub holiday_date: String,
    pub description: Option<String>,
    pub global_holiday: bool,
}

impl Holiday {
    pub fn is_full_day(&self) -> bool {
        self.slot_id.is_none()
    }

    /// Date part of `holiday_date`
    pub fn date_part(&self) -> &str {
        self.holiday_date.get(..10).unwrap_or(&self.holiday_date)
    }

    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date_part(), "%Y-%m-%d").ok()
    }
}

/// Backend representation with every known alias of the global flag
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HolidayWire {
    id: i64,
    #[serde(default)]
    booth_id: Option<i64>,
    #[serde(default)]
    center_id: Option<i64>,
    #[serde(default)]
    slot_id: Option<i64>,
    #[serde(default)]
    holiday_date: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    global_holiday: Option<bool>,
    #[serde(default)]
    is_global_holiday: Option<bool>,
    #[serde(default)]
    is_global: Option<bool>,
    #[serde(default)]
    global: Option<bool>,
}

impl From<HolidayWire> for Holiday {
    fn from(wire: HolidayWire) -> Self {
        let global_holiday = [
            wire.global_holiday,
            wire.is_global_holiday,
            wire.is_global,
            wire.global,
        ]
        .into_iter()
        .flatten()
        .any(|flag| flag);

        Self {
            id: wire.id,
            booth_id: wire.booth_id,
            center_id: wire.center_id,
            slot_id: wire.slot_id,
            holiday_date: wire.holiday_date,
            description: wire.description,
            global_holiday,
        }
    }
}

/// Create / update holiday payload
///
/// The global flag is never written; the backend derives it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayPayload {
    pub booth_id: Option<i64>,
    pub center_id: Option<i64>,
    pub slot_id: Option<i64>,
    /// Serialized as `YYYY-MM-DD`
    pub holiday_date: NaiveDate,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_flag_aliases() {
        for key in ["globalHoliday", "isGlobalHoliday", "isGlobal", "global"] {
            let raw = format!(r#"{{"id":1,"holidayDate":"2025-01-26","{}":true}}"#, key);
            let h: Holiday = serde_json::from_str(&raw).unwrap();
            assert!(h.global_holiday, "alias {} not honoured", key);
        }
    }

    #[test]
    fn test_conflicting_aliases_any_true_wins() {
        let h: Holiday = serde_json::from_str(
            r#"{"id":1,"holidayDate":"2025-01-26","isGlobal":false,"global":true}"#,
        )
        .unwrap();
        assert!(h.global_holiday);
    }

    #[test]
    fn test_serializes_canonical_flag_only() {
        let h: Holiday = serde_json::from_str(
            r#"{"id":7,"slotId":null,"holidayDate":"2025-08-15T00:00:00","isGlobal":true}"#,
        )
        .unwrap();
        let json = serde_json::to_value(&h).unwrap();
        assert_eq!(json["globalHoliday"], true);
        assert!(json.get("isGlobal").is_none());
        assert!(h.is_full_day());
        assert_eq!(h.date_part(), "2025-08-15");
        assert_eq!(h.date(), NaiveDate::from_ymd_opt(2025, 8, 15));
    }

    #[test]
    fn test_payload_date_format() {
        let payload = HolidayPayload {
            booth_id: None,
            center_id: Some(3),
            slot_id: None,
            holiday_date: NaiveDate::from_ymd_opt(2025, 1, 26).unwrap(),
            description: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["holidayDate"], "2025-01-26");
        assert!(json["slotId"].is_null());
        assert!(json.get("globalHoliday").is_none());
    }
}
