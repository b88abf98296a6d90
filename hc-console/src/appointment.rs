//! Local-only appointment requests
//!
//! There is no backend endpoint for appointment requests yet. Records built
//! here live only in memory for the session and are never sent anywhere, so
//! the page does not expose this as a tab.
// TODO: replace with a Resource once the backend exposes AppointmentRequest.

use hc_client::models::{Booth, Center, Slot};
use serde::Serialize;
use shared::util::{non_empty, now_millis};

use crate::cascade::parse_id;
use crate::error::{ConsoleError, ConsoleResult};
use crate::master::MasterData;
use crate::schema::parse_optional_number;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AppointmentStatus {
    Pending,
}

/// Appointment request form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentDraft {
    pub voter_identifier: String,
    pub hch_name: String,
    pub age: String,
    pub gender: String,
    pub constituency_id: String,
    pub booth_id: String,
    pub center_id: String,
    pub slot_id: String,
    pub appointment_date: String,
    pub karyakarta_name: String,
    pub karyakarta_contact_number: String,
    pub is_family_head: bool,
    pub family_head_name: String,
    pub family_id: String,
    pub is_minor: bool,
}

/// An appointment request with its booth, center and slot copied in
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalAppointment {
    pub appointment_request_id: i64,
    pub voter_identifier: String,
    pub hch_name: Option<String>,
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub constituency_id: Option<i64>,
    pub booth_id: Option<i64>,
    pub center_id: Option<i64>,
    pub slot_id: Option<i64>,
    pub appointment_date: String,
    pub karyakarta_name: Option<String>,
    pub karyakarta_contact_number: Option<String>,
    pub is_family_head: bool,
    pub family_head_name: Option<String>,
    pub family_id: Option<i64>,
    pub is_minor: bool,
    pub booth_details: Option<Booth>,
    pub center_details: Option<Center>,
    pub slot_details: Option<Slot>,
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone, Default)]
pub struct LocalAppointments {
    rows: Vec<LocalAppointment>,
}

impl LocalAppointments {
    pub fn rows(&self) -> &[LocalAppointment] {
        &self.rows
    }

    /// Append a request built from `draft`
    ///
    /// Ids are creation timestamps, bumped when two land in the same
    /// millisecond.
    pub fn create(&mut self, draft: &AppointmentDraft, master: &MasterData) -> ConsoleResult<i64> {
        let required = [
            &draft.voter_identifier,
            &draft.center_id,
            &draft.slot_id,
            &draft.appointment_date,
        ];
        if required.iter().any(|v| v.trim().is_empty()) {
            return Err(ConsoleError::validation("Fill required fields"));
        }

        let last = self.rows.last().map_or(i64::MIN, |r| r.appointment_request_id);
        let id = now_millis().max(last + 1);

        let booth_id = parse_id(&draft.booth_id);
        let center_id = parse_id(&draft.center_id);
        let slot_id = parse_id(&draft.slot_id);

        self.rows.push(LocalAppointment {
            appointment_request_id: id,
            voter_identifier: draft.voter_identifier.trim().to_string(),
            hch_name: non_empty(&draft.hch_name),
            age: parse_optional_number("Age", &draft.age)?,
            gender: non_empty(&draft.gender),
            constituency_id: parse_id(&draft.constituency_id),
            booth_id,
            center_id,
            slot_id,
            appointment_date: draft.appointment_date.trim().to_string(),
            karyakarta_name: non_empty(&draft.karyakarta_name),
            karyakarta_contact_number: non_empty(&draft.karyakarta_contact_number),
            is_family_head: draft.is_family_head,
            family_head_name: non_empty(&draft.family_head_name),
            family_id: parse_id(&draft.family_id),
            is_minor: draft.is_minor,
            booth_details: booth_id.and_then(|id| master.booths.get(id)).cloned(),
            center_details: center_id.and_then(|id| master.centers.get(id)).cloned(),
            slot_details: slot_id.and_then(|id| master.slots.get(id)).cloned(),
            status: AppointmentStatus::Pending,
        });
        tracing::warn!(id, "Appointment request kept locally only");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> AppointmentDraft {
        AppointmentDraft {
            voter_identifier: "ABC1234567".into(),
            center_id: "4".into(),
            slot_id: "7".into(),
            appointment_date: "2025-02-01".into(),
            age: "34".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_fields_rejected() {
        let mut appointments = LocalAppointments::default();
        let err = appointments
            .create(&AppointmentDraft::default(), &MasterData::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "Fill required fields");
        assert!(appointments.rows().is_empty());
    }

    #[test]
    fn test_created_pending_with_unique_ids() {
        let mut master = MasterData::default();
        master.centers.replace(vec![Center {
            id: 4,
            name: "Hall".into(),
            address: None,
            contact_number: None,
            contact_person: None,
            is_active: true,
            slots_per_day: None,
            booth_id: 1,
            center_number: None,
        }]);

        let mut appointments = LocalAppointments::default();
        let first = appointments.create(&draft(), &master).unwrap();
        let second = appointments.create(&draft(), &master).unwrap();
        assert!(second > first);

        let row = &appointments.rows()[0];
        assert_eq!(row.status, AppointmentStatus::Pending);
        assert_eq!(row.age, Some(34));
        assert_eq!(row.center_details.as_ref().map(|c| c.id), Some(4));
        assert!(row.slot_details.is_none());
        assert!(row.booth_details.is_none());
    }
}
