use hc_client::models::{Slot, SlotPayload};

use crate::cascade::SelectionCascade;
use crate::crud::CrudTab;
use crate::entity::AdminEntity;
use crate::error::ConsoleResult;
use crate::master::{Collection, MISSING, MasterData, ResourceKind};
use crate::page::Tabs;
use crate::schema::{Draft, FieldKind, FieldSpec, flag_text, parse_count, parse_flag, parse_number};

use super::{number, require};

/// Slot time form
///
/// The booth selector only narrows the center list; it is not sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotDraft {
    pub location: SelectionCascade,
    pub slot_type_id: String,
    pub start_time: String,
    pub end_time: String,
    pub max_appointment: String,
    pub is_active: bool,
}

impl Default for SlotDraft {
    fn default() -> Self {
        Self {
            location: SelectionCascade::default(),
            slot_type_id: String::new(),
            start_time: String::new(),
            end_time: String::new(),
            max_appointment: String::new(),
            is_active: true,
        }
    }
}

impl Draft for SlotDraft {
    const ENTITY: &'static str = "Slot";

    fn set(&mut self, field: &str, value: &str) -> ConsoleResult<()> {
        match field {
            "boothId" => self.location.select_booth(value),
            "centerId" => self.location.select_center(value),
            "slotTypeId" => self.slot_type_id = value.to_string(),
            "startTime" => self.start_time = value.to_string(),
            "endTime" => self.end_time = value.to_string(),
            "maxAppointment" => self.max_appointment = value.to_string(),
            "isActive" => self.is_active = parse_flag("Active", value)?,
            _ => return Err(Self::unknown(field)),
        }
        Ok(())
    }

    fn get(&self, field: &str) -> Option<String> {
        let value = match field {
            "boothId" => &self.location.booth,
            "centerId" => &self.location.center,
            "slotTypeId" => &self.slot_type_id,
            "startTime" => &self.start_time,
            "endTime" => &self.end_time,
            "maxAppointment" => &self.max_appointment,
            "isActive" => return Some(flag_text(self.is_active)),
            _ => return None,
        };
        Some(value.clone())
    }
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::select("boothId", "Booth", ResourceKind::Booth),
    FieldSpec::select("centerId", "Center", ResourceKind::Center)
        .under("boothId")
        .required(),
    FieldSpec::select("slotTypeId", "Slot Type", ResourceKind::SlotType).required(),
    FieldSpec::new("startTime", "Start Time", FieldKind::Time).required(),
    FieldSpec::new("endTime", "End Time", FieldKind::Time).required(),
    FieldSpec::new("maxAppointment", "Max Appointments", FieldKind::Number),
    FieldSpec::new("isActive", "Active", FieldKind::Flag),
];

impl AdminEntity for Slot {
    const LABEL: &'static str = "Slot";
    const KIND: ResourceKind = ResourceKind::Slot;
    const REFERENCES: &'static [ResourceKind] = &[
        ResourceKind::Booth,
        ResourceKind::Center,
        ResourceKind::SlotType,
    ];
    const DELETE_FAILED: &'static str = "Delete failed (slot may be in use)";

    type Draft = SlotDraft;

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn columns() -> &'static [&'static str] {
        &["ID", "Center", "Slot Type", "Time", "Max", "Active"]
    }

    fn row(&self, master: &MasterData) -> Vec<String> {
        vec![
            self.id.to_string(),
            master.center_name(Some(self.center_id)),
            master.slot_type_name(self.slot_type_id),
            self.window(),
            self.max_appointment
                .map(|n| n.to_string())
                .unwrap_or_else(|| MISSING.to_string()),
            flag_text(self.is_active),
        ]
    }

    /// The booth is recovered from the slot's center
    fn draft_from(&self, master: &MasterData) -> SlotDraft {
        let mut location = SelectionCascade::default();
        if let Some(center) = master.centers.get(self.center_id) {
            location.select_booth(center.booth_id.to_string());
        }
        location.select_center(self.center_id.to_string());

        SlotDraft {
            location,
            slot_type_id: self.slot_type_id.to_string(),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            max_appointment: number(self.max_appointment),
            is_active: self.is_active,
        }
    }

    fn payload(draft: &SlotDraft) -> ConsoleResult<SlotPayload> {
        require(
            "Center, slot type and times",
            &[
                &draft.location.center,
                &draft.slot_type_id,
                &draft.start_time,
                &draft.end_time,
            ],
        )?;
        Ok(SlotPayload {
            center_id: parse_number("Center", &draft.location.center)?,
            slot_type_id: parse_number("Slot Type", &draft.slot_type_id)?,
            start_time: draft.start_time.trim().to_string(),
            end_time: draft.end_time.trim().to_string(),
            max_appointment: parse_count("Max Appointments", &draft.max_appointment)?,
            is_active: draft.is_active,
        })
    }

    fn collection(master: &MasterData) -> &Collection<Self> {
        &master.slots
    }

    fn tab(tabs: &Tabs) -> &CrudTab<Self> {
        &tabs.slot
    }

    fn tab_mut(tabs: &mut Tabs) -> &mut CrudTab<Self> {
        &mut tabs.slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hc_client::models::Center;

    fn master_with_center() -> MasterData {
        let mut master = MasterData::default();
        master.centers.replace(vec![Center {
            id: 4,
            name: "Hall".into(),
            address: None,
            contact_number: None,
            contact_person: None,
            is_active: true,
            slots_per_day: None,
            booth_id: 9,
            center_number: None,
        }]);
        master
    }

    #[test]
    fn test_edit_recovers_booth_from_center() {
        let slot = Slot {
            id: 1,
            center_id: 4,
            slot_type_id: 2,
            start_time: "09:00".into(),
            end_time: "10:00".into(),
            max_appointment: None,
            is_active: false,
        };
        let draft = slot.draft_from(&master_with_center());
        assert_eq!(draft.location.booth, "9");
        assert_eq!(draft.location.center, "4");
        assert_eq!(draft.max_appointment, "");
        assert!(!draft.is_active);
    }

    #[test]
    fn test_booth_change_clears_center() {
        let mut draft = SlotDraft::default();
        draft.set("boothId", "9").unwrap();
        draft.set("centerId", "4").unwrap();
        draft.set("boothId", "8").unwrap();
        assert_eq!(draft.get("centerId").as_deref(), Some(""));
    }

    #[test]
    fn test_payload() {
        let mut draft = SlotDraft::default();
        for (field, value) in [
            ("boothId", "9"),
            ("centerId", "4"),
            ("slotTypeId", "2"),
            ("startTime", "09:00"),
            ("endTime", "10:00"),
        ] {
            draft.set(field, value).unwrap();
        }
        let payload = Slot::payload(&draft).unwrap();
        assert_eq!(payload.center_id, 4);
        assert_eq!(payload.max_appointment, 0);
        assert!(payload.is_active);

        draft.set("endTime", "").unwrap();
        assert!(Slot::payload(&draft).unwrap_err().is_local());
    }
}
