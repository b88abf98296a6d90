use chrono::NaiveDate;
use hc_client::models::{Holiday, HolidayPayload};
use shared::util::non_empty;

use crate::cascade::SelectionCascade;
use crate::crud::CrudTab;
use crate::entity::AdminEntity;
use crate::error::{ConsoleError, ConsoleResult};
use crate::master::{Collection, MISSING, MasterData, ResourceKind};
use crate::page::Tabs;
use crate::schema::{Draft, FieldKind, FieldSpec, flag_text, parse_flag};

use super::{number, text};

/// Label shown in place of a slot for whole-day holidays
pub const FULL_DAY: &str = "Full Day";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayDraft {
    pub scope: SelectionCascade,
    pub full_day: bool,
    pub holiday_date: String,
    pub description: String,
}

impl Draft for HolidayDraft {
    const ENTITY: &'static str = "Holiday";

    fn set(&mut self, field: &str, value: &str) -> ConsoleResult<()> {
        match field {
            "boothId" => self.scope.select_booth(value),
            "centerId" => self.scope.select_center(value),
            "slotId" => self.scope.select_slot(value),
            "fullDay" => {
                self.full_day = parse_flag("Full Day", value)?;
                self.scope.slot.clear();
            }
            "holidayDate" => self.holiday_date = value.to_string(),
            "description" => self.description = value.to_string(),
            _ => return Err(Self::unknown(field)),
        }
        Ok(())
    }

    fn get(&self, field: &str) -> Option<String> {
        let value = match field {
            "boothId" => &self.scope.booth,
            "centerId" => &self.scope.center,
            "slotId" => &self.scope.slot,
            "fullDay" => return Some(flag_text(self.full_day)),
            "holidayDate" => &self.holiday_date,
            "description" => &self.description,
            _ => return None,
        };
        Some(value.clone())
    }
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::select("boothId", "Booth", ResourceKind::Booth),
    FieldSpec::select("centerId", "Center", ResourceKind::Center).under("boothId"),
    FieldSpec::new("fullDay", "Full Day", FieldKind::Flag),
    FieldSpec::select("slotId", "Slot", ResourceKind::Slot).under("centerId"),
    FieldSpec::new("holidayDate", "Date", FieldKind::Date).required(),
    FieldSpec::new("description", "Description", FieldKind::Text),
];

impl AdminEntity for Holiday {
    const LABEL: &'static str = "Holiday";
    const KIND: ResourceKind = ResourceKind::Holiday;
    const REFERENCES: &'static [ResourceKind] = &[
        ResourceKind::Booth,
        ResourceKind::Center,
        ResourceKind::SlotType,
        ResourceKind::Slot,
    ];

    type Draft = HolidayDraft;

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn columns() -> &'static [&'static str] {
        &["ID", "Date", "Booth", "Center", "Slot", "Description", "Global"]
    }

    fn row(&self, master: &MasterData) -> Vec<String> {
        let slot = match self.slot_id {
            None => FULL_DAY.to_string(),
            Some(id) => master
                .slots
                .get(id)
                .map(|s| master.slot_label(s))
                .unwrap_or_else(|| MISSING.to_string()),
        };
        vec![
            self.id.to_string(),
            self.date_part().to_string(),
            master.booth_name(self.booth_id),
            master.center_name(self.center_id),
            slot,
            self.description.clone().unwrap_or_else(|| MISSING.to_string()),
            flag_text(self.global_holiday),
        ]
    }

    fn draft_from(&self, _master: &MasterData) -> HolidayDraft {
        let mut scope = SelectionCascade::default();
        scope.select_booth(number(self.booth_id));
        scope.select_center(number(self.center_id));
        scope.select_slot(number(self.slot_id));

        HolidayDraft {
            scope,
            full_day: self.is_full_day(),
            holiday_date: self.date_part().to_string(),
            description: text(&self.description),
        }
    }

    fn payload(draft: &HolidayDraft) -> ConsoleResult<HolidayPayload> {
        if draft.holiday_date.trim().is_empty() {
            return Err(ConsoleError::validation("Date is required"));
        }
        let slot_id = if draft.full_day {
            None
        } else {
            Some(
                draft
                    .scope
                    .slot_id()
                    .ok_or_else(|| ConsoleError::validation("Select slot or enable Full Day"))?,
            )
        };
        let holiday_date = NaiveDate::parse_from_str(draft.holiday_date.trim(), "%Y-%m-%d")
            .map_err(|_| ConsoleError::validation("Date must be YYYY-MM-DD"))?;

        Ok(HolidayPayload {
            booth_id: draft.scope.booth_id(),
            center_id: draft.scope.center_id(),
            slot_id,
            holiday_date,
            description: non_empty(&draft.description),
        })
    }

    fn collection(master: &MasterData) -> &Collection<Self> {
        &master.holidays
    }

    fn tab(tabs: &Tabs) -> &CrudTab<Self> {
        &tabs.holiday
    }

    fn tab_mut(tabs: &mut Tabs) -> &mut CrudTab<Self> {
        &mut tabs.holiday
    }
}
