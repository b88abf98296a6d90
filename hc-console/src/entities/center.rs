use hc_client::models::{Center, CenterPayload};
use shared::util::non_empty;

use crate::crud::CrudTab;
use crate::entity::AdminEntity;
use crate::error::ConsoleResult;
use crate::master::{Collection, MISSING, MasterData, ResourceKind};
use crate::page::Tabs;
use crate::schema::{Draft, FieldKind, FieldSpec, flag_text, parse_count, parse_flag, parse_number};

use super::{number, require, text};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CenterDraft {
    pub booth_id: String,
    pub name: String,
    pub address: String,
    pub contact_number: String,
    pub contact_person: String,
    pub is_active: bool,
    pub slots_per_day: String,
}

impl Default for CenterDraft {
    fn default() -> Self {
        Self {
            booth_id: String::new(),
            name: String::new(),
            address: String::new(),
            contact_number: String::new(),
            contact_person: String::new(),
            is_active: true,
            slots_per_day: String::new(),
        }
    }
}

impl Draft for CenterDraft {
    const ENTITY: &'static str = "Center";

    fn set(&mut self, field: &str, value: &str) -> ConsoleResult<()> {
        let target = match field {
            "isActive" => {
                self.is_active = parse_flag("Active", value)?;
                return Ok(());
            }
            "boothId" => &mut self.booth_id,
            "name" => &mut self.name,
            "address" => &mut self.address,
            "contactNumber" => &mut self.contact_number,
            "contactPerson" => &mut self.contact_person,
            "slotsPerDay" => &mut self.slots_per_day,
            _ => return Err(Self::unknown(field)),
        };
        *target = value.to_string();
        Ok(())
    }

    fn get(&self, field: &str) -> Option<String> {
        let value = match field {
            "isActive" => return Some(flag_text(self.is_active)),
            "boothId" => &self.booth_id,
            "name" => &self.name,
            "address" => &self.address,
            "contactNumber" => &self.contact_number,
            "contactPerson" => &self.contact_person,
            "slotsPerDay" => &self.slots_per_day,
            _ => return None,
        };
        Some(value.clone())
    }
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::select("boothId", "Booth", ResourceKind::Booth).required(),
    FieldSpec::new("name", "Center Name", FieldKind::Text).required(),
    FieldSpec::new("address", "Address", FieldKind::Text),
    FieldSpec::new("contactNumber", "Contact Number", FieldKind::Text),
    FieldSpec::new("contactPerson", "Contact Person", FieldKind::Text),
    FieldSpec::new("isActive", "Active", FieldKind::Flag),
    FieldSpec::new("slotsPerDay", "Slots Per Day", FieldKind::Number),
];

impl AdminEntity for Center {
    const LABEL: &'static str = "Center";
    const KIND: ResourceKind = ResourceKind::Center;
    const REFERENCES: &'static [ResourceKind] = &[ResourceKind::Booth];

    type Draft = CenterDraft;

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn columns() -> &'static [&'static str] {
        &[
            "ID",
            "Name",
            "Booth",
            "Address",
            "Contact",
            "Person",
            "Slots/Day",
            "Active",
        ]
    }

    fn row(&self, master: &MasterData) -> Vec<String> {
        let or_missing = |value: &Option<String>| value.clone().unwrap_or_else(|| MISSING.to_string());
        vec![
            self.id.to_string(),
            self.name.clone(),
            master.booth_name(Some(self.booth_id)),
            or_missing(&self.address),
            or_missing(&self.contact_number),
            or_missing(&self.contact_person),
            self.slots_per_day
                .map(|n| n.to_string())
                .unwrap_or_else(|| MISSING.to_string()),
            flag_text(self.is_active),
        ]
    }

    fn draft_from(&self, _master: &MasterData) -> CenterDraft {
        CenterDraft {
            booth_id: self.booth_id.to_string(),
            name: self.name.clone(),
            address: text(&self.address),
            contact_number: text(&self.contact_number),
            contact_person: text(&self.contact_person),
            is_active: self.is_active,
            slots_per_day: number(self.slots_per_day),
        }
    }

    fn payload(draft: &CenterDraft) -> ConsoleResult<CenterPayload> {
        require("Name and booth", &[&draft.name, &draft.booth_id])?;
        Ok(CenterPayload {
            booth_id: parse_number("Booth", &draft.booth_id)?,
            name: draft.name.trim().to_string(),
            address: non_empty(&draft.address),
            contact_number: non_empty(&draft.contact_number),
            contact_person: non_empty(&draft.contact_person),
            is_active: draft.is_active,
            slots_per_day: parse_count("Slots Per Day", &draft.slots_per_day)?,
        })
    }

    fn collection(master: &MasterData) -> &Collection<Self> {
        &master.centers
    }

    fn tab(tabs: &Tabs) -> &CrudTab<Self> {
        &tabs.center
    }

    fn tab_mut(tabs: &mut Tabs) -> &mut CrudTab<Self> {
        &mut tabs.center
    }
}
