use hc_client::models::{SlotType, SlotTypePayload};

use crate::crud::CrudTab;
use crate::entity::AdminEntity;
use crate::error::ConsoleResult;
use crate::master::{Collection, MasterData, ResourceKind};
use crate::page::Tabs;
use crate::schema::{Draft, FieldKind, FieldSpec};

use super::require;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotTypeDraft {
    pub label: String,
}

impl Draft for SlotTypeDraft {
    const ENTITY: &'static str = "SlotType";

    fn set(&mut self, field: &str, value: &str) -> ConsoleResult<()> {
        match field {
            "slotType1" => self.label = value.to_string(),
            _ => return Err(Self::unknown(field)),
        }
        Ok(())
    }

    fn get(&self, field: &str) -> Option<String> {
        (field == "slotType1").then(|| self.label.clone())
    }
}

const FIELDS: &[FieldSpec] = &[FieldSpec::new("slotType1", "Slot Type", FieldKind::Text).required()];

impl AdminEntity for SlotType {
    const LABEL: &'static str = "Slot Type";
    const KIND: ResourceKind = ResourceKind::SlotType;
    const REFERENCES: &'static [ResourceKind] = &[];
    const DELETE_FAILED: &'static str = "Delete failed (in use)";

    type Draft = SlotTypeDraft;

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn columns() -> &'static [&'static str] {
        &["ID", "Slot Type"]
    }

    fn row(&self, _master: &MasterData) -> Vec<String> {
        vec![self.id.to_string(), self.label.clone()]
    }

    fn draft_from(&self, _master: &MasterData) -> SlotTypeDraft {
        SlotTypeDraft {
            label: self.label.clone(),
        }
    }

    fn payload(draft: &SlotTypeDraft) -> ConsoleResult<SlotTypePayload> {
        require("Slot type", &[&draft.label])?;
        Ok(SlotTypePayload {
            label: draft.label.trim().to_string(),
        })
    }

    fn collection(master: &MasterData) -> &Collection<Self> {
        &master.slot_types
    }

    fn tab(tabs: &Tabs) -> &CrudTab<Self> {
        &tabs.slot_type
    }

    fn tab_mut(tabs: &mut Tabs) -> &mut CrudTab<Self> {
        &mut tabs.slot_type
    }
}
