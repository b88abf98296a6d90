use hc_client::models::{Constituency, ConstituencyPayload};

use crate::crud::CrudTab;
use crate::entity::AdminEntity;
use crate::error::ConsoleResult;
use crate::master::{Collection, MasterData, ResourceKind};
use crate::page::Tabs;
use crate::schema::{Draft, FieldKind, FieldSpec, parse_number};

use super::{number, require};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstituencyDraft {
    pub name: String,
    pub number: String,
}

impl Draft for ConstituencyDraft {
    const ENTITY: &'static str = "Constituency";

    fn set(&mut self, field: &str, value: &str) -> ConsoleResult<()> {
        match field {
            "name" => self.name = value.to_string(),
            "constituencyNumber" => self.number = value.to_string(),
            _ => return Err(Self::unknown(field)),
        }
        Ok(())
    }

    fn get(&self, field: &str) -> Option<String> {
        match field {
            "name" => Some(self.name.clone()),
            "constituencyNumber" => Some(self.number.clone()),
            _ => None,
        }
    }
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", "Name", FieldKind::Text).required(),
    FieldSpec::new("constituencyNumber", "Number", FieldKind::Number).required(),
];

impl AdminEntity for Constituency {
    const LABEL: &'static str = "Constituency";
    const KIND: ResourceKind = ResourceKind::Constituency;
    const REFERENCES: &'static [ResourceKind] = &[];

    type Draft = ConstituencyDraft;

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn columns() -> &'static [&'static str] {
        &["ID", "Number", "Name"]
    }

    fn row(&self, _master: &MasterData) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.constituency_number
                .map(|n| n.to_string())
                .unwrap_or_else(|| crate::master::MISSING.to_string()),
            self.name.clone(),
        ]
    }

    fn draft_from(&self, _master: &MasterData) -> ConstituencyDraft {
        ConstituencyDraft {
            name: self.name.clone(),
            number: number(self.constituency_number),
        }
    }

    fn payload(draft: &ConstituencyDraft) -> ConsoleResult<ConstituencyPayload> {
        require("Name and number", &[&draft.name, &draft.number])?;
        Ok(ConstituencyPayload {
            name: draft.name.trim().to_string(),
            constituency_number: parse_number("Number", &draft.number)?,
        })
    }

    fn collection(master: &MasterData) -> &Collection<Self> {
        &master.constituencies
    }

    fn tab(tabs: &Tabs) -> &CrudTab<Self> {
        &tabs.constituency
    }

    fn tab_mut(tabs: &mut Tabs) -> &mut CrudTab<Self> {
        &mut tabs.constituency
    }
}
