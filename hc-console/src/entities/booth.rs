use hc_client::models::{Booth, BoothPayload};
use shared::util::non_empty;

use crate::crud::CrudTab;
use crate::entity::AdminEntity;
use crate::error::ConsoleResult;
use crate::master::{Collection, MISSING, MasterData, ResourceKind};
use crate::page::Tabs;
use crate::schema::{Draft, FieldKind, FieldSpec, parse_number, parse_optional_number};

use super::{number, require, text};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoothDraft {
    pub constituency_id: String,
    pub name: String,
    pub part_number: String,
    pub town: String,
}

impl Draft for BoothDraft {
    const ENTITY: &'static str = "Booth";

    fn set(&mut self, field: &str, value: &str) -> ConsoleResult<()> {
        let target = match field {
            "constituencyId" => &mut self.constituency_id,
            "name" => &mut self.name,
            "partNumber" => &mut self.part_number,
            "town" => &mut self.town,
            _ => return Err(Self::unknown(field)),
        };
        *target = value.to_string();
        Ok(())
    }

    fn get(&self, field: &str) -> Option<String> {
        let value = match field {
            "constituencyId" => &self.constituency_id,
            "name" => &self.name,
            "partNumber" => &self.part_number,
            "town" => &self.town,
            _ => return None,
        };
        Some(value.clone())
    }
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::select("constituencyId", "Constituency", ResourceKind::Constituency).required(),
    FieldSpec::new("name", "Name", FieldKind::Text).required(),
    FieldSpec::new("partNumber", "Part Number", FieldKind::Number),
    FieldSpec::new("town", "Town", FieldKind::Text),
];

impl AdminEntity for Booth {
    const LABEL: &'static str = "Booth";
    const KIND: ResourceKind = ResourceKind::Booth;
    const REFERENCES: &'static [ResourceKind] = &[ResourceKind::Constituency];

    type Draft = BoothDraft;

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn columns() -> &'static [&'static str] {
        &["ID", "Part No", "Name", "Town", "Constituency"]
    }

    fn row(&self, master: &MasterData) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.part_number
                .map(|n| n.to_string())
                .unwrap_or_else(|| MISSING.to_string()),
            self.name.clone(),
            self.town.clone().unwrap_or_else(|| MISSING.to_string()),
            master.constituency_name(self.constituency_id),
        ]
    }

    fn draft_from(&self, _master: &MasterData) -> BoothDraft {
        BoothDraft {
            constituency_id: self.constituency_id.to_string(),
            name: self.name.clone(),
            part_number: number(self.part_number),
            town: text(&self.town),
        }
    }

    fn payload(draft: &BoothDraft) -> ConsoleResult<BoothPayload> {
        require("Name and constituency", &[&draft.name, &draft.constituency_id])?;
        Ok(BoothPayload {
            name: draft.name.trim().to_string(),
            constituency_id: parse_number("Constituency", &draft.constituency_id)?,
            part_number: parse_optional_number("Part Number", &draft.part_number)?,
            town: non_empty(&draft.town),
        })
    }

    fn collection(master: &MasterData) -> &Collection<Self> {
        &master.booths
    }

    fn tab(tabs: &Tabs) -> &CrudTab<Self> {
        &tabs.booth
    }

    fn tab_mut(tabs: &mut Tabs) -> &mut CrudTab<Self> {
        &mut tabs.booth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hc_client::models::Constituency;

    #[test]
    fn test_payload_coerces_foreign_key() {
        let draft = BoothDraft {
            constituency_id: "3".into(),
            name: "Booth A".into(),
            part_number: "".into(),
            town: " ".into(),
        };
        let payload = Booth::payload(&draft).unwrap();
        assert_eq!(payload.constituency_id, 3);
        assert_eq!(payload.part_number, None);
        assert_eq!(payload.town, None);
    }

    #[test]
    fn test_missing_constituency_is_rejected() {
        let draft = BoothDraft {
            name: "Booth A".into(),
            ..Default::default()
        };
        let err = Booth::payload(&draft).unwrap_err();
        assert_eq!(err.to_string(), "Name and constituency required");
    }

    #[test]
    fn test_row_resolves_constituency() {
        let mut master = MasterData::default();
        master.constituencies.replace(vec![Constituency {
            id: 3,
            name: "North".into(),
            constituency_number: Some(12),
        }]);
        let booth = Booth {
            id: 1,
            name: "Booth A".into(),
            part_number: Some(41),
            town: None,
            constituency_id: 3,
        };
        assert_eq!(booth.row(&master), vec!["1", "41", "Booth A", "-", "North"]);

        let orphan = Booth {
            constituency_id: 99,
            ..booth
        };
        assert_eq!(orphan.row(&master)[4], "-");
    }
}
