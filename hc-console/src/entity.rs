//! Per-entity description driving the generic CRUD tab

use hc_client::Resource;

use crate::crud::CrudTab;
use crate::error::ConsoleResult;
use crate::master::{Collection, MasterData, ResourceKind};
use crate::page::Tabs;
use crate::schema::{Draft, FieldSpec};

/// An editable backend record
///
/// Everything a tab needs beyond the resource client: form fields, table
/// columns, how to read a record back into a draft, and how to turn a draft
/// into the wire payload.
pub trait AdminEntity: Resource + Clone {
    const LABEL: &'static str;
    const KIND: ResourceKind;
    /// Collections re-fetched alongside this one
    const REFERENCES: &'static [ResourceKind];
    const DELETE_FAILED: &'static str = "Delete failed";

    type Draft: Draft;

    fn fields() -> &'static [FieldSpec];

    fn columns() -> &'static [&'static str];

    /// One table row, references resolved through `master`
    fn row(&self, master: &MasterData) -> Vec<String>;

    fn draft_from(&self, master: &MasterData) -> Self::Draft;

    /// Validate and coerce; never touches the network
    fn payload(draft: &Self::Draft) -> ConsoleResult<Self::Payload>;

    fn collection(master: &MasterData) -> &Collection<Self>;

    fn tab(tabs: &Tabs) -> &CrudTab<Self>;

    fn tab_mut(tabs: &mut Tabs) -> &mut CrudTab<Self>;

    fn save_failed() -> String {
        format!("Failed to save {}", Self::LABEL)
    }
}
