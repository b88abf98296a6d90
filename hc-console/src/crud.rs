//! Generic admin tab
//!
//! One [`CrudTab`] per editable resource. The tab owns only the form draft,
//! its [`Mode`] and the pager; records live in [`MasterData`] and are
//! re-fetched after every successful mutation.

use std::fmt;
use std::iter;

use hc_client::{HcClient, HttpClient, Resource};

use crate::entity::AdminEntity;
use crate::error::{ConsoleError, ConsoleResult};
use crate::master::MasterData;
use crate::pagination::Paginator;
use crate::schema::{Draft, FieldKind};

/// Whether submitting the form creates a record or updates one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Creating,
    Editing(i64),
}

/// What a successful save did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(i64),
    Updated(i64),
}

pub struct CrudTab<E: AdminEntity> {
    draft: E::Draft,
    mode: Mode,
    pager: Paginator,
}

impl<E: AdminEntity> Default for CrudTab<E> {
    fn default() -> Self {
        Self {
            draft: E::Draft::default(),
            mode: Mode::Creating,
            pager: Paginator::default(),
        }
    }
}

impl<E: AdminEntity> fmt::Debug for CrudTab<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrudTab")
            .field("entity", &E::LABEL)
            .field("mode", &self.mode)
            .field("pager", &self.pager)
            .finish()
    }
}

impl<E: AdminEntity> CrudTab<E> {
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn draft(&self) -> &E::Draft {
        &self.draft
    }

    pub fn pager(&self) -> &Paginator {
        &self.pager
    }

    pub fn pager_mut(&mut self) -> &mut Paginator {
        &mut self.pager
    }

    pub fn set(&mut self, field: &str, value: &str) -> ConsoleResult<()> {
        self.draft.set(field, value)
    }

    /// Selector choices for `field` given the current draft
    pub fn field_options(&self, field: &str, master: &MasterData) -> ConsoleResult<Vec<(i64, String)>> {
        let spec = E::fields()
            .iter()
            .find(|spec| spec.name == field)
            .ok_or_else(|| E::Draft::unknown(field))?;

        Ok(match spec.kind {
            FieldKind::Select {
                source,
                parent: Some(parent),
            } => master.options_under(source, &self.draft.get(parent).unwrap_or_default()),
            FieldKind::Select { source, parent: None } => master.options(source, None),
            _ => Vec::new(),
        })
    }

    /// Re-fetch this resource and its reference lists
    pub async fn load<H: HttpClient>(
        &mut self,
        api: &HcClient<H>,
        master: &mut MasterData,
    ) -> ConsoleResult<()> {
        let kinds: Vec<_> = iter::once(E::KIND)
            .chain(E::REFERENCES.iter().copied())
            .collect();

        if let Err(e) = master.reload(api, &kinds).await {
            tracing::error!(entity = E::LABEL, error = %e, "Failed to load");
            return Err(e.into());
        }
        self.pager.clamp(E::collection(master).len());
        Ok(())
    }

    /// Submit the draft
    ///
    /// Local validation runs first; a rejected draft never reaches the
    /// backend. On success the form is cleared and the list reloaded.
    pub async fn save<H: HttpClient>(
        &mut self,
        api: &HcClient<H>,
        master: &mut MasterData,
    ) -> ConsoleResult<SaveOutcome> {
        let payload = E::payload(&self.draft)?;

        let result = match self.mode {
            Mode::Creating => api
                .create::<E>(&payload)
                .await
                .map(|record| SaveOutcome::Created(record.id())),
            Mode::Editing(id) => api
                .update::<E>(id, &payload)
                .await
                .map(|_| SaveOutcome::Updated(id)),
        };
        let outcome = result.map_err(|e| {
            tracing::error!(entity = E::LABEL, mode = ?self.mode, error = %e, "Save failed");
            ConsoleError::failed(E::save_failed(), e)
        })?;

        tracing::info!(entity = E::LABEL, ?outcome, "Saved");
        self.cancel();
        // Load failures are logged; the save itself stands
        let _ = self.load(api, master).await;
        Ok(outcome)
    }

    /// Populate the draft from a loaded record
    pub fn edit(&mut self, id: i64, master: &MasterData) -> ConsoleResult<()> {
        let record = E::collection(master)
            .get(id)
            .ok_or(ConsoleError::UnknownRecord {
                entity: E::LABEL,
                id,
            })?;
        self.draft = record.draft_from(master);
        self.mode = Mode::Editing(id);
        Ok(())
    }

    /// Back to an empty create form
    pub fn cancel(&mut self) {
        self.draft = E::Draft::default();
        self.mode = Mode::Creating;
    }

    pub async fn delete<H: HttpClient>(
        &mut self,
        id: i64,
        api: &HcClient<H>,
        master: &mut MasterData,
    ) -> ConsoleResult<()> {
        api.delete::<E>(id).await.map_err(|e| {
            tracing::error!(entity = E::LABEL, id, error = %e, "Delete failed");
            ConsoleError::failed(E::DELETE_FAILED, e)
        })?;

        tracing::info!(entity = E::LABEL, id, "Deleted");
        if self.mode == Mode::Editing(id) {
            self.cancel();
        }
        let _ = self.load(api, master).await;
        Ok(())
    }

    /// Records on the current page
    pub fn visible<'a>(&self, master: &'a MasterData) -> &'a [E] {
        self.pager.slice(E::collection(master).as_slice())
    }

    /// Rendered rows for the current page
    pub fn rows(&self, master: &MasterData) -> Vec<Vec<String>> {
        self.visible(master)
            .iter()
            .map(|record| record.row(master))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeHttp, fake_client};
    use hc_client::models::{Booth, Constituency, Holiday};
    use serde_json::json;

    fn constituencies() -> serde_json::Value {
        json!([{ "id": 3, "name": "North", "constituencyNumber": 12 }])
    }

    #[tokio::test]
    async fn test_create_when_not_editing() {
        let api = fake_client(FakeHttp::default().with_list("Constituency", constituencies()));
        let mut master = MasterData::default();
        let mut tab = CrudTab::<Booth>::default();

        tab.set("name", "Booth A").unwrap();
        tab.set("constituencyId", "3").unwrap();
        let outcome = tab.save(&api, &mut master).await.unwrap();

        assert_eq!(outcome, SaveOutcome::Created(99));
        let calls = api.http().calls();
        assert_eq!(calls[0].method, "POST");
        assert_eq!(calls[0].path, "Booth");
        assert_eq!(calls[0].body["constituencyId"], 3);
        assert!(calls[0].body.get("id").is_none());

        // reload fetched the booth list and its constituencies
        assert!(calls.iter().any(|c| c.method == "GET" && c.path == "Constituency"));
        assert_eq!(tab.mode(), Mode::Creating);
        assert_eq!(master.constituencies.len(), 1);
    }

    #[tokio::test]
    async fn test_update_when_editing() {
        let api = fake_client(FakeHttp::default().with_list("Constituency", constituencies()));
        let mut master = MasterData::default();
        master.load_all(&api).await.unwrap();

        let mut tab = CrudTab::<Constituency>::default();
        tab.edit(3, &master).unwrap();
        assert_eq!(tab.mode(), Mode::Editing(3));
        assert_eq!(tab.draft().name, "North");

        tab.set("name", "North East").unwrap();
        let outcome = tab.save(&api, &mut master).await.unwrap();
        assert_eq!(outcome, SaveOutcome::Updated(3));

        let put = api
            .http()
            .calls()
            .into_iter()
            .find(|c| c.method == "PUT")
            .unwrap();
        assert_eq!(put.path, "Constituency/3");
        assert_eq!(put.body["id"], 3);
        assert_eq!(put.body["name"], "North East");
        assert_eq!(tab.mode(), Mode::Creating);
    }

    #[tokio::test]
    async fn test_invalid_draft_never_reaches_backend() {
        let api = fake_client(FakeHttp::default());
        let mut master = MasterData::default();
        let mut tab = CrudTab::<Holiday>::default();

        let err = tab.save(&api, &mut master).await.unwrap_err();
        assert_eq!(err.to_string(), "Date is required");
        assert!(api.http().calls().is_empty());
    }

    #[tokio::test]
    async fn test_backend_failure_keeps_draft() {
        let api = fake_client(FakeHttp::default().failing("Booth"));
        let mut master = MasterData::default();
        let mut tab = CrudTab::<Booth>::default();
        tab.set("name", "Booth A").unwrap();
        tab.set("constituencyId", "3").unwrap();

        let err = tab.save(&api, &mut master).await.unwrap_err();
        assert_eq!(err.alert(), "Failed to save Booth");
        assert!(!err.is_local());
        assert_eq!(tab.draft().name, "Booth A");
    }

    #[tokio::test]
    async fn test_delete_failure_alert() {
        let api = fake_client(FakeHttp::default().failing("Constituency/3"));
        let mut master = MasterData::default();
        let mut tab = CrudTab::<Constituency>::default();

        let err = tab.delete(3, &api, &mut master).await.unwrap_err();
        assert_eq!(err.alert(), "Delete failed");
    }

    #[tokio::test]
    async fn test_deleting_edited_record_resets_form() {
        let api = fake_client(FakeHttp::default().with_list("Constituency", constituencies()));
        let mut master = MasterData::default();
        master.load_all(&api).await.unwrap();

        let mut tab = CrudTab::<Constituency>::default();
        tab.edit(3, &master).unwrap();
        tab.delete(3, &api, &mut master).await.unwrap();
        assert_eq!(tab.mode(), Mode::Creating);
    }

    #[test]
    fn test_edit_unknown_record() {
        let mut tab = CrudTab::<Booth>::default();
        let err = tab.edit(42, &MasterData::default()).unwrap_err();
        assert!(matches!(err, ConsoleError::UnknownRecord { id: 42, .. }));
    }

    #[test]
    fn test_cancel_returns_to_creating() {
        let mut master = MasterData::default();
        master.constituencies.replace(vec![Constituency {
            id: 1,
            name: "South".into(),
            constituency_number: Some(4),
        }]);
        let mut tab = CrudTab::<Constituency>::default();
        tab.edit(1, &master).unwrap();
        tab.cancel();
        assert_eq!(tab.mode(), Mode::Creating);
        assert!(tab.draft().name.is_empty());
    }
}
