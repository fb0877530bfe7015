//! Record Table State
//!
//! Loaded / ModalOpen / Submitting machine behind every collection table.
//! The struct holds no backend; callers start an operation, await the
//! backend themselves, then report the result back. That split lets the
//! browser keep the state in a signal and the CLI keep it on the stack.

use thiserror::Error;

use crate::draft::{DraftError, DraftRecord};
use crate::error::{FetchError, SubmitError};
use crate::record::Record;
use crate::section::Collection;
use crate::state::LoadTicket;
use crate::table::TableView;

/// Phase of the record table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Table visible, no form
    Loaded,
    /// Creation form visible, bound to the draft
    ModalOpen,
    /// Draft posted, waiting for the backend
    Submitting,
}

/// What happened to a finished load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    Failed,
    /// Superseded or unmounted; result dropped
    Stale,
}

/// Invalid transition requests
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    #[error("Operation requires the creation form to be open (currently {0:?})")]
    ModalNotOpen(Phase),

    #[error("Unknown field '{0}'")]
    UnknownField(String),

    #[error(transparent)]
    Draft(#[from] DraftError),
}

/// State of one record table
#[derive(Debug, Clone)]
pub struct RecordTableState {
    collection: Collection,
    rows: Vec<Record>,
    phase: Phase,
    draft: DraftRecord,
    error: Option<String>,
    generation: u64,
    mounted: bool,
}

impl RecordTableState {
    pub fn new(collection: Collection) -> Self {
        Self {
            collection,
            rows: Vec::new(),
            phase: Phase::Loaded,
            draft: DraftRecord::new(),
            error: None,
            generation: 0,
            mounted: true,
        }
    }

    pub fn collection(&self) -> Collection {
        self.collection
    }

    pub fn endpoint(&self) -> &'static str {
        self.collection.endpoint()
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn draft(&self) -> &DraftRecord {
        &self.draft
    }

    /// Visible error message, if the last load or submit failed
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn is_modal_open(&self) -> bool {
        matches!(self.phase, Phase::ModalOpen | Phase::Submitting)
    }

    pub fn view(&self) -> TableView {
        TableView::build(self.collection.columns(), &self.rows)
    }

    /// Point the table at another collection.
    ///
    /// Rows from the old endpoint are dropped, pending loads become stale
    /// and the form closes. Returns `true` if the endpoint changed and a
    /// reload is due.
    pub fn set_collection(&mut self, collection: Collection) -> bool {
        if collection == self.collection {
            return false;
        }
        self.collection = collection;
        self.rows.clear();
        self.draft.clear();
        self.phase = Phase::Loaded;
        self.error = None;
        self.generation += 1;
        true
    }

    /// Start a load; the returned ticket supersedes all earlier ones
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        LoadTicket::new(self.generation)
    }

    /// Report a finished load. The collection is replaced wholesale.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Record>, FetchError>,
    ) -> LoadOutcome {
        if !self.mounted || !ticket.is_current(self.generation) {
            tracing::debug!("Dropping stale load of {}", self.endpoint());
            return LoadOutcome::Stale;
        }

        match result {
            Ok(rows) => {
                tracing::debug!("Loaded {} rows from {}", rows.len(), self.endpoint());
                self.rows = rows;
                self.error = None;
                LoadOutcome::Applied
            }
            Err(e) => {
                tracing::error!("{}", e);
                self.error = Some(e.to_string());
                LoadOutcome::Failed
            }
        }
    }

    /// Loaded → ModalOpen with an empty draft
    pub fn open_modal(&mut self) {
        if self.phase == Phase::Loaded {
            self.draft.clear();
            self.phase = Phase::ModalOpen;
        }
    }

    /// Edit one field of the draft
    pub fn edit_field(&mut self, key: &str, raw: &str) -> Result<(), TableError> {
        if self.phase != Phase::ModalOpen {
            return Err(TableError::ModalNotOpen(self.phase));
        }
        let field = self
            .collection
            .field(key)
            .ok_or_else(|| TableError::UnknownField(key.to_string()))?;
        self.draft.edit(field, raw)?;
        Ok(())
    }

    /// ModalOpen → Loaded, discarding the draft. Rows are untouched.
    pub fn cancel(&mut self) -> Result<(), TableError> {
        if self.phase != Phase::ModalOpen {
            return Err(TableError::ModalNotOpen(self.phase));
        }
        self.draft.clear();
        self.phase = Phase::Loaded;
        Ok(())
    }

    /// ModalOpen → Submitting. Returns the body to post.
    pub fn begin_submit(&mut self) -> Result<Record, TableError> {
        if self.phase != Phase::ModalOpen {
            return Err(TableError::ModalNotOpen(self.phase));
        }
        self.phase = Phase::Submitting;
        Ok(self.draft.to_body(self.collection.create_fields()))
    }

    /// Report the POST result.
    ///
    /// Success clears the draft, closes the form and returns `true`: the
    /// caller must reload. Failure reopens the form with the draft intact.
    pub fn finish_submit(&mut self, result: Result<Record, SubmitError>) -> bool {
        if self.phase != Phase::Submitting {
            return false;
        }

        match result {
            Ok(_) => {
                self.draft.clear();
                self.phase = Phase::Loaded;
                self.error = None;
                true
            }
            Err(e) => {
                tracing::error!("{}", e);
                self.error = Some(e.to_string());
                self.phase = Phase::ModalOpen;
                false
            }
        }
    }

    /// The owning view went away; every pending load is now stale
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.generation += 1;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{record, records};
    use serde_json::json;

    fn loaded(collection: Collection, rows: serde_json::Value) -> RecordTableState {
        let mut state = RecordTableState::new(collection);
        let ticket = state.begin_load();
        assert_eq!(state.finish_load(ticket, Ok(records(rows))), LoadOutcome::Applied);
        state
    }

    #[test]
    fn test_load_replaces_rows() {
        let mut state = loaded(Collection::Batch, json!([{"code": "A"}, {"code": "B"}]));
        assert_eq!(state.rows().len(), 2);

        let ticket = state.begin_load();
        state.finish_load(ticket, Ok(records(json!([{"code": "C"}]))));
        assert_eq!(state.rows(), &records(json!([{"code": "C"}]))[..]);
    }

    #[test]
    fn test_stale_load_is_discarded() {
        let mut state = RecordTableState::new(Collection::Solvent);
        let first = state.begin_load();
        let second = state.begin_load();

        assert_eq!(
            state.finish_load(second, Ok(records(json!([{"name": "new"}])))),
            LoadOutcome::Applied
        );
        assert_eq!(
            state.finish_load(first, Ok(records(json!([{"name": "old"}])))),
            LoadOutcome::Stale
        );
        assert_eq!(state.rows()[0].get("name"), Some(&json!("new")));
    }

    #[test]
    fn test_unmount_discards_pending_load() {
        let mut state = RecordTableState::new(Collection::Formula);
        let ticket = state.begin_load();
        state.unmount();
        assert_eq!(state.finish_load(ticket, Ok(records(json!([{}])))), LoadOutcome::Stale);
        assert!(state.rows().is_empty());
        assert!(!state.is_mounted());
    }

    #[test]
    fn test_failed_load_keeps_rows_and_sets_error() {
        let mut state = loaded(Collection::Ingredient, json!([{"name": "Bergamot"}]));
        let ticket = state.begin_load();
        let outcome = state.finish_load(
            ticket,
            Err(FetchError::Status {
                path: "/api/ingredient".to_string(),
                status: 502,
            }),
        );
        assert_eq!(outcome, LoadOutcome::Failed);
        assert_eq!(state.rows().len(), 1);
        assert!(state.error().unwrap().contains("502"));

        state.dismiss_error();
        assert!(state.error().is_none());
    }

    #[test]
    fn test_open_modal_resets_draft() {
        let mut state = RecordTableState::new(Collection::Formula);
        state.open_modal();
        state.edit_field("name", "Chypre").unwrap();
        state.cancel().unwrap();

        state.open_modal();
        assert_eq!(state.phase(), Phase::ModalOpen);
        assert!(state.draft().is_empty());
    }

    #[test]
    fn test_edit_requires_open_modal() {
        let mut state = RecordTableState::new(Collection::Formula);
        assert_eq!(
            state.edit_field("name", "x"),
            Err(TableError::ModalNotOpen(Phase::Loaded))
        );

        state.open_modal();
        assert_eq!(
            state.edit_field("colour", "x"),
            Err(TableError::UnknownField("colour".to_string()))
        );
    }

    #[test]
    fn test_cancel_leaves_rows_unchanged() {
        let mut state = loaded(Collection::Batch, json!([{"code": "B-1"}]));
        let before = state.rows().to_vec();

        state.open_modal();
        state.edit_field("code", "B-2").unwrap();
        state.cancel().unwrap();

        assert_eq!(state.phase(), Phase::Loaded);
        assert_eq!(state.rows(), &before[..]);
        assert!(state.draft().is_empty());
    }

    #[test]
    fn test_submit_success_closes_modal() {
        let mut state = RecordTableState::new(Collection::Solvent);
        state.open_modal();
        state.edit_field("name", "Ethanol").unwrap();
        state.edit_field("purity_percent", "96").unwrap();

        let body = state.begin_submit().unwrap();
        assert_eq!(state.phase(), Phase::Submitting);
        assert_eq!(body.get("purity_percent"), Some(&json!(96)));
        assert!(state.is_modal_open());

        assert!(state.finish_submit(Ok(body)));
        assert_eq!(state.phase(), Phase::Loaded);
        assert!(state.draft().is_empty());
    }

    #[test]
    fn test_submit_failure_keeps_draft() {
        let mut state = RecordTableState::new(Collection::Solvent);
        state.open_modal();
        state.edit_field("name", "Ethanol").unwrap();
        state.begin_submit().unwrap();

        let reload = state.finish_submit(Err(SubmitError::Network {
            path: "/api/solvent".to_string(),
            message: "connection refused".to_string(),
        }));

        assert!(!reload);
        assert_eq!(state.phase(), Phase::ModalOpen);
        assert_eq!(state.draft().get("name"), Some(&json!("Ethanol")));
        assert!(state.error().unwrap().contains("connection refused"));
    }

    #[test]
    fn test_set_collection() {
        let mut state = loaded(Collection::Ingredient, json!([{"name": "Bergamot"}]));
        let pending = state.begin_load();

        assert!(!state.set_collection(Collection::Ingredient));
        assert!(state.set_collection(Collection::Solvent));
        assert_eq!(state.endpoint(), "/api/solvent");
        assert!(state.rows().is_empty());
        assert_eq!(
            state.finish_load(pending, Ok(vec![record(json!({"name": "x"}))])),
            LoadOutcome::Stale
        );
    }
}
