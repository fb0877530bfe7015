//! Record Table Session
//!
//! Drives a [`RecordTableState`] against a [`Backend`]: load on mount,
//! submit then reload. The CLI uses it directly; the browser app runs the
//! same steps through signals.

use thiserror::Error;

use crate::client::Backend;
use crate::error::SubmitError;
use crate::record::Record;
use crate::section::Collection;
use crate::state::table::{LoadOutcome, RecordTableState, TableError};

/// Errors from a session operation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Submit(#[from] SubmitError),
}

/// A record table bound to a backend
pub struct RecordTableSession<B> {
    backend: B,
    state: RecordTableState,
}

impl<B: Backend> RecordTableSession<B> {
    pub fn new(backend: B, collection: Collection) -> Self {
        Self {
            backend,
            state: RecordTableState::new(collection),
        }
    }

    pub fn state(&self) -> &RecordTableState {
        &self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Fetch the collection and replace the rows
    pub async fn reload(&mut self) -> LoadOutcome {
        let ticket = self.state.begin_load();
        let result = self.backend.get(self.state.endpoint()).await;
        self.state.finish_load(ticket, result)
    }

    /// Switch endpoint and reload if it changed
    pub async fn set_collection(&mut self, collection: Collection) -> Option<LoadOutcome> {
        if self.state.set_collection(collection) {
            Some(self.reload().await)
        } else {
            None
        }
    }

    pub fn open_form(&mut self) {
        self.state.open_modal();
    }

    pub fn edit(&mut self, key: &str, raw: &str) -> Result<(), TableError> {
        self.state.edit_field(key, raw)
    }

    pub fn cancel(&mut self) -> Result<(), TableError> {
        self.state.cancel()
    }

    /// Post the draft. On success the form closes and the collection is
    /// reloaded once; on failure the form stays open with the draft.
    ///
    /// The created record comes back with the outcome of that reload. A
    /// `Failed` reload leaves the pre-create rows and sets the error field.
    pub async fn submit(&mut self) -> Result<(Record, LoadOutcome), SessionError> {
        let body = self.state.begin_submit()?;
        let result = self.backend.post(self.state.endpoint(), &body).await;

        let reload_due = self.state.finish_submit(result.clone());
        let created = result?;

        let refresh = if reload_due {
            self.reload().await
        } else {
            LoadOutcome::Stale
        };
        Ok((created, refresh))
    }
}
