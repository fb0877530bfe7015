//! State Management
//!
//! Backend-free state machines for the navigation shell, the record tables
//! and the dashboard, plus an async driver tying a table to a [`Backend`].
//!
//! [`Backend`]: crate::client::Backend

pub mod dashboard;
pub mod session;
pub mod shell;
pub mod table;

pub use dashboard::{load_all, Collections, Counts, DashboardState};
pub use session::RecordTableSession;
pub use shell::Shell;
pub use table::{LoadOutcome, Phase, RecordTableState, TableError};

/// Identifies one load request.
///
/// A result is applied only if its ticket is still the latest one issued
/// and the owning view is still mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub(crate) fn new(generation: u64) -> Self {
        Self(generation)
    }

    pub(crate) fn is_current(self, generation: u64) -> bool {
        self.0 == generation
    }
}
