//! Dashboard Aggregation
//!
//! Loads all four collections in parallel and derives their counts. The
//! load is all-or-nothing: one failed GET leaves every count as it was.

use futures_util::future::try_join4;

use crate::client::Backend;
use crate::error::FetchError;
use crate::record::Record;
use crate::section::Collection;
use crate::state::LoadTicket;

/// All four collections from one aggregate load
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collections {
    pub ingredients: Vec<Record>,
    pub solvents: Vec<Record>,
    pub formulas: Vec<Record>,
    pub batches: Vec<Record>,
}

/// Record counts shown on the stat cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub ingredients: usize,
    pub solvents: usize,
    pub formulas: usize,
    pub batches: usize,
}

impl Counts {
    pub fn of(collections: &Collections) -> Self {
        Self {
            ingredients: collections.ingredients.len(),
            solvents: collections.solvents.len(),
            formulas: collections.formulas.len(),
            batches: collections.batches.len(),
        }
    }

    pub fn get(&self, collection: Collection) -> usize {
        match collection {
            Collection::Ingredient => self.ingredients,
            Collection::Solvent => self.solvents,
            Collection::Formula => self.formulas,
            Collection::Batch => self.batches,
        }
    }

    /// (title, count) pairs in dashboard order
    pub fn cards(&self) -> Vec<(&'static str, usize)> {
        Collection::ALL
            .iter()
            .map(|c| (c.title(), self.get(*c)))
            .collect()
    }
}

/// Issue the four GETs concurrently; fail as a whole if any fails
pub async fn load_all<B: Backend + ?Sized>(backend: &B) -> Result<Collections, FetchError> {
    let (ingredients, solvents, formulas, batches) = try_join4(
        backend.get(Collection::Ingredient.endpoint()),
        backend.get(Collection::Solvent.endpoint()),
        backend.get(Collection::Formula.endpoint()),
        backend.get(Collection::Batch.endpoint()),
    )
    .await?;

    Ok(Collections {
        ingredients,
        solvents,
        formulas,
        batches,
    })
}

/// Dashboard view state
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    counts: Counts,
    loading: bool,
    loaded_once: bool,
    error: Option<String>,
    generation: u64,
    mounted: bool,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            mounted: true,
            ..Self::default()
        }
    }

    pub fn counts(&self) -> Counts {
        self.counts
    }

    /// Coarse flag covering the aggregate load
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Start the initial aggregate load.
    ///
    /// Returns `None` once a load has been issued: the dashboard loads on
    /// first mount only.
    pub fn begin_initial_load(&mut self) -> Option<LoadTicket> {
        if self.loaded_once {
            return None;
        }
        self.loaded_once = true;
        Some(self.begin_load())
    }

    /// Start an aggregate load, superseding any in flight
    pub fn begin_load(&mut self) -> LoadTicket {
        self.loading = true;
        self.generation += 1;
        LoadTicket::new(self.generation)
    }

    /// Apply the aggregate result. Returns `true` if the counts were updated.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Collections, FetchError>,
    ) -> bool {
        if !self.mounted || !ticket.is_current(self.generation) {
            return false;
        }
        self.loading = false;

        match result {
            Ok(collections) => {
                self.counts = Counts::of(&collections);
                self.error = None;
                true
            }
            Err(e) => {
                tracing::error!("Dashboard load failed: {}", e);
                self.error = Some(e.to_string());
                false
            }
        }
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
        self.loading = false;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{records, Call, MockBackend};
    use serde_json::json;

    fn backend() -> MockBackend {
        MockBackend::new()
            .with("/api/ingredient", records(json!([{"name": "Bergamot"}, {"name": "Iso E Super"}])))
            .with("/api/solvent", records(json!([{"name": "Ethanol"}])))
            .with("/api/formula", records(json!([])))
            .with("/api/batch", records(json!([{"code": "B-1"}, {"code": "B-2"}, {"code": "B-3"}])))
    }

    #[tokio::test]
    async fn test_load_all_counts() {
        let backend = backend();
        let mut state = DashboardState::new();

        let ticket = state.begin_initial_load().unwrap();
        assert!(state.is_loading());

        let result = load_all(&backend).await;
        assert!(state.finish_load(ticket, result));
        assert!(!state.is_loading());
        assert_eq!(
            state.counts(),
            Counts {
                ingredients: 2,
                solvents: 1,
                formulas: 0,
                batches: 3
            }
        );

        let gets: Vec<_> = backend
            .calls()
            .into_iter()
            .filter(|c| matches!(c, Call::Get(_)))
            .collect();
        assert_eq!(gets.len(), 4);
    }

    #[tokio::test]
    async fn test_any_failure_leaves_counts_unchanged() {
        let backend = backend();
        let mut state = DashboardState::new();
        let ticket = state.begin_initial_load().unwrap();
        state.finish_load(ticket, load_all(&backend).await);
        let before = state.counts();

        backend.fail_get("/api/formula");
        let ticket = state.begin_load();
        let result = load_all(&backend).await;
        assert!(result.is_err());
        assert!(!state.finish_load(ticket, result));
        assert_eq!(state.counts(), before);
        assert!(!state.is_loading());
        assert!(state.error().unwrap().contains("/api/formula"));
    }

    #[test]
    fn test_initial_load_only_once() {
        let mut state = DashboardState::new();
        assert!(state.begin_initial_load().is_some());
        assert!(state.begin_initial_load().is_none());
    }

    #[tokio::test]
    async fn test_unmounted_result_dropped() {
        let backend = backend();
        let mut state = DashboardState::new();
        let ticket = state.begin_initial_load().unwrap();
        state.unmount();
        assert!(!state.finish_load(ticket, load_all(&backend).await));
        assert_eq!(state.counts(), Counts::default());
    }

    #[test]
    fn test_cards_order() {
        let counts = Counts {
            ingredients: 4,
            solvents: 1,
            formulas: 2,
            batches: 3,
        };
        assert_eq!(
            counts.cards(),
            vec![("Ingredients", 4), ("Formulas", 2), ("Batches", 3), ("Solvents", 1)]
        );
    }
}
