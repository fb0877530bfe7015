//! Global Application State
//!
//! One owner for cross-cutting state: the active section, dashboard counts,
//! backend URL and toast messages. Provided once by the app root; views read
//! it through [`use_app_state`].

use leptos::*;
use perfume_lab::state::{DashboardState, Shell};

use crate::api::{self, GlooBackend};

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct AppState {
    /// Active navigation section
    pub shell: RwSignal<Shell>,
    /// Aggregate counts and the coarse initial-load flag
    pub dashboard: RwSignal<DashboardState>,
    /// Backend base URL
    pub api_base: RwSignal<String>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Latest toast ids; a timer clears only its own message
    success_seq: StoredValue<u64>,
    error_seq: StoredValue<u64>,
}

/// Provide global state to the component tree
pub fn provide_app_state() -> AppState {
    let state = AppState {
        shell: create_rw_signal(Shell::new()),
        dashboard: create_rw_signal(DashboardState::new()),
        api_base: create_rw_signal(api::get_api_base()),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
        success_seq: store_value(0),
        error_seq: store_value(0),
    };

    provide_context(state);
    state
}

/// Read the global state
pub fn use_app_state() -> AppState {
    use_context::<AppState>().expect("AppState not found")
}

impl AppState {
    /// Backend client for the current URL
    pub fn backend(&self) -> GlooBackend {
        GlooBackend::new(&self.api_base.get_untracked())
    }

    /// Persist and switch the backend URL
    pub fn set_api_base(&self, url: &str) {
        self.api_base.set(api::set_api_base(url));
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        let id = post_toast(self.success, self.success_seq, message);

        let (slot, seq) = (self.success, self.success_seq);
        gloo_timers::callback::Timeout::new(3000, move || expire_toast(slot, seq, id)).forget();
    }

    /// Log an error to the console and show it (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        web_sys::console::error_1(&message.into());
        let id = post_toast(self.error, self.error_seq, message);

        let (slot, seq) = (self.error, self.error_seq);
        gloo_timers::callback::Timeout::new(5000, move || expire_toast(slot, seq, id)).forget();
    }
}

/// Show `message` in `slot`. Returns the id its timer must present to clear it.
fn post_toast(slot: RwSignal<Option<String>>, seq: StoredValue<u64>, message: &str) -> u64 {
    seq.update_value(|n| *n += 1);
    slot.set(Some(message.to_string()));
    seq.get_value()
}

/// Clear `slot` unless a newer message replaced the one `id` names
fn expire_toast(slot: RwSignal<Option<String>>, seq: StoredValue<u64>, id: u64) {
    if seq.try_with_value(|n| *n == id) == Some(true) {
        slot.try_set(None);
    }
}
