//! App Root Component
//!
//! Provides global state, runs the initial aggregate load and switches the
//! main area on the active section.

use leptos::*;
use perfume_lab::section::Section;
use perfume_lab::state::load_all;

use crate::components::{Loading, Sidebar, Toast};
use crate::pages::{CollectionPage, Dashboard};
use crate::state::{provide_app_state, AppState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_app_state();
    load_dashboard(state);

    on_cleanup(move || {
        state.dashboard.try_update(|d| d.unmount());
    });

    let loading = create_memo(move |_| state.dashboard.with(|d| d.is_loading()));
    let active = create_memo(move |_| state.shell.with(|s| s.active()));

    view! {
        <div class="min-h-screen flex bg-gradient-to-br from-rose-50 via-violet-50 to-indigo-50 text-gray-900">
            <Sidebar />

            <main class="flex-1 p-6 md:p-10 overflow-y-auto">
                {move || {
                    if loading.get() {
                        return view! { <Loading /> }.into_view();
                    }
                    match active.get() {
                        Section::Dashboard => view! { <Dashboard /> }.into_view(),
                        section => match section.collection() {
                            Some(collection) => view! { <CollectionPage collection=collection /> }.into_view(),
                            None => view! {}.into_view(),
                        },
                    }
                }}
            </main>

            <Toast />
        </div>
    }
}

/// Fetch all four collections once for the dashboard counts
fn load_dashboard(state: AppState) {
    let Some(ticket) = state.dashboard.try_update(|d| d.begin_initial_load()).flatten() else {
        return;
    };
    let backend = state.backend();

    spawn_local(async move {
        let result = load_all(&backend).await;
        let failure = result.as_ref().err().map(|e| e.to_string());

        if state.dashboard.try_update(|d| d.finish_load(ticket, result)) == Some(false) {
            if let Some(message) = failure {
                state.show_error(&message);
            }
        }
    });
}
