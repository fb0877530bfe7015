//! Sidebar Component
//!
//! Brand, section navigation and backend settings.

use leptos::*;
use perfume_lab::client::Backend;
use perfume_lab::section::{Collection, Section};

use crate::api::GlooBackend;
use crate::state::use_app_state;

/// Navigation sidebar
#[component]
pub fn Sidebar() -> impl IntoView {
    let (settings_open, set_settings_open) = create_signal(false);

    view! {
        <aside class="min-h-screen w-64 bg-white/60 backdrop-blur-md border-r border-white/40 shadow-sm flex flex-col">
            // Brand
            <div class="px-6 py-5 border-b border-white/40">
                <div class="flex items-center gap-3">
                    <div class="h-9 w-9 rounded-xl bg-gradient-to-br from-violet-500 to-indigo-500" />
                    <div>
                        <p class="text-sm font-semibold text-gray-800">"Perfume Lab"</p>
                        <p class="text-xs text-gray-500">"Craft with precision"</p>
                    </div>
                </div>
            </div>

            // Section links
            <nav class="p-3 space-y-1">
                {Section::ALL
                    .into_iter()
                    .map(|section| view! { <NavItem section=section /> })
                    .collect_view()}
            </nav>

            // Settings
            <div class="mt-auto p-3">
                <button
                    on:click=move |_| set_settings_open.update(|open| *open = !*open)
                    class="w-full flex items-center gap-2 px-3 py-2 text-xs text-gray-600 hover:text-gray-900 transition-colors"
                >
                    "⚙ Settings"
                </button>
                {move || settings_open.get().then(|| view! { <BackendSettings /> })}
            </div>
        </aside>
    }
}

/// One navigation entry
#[component]
fn NavItem(section: Section) -> impl IntoView {
    let state = use_app_state();
    let active = create_memo(move |_| state.shell.with(|shell| shell.is_active(section)));

    view! {
        <button
            on:click=move |_| state.shell.update(|shell| {
                shell.navigate(section);
            })
            class=move || {
                let base = "w-full flex items-center gap-3 px-3 py-2 rounded-lg text-sm transition-colors";
                if active.get() {
                    format!("{} bg-violet-100 text-violet-900", base)
                } else {
                    format!("{} hover:bg-gray-100 text-gray-700", base)
                }
            }
        >
            <span class="w-4 text-center">{section.icon()}</span>
            <span>{section.label()}</span>
        </button>
    }
}

/// Backend URL editor with a connection test
#[component]
fn BackendSettings() -> impl IntoView {
    let state = use_app_state();

    let (api_url, set_api_url) = create_signal(state.api_base.get_untracked());
    let (testing, set_testing) = create_signal(false);
    let (test_result, set_test_result) = create_signal(None::<bool>);

    let test_connection = move |_| {
        set_testing.set(true);
        set_test_result.set(None);

        let backend = GlooBackend::new(&api_url.get_untracked());
        spawn_local(async move {
            match backend.get(Collection::Ingredient.endpoint()).await {
                Ok(_) => {
                    set_test_result.try_set(Some(true));
                    state.show_success("Connection successful!");
                }
                Err(e) => {
                    set_test_result.try_set(Some(false));
                    state.show_error(&format!("Connection failed: {}", e));
                }
            }
            set_testing.try_set(false);
        });
    };

    let save_url = move |_| {
        state.set_api_base(&api_url.get_untracked());
        set_api_url.set(state.api_base.get_untracked());
        state.show_success("Backend URL saved");
    };

    view! {
        <div class="mt-2 space-y-2 rounded-lg bg-white/70 p-3">
            <label class="block text-xs text-gray-500">"Backend URL"</label>
            <input
                type="text"
                prop:value=move || api_url.get()
                on:input=move |ev| set_api_url.set(event_target_value(&ev))
                class="w-full rounded-lg border border-gray-200 px-3 py-2 text-xs focus:outline-none focus:ring-2 focus:ring-indigo-500/40"
            />
            <div class="flex items-center gap-2">
                <button
                    on:click=test_connection
                    disabled=move || testing.get()
                    class="px-3 py-1 text-xs rounded-md bg-gray-100 text-gray-700 disabled:opacity-50"
                >
                    {move || if testing.get() { "Testing..." } else { "Test" }}
                </button>
                <button
                    on:click=save_url
                    class="px-3 py-1 text-xs rounded-md bg-indigo-600 text-white"
                >
                    "Save"
                </button>
                {move || match test_result.get() {
                    Some(true) => view! { <span class="text-xs text-green-600">"✓"</span> }.into_view(),
                    Some(false) => view! { <span class="text-xs text-red-600">"✕"</span> }.into_view(),
                    None => view! {}.into_view(),
                }}
            </div>
        </div>
    }
}
