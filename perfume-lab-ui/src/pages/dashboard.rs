//! Dashboard Page
//!
//! Hero banner, one stat card per collection and shortcuts to each section.

use leptos::*;
use perfume_lab::section::{Collection, Section};

use crate::components::{ErrorBanner, Hero, Panel, StatCard};
use crate::state::use_app_state;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_app_state();
    let counts = create_memo(move |_| state.dashboard.with(|d| d.counts()));
    let error = create_memo(move |_| state.dashboard.with(|d| d.error().map(str::to_string)));

    view! {
        <div class="space-y-6">
            <Hero />

            {move || error.get().map(|message| view! {
                <ErrorBanner
                    message=message
                    on_dismiss=move |_| state.dashboard.update(|d| d.dismiss_error())
                />
            })}

            // Counts
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                {Collection::ALL
                    .into_iter()
                    .map(|collection| view! {
                        <StatCard
                            title=collection.title()
                            value=Signal::derive(move || counts.get().get(collection))
                        />
                    })
                    .collect_view()}
            </div>

            // Shortcuts
            <Panel extra_class="p-6">
                <h2 class="text-base font-semibold text-gray-900 mb-4">"Overview"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-3">
                    {Section::ALL
                        .into_iter()
                        .filter_map(|section| section.collection().map(|c| (section, c)))
                        .map(|(section, collection)| view! {
                            <button
                                on:click=move |_| state.shell.update(|shell| {
                                    shell.navigate(section);
                                })
                                class="flex items-center justify-between rounded-lg bg-white/60 px-4 py-3 text-sm text-gray-700 hover:bg-white"
                            >
                                <span>{section.icon()} " " {section.label()}</span>
                                <span class="text-gray-500">
                                    {move || format!("{} {}", counts.get().get(collection), collection.title().to_lowercase())}
                                </span>
                            </button>
                        })
                        .collect_view()}
                </div>
            </Panel>
        </div>
    }
}
