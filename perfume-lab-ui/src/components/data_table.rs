//! Data Table Component
//!
//! Renders a [`TableView`]: one header per column, one row per record.

use leptos::*;
use perfume_lab::section::Collection;
use perfume_lab::table::TableView;

/// Plain table over pre-rendered cells
#[component]
pub fn DataTable(view: TableView) -> impl IntoView {
    let TableView { headers, rows } = view;

    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full text-sm">
                <thead>
                    <tr class="text-left text-gray-500 border-b border-gray-200">
                        {headers
                            .into_iter()
                            .map(|h| view! { <th class="px-4 py-2 font-medium">{h}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    // Rows are keyed by position; records carry no stable id
                    {rows
                        .into_iter()
                        .map(|cells| view! {
                            <tr class="border-b border-gray-100 hover:bg-white/60">
                                {cells
                                    .into_iter()
                                    .map(|cell| view! { <td class="px-4 py-2 text-gray-800">{cell}</td> })
                                    .collect_view()}
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

/// Shown instead of an empty table
#[component]
pub fn EmptyState(
    collection: Collection,
    #[prop(into)]
    on_create: Callback<()>,
) -> impl IntoView {
    let (title, subtitle) = collection.empty_state();

    view! {
        <div class="flex flex-col items-center justify-center py-16 text-center">
            <p class="text-base font-medium text-gray-800">{title}</p>
            <p class="text-sm text-gray-500 mt-1">{subtitle}</p>
            <button
                on:click=move |_| on_create.call(())
                class="mt-4 px-4 py-2 text-sm rounded-lg bg-indigo-600 text-white hover:bg-indigo-700"
            >
                "Create new"
            </button>
        </div>
    }
}
