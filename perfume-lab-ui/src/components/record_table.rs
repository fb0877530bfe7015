//! Record Table Component
//!
//! A collection table with a creation modal. Loads on mount and whenever
//! the collection or backend URL changes; reloads after every successful
//! create.

use leptos::*;
use perfume_lab::client::Backend;
use perfume_lab::section::{Collection, FieldSpec};
use perfume_lab::state::{LoadOutcome, Phase, RecordTableState};

use crate::components::data_table::{DataTable, EmptyState};
use crate::components::loading::InlineLoading;
use crate::components::toast::ErrorBanner;
use crate::state::{use_app_state, AppState};

/// Table for one collection
#[component]
pub fn RecordTable(
    /// Collection to show
    #[prop(into)]
    collection: MaybeSignal<Collection>,
) -> impl IntoView {
    let state = use_app_state();
    let table = create_rw_signal(RecordTableState::new(collection.get_untracked()));

    watch_source(collection, state.api_base, table, move || reload(state, table));

    on_cleanup(move || {
        table.try_update(|t| t.unmount());
    });

    // Memos keep draft edits from re-rendering the table
    let view = create_memo(move |_| table.with(|t| t.view()));
    let modal_open = create_memo(move |_| table.with(|t| t.is_modal_open()));
    let error = create_memo(move |_| table.with(|t| t.error().map(str::to_string)));
    let title = create_memo(move |_| table.with(|t| t.collection().title()));

    let open_modal = Callback::new(move |_| table.update(|t| t.open_modal()));

    view! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <h2 class="text-lg font-semibold text-gray-900">{move || title.get()}</h2>
                <button
                    on:click=move |_| open_modal.call(())
                    disabled=move || modal_open.get()
                    class="px-4 py-2 text-sm rounded-lg bg-indigo-600 text-white hover:bg-indigo-700 disabled:opacity-50"
                >
                    "+ Add"
                </button>
            </div>

            {move || error.get().map(|message| view! {
                <ErrorBanner
                    message=message
                    on_dismiss=move |_| table.update(|t| t.dismiss_error())
                />
            })}

            <div class="rounded-xl bg-white/70 backdrop-blur border border-white/40 shadow-sm">
                {move || {
                    let view = view.get();
                    if view.is_empty() {
                        let collection = table.with_untracked(|t| t.collection());
                        view! { <EmptyState collection=collection on_create=open_modal /> }.into_view()
                    } else {
                        view! { <DataTable view=view /> }.into_view()
                    }
                }}
            </div>

            {move || modal_open.get().then(|| view! { <CreateModal table=table /> })}
        </div>
    }
}

/// Load on mount, on endpoint change and on backend change
fn watch_source(
    collection: MaybeSignal<Collection>,
    api_base: RwSignal<String>,
    table: RwSignal<RecordTableState>,
    load: impl Fn() + 'static,
) {
    create_effect(move |_| {
        let collection = collection.get();
        api_base.track();
        table.update(|t| {
            t.set_collection(collection);
        });
        load();
    });
}

/// Fetch the table's collection and apply the result if still current
fn reload(state: AppState, table: RwSignal<RecordTableState>) {
    let Some(ticket) = table.try_update(|t| t.begin_load()) else {
        return;
    };
    let endpoint = table.with_untracked(|t| t.endpoint());
    let backend = state.backend();

    spawn_local(async move {
        let result = backend.get(endpoint).await;
        let outcome = table.try_update(|t| t.finish_load(ticket, result));

        if outcome == Some(LoadOutcome::Failed) {
            if let Some(message) = table.with_untracked(|t| t.error().map(str::to_string)) {
                state.show_error(&message);
            }
        }
    });
}

/// Creation form over the table's draft
#[component]
fn CreateModal(table: RwSignal<RecordTableState>) -> impl IntoView {
    let state = use_app_state();
    let collection = table.with_untracked(|t| t.collection());
    let submitting = create_memo(move |_| table.with(|t| t.phase() == Phase::Submitting));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let body = match table.try_update(|t| t.begin_submit()) {
            Some(Ok(body)) => body,
            Some(Err(e)) => {
                web_sys::console::warn_1(&e.to_string().into());
                return;
            }
            None => return,
        };
        let backend = state.backend();

        spawn_local(async move {
            let result = backend.post(collection.endpoint(), &body).await;
            let failure = result.as_ref().err().map(|e| e.to_string());

            match table.try_update(|t| t.finish_submit(result)) {
                Some(true) => {
                    state.show_success(&format!("{} created", collection.singular()));
                    reload(state, table);
                }
                Some(false) => {
                    if let Some(message) = failure {
                        state.show_error(&message);
                    }
                }
                None => {}
            }
        });
    };

    let on_cancel = move |_| {
        table.update(|t| {
            let _ = t.cancel();
        });
    };

    view! {
        <div class="fixed inset-0 z-40 flex items-center justify-center bg-black/30">
            <form
                on:submit=on_submit
                class="w-full max-w-md space-y-4 rounded-xl bg-white p-6 shadow-xl"
            >
                <h3 class="text-base font-semibold text-gray-900">
                    {format!("New {}", collection.singular())}
                </h3>

                {collection
                    .create_fields()
                    .iter()
                    .map(|field| view! { <FieldInput table=table field=field /> })
                    .collect_view()}

                <div class="flex justify-end gap-2 pt-2">
                    <button
                        type="button"
                        on:click=on_cancel
                        disabled=move || submitting.get()
                        class="px-4 py-2 text-sm rounded-lg bg-gray-100 text-gray-700 disabled:opacity-50"
                    >
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="flex items-center gap-2 px-4 py-2 text-sm rounded-lg bg-indigo-600 text-white disabled:opacity-50"
                    >
                        {move || submitting.get().then(|| view! { <InlineLoading /> })}
                        "Save"
                    </button>
                </div>
            </form>
        </div>
    }
}

/// One labelled input bound to a draft key
#[component]
fn FieldInput(table: RwSignal<RecordTableState>, field: &'static FieldSpec) -> impl IntoView {
    let key = field.key;
    // Seeded once; the input owns its text while the form is open
    let initial = table.with_untracked(|t| t.draft().input_value(key));

    view! {
        <label class="block">
            <span class="block text-xs text-gray-500 mb-1">{field.label}</span>
            <input
                type=field.kind.input_type()
                placeholder=field.placeholder
                prop:value=initial
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    let result = table.try_update(|t| t.edit_field(key, &raw));
                    if let Some(Err(e)) = result {
                        web_sys::console::warn_1(&e.to_string().into());
                    }
                }
                class="w-full rounded-lg border border-gray-200 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-indigo-500/40"
            />
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_reloads_on_collection_and_backend_change() {
        let runtime = create_runtime();
        let collection = create_rw_signal(Collection::Ingredient);
        let api_base = create_rw_signal("http://localhost:8000".to_string());
        let table = create_rw_signal(RecordTableState::new(Collection::Ingredient));

        let loads = Rc::new(Cell::new(0));
        let counter = Rc::clone(&loads);
        watch_source(MaybeSignal::Dynamic(collection.into()), api_base, table, move || {
            counter.set(counter.get() + 1)
        });
        assert_eq!(loads.get(), 1);

        collection.set(Collection::Solvent);
        assert_eq!(loads.get(), 2);
        assert_eq!(table.with_untracked(|t| t.endpoint()), "/api/solvent");

        api_base.set("http://lab.local:9000".to_string());
        assert_eq!(loads.get(), 3);
        assert_eq!(table.with_untracked(|t| t.endpoint()), "/api/solvent");

        runtime.dispose();
    }
}
