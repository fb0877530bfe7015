//! Collection Page
//!
//! Ingredients, Formulas, Batches and Solvents all share this page.

use leptos::*;
use perfume_lab::section::Collection;

use crate::components::{Panel, RecordTable};

#[component]
pub fn CollectionPage(#[prop(into)] collection: MaybeSignal<Collection>) -> impl IntoView {
    view! {
        <Panel extra_class="p-6">
            <RecordTable collection=collection />
        </Panel>
    }
}
