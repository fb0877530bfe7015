//! Loading Component
//!
//! Spinners for the initial aggregate load and pending submits.

use leptos::*;

/// Full-page loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-20 text-gray-500">
            <div class="loading-spinner w-8 h-8" />
            <span class="mt-3 text-sm">"Loading..."</span>
        </div>
    }
}

/// Inline loading spinner
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" />
    }
}
