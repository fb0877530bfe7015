//! Card Components
//!
//! Stat cards for counts and the translucent panel every view sits in.

use leptos::*;

/// Single count with a title
#[component]
pub fn StatCard(
    /// Card title
    title: &'static str,
    /// Value to display
    #[prop(into)]
    value: Signal<usize>,
) -> impl IntoView {
    view! {
        <div class="p-5 rounded-xl bg-white/70 backdrop-blur border border-white/40 shadow-sm">
            <p class="text-xs uppercase tracking-wide text-gray-500">{title}</p>
            <p class="text-2xl font-semibold text-gray-900 mt-1">{move || value.get()}</p>
        </div>
    }
}

/// Container panel
#[component]
pub fn Panel(
    /// Extra classes, e.g. padding
    #[prop(optional)]
    extra_class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!(
            "rounded-xl bg-white/70 backdrop-blur border border-white/40 shadow-sm {}",
            extra_class
        )>
            {children()}
        </div>
    }
}
