//! Toast Notification Component
//!
//! Shows success and error messages.

use leptos::*;

use crate::state::use_app_state;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_app_state();

    view! {
        <div class="fixed bottom-6 right-6 z-50 space-y-2">
            // Success toast
            {move || {
                state.success.get().map(|msg| view! {
                    <ToastMessage message=msg variant=ToastVariant::Success />
                })
            }}

            // Error toast
            {move || {
                state.error.get().map(|msg| view! {
                    <ToastMessage message=msg variant=ToastVariant::Error />
                })
            }}
        </div>
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum ToastVariant {
    Success,
    Error,
}

impl ToastVariant {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            ToastVariant::Success => ("✓", "bg-violet-600"),
            ToastVariant::Error => ("✕", "bg-red-600"),
        }
    }
}

#[component]
fn ToastMessage(
    #[prop(into)]
    message: String,
    variant: ToastVariant,
) -> impl IntoView {
    let (icon, bg_class) = variant.style();

    view! {
        <div class=format!(
            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
             transform transition-all duration-300 ease-out animate-slide-in",
            bg_class
        )>
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{message}</span>
        </div>
    }
}

/// Inline error banner with a dismiss button
#[component]
pub fn ErrorBanner(
    #[prop(into)]
    message: String,
    #[prop(into)]
    on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="mb-4 flex items-start justify-between gap-3 rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700">
            <span>{message}</span>
            <button
                type="button"
                on:click=move |_| on_dismiss.call(())
                class="text-red-500 hover:text-red-700"
            >
                "✕"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_styles_differ() {
        assert_ne!(ToastVariant::Success.style(), ToastVariant::Error.style());
        assert_eq!(ToastVariant::Error.style().0, "✕");
    }
}
