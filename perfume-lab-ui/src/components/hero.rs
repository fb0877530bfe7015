//! Hero Banner

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="relative h-56 rounded-2xl overflow-hidden bg-gradient-to-br from-violet-100 via-purple-50 to-indigo-100 border border-white/40">
            <div class="relative z-10 h-full flex items-end">
                <div class="p-6">
                    <h1 class="text-2xl md:text-3xl font-semibold text-gray-900">
                        "The Fragrance of Creativity"
                    </h1>
                    <p class="text-sm text-gray-600 mt-1">
                        "Manage ingredients, craft formulas, and track batches in one serene workspace."
                    </p>
                </div>
            </div>
        </div>
    }
}
