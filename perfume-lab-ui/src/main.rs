//! Perfume Lab
//!
//! Browser app for a perfume-compounding inventory, built with Leptos (WASM).
//!
//! # Features
//!
//! - Dashboard with a count per collection
//! - Ingredient, formula, batch and solvent tables
//! - Creation forms posting straight to the backend
//! - Configurable backend URL
//!
//! # Architecture
//!
//! Client-side rendered Leptos app. Table, form and navigation state live in
//! the `perfume-lab` crate; this crate binds them to signals and talks to the
//! backend through the browser's fetch.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
