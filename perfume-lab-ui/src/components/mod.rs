//! UI Components
//!
//! Reusable Leptos components for the app.

pub mod cards;
pub mod data_table;
pub mod hero;
pub mod loading;
pub mod record_table;
pub mod sidebar;
pub mod toast;

pub use cards::{Panel, StatCard};
pub use hero::Hero;
pub use loading::Loading;
pub use record_table::RecordTable;
pub use sidebar::Sidebar;
pub use toast::{ErrorBanner, Toast};
