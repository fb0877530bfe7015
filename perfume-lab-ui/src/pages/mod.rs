//! Pages
//!
//! One page per navigation section.

pub mod collection;
pub mod dashboard;

pub use collection::CollectionPage;
pub use dashboard::Dashboard;
