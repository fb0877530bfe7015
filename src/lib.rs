//! # Perfume Lab
//!
//! Inventory management for perfume compounding: ingredients, solvents,
//! formulas and batches kept by a REST backend.
//!
//! This crate holds everything below the pixels, shared by the Leptos
//! browser app (`perfume-lab-ui`) and the `perfume-lab` CLI.
//!
//! ## Modules
//!
//! - [`section`]: collections, endpoints, columns, create forms, navigation
//! - [`record`] and [`table`]: cell rendering with a single placeholder policy
//! - [`draft`]: creation-form drafts with numeric coercion
//! - [`client`]: the [`client::Backend`] trait
//! - [`state`]: record-table, dashboard and navigation state machines
//! - [`http`] and [`config`]: native client and configuration (feature `native`)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use perfume_lab::config::Config;
//! use perfume_lab::http::HttpClient;
//! use perfume_lab::section::Collection;
//! use perfume_lab::state::RecordTableSession;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let client = HttpClient::new(&config.backend)?;
//!
//!     let mut solvents = RecordTableSession::new(client, Collection::Solvent);
//!     solvents.reload().await;
//!
//!     solvents.open_form();
//!     solvents.edit("name", "Ethanol")?;
//!     solvents.edit("purity_percent", "96")?;
//!     solvents.submit().await?;
//!
//!     print!("{}", solvents.state().view().to_text());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod draft;
pub mod error;
pub mod record;
pub mod section;
pub mod state;
pub mod table;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod http;

#[cfg(test)]
mod test_support;

pub use client::{Backend, DEFAULT_BACKEND_URL};
pub use error::{FetchError, SubmitError};
pub use record::{Record, PLACEHOLDER};
pub use section::{Collection, Section};
