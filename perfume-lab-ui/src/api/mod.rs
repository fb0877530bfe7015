//! API Client
//!
//! Browser implementation of the backend calls.

pub mod client;

pub use client::{get_api_base, set_api_base, GlooBackend};
