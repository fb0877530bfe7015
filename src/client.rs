//! Backend Client
//!
//! The two calls every view makes against a collection endpoint. The browser
//! app implements [`Backend`] with gloo-net, the CLI with reqwest
//! ([`crate::http::HttpClient`]).

use async_trait::async_trait;

use crate::error::{FetchError, SubmitError};
use crate::record::Record;

/// Default backend base URL
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// REST backend serving the record collections.
///
/// Futures are not required to be `Send` so browser implementations fit.
#[async_trait(?Send)]
pub trait Backend {
    /// Load a collection. Fails on a non-2xx status or an undecodable body.
    async fn get(&self, path: &str) -> Result<Vec<Record>, FetchError>;

    /// Create a record. Succeeds only on a 2xx status.
    async fn post(&self, path: &str, body: &Record) -> Result<Record, SubmitError>;
}

/// Strip trailing slashes and surrounding whitespace from a base URL
pub fn normalize_base_url(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

/// Join a base URL and an endpoint path
pub fn endpoint_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        normalize_base_url(base),
        path.trim_start_matches('/')
    )
}

/// Decode a GET body into records
pub fn decode_records(path: &str, body: &[u8]) -> Result<Vec<Record>, FetchError> {
    serde_json::from_slice(body).map_err(|e| FetchError::Decode {
        path: path.to_string(),
        message: e.to_string(),
    })
}

/// The record a successful POST produced.
///
/// Backends usually echo the created object; when the body is empty or not
/// an object the submitted record stands in for it.
pub fn created_record(body: &[u8], submitted: &Record) -> Record {
    serde_json::from_slice::<Record>(body).unwrap_or_else(|_| submitted.clone())
}
