//! HTTP API Client
//!
//! gloo-net implementation of [`Backend`] and the persisted backend URL.

use async_trait::async_trait;
use gloo_net::http::Request;

use perfume_lab::client::{
    created_record, decode_records, endpoint_url, normalize_base_url, Backend,
};
use perfume_lab::{FetchError, Record, SubmitError, DEFAULT_BACKEND_URL};

/// Local storage key holding the backend URL
const STORAGE_KEY: &str = "perfume_lab_backend_url";

/// Pick the backend URL: stored value, then build-time setting, then default
pub(crate) fn resolve_api_base(stored: Option<String>) -> String {
    let url = stored
        .filter(|s| !s.trim().is_empty())
        .or_else(|| option_env!("PERFUME_LAB_BACKEND_URL").map(str::to_string))
        .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
    normalize_base_url(&url)
}

/// Get the backend URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
    resolve_api_base(stored)
}

/// Set the backend URL in local storage and return the URL now in effect.
///
/// A blank URL clears the stored value, so the fallback applies.
pub fn set_api_base(url: &str) -> String {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = if url.trim().is_empty() {
                storage.remove_item(STORAGE_KEY)
            } else {
                storage.set_item(STORAGE_KEY, &normalize_base_url(url))
            };
        }
    }
    resolve_api_base(Some(url.to_string()))
}

/// Backend reached through the browser's fetch
#[derive(Clone, Debug)]
pub struct GlooBackend {
    base_url: String,
}

impl GlooBackend {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
        }
    }
}

#[async_trait(?Send)]
impl Backend for GlooBackend {
    async fn get(&self, path: &str) -> Result<Vec<Record>, FetchError> {
        let url = endpoint_url(&self.base_url, path);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        if !response.ok() {
            return Err(FetchError::Status {
                path: path.to_string(),
                status: response.status(),
            });
        }

        let body = response.binary().await.map_err(|e| FetchError::Network {
            path: path.to_string(),
            message: e.to_string(),
        })?;

        decode_records(path, &body)
    }

    async fn post(&self, path: &str, body: &Record) -> Result<Record, SubmitError> {
        let url = endpoint_url(&self.base_url, path);

        let response = Request::post(&url)
            .json(body)
            .map_err(|e| SubmitError::Encode {
                path: path.to_string(),
                message: e.to_string(),
            })?
            .send()
            .await
            .map_err(|e| SubmitError::Network {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        if !response.ok() {
            let message = response.text().await.unwrap_or_default();
            return Err(SubmitError::Status {
                path: path.to_string(),
                status: response.status(),
                message,
            });
        }

        let bytes = response.binary().await.unwrap_or_default();
        Ok(created_record(&bytes, body))
    }
}
