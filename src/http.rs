//! Native HTTP Client
//!
//! reqwest implementation of [`Backend`] used by the CLI.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;

use crate::client::{created_record, decode_records, endpoint_url, normalize_base_url, Backend};
use crate::config::BackendConfig;
use crate::error::{FetchError, SubmitError};
use crate::record::Record;

/// Backend client over reqwest
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a client with the configured base URL and timeout
    pub fn new(config: &BackendConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: normalize_base_url(&config.base_url),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn fetch_transport_error(path: &str, e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout {
            path: path.to_string(),
        }
    } else {
        FetchError::Network {
            path: path.to_string(),
            message: e.to_string(),
        }
    }
}

fn submit_transport_error(path: &str, e: reqwest::Error) -> SubmitError {
    if e.is_timeout() {
        SubmitError::Timeout {
            path: path.to_string(),
        }
    } else {
        SubmitError::Network {
            path: path.to_string(),
            message: e.to_string(),
        }
    }
}

#[async_trait(?Send)]
impl Backend for HttpClient {
    async fn get(&self, path: &str) -> Result<Vec<Record>, FetchError> {
        let url = endpoint_url(&self.base_url, path);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| fetch_transport_error(path, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| fetch_transport_error(path, e))?;

        decode_records(path, &body)
    }

    async fn post(&self, path: &str, body: &Record) -> Result<Record, SubmitError> {
        let url = endpoint_url(&self.base_url, path);
        tracing::debug!("POST {}", url);

        let payload = serde_json::to_vec(body).map_err(|e| SubmitError::Encode {
            path: path.to_string(),
            message: e.to_string(),
        })?;

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(|e| submit_transport_error(path, e))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SubmitError::Status {
                path: path.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| submit_transport_error(path, e))?;

        Ok(created_record(&bytes, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::StubServer;
    use serde_json::json;

    fn client_for(server: &StubServer) -> HttpClient {
        HttpClient::new(&BackendConfig {
            base_url: format!("{}/", server.base_url()),
            request_timeout_secs: 5,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_get_returns_records() {
        let server = StubServer::start().await;
        server.seed(
            "/api/ingredient",
            json!([{"name": "Bergamot", "category": "Citrus", "supplier": "X", "cas": "5989-27-5", "stock_g": 500}]),
        );

        let client = client_for(&server);
        let rows = client.get("/api/ingredient").await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("stock_g"), Some(&json!(500)));
        assert_eq!(server.requests(), vec![("GET".to_string(), "/api/ingredient".to_string())]);
    }

    #[tokio::test]
    async fn test_get_non_success_status() {
        let server = StubServer::start().await;
        server.fail("/api/batch");

        let err = client_for(&server).get("/api/batch").await.unwrap_err();
        assert_eq!(
            err,
            FetchError::Status {
                path: "/api/batch".to_string(),
                status: 500
            }
        );
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let server = StubServer::start().await;
        let client = client_for(&server);

        let body: Record = serde_json::from_value(json!({
            "name": "Ethanol", "type": "Alcohol", "purity_percent": 96, "stock_ml": 1000
        }))
        .unwrap();

        let created = client.post("/api/solvent", &body).await.unwrap();
        assert_eq!(created.get("name"), Some(&json!("Ethanol")));
        assert_eq!(server.posted("/api/solvent"), vec![json!(body)]);
        assert_eq!(server.content_types(), vec!["application/json".to_string()]);
    }

    #[tokio::test]
    async fn test_post_failure_reports_status() {
        let server = StubServer::start().await;
        server.fail("/api/formula");

        let err = client_for(&server)
            .post("/api/formula", &Record::new())
            .await
            .unwrap_err();

        match err {
            SubmitError::Status { status, message, .. } => {
                assert_eq!(status, 500);
                assert!(message.contains("stub failure"));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        let client = HttpClient::new(&BackendConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            request_timeout_secs: 2,
        })
        .unwrap();

        let err = client.get("/api/solvent").await.unwrap_err();
        assert!(matches!(
            err,
            FetchError::Network { .. } | FetchError::Timeout { .. }
        ));
    }
}
