//! Client error types
//!
//! Failures of the two backend calls. Both carry the request path so a log
//! line or banner says which collection went wrong.

use thiserror::Error;

/// A GET against a collection endpoint failed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request never produced a response
    #[error("Network error loading {path}: {message}")]
    Network { path: String, message: String },

    /// The request timed out (native client only)
    #[error("Timed out loading {path}")]
    Timeout { path: String },

    /// The backend answered with a non-2xx status
    #[error("Loading {path} failed with status {status}")]
    Status { path: String, status: u16 },

    /// The body was not a JSON array of objects
    #[error("Could not decode {path}: {message}")]
    Decode { path: String, message: String },
}

/// A POST of a draft record failed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    #[error("Network error submitting to {path}: {message}")]
    Network { path: String, message: String },

    #[error("Timed out submitting to {path}")]
    Timeout { path: String },

    #[error("Submitting to {path} failed with status {status}: {message}")]
    Status {
        path: String,
        status: u16,
        message: String,
    },

    /// The draft could not be serialized
    #[error("Could not encode record for {path}: {message}")]
    Encode { path: String, message: String },
}

impl FetchError {
    /// Endpoint the failed request targeted
    pub fn path(&self) -> &str {
        match self {
            FetchError::Network { path, .. }
            | FetchError::Timeout { path }
            | FetchError::Status { path, .. }
            | FetchError::Decode { path, .. } => path,
        }
    }
}

impl SubmitError {
    /// Endpoint the failed request targeted
    pub fn path(&self) -> &str {
        match self {
            SubmitError::Network { path, .. }
            | SubmitError::Timeout { path }
            | SubmitError::Status { path, .. }
            | SubmitError::Encode { path, .. } => path,
        }
    }
}
