//
//  lakefs-client
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types
//!
//! This module provides the types shared by every resource client: the
//! closed [`ApiError`] enum, the error classifier that turns a failed
//! response into a message, and the pagination and query types (re-exported
//! from the [`pagination`] submodule).
//!
//! # Example
//!
//! ```rust
//! use lakefs_client::api::common::{ApiError, ResourceKind};
//!
//! fn describe(result: Result<(), ApiError>) -> String {
//!     match result {
//!         Ok(()) => "ok".to_string(),
//!         Err(ApiError::NotFound { kind, id }) => format!("no {} named {}", kind, id),
//!         Err(e) => e.to_string(),
//!     }
//! }
//!
//! let missing = Err(ApiError::NotFound { kind: ResourceKind::Repository, id: "r1".into() });
//! assert_eq!(describe(missing), "no repository named r1");
//! ```

use std::fmt;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

mod pagination;

pub use pagination::*;

/// The kind of resource an operation targeted.
///
/// Used to build error messages such as `could not find branch main` or
/// `could not list repositories: ...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Repository,
    Branch,
}

impl ResourceKind {
    /// Returns the plural noun used in listing errors.
    pub fn plural(self) -> &'static str {
        match self {
            Self::Repository => "repositories",
            Self::Branch => "branches",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Repository => "repository",
            Self::Branch => "branch",
        };
        f.write_str(name)
    }
}

/// Login-specific failures.
///
/// | Variant | HTTP Status |
/// |---------|-------------|
/// | `InvalidCredentials` | 401 |
/// | `Unknown` | anything else but 200 |
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The server rejected the access key pair.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Login failed for a reason other than bad credentials.
    #[error("unknown authentication error (status {status})")]
    Unknown {
        /// The status code returned by the server.
        status: StatusCode,
    },
}

/// Unified error type for all lakeFS API operations.
///
/// The enum is closed so callers can handle every outcome exhaustively
/// without inspecting error types at runtime.
///
/// # Variants
///
/// | Variant | Description | Origin |
/// |---------|-------------|--------|
/// | `NotFound` | The target resource does not exist | 404 on `get` |
/// | `Generic` | Any other unexpected status | classifier message |
/// | `Auth` | Login rejected | `/authentication` |
/// | `MissingCredentials` | No credentials to attach | before sending |
/// | `InvalidEndpoint` | The configured endpoint is not a URL | client construction |
/// | `InvalidHeader` | A header value could not be encoded | before sending |
/// | `Transport` | Network failure | `reqwest` |
/// | `Decode` | Malformed JSON body | `serde_json` |
///
/// # Notes
///
/// - Nothing in this crate retries a failed request
/// - Only the prefix filter swallows an error: the `NotFound` of its point
///   lookup
#[derive(Error, Debug)]
pub enum ApiError {
    /// The requested resource was not found.
    #[error("could not find {kind} {id}")]
    NotFound {
        /// What kind of resource was looked up.
        kind: ResourceKind,
        /// The identifier that was looked up.
        id: String,
    },

    /// Any other non-success response, carrying the server's message.
    #[error("{0}")]
    Generic(String),

    /// Login failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// No explicit credentials were given and the provider had none.
    #[error("no credentials available: log in or configure an access key")]
    MissingCredentials,

    /// The endpoint the client was built with is not a valid URL.
    #[error("invalid endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    /// A header value contained characters HTTP does not allow.
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// A network-level error occurred during the request.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not the JSON we expected.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Returns `true` for [`ApiError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` for login failures and missing credentials.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_) | Self::MissingCredentials)
    }
}

/// Extracts a human-readable message from a failed response.
///
/// When the response declares a JSON content type, the body is decoded and
/// its `message` field returned. Any other body is returned as raw text.
///
/// # Errors
///
/// - [`ApiError::Transport`] if the body cannot be read
/// - [`ApiError::Decode`] if a body declared as JSON is not valid JSON
pub async fn extract_message(response: Response) -> Result<String, ApiError> {
    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(is_json_media_type)
        .unwrap_or(false);

    let body = response.text().await?;
    if is_json {
        message_from_json(&body)
    } else {
        Ok(body)
    }
}

/// Returns the `message` field of a JSON error body.
///
/// A valid JSON body without a string `message` yields the body itself.
pub fn message_from_json(body: &str) -> Result<String, ApiError> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    Ok(value
        .get("message")
        .and_then(|m| m.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| body.to_string()))
}

/// Checks whether a `Content-Type` value names the JSON media type.
///
/// Parameters such as `charset` are ignored.
pub fn is_json_media_type(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .map(|media| media.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}

/// Decodes a successful response body as JSON.
///
/// The body is read fully before decoding so malformed JSON surfaces as
/// [`ApiError::Decode`] rather than a transport error.
pub async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_media_type() {
        assert!(is_json_media_type("application/json"));
        assert!(is_json_media_type("application/json; charset=utf-8"));
        assert!(is_json_media_type("Application/JSON"));
        assert!(!is_json_media_type("text/plain"));
        assert!(!is_json_media_type("application/jsonl"));
    }

    #[test]
    fn test_message_from_json() {
        let msg = message_from_json(r#"{"message": "branch already exists"}"#).unwrap();
        assert_eq!(msg, "branch already exists");
    }

    #[test]
    fn test_message_from_json_without_message_field() {
        let body = r#"{"error": "boom"}"#;
        assert_eq!(message_from_json(body).unwrap(), body);
    }

    #[test]
    fn test_message_from_malformed_json() {
        let err = message_from_json("{not json").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_not_found_display() {
        let err = ApiError::NotFound {
            kind: ResourceKind::Branch,
            id: "main".to_string(),
        };
        assert_eq!(err.to_string(), "could not find branch main");
        assert!(err.is_not_found());
        assert!(!err.is_auth());
    }

    #[test]
    fn test_auth_error_messages_differ() {
        let invalid = ApiError::from(AuthError::InvalidCredentials);
        let unknown = ApiError::from(AuthError::Unknown {
            status: StatusCode::INTERNAL_SERVER_ERROR,
        });
        assert_eq!(invalid.to_string(), "invalid credentials");
        assert!(unknown.to_string().starts_with("unknown authentication error"));
        assert!(invalid.is_auth() && unknown.is_auth());
    }

    #[test]
    fn test_resource_kind_names() {
        assert_eq!(ResourceKind::Repository.to_string(), "repository");
        assert_eq!(ResourceKind::Repository.plural(), "repositories");
        assert_eq!(ResourceKind::Branch.plural(), "branches");
    }
}
