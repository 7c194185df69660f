//
//  lakefs-client
//  auth/token.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Download Tokens
//!
//! Shareable object links carry a `token` query parameter so they can be
//! opened without an `Authorization` header. Issuing those tokens is the job
//! of an external collaborator; this module only defines the seam used by
//! [`Objects::link_to_path`](crate::api::Objects::link_to_path).

use async_trait::async_trait;

use super::Credentials;
use crate::api::ApiError;

/// Generates download tokens for a credential pair and object path.
///
/// # Example
///
/// ```rust,ignore
/// use async_trait::async_trait;
/// use lakefs_client::api::ApiError;
/// use lakefs_client::auth::{Credentials, DownloadTokenGenerator};
///
/// struct Signer;
///
/// #[async_trait]
/// impl DownloadTokenGenerator for Signer {
///     async fn generate(&self, creds: &Credentials, path: &str) -> Result<String, ApiError> {
///         Ok(sign(&creds.secret_access_key, path))
///     }
/// }
/// ```
#[async_trait]
pub trait DownloadTokenGenerator: Send + Sync {
    /// Returns a token granting read access to `path`.
    async fn generate(&self, credentials: &Credentials, path: &str) -> Result<String, ApiError>;
}

/// A generator for pre-issued download tokens.
///
/// The token is not derived from the credentials or the path; it was issued
/// out of band and is returned unchanged for every object, e.g. the value of
/// `lkfs object link --token`. Plug in a signing generator instead when links
/// must be minted per object.
#[derive(Debug, Clone)]
pub struct FixedToken(pub String);

#[async_trait]
impl DownloadTokenGenerator for FixedToken {
    async fn generate(&self, _credentials: &Credentials, _path: &str) -> Result<String, ApiError> {
        Ok(self.0.clone())
    }
}
