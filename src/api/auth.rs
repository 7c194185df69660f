//
//  lakefs-client
//  api/auth.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Login against the `/authentication` endpoint.
//!
//! Login verifies an access key pair by calling the server with those
//! credentials explicitly, ignoring whatever the client's provider holds.
//!
//! ```rust,ignore
//! let session = client.auth().login("AKIAEXAMPLE", "secret").await?;
//! println!("logged in as {:?}", session.user.id);
//! ```

use std::collections::HashMap;

use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::client::{LakeFsClient, RequestOptions};
use super::common::{decode_json, ApiError, AuthError};
use crate::auth::{Credentials, SessionStore};

/// The user an access key belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Unix timestamp (seconds) of user creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,

    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct AuthenticationResponse {
    #[serde(default)]
    user: User,
}

/// A successful login: the verified credentials and their user.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub credentials: Credentials,
    pub user: User,
}

/// Login operations, obtained from [`LakeFsClient::auth`].
#[derive(Debug, Clone, Copy)]
pub struct Auth<'a> {
    client: &'a LakeFsClient,
}

impl<'a> Auth<'a> {
    pub(crate) fn new(client: &'a LakeFsClient) -> Self {
        Self { client }
    }

    /// Verifies an access key pair.
    ///
    /// # Errors
    ///
    /// - [`AuthError::InvalidCredentials`] on 401
    /// - [`AuthError::Unknown`] on any other status but 200
    pub async fn login(
        &self,
        access_key_id: &str,
        secret_access_key: &str,
    ) -> Result<Session, ApiError> {
        let credentials = Credentials::new(access_key_id, secret_access_key);
        let options = RequestOptions::new().credentials(credentials.clone());

        let response = self
            .client
            .execute(Method::GET, "/authentication", options)
            .await?;

        match response.status() {
            StatusCode::OK => {}
            StatusCode::UNAUTHORIZED => return Err(AuthError::InvalidCredentials.into()),
            status => return Err(AuthError::Unknown { status }.into()),
        }

        let body: AuthenticationResponse = decode_json(response).await?;
        debug!(user = ?body.user.id, "login succeeded");

        Ok(Session {
            credentials,
            user: body.user,
        })
    }

    /// Logs in and, on success, stores the credentials in `store`.
    ///
    /// A failed login leaves `store` untouched.
    pub async fn login_into(
        &self,
        store: &SessionStore,
        access_key_id: &str,
        secret_access_key: &str,
    ) -> Result<Session, ApiError> {
        let session = self.login(access_key_id, secret_access_key).await?;
        store.set(session.credentials.clone());
        Ok(session)
    }
}
