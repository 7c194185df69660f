//
//  lakefs-client
//  api/objects.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Object API types and operations.
//!
//! Objects live under a ref (branch or commit). Listing is done per
//! directory-like `tree` prefix, uploads go to a branch, and downloads are
//! exposed as shareable links carrying a signed token.

use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::client::{ensure_status, LakeFsClient, RequestOptions};
use super::common::{
    decode_json, with_query, ApiError, LinkParams, ObjectListParams, Page, UploadParams,
};
use crate::auth::DownloadTokenGenerator;

/// Metadata of a stored object or a common prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectStats {
    /// Full path of the object within the ref.
    pub path: String,

    /// `"object"` or `"common_prefix"`.
    pub path_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,

    /// Unix timestamp (seconds) of the last modification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mtime: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
}

impl ObjectStats {
    /// Returns `true` for directory-like entries.
    pub fn is_prefix(&self) -> bool {
        self.path_type == "common_prefix"
    }
}

/// Object operations within one repository, obtained from
/// [`LakeFsClient::objects`].
#[derive(Debug, Clone)]
pub struct Objects<'a> {
    client: &'a LakeFsClient,
    repository: String,
}

impl<'a> Objects<'a> {
    pub(crate) fn new(client: &'a LakeFsClient, repository: &str) -> Self {
        Self {
            client,
            repository: repository.to_string(),
        }
    }

    /// Lists the entries under `params.tree` at `reference`.
    ///
    /// Sends `GET /repositories/{repo}/refs/{ref}/objects/ls?tree&amount&after`
    /// and expects 200.
    pub async fn list(
        &self,
        reference: &str,
        params: &ObjectListParams,
    ) -> Result<Page<ObjectStats>, ApiError> {
        let path = format!(
            "/repositories/{}/refs/{}/objects/ls",
            self.repository, reference
        );
        let response = self.client.get(&with_query(&path, params)).await?;
        let response = ensure_status(response, StatusCode::OK, None).await?;
        decode_json(response).await
    }

    /// Uploads `content` to `path` on `branch`.
    ///
    /// The body is a multipart form with a single `content` part whose file
    /// name is the last segment of `path`. The JSON `Content-Type` default is
    /// suppressed so the multipart boundary header is used instead.
    ///
    /// # Errors
    ///
    /// Any status other than 201 becomes [`ApiError::Generic`] carrying the
    /// server's message.
    pub async fn upload(
        &self,
        branch: &str,
        path: &str,
        content: Vec<u8>,
    ) -> Result<ObjectStats, ApiError> {
        let file_name = path.rsplit('/').next().unwrap_or(path).to_string();
        let size = content.len();
        let form = Form::new().part("content", Part::bytes(content).file_name(file_name));

        let endpoint = with_query(
            &format!(
                "/repositories/{}/branches/{}/objects",
                self.repository, branch
            ),
            &UploadParams {
                path: path.to_string(),
            },
        );
        debug!(repository = %self.repository, branch, path, size, "uploading object");

        let options = RequestOptions::new()
            .multipart(form)
            .header(CONTENT_TYPE, "");
        let response = self.client.execute(Method::POST, &endpoint, options).await?;
        let response = ensure_status(response, StatusCode::CREATED, None).await?;
        decode_json(response).await
    }

    /// Builds a shareable download URL for `path` at `reference`.
    ///
    /// The URL is absolute: `{endpoint}/api/v1/repositories/{repo}/refs/{ref}/objects?path=..&token=..`.
    /// The token is produced by `generator` from the client's current
    /// credentials. No request is sent to the server.
    ///
    /// # Errors
    ///
    /// - [`ApiError::MissingCredentials`] if the client has no credentials
    /// - whatever `generator` returns
    pub async fn link_to_path(
        &self,
        reference: &str,
        path: &str,
        generator: &dyn DownloadTokenGenerator,
    ) -> Result<String, ApiError> {
        let credentials = self
            .client
            .current_credentials()
            .ok_or(ApiError::MissingCredentials)?;
        let token = generator.generate(&credentials, path).await?;

        let link = with_query(
            &format!(
                "/repositories/{}/refs/{}/objects",
                self.repository, reference
            ),
            &LinkParams {
                path: path.to_string(),
                token,
            },
        );
        Ok(self.client.url(&link))
    }
}
