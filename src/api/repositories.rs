//
//  lakefs-client
//  api/repositories.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Repository API types and operations.
//!
//! Repositories are the top-level lakeFS resource. Each one maps a storage
//! namespace (e.g. `s3://bucket/prefix`) to a versioned tree of branches and
//! commits.
//!
//! # Example
//!
//! ```rust,ignore
//! use lakefs_client::api::{CreateRepository, LakeFsClient};
//!
//! let repos = client.repositories();
//! let created = repos
//!     .create(&CreateRepository::new("example", "s3://bucket/example"))
//!     .await?;
//!
//! // Every repository whose id starts with "ex"
//! let page = repos.filter(Some("ex"), None).await?;
//! ```

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::client::LakeFsClient;
use super::common::{ApiError, ListParams, Page, ResourceKind};
use super::filter::{self, Identified, OrderedCollection};

/// A lakeFS repository.
///
/// Only `id` is guaranteed; everything else the server sends is kept so it
/// can be displayed or re-serialized unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    /// Repository id, unique per installation.
    pub id: String,

    /// Underlying storage location, e.g. `s3://bucket/prefix`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_namespace: Option<String>,

    /// Branch created together with the repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,

    /// Unix timestamp (seconds) of creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<i64>,

    /// Any other fields returned by the server.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Identified for Repository {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Payload for creating a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRepository {
    /// Id of the new repository.
    pub name: String,

    /// Storage namespace the repository writes to.
    pub storage_namespace: String,

    /// Name of the initial branch; the server picks one when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,
}

impl CreateRepository {
    pub fn new(name: impl Into<String>, storage_namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            storage_namespace: storage_namespace.into(),
            default_branch: None,
        }
    }

    pub fn default_branch(mut self, branch: impl Into<String>) -> Self {
        self.default_branch = Some(branch.into());
        self
    }
}

/// Repository operations, obtained from [`LakeFsClient::repositories`].
#[derive(Debug, Clone, Copy)]
pub struct Repositories<'a> {
    client: &'a LakeFsClient,
}

impl<'a> Repositories<'a> {
    pub(crate) fn new(client: &'a LakeFsClient) -> Self {
        Self { client }
    }

    /// Fetches one repository.
    ///
    /// # Errors
    ///
    /// - [`ApiError::NotFound`] on 404
    /// - [`ApiError::Generic`] `"could not get repository: ..."` on any other
    ///   non-200 status
    pub async fn get(&self, id: &str) -> Result<Repository, ApiError> {
        self.client
            .get_resource(&format!("/repositories/{}", id), ResourceKind::Repository, id)
            .await
    }

    /// Lists repositories whose ids sort after `after`.
    pub async fn list(
        &self,
        after: Option<&str>,
        amount: Option<u32>,
    ) -> Result<Page<Repository>, ApiError> {
        self.client
            .list_resource(
                "/repositories",
                ResourceKind::Repository,
                &ListParams::new(after, amount),
            )
            .await
    }

    /// Creates a repository; the server must answer 201.
    pub async fn create(&self, payload: &CreateRepository) -> Result<Repository, ApiError> {
        self.client.create_resource("/repositories", payload).await
    }

    /// Deletes a repository; the server must answer 204.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client
            .delete_resource(&format!("/repositories/{}", id))
            .await
    }

    /// Prefix search over repository ids. See [`filter::filter`].
    pub async fn filter(
        &self,
        from: Option<&str>,
        amount: Option<u32>,
    ) -> Result<Page<Repository>, ApiError> {
        filter::filter(self, from, amount).await
    }
}

#[async_trait]
impl<'a> OrderedCollection for Repositories<'a> {
    type Item = Repository;

    async fn list(
        &self,
        after: Option<&str>,
        amount: Option<u32>,
    ) -> Result<Page<Repository>, ApiError> {
        Repositories::list(self, after, amount).await
    }

    async fn get(&self, id: &str) -> Result<Repository, ApiError> {
        Repositories::get(self, id).await
    }
}
