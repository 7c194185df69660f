//
//  lakefs-client
//  api/branches.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Branch API types and operations.
//!
//! Branches are mutable pointers to commits within a repository. All
//! operations here are scoped to the repository the [`Branches`] handle was
//! created for.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::client::LakeFsClient;
use super::common::{ApiError, ListParams, Page, ResourceKind};
use super::filter::{self, Identified, OrderedCollection};

/// A branch reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    /// Branch name.
    pub id: String,

    /// Commit the branch currently points to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_id: Option<String>,

    /// Any other fields returned by the server.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Identified for Branch {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Payload for creating a branch.
///
/// # Example
///
/// ```rust
/// use lakefs_client::api::CreateBranch;
///
/// let payload = CreateBranch::new("feature-x", "main");
/// assert_eq!(payload.source, "main");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBranch {
    /// Name of the new branch.
    pub name: String,
    /// Ref (branch or commit) the new branch starts from.
    pub source: String,
}

impl CreateBranch {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }
}

/// Branch operations within one repository, obtained from
/// [`LakeFsClient::branches`].
#[derive(Debug, Clone)]
pub struct Branches<'a> {
    client: &'a LakeFsClient,
    repository: String,
}

impl<'a> Branches<'a> {
    pub(crate) fn new(client: &'a LakeFsClient, repository: &str) -> Self {
        Self {
            client,
            repository: repository.to_string(),
        }
    }

    /// The repository this handle is scoped to.
    pub fn repository(&self) -> &str {
        &self.repository
    }

    fn path(&self) -> String {
        format!("/repositories/{}/branches", self.repository)
    }

    /// Fetches one branch; 404 becomes [`ApiError::NotFound`].
    pub async fn get(&self, id: &str) -> Result<Branch, ApiError> {
        self.client
            .get_resource(
                &format!("{}/{}", self.path(), id),
                ResourceKind::Branch,
                id,
            )
            .await
    }

    /// Lists branches whose names sort after `after`.
    pub async fn list(
        &self,
        after: Option<&str>,
        amount: Option<u32>,
    ) -> Result<Page<Branch>, ApiError> {
        self.client
            .list_resource(
                &self.path(),
                ResourceKind::Branch,
                &ListParams::new(after, amount),
            )
            .await
    }

    /// Creates a branch from `payload.source`; expects 201.
    pub async fn create(&self, payload: &CreateBranch) -> Result<Branch, ApiError> {
        self.client.create_resource(&self.path(), payload).await
    }

    /// Deletes a branch; expects 204.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client
            .delete_resource(&format!("{}/{}", self.path(), id))
            .await
    }

    /// Prefix search over branch names. See [`filter::filter`].
    pub async fn filter(
        &self,
        from: Option<&str>,
        amount: Option<u32>,
    ) -> Result<Page<Branch>, ApiError> {
        filter::filter(self, from, amount).await
    }
}

#[async_trait]
impl<'a> OrderedCollection for Branches<'a> {
    type Item = Branch;

    async fn list(
        &self,
        after: Option<&str>,
        amount: Option<u32>,
    ) -> Result<Page<Branch>, ApiError> {
        Branches::list(self, after, amount).await
    }

    async fn get(&self, id: &str) -> Result<Branch, ApiError> {
        Branches::get(self, id).await
    }
}
