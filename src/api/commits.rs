//
//  lakefs-client
//  api/commits.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Commit log of a branch.

use std::collections::HashMap;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use super::client::{ensure_status, LakeFsClient};
use super::common::{decode_json, ApiError, Page};

/// A commit in a branch's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub id: String,

    #[serde(default)]
    pub parents: Vec<String>,

    #[serde(default)]
    pub committer: String,

    #[serde(default)]
    pub message: String,

    /// Unix timestamp (seconds).
    #[serde(default)]
    pub creation_date: i64,

    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

/// Commit operations within one repository, obtained from
/// [`LakeFsClient::commits`].
#[derive(Debug, Clone)]
pub struct Commits<'a> {
    client: &'a LakeFsClient,
    repository: String,
}

impl<'a> Commits<'a> {
    pub(crate) fn new(client: &'a LakeFsClient, repository: &str) -> Self {
        Self {
            client,
            repository: repository.to_string(),
        }
    }

    /// Returns the commits of `branch`, newest first.
    ///
    /// This is a single fetch of the first page; pagination metadata is
    /// discarded.
    pub async fn log(&self, branch: &str) -> Result<Vec<Commit>, ApiError> {
        let path = format!(
            "/repositories/{}/branches/{}/commits",
            self.repository, branch
        );
        let response = self.client.get(&path).await?;
        let response = ensure_status(response, StatusCode::OK, None).await?;
        let page: Page<Commit> = decode_json(response).await?;
        Ok(page.results)
    }
}
