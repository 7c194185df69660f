//
//  lakefs-client
//  api/refs.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Diffs between refs.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use super::client::{ensure_status, LakeFsClient};
use super::common::{decode_json, ApiError, Page};

/// One changed path in a diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diff {
    /// `"added"`, `"removed"`, `"changed"` or `"conflict"`.
    #[serde(rename = "type")]
    pub diff_type: String,

    pub path: String,

    /// `"object"` or `"common_prefix"`.
    pub path_type: String,
}

/// Ref operations within one repository, obtained from
/// [`LakeFsClient::refs`].
#[derive(Debug, Clone)]
pub struct Refs<'a> {
    client: &'a LakeFsClient,
    repository: String,
}

impl<'a> Refs<'a> {
    pub(crate) fn new(client: &'a LakeFsClient, repository: &str) -> Self {
        Self {
            client,
            repository: repository.to_string(),
        }
    }

    /// Compares two refs.
    ///
    /// When `left == right` the uncommitted changes of branch `left` are
    /// returned; otherwise the diff between the two refs.
    pub async fn diff(&self, left: &str, right: &str) -> Result<Page<Diff>, ApiError> {
        let response = self.client.get(&self.diff_path(left, right)).await?;
        let response = ensure_status(response, StatusCode::OK, None).await?;
        decode_json(response).await
    }

    fn diff_path(&self, left: &str, right: &str) -> String {
        if left == right {
            format!("/repositories/{}/branches/{}/diff", self.repository, left)
        } else {
            format!(
                "/repositories/{}/refs/{}/diff/{}",
                self.repository, left, right
            )
        }
    }
}
