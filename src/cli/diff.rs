//
//  lakefs-client
//  cli/diff.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! `lkfs diff`

use anyhow::Result;
use clap::Args;

use crate::api::Diff;
use crate::output::{format_diff_type, TableRow};

use super::GlobalOptions;

/// Show changes between two refs, or uncommitted changes of a branch
#[derive(Args, Debug)]
pub struct DiffArgs {
    /// Repository id
    pub repository: String,

    /// Left ref; alone, the branch whose uncommitted changes to show
    pub left: String,

    /// Right ref
    pub right: Option<String>,
}

impl TableRow for Diff {
    fn headers() -> Vec<&'static str> {
        vec!["Change", "Path", "Type"]
    }

    fn cells(&self, color: bool) -> Vec<String> {
        vec![
            format_diff_type(&self.diff_type, color),
            self.path.clone(),
            self.path_type.clone(),
        ]
    }
}

impl DiffArgs {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let right = self.right.as_deref().unwrap_or(&self.left);
        let client = global.client()?;
        let page = client
            .refs(&self.repository)
            .diff(&self.left, right)
            .await?;
        global.writer().write(&page)
    }
}
