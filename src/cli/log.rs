//
//  lakefs-client
//  cli/log.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! `lkfs log`

use anyhow::Result;
use clap::Args;

use crate::api::Commit;
use crate::output::TableRow;
use crate::util::{format_time, short_id, truncate};

use super::GlobalOptions;

/// Show the commit log of a branch
#[derive(Args, Debug)]
pub struct LogArgs {
    /// Repository id
    pub repository: String,

    /// Branch name
    pub branch: String,
}

impl TableRow for Commit {
    fn headers() -> Vec<&'static str> {
        vec!["Commit", "Message", "Committer", "Date"]
    }

    fn cells(&self, color: bool) -> Vec<String> {
        let id = if color {
            console::style(short_id(&self.id)).yellow().to_string()
        } else {
            short_id(&self.id).to_string()
        };
        vec![
            id,
            truncate(self.message.lines().next().unwrap_or(""), 60),
            self.committer.clone(),
            format_time(self.creation_date),
        ]
    }
}

impl LogArgs {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let commits = client
            .commits(&self.repository)
            .log(&self.branch)
            .await?;
        global.writer().write(&commits)
    }
}
