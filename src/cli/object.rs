//
//  lakefs-client
//  cli/object.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Object commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use crate::api::common::{ObjectListParams, DEFAULT_OBJECT_PAGE};
use crate::api::ObjectStats;
use crate::auth::FixedToken;
use crate::output::{print_field, print_header, TableOutput, TableRow};
use crate::util::{format_optional_time, format_size};

use super::GlobalOptions;

/// List, upload and link objects
#[derive(Args, Debug)]
pub struct ObjectCommand {
    #[command(subcommand)]
    pub command: ObjectSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ObjectSubcommand {
    /// List objects under a path prefix
    Ls(LsArgs),

    /// Upload a local file to a branch
    Upload(UploadArgs),

    /// Print a shareable download link
    Link(LinkArgs),
}

#[derive(Args, Debug)]
pub struct LsArgs {
    /// Repository id
    pub repository: String,

    /// Branch or commit
    pub reference: String,

    /// Directory prefix, e.g. data/2024/
    #[arg(long, short = 't', default_value = "")]
    pub tree: String,

    /// Only list paths sorting after this one
    #[arg(long, default_value = "")]
    pub after: String,

    /// Maximum number of entries
    #[arg(long, short = 'L', default_value_t = DEFAULT_OBJECT_PAGE)]
    pub amount: u32,
}

#[derive(Args, Debug)]
pub struct UploadArgs {
    /// Repository id
    pub repository: String,

    /// Destination branch
    pub branch: String,

    /// Destination path within the branch
    pub path: String,

    /// Local file to upload
    #[arg(long, short = 'f')]
    pub file: PathBuf,
}

#[derive(Args, Debug)]
pub struct LinkArgs {
    /// Repository id
    pub repository: String,

    /// Branch or commit
    pub reference: String,

    /// Object path
    pub path: String,

    /// Download token issued for this path
    #[arg(long)]
    pub token: String,
}

impl TableRow for ObjectStats {
    fn headers() -> Vec<&'static str> {
        vec!["Path", "Type", "Size", "Modified"]
    }

    fn cells(&self, _color: bool) -> Vec<String> {
        vec![
            self.path.clone(),
            self.path_type.clone(),
            self.size_bytes.map(format_size).unwrap_or_default(),
            format_optional_time(self.mtime),
        ]
    }
}

impl TableOutput for ObjectStats {
    fn print_table(&self, color: bool) {
        print_header(&self.path);
        print_field("Type", &self.path_type, color);
        if let Some(size) = self.size_bytes {
            print_field("Size", &format_size(size), color);
        }
        if let Some(checksum) = &self.checksum {
            print_field("Checksum", checksum, color);
        }
        print_field("Modified", &format_optional_time(self.mtime), color);
    }
}

#[derive(serde::Serialize)]
struct Link {
    url: String,
}

impl TableOutput for Link {
    fn print_table(&self, _color: bool) {
        println!("{}", self.url);
    }
}

impl ObjectCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ObjectSubcommand::Ls(args) => self.ls(args, global).await,
            ObjectSubcommand::Upload(args) => self.upload(args, global).await,
            ObjectSubcommand::Link(args) => self.link(args, global).await,
        }
    }

    async fn ls(&self, args: &LsArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let params = ObjectListParams::new(&args.tree)
            .after(&args.after)
            .amount(args.amount);
        let page = client
            .objects(&args.repository)
            .list(&args.reference, &params)
            .await?;
        global.writer().write(&page)
    }

    async fn upload(&self, args: &UploadArgs, global: &GlobalOptions) -> Result<()> {
        let content = tokio::fs::read(&args.file)
            .await
            .with_context(|| format!("Failed to read {}", args.file.display()))?;

        let client = global.client()?;
        let stats = client
            .objects(&args.repository)
            .upload(&args.branch, &args.path, content)
            .await?;

        let writer = global.writer();
        writer.write_success(&format!(
            "Uploaded {} to {}/{}",
            args.file.display(),
            args.branch,
            stats.path
        ));
        writer.write(&stats)
    }

    async fn link(&self, args: &LinkArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let url = client
            .objects(&args.repository)
            .link_to_path(&args.reference, &args.path, &FixedToken(args.token.clone()))
            .await?;
        global.writer().write(&Link { url })
    }
}
