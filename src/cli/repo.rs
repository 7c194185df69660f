//
//  lakefs-client
//  cli/repo.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Repository commands
//!
//! `lkfs repo filter <prefix>` lists every repository whose id starts with
//! the prefix, including one named exactly like it.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use crate::api::{CreateRepository, Repository};
use crate::output::{print_field, print_header, TableOutput, TableRow};
use crate::util::format_optional_time;

use super::GlobalOptions;

/// Manage repositories
#[derive(Args, Debug)]
pub struct RepoCommand {
    #[command(subcommand)]
    pub command: RepoSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum RepoSubcommand {
    /// List repositories
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// List repositories whose id starts with a prefix
    Filter(FilterArgs),

    /// Show repository details
    View(ViewArgs),

    /// Create a repository
    Create(CreateArgs),

    /// Delete a repository
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list repositories whose id sorts after this one
    #[arg(long)]
    pub after: Option<String>,

    /// Maximum number of repositories to list
    #[arg(long, short = 'L')]
    pub amount: Option<u32>,
}

#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Id prefix to search for
    pub prefix: String,

    /// Page size hint (the search always scans a fixed window)
    #[arg(long, short = 'L')]
    pub amount: Option<u32>,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Repository id
    pub repository: String,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Repository id
    pub name: String,

    /// Storage namespace, e.g. s3://bucket/prefix
    pub storage_namespace: String,

    /// Name of the initial branch
    #[arg(long, short = 'b')]
    pub default_branch: Option<String>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Repository id
    pub repository: String,

    /// Confirm the deletion
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl TableRow for Repository {
    fn headers() -> Vec<&'static str> {
        vec!["Repository", "Default branch", "Storage namespace", "Created"]
    }

    fn cells(&self, _color: bool) -> Vec<String> {
        vec![
            self.id.clone(),
            self.default_branch.clone().unwrap_or_default(),
            self.storage_namespace.clone().unwrap_or_default(),
            format_optional_time(self.creation_date),
        ]
    }
}

impl TableOutput for Repository {
    fn print_table(&self, color: bool) {
        print_header(&self.id);
        print_field(
            "Default branch",
            self.default_branch.as_deref().unwrap_or("-"),
            color,
        );
        print_field(
            "Storage namespace",
            self.storage_namespace.as_deref().unwrap_or("-"),
            color,
        );
        print_field("Created", &format_optional_time(self.creation_date), color);
    }
}

impl RepoCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            RepoSubcommand::List(args) => self.list(args, global).await,
            RepoSubcommand::Filter(args) => self.filter(args, global).await,
            RepoSubcommand::View(args) => self.view(args, global).await,
            RepoSubcommand::Create(args) => self.create(args, global).await,
            RepoSubcommand::Delete(args) => self.delete(args, global).await,
        }
    }

    async fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let page = client
            .repositories()
            .list(args.after.as_deref(), args.amount)
            .await?;
        global.writer().write(&page)
    }

    async fn filter(&self, args: &FilterArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let page = client
            .repositories()
            .filter(Some(&args.prefix), args.amount)
            .await?;
        global.writer().write(&page)
    }

    async fn view(&self, args: &ViewArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let repo = client.repositories().get(&args.repository).await?;
        global.writer().write(&repo)
    }

    async fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let mut payload = CreateRepository::new(&args.name, &args.storage_namespace);
        if let Some(branch) = &args.default_branch {
            payload = payload.default_branch(branch);
        }

        let repo = client.repositories().create(&payload).await?;
        let writer = global.writer();
        writer.write_success(&format!("Created repository {}", repo.id));
        writer.write(&repo)
    }

    async fn delete(&self, args: &DeleteArgs, global: &GlobalOptions) -> Result<()> {
        if !args.yes {
            bail!(
                "Refusing to delete repository '{}' without --yes",
                args.repository
            );
        }

        let client = global.client()?;
        client.repositories().delete(&args.repository).await?;
        global
            .writer()
            .write_success(&format!("Deleted repository {}", args.repository));
        Ok(())
    }
}
