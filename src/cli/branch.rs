//
//  lakefs-client
//  cli/branch.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Branch commands

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use crate::api::{Branch, CreateBranch};
use crate::output::{print_field, print_header, TableOutput, TableRow};

use super::GlobalOptions;

/// Manage branches
#[derive(Args, Debug)]
pub struct BranchCommand {
    #[command(subcommand)]
    pub command: BranchSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum BranchSubcommand {
    /// List branches of a repository
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// List branches whose name starts with a prefix
    Filter(FilterArgs),

    /// Show a branch
    View(ViewArgs),

    /// Create a branch from a ref
    Create(CreateArgs),

    /// Delete a branch
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Repository id
    pub repository: String,

    /// Only list branches whose name sorts after this one
    #[arg(long)]
    pub after: Option<String>,

    /// Maximum number of branches to list
    #[arg(long, short = 'L')]
    pub amount: Option<u32>,
}

#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Repository id
    pub repository: String,

    /// Name prefix to search for
    pub prefix: String,

    /// Page size hint (the search always scans a fixed window)
    #[arg(long, short = 'L')]
    pub amount: Option<u32>,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Repository id
    pub repository: String,

    /// Branch name
    pub branch: String,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Repository id
    pub repository: String,

    /// Name of the new branch
    pub name: String,

    /// Branch or commit to start from
    #[arg(long, short = 's', default_value = "main")]
    pub source: String,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Repository id
    pub repository: String,

    /// Branch name
    pub branch: String,

    /// Confirm the deletion
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl TableRow for Branch {
    fn headers() -> Vec<&'static str> {
        vec!["Branch", "Commit"]
    }

    fn cells(&self, _color: bool) -> Vec<String> {
        vec![self.id.clone(), self.commit_id.clone().unwrap_or_default()]
    }
}

impl TableOutput for Branch {
    fn print_table(&self, color: bool) {
        print_header(&self.id);
        print_field("Commit", self.commit_id.as_deref().unwrap_or("-"), color);
    }
}

impl BranchCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            BranchSubcommand::List(args) => self.list(args, global).await,
            BranchSubcommand::Filter(args) => self.filter(args, global).await,
            BranchSubcommand::View(args) => self.view(args, global).await,
            BranchSubcommand::Create(args) => self.create(args, global).await,
            BranchSubcommand::Delete(args) => self.delete(args, global).await,
        }
    }

    async fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let page = client
            .branches(&args.repository)
            .list(args.after.as_deref(), args.amount)
            .await?;
        global.writer().write(&page)
    }

    async fn filter(&self, args: &FilterArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let page = client
            .branches(&args.repository)
            .filter(Some(&args.prefix), args.amount)
            .await?;
        global.writer().write(&page)
    }

    async fn view(&self, args: &ViewArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let branch = client.branches(&args.repository).get(&args.branch).await?;
        global.writer().write(&branch)
    }

    async fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let payload = CreateBranch::new(&args.name, &args.source);
        let branch = client.branches(&args.repository).create(&payload).await?;

        let writer = global.writer();
        writer.write_success(&format!(
            "Created branch {} from {}",
            branch.id, args.source
        ));
        writer.write(&branch)
    }

    async fn delete(&self, args: &DeleteArgs, global: &GlobalOptions) -> Result<()> {
        if !args.yes {
            bail!(
                "Refusing to delete branch '{}' without --yes",
                args.branch
            );
        }

        let client = global.client()?;
        client
            .branches(&args.repository)
            .delete(&args.branch)
            .await?;
        global.writer().write_success(&format!(
            "Deleted branch {} in {}",
            args.branch, args.repository
        ));
        Ok(())
    }
}
