//
//  lakefs-client
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod auth;
mod branch;
mod config;
mod diff;
mod log;
mod object;
mod repo;

pub use auth::AuthCommand;
pub use branch::BranchCommand;
pub use config::ConfigCommand;
pub use diff::DiffArgs;
pub use log::LogArgs;
pub use object::ObjectCommand;
pub use repo::RepoCommand;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::api::LakeFsClient;
use crate::auth::Credentials;
use crate::config::Config;
use crate::output::OutputWriter;

/// lkfs - Work with lakeFS from the command line
#[derive(Parser, Debug)]
#[command(
    name = "lkfs",
    version,
    about = "Work with lakeFS from the command line",
    long_about = "lkfs is a CLI for lakeFS.\n\n\
                  It lists, searches and manages repositories, branches, objects and commits.",
    propagate_version = true,
    after_help = "Use 'lkfs <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

impl Cli {
    /// Runs the selected command.
    pub async fn run(self) -> Result<()> {
        let global = &self.global;
        match self.command {
            Commands::Auth(cmd) => cmd.run(global).await,
            Commands::Repo(cmd) => cmd.run(global).await,
            Commands::Branch(cmd) => cmd.run(global).await,
            Commands::Object(cmd) => cmd.run(global).await,
            Commands::Log(cmd) => cmd.run(global).await,
            Commands::Diff(cmd) => cmd.run(global).await,
            Commands::Config(cmd) => cmd.run(global).await,
            Commands::Version => {
                println!("lkfs version {}", crate::VERSION);
                Ok(())
            }
        }
    }
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// lakeFS server URL, e.g. http://localhost:8000
    #[arg(long, global = true, env = "LKFS_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Access key id (overrides the configured one)
    #[arg(long, global = true, env = "LKFS_ACCESS_KEY_ID")]
    pub access_key_id: Option<String>,

    /// Secret access key (overrides the configured one)
    #[arg(long, global = true, env = "LKFS_SECRET_ACCESS_KEY", hide_env_values = true)]
    pub secret_access_key: Option<String>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalOptions {
    /// Returns the endpoint from flags, environment or config, in that order.
    pub fn endpoint(&self, config: &Config) -> String {
        self.endpoint
            .clone()
            .unwrap_or_else(|| config.server.endpoint.clone())
    }

    /// Returns credentials from flags or environment when both halves are
    /// given, otherwise from the config file.
    pub fn credentials(&self, config: &Config) -> Option<Credentials> {
        match (&self.access_key_id, &self.secret_access_key) {
            (Some(id), Some(secret)) => Some(Credentials::new(id.as_str(), secret.as_str())),
            _ => config.credentials(),
        }
    }

    /// Builds an API client from the resolved endpoint and credentials.
    ///
    /// A client without credentials is still returned; its requests fail
    /// with a missing credentials error.
    pub fn client(&self) -> Result<LakeFsClient> {
        let config = Config::load()?;
        let endpoint = self.endpoint(&config);
        debug!(%endpoint, "creating client");

        let client = LakeFsClient::new(&endpoint)?;
        Ok(match self.credentials(&config) {
            Some(credentials) => client.with_credentials(credentials),
            None => client,
        })
    }

    pub fn writer(&self) -> OutputWriter {
        OutputWriter::from_flag(self.json)
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Authenticate with lakeFS
    Auth(AuthCommand),

    /// Manage repositories
    #[command(visible_alias = "r")]
    Repo(RepoCommand),

    /// Manage branches
    #[command(visible_alias = "b")]
    Branch(BranchCommand),

    /// List, upload and link objects
    #[command(visible_alias = "obj")]
    Object(ObjectCommand),

    /// Show the commit log of a branch
    Log(LogArgs),

    /// Show changes between two refs, or uncommitted changes of a branch
    Diff(DiffArgs),

    /// Manage configuration
    Config(ConfigCommand),

    /// Show version information
    Version,
}
