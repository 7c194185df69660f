//
//  lakefs-client
//  cli/auth.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Authentication commands for lkfs.

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};

use crate::api::{LakeFsClient, Session};
use crate::config::Config;
use crate::output::{print_field, print_header, TableOutput};
use crate::util::format_optional_time;

use super::GlobalOptions;

/// Authenticate with lakeFS
#[derive(Args, Debug)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSubcommand {
    /// Verify an access key pair and optionally save it
    Login(LoginArgs),
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Save the endpoint and credentials to the config file
    #[arg(long)]
    pub save: bool,
}

#[derive(serde::Serialize)]
struct LoginResult<'a> {
    endpoint: &'a str,
    access_key_id: &'a str,
    user: &'a crate::api::User,
    saved: bool,
}

impl TableOutput for LoginResult<'_> {
    fn print_table(&self, color: bool) {
        print_header("Logged in");
        print_field("Endpoint", self.endpoint, color);
        print_field("Access key", self.access_key_id, color);
        print_field("User", self.user.id.as_deref().unwrap_or("-"), color);
        print_field("Created", &format_optional_time(self.user.created_at), color);
        if self.saved {
            print_field("Saved to", "config file", color);
        }
    }
}

impl AuthCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            AuthSubcommand::Login(args) => self.login(args, global).await,
        }
    }

    async fn login(&self, args: &LoginArgs, global: &GlobalOptions) -> Result<()> {
        let mut config = Config::load()?;
        let endpoint = global.endpoint(&config);
        let Some(credentials) = global.credentials(&config) else {
            bail!(
                "No credentials given. Pass --access-key-id and --secret-access-key \
                 or set LKFS_ACCESS_KEY_ID and LKFS_SECRET_ACCESS_KEY"
            );
        };

        let client = LakeFsClient::new(&endpoint)?;
        let Session { credentials, user } = client
            .auth()
            .login(&credentials.access_key_id, &credentials.secret_access_key)
            .await
            .with_context(|| format!("Login to {} failed", endpoint))?;

        if args.save {
            config.server.endpoint = endpoint.clone();
            config.set_credentials(&credentials);
            config.save().context("Failed to save credentials")?;
        }

        global.writer().write(&LoginResult {
            endpoint: &endpoint,
            access_key_id: &credentials.access_key_id,
            user: &user,
            saved: args.save,
        })
    }
}
