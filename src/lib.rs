//
//  lakefs-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # lakeFS Client Library
//!
//! An async client for the lakeFS REST API together with the `lkfs`
//! command-line tool built on it.
//!
//! ## Features
//!
//! - **Request Executor**: HTTP Basic authentication, layered headers, JSON
//!   and multipart bodies
//! - **Typed Errors**: a closed [`ApiError`](api::ApiError) enum with the
//!   server's message extracted from failed responses
//! - **Resource Clients**: repositories, branches, objects, commits, diffs
//!   and login
//! - **Prefix Search**: `filter` over repositories and branches, built on
//!   cursor listing plus a point lookup
//!
//! ## Module Structure
//!
//! - [`api`]: HTTP client, resource clients and the prefix filter
//! - [`auth`]: Credentials, credential providers and download tokens
//! - [`cli`]: Command-line interface definitions using clap
//! - [`config`]: Configuration file management
//! - [`output`]: Output formatting (Table, JSON)
//! - [`util`]: Formatting helpers
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use lakefs_client::api::LakeFsClient;
//! use lakefs_client::auth::Credentials;
//!
//! let client = LakeFsClient::new("http://localhost:8000")?
//!     .with_credentials(Credentials::new("AKIAEXAMPLE", "secret"));
//!
//! let page = client.repositories().filter(Some("data-"), None).await?;
//! for repo in &page.results {
//!     println!("{}", repo.id);
//! }
//! ```

/// Command-line interface definitions.
///
/// Contains all CLI commands, arguments, and subcommands defined using the clap derive API.
pub mod cli;

/// API client for lakeFS.
///
/// The client handles authentication, request building, pagination, and error handling.
pub mod api;

/// Credentials and the seams through which the client obtains them.
pub mod auth;

/// Configuration management.
pub mod config;

/// Output formatting utilities.
pub mod output;

/// Formatting helpers shared by CLI commands.
pub mod util;

/// Re-export of the main CLI struct.
pub use cli::Cli;

/// Re-export of the configuration struct.
pub use config::Config;

/// Application name, used for the binary and configuration paths.
pub const APP_NAME: &str = "lkfs";

/// Application version, from `Cargo.toml`.
///
/// ```rust
/// use lakefs_client::VERSION;
///
/// println!("lkfs version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    pub const USAGE: i32 = 2;

    /// Login rejected or no credentials available.
    pub const AUTH_ERROR: i32 = 4;

    /// The requested resource does not exist.
    pub const NOT_FOUND: i32 = 8;

    /// Maps an error chain to an exit code.
    ///
    /// Looks for an [`ApiError`](crate::api::ApiError) anywhere in the chain,
    /// so errors wrapped with `anyhow::Context` still map correctly.
    pub fn for_error(error: &anyhow::Error) -> i32 {
        use crate::api::ApiError;

        match error
            .chain()
            .find_map(|cause| cause.downcast_ref::<ApiError>())
        {
            Some(ApiError::NotFound { .. }) => NOT_FOUND,
            Some(ApiError::Auth(_) | ApiError::MissingCredentials) => AUTH_ERROR,
            _ => ERROR,
        }
    }

}
