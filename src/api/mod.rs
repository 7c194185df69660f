//
//  lakefs-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the HTTP client for the lakeFS REST API (`/api/v1`)
//! and one resource client per API area.
//!
//! ## Architecture
//!
//! - [`client`]: Request executor with authentication and header merging
//! - [`common`]: Errors, the error classifier, pagination and query types
//! - [`filter`]: Prefix search over id-ordered collections
//! - [`repositories`], [`branches`]: Collections that support prefix search
//! - [`objects`], [`commits`], [`refs`], [`auth`]: Remaining resources
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lakefs_client::api::LakeFsClient;
//! use lakefs_client::auth::Credentials;
//!
//! let client = LakeFsClient::new("http://localhost:8000")?
//!     .with_credentials(Credentials::new("AKIAEXAMPLE", "secret"));
//!
//! let page = client.branches("example").filter(Some("feature-"), None).await?;
//! for branch in page.results {
//!     println!("{}", branch.id);
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns `Result<_, ApiError>`:
//!
//! - `NotFound`: 404 from a `get`
//! - `Generic`: any other unexpected status, with the server's message
//! - `Auth`: login rejected (401) or failed otherwise
//! - `MissingCredentials`: nothing to authenticate with
//! - `Transport` / `Decode`: network and body decoding failures

/// Core HTTP client wrapper.
///
/// Provides [`LakeFsClient`], which handles:
/// - Endpoint and `/api/v1` prefix
/// - Authentication header injection
/// - Header merging and request bodies
pub mod client;

/// Types shared by all resource clients.
pub mod common;

pub mod filter;

pub mod auth;
pub mod branches;
pub mod commits;
pub mod objects;
pub mod refs;
pub mod repositories;

pub use auth::{Auth, Session, User};
pub use branches::{Branch, Branches, CreateBranch};
pub use client::{LakeFsClient, RequestBody, RequestOptions};
pub use commits::{Commit, Commits};
pub use common::{ApiError, AuthError, Page, Pagination, ResourceKind};
pub use filter::{Identified, OrderedCollection, FILTER_WINDOW};
pub use objects::{ObjectStats, Objects};
pub use refs::{Diff, Refs};
pub use repositories::{CreateRepository, Repositories, Repository};
