//
//  lakefs-client
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pagination and Query Types
//!
//! lakeFS collections are ordered by id and paginated with an `after` cursor
//! (exclusive lower bound) and an `amount` page size. Every listing endpoint
//! answers with the same envelope:
//!
//! ```json
//! {
//!     "results": [{"id": "a"}, {"id": "b"}],
//!     "pagination": {"has_more": true, "next_offset": "b", "max_per_page": 2, "results": 2}
//! }
//! ```
//!
//! Query strings are produced from typed parameter structs implementing
//! [`QueryParams`]. Absent parameters are omitted and the remaining keys are
//! always emitted in the same order, so a given set of parameters maps to
//! exactly one query string.

use serde::{Deserialize, Serialize};

/// One page of an id-ordered collection.
///
/// # Type Parameters
///
/// - `T` - The type of items contained in `results`
///
/// # Example
///
/// ```rust
/// use lakefs_client::api::common::Page;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Item { id: String }
///
/// let json = r#"{
///     "results": [{"id": "a"}],
///     "pagination": {"has_more": false, "max_per_page": 100, "results": 1}
/// }"#;
///
/// let page: Page<Item> = serde_json::from_str(json).unwrap();
/// assert_eq!(page.results[0].id, "a");
/// assert!(!page.has_more());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items in ascending id order.
    pub results: Vec<T>,

    /// Window metadata reported alongside the items. Absent for unpaginated
    /// endpoints such as the commit log.
    #[serde(default)]
    pub pagination: Pagination,
}

impl<T> Page<T> {
    /// Returns `true` if more items exist beyond this page.
    pub fn has_more(&self) -> bool {
        self.pagination.has_more
    }

    /// Returns the cursor to pass as `after` for the next page.
    pub fn next_offset(&self) -> Option<&str> {
        self.pagination.next_offset.as_deref()
    }
}

/// Pagination metadata of a [`Page`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Whether more items exist beyond the returned window.
    #[serde(default)]
    pub has_more: bool,

    /// Cursor for the next page, when the server provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_offset: Option<String>,

    /// The largest page the server would return for this request.
    #[serde(default)]
    pub max_per_page: u32,

    /// Number of items in `results`.
    #[serde(default)]
    pub results: u32,
}

/// A typed set of query string parameters.
///
/// Implementors return their present parameters as ordered key/value pairs.
pub trait QueryParams {
    /// Returns the parameters to encode, in emission order.
    fn pairs(&self) -> Vec<(&'static str, String)>;

    /// Encodes the parameters as an `application/x-www-form-urlencoded`
    /// query string, without a leading `?`.
    fn to_query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.pairs() {
            serializer.append_pair(key, &value);
        }
        serializer.finish()
    }
}

/// Appends the encoded `params` to `path`, adding `?` only when needed.
///
/// # Example
///
/// ```rust
/// use lakefs_client::api::common::{with_query, ListParams};
///
/// assert_eq!(with_query("/repositories", &ListParams::default()), "/repositories");
/// assert_eq!(
///     with_query("/repositories", &ListParams::new(Some("a b"), Some(10))),
///     "/repositories?after=a+b&amount=10"
/// );
/// ```
pub fn with_query(path: &str, params: &impl QueryParams) -> String {
    let query = params.to_query_string();
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

/// Cursor parameters for listing an id-ordered collection.
///
/// Emitted as `after`, then `amount`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Exclusive lower bound: only ids sorting after this one are returned.
    pub after: Option<String>,
    /// Maximum number of items to return.
    pub amount: Option<u32>,
}

impl ListParams {
    /// Creates list parameters from optional borrowed values.
    pub fn new(after: Option<&str>, amount: Option<u32>) -> Self {
        Self {
            after: after.map(str::to_string),
            amount,
        }
    }
}

impl QueryParams for ListParams {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(after) = &self.after {
            pairs.push(("after", after.clone()));
        }
        if let Some(amount) = self.amount {
            pairs.push(("amount", amount.to_string()));
        }
        pairs
    }
}

/// Default page size used when listing objects.
pub const DEFAULT_OBJECT_PAGE: u32 = 1000;

/// Parameters for listing the objects under a tree prefix.
///
/// Emitted as `tree`, `amount`, `after`. `amount` and `after` are always
/// sent, defaulting to [`DEFAULT_OBJECT_PAGE`] and the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectListParams {
    /// Directory prefix to list, e.g. `"data/2020/"`.
    pub tree: String,
    /// Cursor: only paths sorting after this one are returned.
    pub after: String,
    /// Maximum number of entries to return.
    pub amount: u32,
}

impl ObjectListParams {
    /// Lists the first page under `tree`.
    pub fn new(tree: impl Into<String>) -> Self {
        Self {
            tree: tree.into(),
            after: String::new(),
            amount: DEFAULT_OBJECT_PAGE,
        }
    }

    /// Continues listing after `after`.
    pub fn after(mut self, after: impl Into<String>) -> Self {
        self.after = after.into();
        self
    }

    /// Sets the page size.
    pub fn amount(mut self, amount: u32) -> Self {
        self.amount = amount;
        self
    }
}

impl QueryParams for ObjectListParams {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("tree", self.tree.clone()),
            ("amount", self.amount.to_string()),
            ("after", self.after.clone()),
        ]
    }
}

/// Parameters of an object upload: the destination `path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadParams {
    pub path: String,
}

impl QueryParams for UploadParams {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        vec![("path", self.path.clone())]
    }
}

/// Parameters of a shareable download link: `path`, then `token`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkParams {
    pub path: String,
    pub token: String,
}

impl QueryParams for LinkParams {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        vec![("path", self.path.clone()), ("token", self.token.clone())]
    }
}
