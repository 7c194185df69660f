//
//  lakefs-client
//  api/filter.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Prefix Search over Id-Ordered Collections
//!
//! The listing endpoints only support a cursor (`after`), not a prefix
//! query. [`filter`] builds prefix search on top of them by combining two
//! requests:
//!
//! 1. a forward scan of [`FILTER_WINDOW`] items starting after the prefix, and
//! 2. a point lookup of the prefix itself, since `after` is exclusive and
//!    would otherwise hide an item whose id equals the prefix.
//!
//! The scan is trimmed to items that actually start with the prefix, and the
//! point match, if any, is placed first.
//!
//! ## Example
//!
//! Given repositories `a`, `ab`, `abc`, `b`:
//!
//! ```rust,ignore
//! let page = client.repositories().filter(Some("ab"), None).await?;
//! let ids: Vec<_> = page.results.iter().map(|r| r.id.as_str()).collect();
//! assert_eq!(ids, ["ab", "abc"]);
//! ```

use async_trait::async_trait;
use tracing::trace;

use super::common::{ApiError, Page, Pagination};

/// Number of items scanned by a prefix search, and the `max_per_page` it
/// reports.
pub const FILTER_WINDOW: u32 = 1000;

/// An item identified by a string id unique within its collection.
pub trait Identified {
    /// Returns the item's id.
    fn id(&self) -> &str;
}

/// A collection sorted by id that supports cursor listing and point lookups.
///
/// Implemented by the repository and branch clients; tests implement it
/// in memory.
#[async_trait]
pub trait OrderedCollection: Send + Sync {
    /// The item type of the collection.
    type Item: Identified + Send;

    /// Lists up to `amount` items whose ids sort after `after`.
    async fn list(&self, after: Option<&str>, amount: Option<u32>)
        -> Result<Page<Self::Item>, ApiError>;

    /// Fetches the item with exactly this id.
    ///
    /// Must fail with [`ApiError::NotFound`] when the item does not exist.
    async fn get(&self, id: &str) -> Result<Self::Item, ApiError>;
}

/// Searches `collection` for items whose id starts with `from`.
///
/// With an absent or empty `from` this is exactly
/// `collection.list(from, amount)`.
///
/// Otherwise the returned page holds the item whose id equals `from` (when
/// it exists) followed by the scanned items whose ids start with `from`, in
/// ascending order and without duplicates.
///
/// # Pagination
///
/// - `has_more` is set only when all [`FILTER_WINDOW`] scanned items matched
///   and the server reported more data
/// - `max_per_page` is always [`FILTER_WINDOW`]; `amount` is not used to
///   size the scan
/// - `results` is the number of returned items
///
/// # Errors
///
/// Listing errors propagate. A `NotFound` from the point lookup only means
/// there is no exact match; any other point lookup error propagates and no
/// partial page is returned.
pub async fn filter<C>(
    collection: &C,
    from: Option<&str>,
    amount: Option<u32>,
) -> Result<Page<C::Item>, ApiError>
where
    C: OrderedCollection + ?Sized,
{
    let prefix = match from {
        Some(prefix) if !prefix.is_empty() => prefix,
        _ => return collection.list(from, amount).await,
    };

    let (listing, lookup) = tokio::join!(
        collection.list(Some(prefix), Some(FILTER_WINDOW)),
        collection.get(prefix),
    );

    let listing = listing?;
    let exact = match lookup {
        Ok(item) => Some(item),
        Err(ApiError::NotFound { .. }) => None,
        Err(e) => return Err(e),
    };

    Ok(merge(prefix, listing, exact))
}

/// Combines a forward scan and an optional exact match into one page.
fn merge<T: Identified>(prefix: &str, listing: Page<T>, exact: Option<T>) -> Page<T> {
    let server_has_more = listing.pagination.has_more;
    let scanned = listing.results.len();

    let matching: Vec<T> = listing
        .results
        .into_iter()
        .filter(|item| item.id().starts_with(prefix))
        .collect();

    // Judged on the scanned window, before the exact match is deduplicated.
    let has_more = matching.len() == FILTER_WINDOW as usize && server_has_more;

    let matching: Vec<T> = matching
        .into_iter()
        .filter(|item| exact.is_none() || item.id() != prefix)
        .collect();

    trace!(
        prefix,
        scanned,
        matching = matching.len(),
        exact = exact.is_some(),
        "merged prefix search"
    );

    let mut results = Vec::with_capacity(matching.len() + 1);
    results.extend(exact);
    results.extend(matching);

    let next_offset = if has_more {
        results.last().map(|item| item.id().to_string())
    } else {
        None
    };

    Page {
        pagination: Pagination {
            has_more,
            next_offset,
            max_per_page: FILTER_WINDOW,
            results: results.len() as u32,
        },
        results,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::api::common::ResourceKind;

    #[derive(Debug, Clone, PartialEq)]
    struct Item(String);

    impl Identified for Item {
        fn id(&self) -> &str {
            &self.0
        }
    }

    /// A sorted in-memory collection with lakeFS cursor semantics.
    struct Memory {
        ids: Vec<String>,
        lookup_error: Option<fn() -> ApiError>,
        lists: AtomicUsize,
    }

    impl Memory {
        fn new(ids: &[&str]) -> Self {
            let mut ids: Vec<String> = ids.iter().map(|s| s.to_string()).collect();
            ids.sort();
            Self {
                ids,
                lookup_error: None,
                lists: AtomicUsize::new(0),
            }
        }

        fn failing_lookup(mut self, error: fn() -> ApiError) -> Self {
            self.lookup_error = Some(error);
            self
        }
    }

    #[async_trait]
    impl OrderedCollection for Memory {
        type Item = Item;

        async fn list(
            &self,
            after: Option<&str>,
            amount: Option<u32>,
        ) -> Result<Page<Item>, ApiError> {
            self.lists.fetch_add(1, Ordering::SeqCst);
            let amount = amount.unwrap_or(100) as usize;
            let after = after.unwrap_or("");
            let remaining: Vec<&String> = self
                .ids
                .iter()
                .filter(|id| after.is_empty() || id.as_str() > after)
                .collect();
            let results: Vec<Item> = remaining
                .iter()
                .take(amount)
                .map(|id| Item(id.to_string()))
                .collect();
            Ok(Page {
                pagination: Pagination {
                    has_more: remaining.len() > amount,
                    next_offset: None,
                    max_per_page: amount as u32,
                    results: results.len() as u32,
                },
                results,
            })
        }

        async fn get(&self, id: &str) -> Result<Item, ApiError> {
            if let Some(error) = self.lookup_error {
                return Err(error());
            }
            self.ids
                .iter()
                .find(|candidate| candidate.as_str() == id)
                .map(|id| Item(id.clone()))
                .ok_or_else(|| ApiError::NotFound {
                    kind: ResourceKind::Repository,
                    id: id.to_string(),
                })
        }
    }

    fn ids(page: &Page<Item>) -> Vec<&str> {
        page.results.iter().map(|item| item.id()).collect()
    }

    #[tokio::test]
    async fn test_exact_match_first_without_duplicates() {
        let collection = Memory::new(&["a", "ab", "abc", "b"]);
        let page = filter(&collection, Some("ab"), None).await.unwrap();

        assert_eq!(ids(&page), vec!["ab", "abc"]);
        assert_eq!(page.pagination.results, 2);
        assert_eq!(page.pagination.max_per_page, FILTER_WINDOW);
        assert!(!page.has_more());
    }

    #[tokio::test]
    async fn test_missing_exact_match() {
        let collection = Memory::new(&["a", "ab1", "ab2", "b"]);
        let page = filter(&collection, Some("ab"), Some(10)).await.unwrap();

        assert_eq!(ids(&page), vec!["ab1", "ab2"]);
        assert_eq!(page.pagination.results, 2);
    }

    #[tokio::test]
    async fn test_no_matches() {
        let collection = Memory::new(&["a", "b", "c"]);
        let page = filter(&collection, Some("x"), None).await.unwrap();

        assert!(page.results.is_empty());
        assert_eq!(page.pagination.results, 0);
        assert!(!page.has_more());
    }

    #[tokio::test]
    async fn test_empty_prefix_is_plain_list() {
        let collection = Memory::new(&["a", "b", "c"]);

        let listed = collection.list(None, Some(2)).await.unwrap();
        let empty = filter(&collection, Some(""), Some(2)).await.unwrap();
        let absent = filter(&collection, None, Some(2)).await.unwrap();

        assert_eq!(empty, listed);
        assert_eq!(absent, listed);
        assert!(absent.has_more());
    }

    #[tokio::test]
    async fn test_lookup_error_propagates() {
        let collection = Memory::new(&["ab", "abc"])
            .failing_lookup(|| ApiError::Generic("could not get repository: boom".into()));

        let err = filter(&collection, Some("ab"), None).await.unwrap_err();
        assert!(matches!(err, ApiError::Generic(msg) if msg.contains("boom")));
    }

    #[tokio::test]
    async fn test_has_more_when_window_saturated() {
        let ids: Vec<String> = (0..1500).map(|i| format!("p{:05}", i)).collect();
        let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        let collection = Memory::new(&refs);

        let page = filter(&collection, Some("p"), Some(5)).await.unwrap();
        assert_eq!(page.results.len(), FILTER_WINDOW as usize);
        assert!(page.has_more());
        assert_eq!(page.next_offset(), Some("p00999"));
        assert_eq!(page.pagination.max_per_page, FILTER_WINDOW);
    }

    #[tokio::test]
    async fn test_no_more_when_window_partially_matches() {
        let mut ids: Vec<String> = (0..600).map(|i| format!("p{:04}", i)).collect();
        ids.extend((0..600).map(|i| format!("q{:04}", i)));
        let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        let collection = Memory::new(&refs);

        let page = filter(&collection, Some("p"), None).await.unwrap();
        assert_eq!(page.results.len(), 600);
        assert!(!page.has_more());
        assert_eq!(page.next_offset(), None);
    }

    #[tokio::test]
    async fn test_idempotent() {
        let collection = Memory::new(&["main", "main-2", "mainline", "dev"]);

        let first = filter(&collection, Some("main"), Some(3)).await.unwrap();
        let second = filter(&collection, Some("main"), Some(3)).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(ids(&first), vec!["main", "main-2", "mainline"]);
        assert_eq!(collection.lists.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_merge_drops_duplicate_exact_match() {
        let listing = Page {
            results: vec![Item("ab".into()), Item("abc".into()), Item("b".into())],
            pagination: Pagination {
                has_more: false,
                next_offset: None,
                max_per_page: FILTER_WINDOW,
                results: 3,
            },
        };

        let page = merge("ab", listing, Some(Item("ab".into())));
        assert_eq!(ids(&page), vec!["ab", "abc"]);
        assert_eq!(page.pagination.results, 2);
    }

    #[test]
    fn test_merge_saturated_window_containing_exact_match() {
        let mut results = vec![Item("p".into())];
        results.extend((0..FILTER_WINDOW - 1).map(|i| Item(format!("p{:04}", i))));
        let listing = Page {
            results,
            pagination: Pagination {
                has_more: true,
                next_offset: None,
                max_per_page: FILTER_WINDOW,
                results: FILTER_WINDOW,
            },
        };

        let page = merge("p", listing, Some(Item("p".into())));
        assert_eq!(page.results.len(), FILTER_WINDOW as usize);
        assert_eq!(ids(&page)[..2], ["p", "p0000"]);
        assert!(page.has_more());
        assert_eq!(page.next_offset(), Some("p0998"));
        assert_eq!(page.pagination.results, FILTER_WINDOW);
    }

    #[test]
    fn test_merge_counts_prepended_match() {
        let listing = Page {
            results: vec![Item("ab1".into())],
            pagination: Pagination::default(),
        };

        let with_exact = merge("ab", listing.clone(), Some(Item("ab".into())));
        assert_eq!(with_exact.pagination.results, 2);

        let without_exact = merge("ab", listing, None);
        assert_eq!(without_exact.pagination.results, 1);
    }
}
