//
//  lakefs-client
//  auth/session.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! In-memory session storage.
//!
//! A [`SessionStore`] plays the role of the cached login session: it starts
//! empty, is filled by [`Auth::login`](crate::api::Auth::login) when the
//! caller asks for it, and is then shared with the API client as its
//! [`CredentialProvider`].

use std::sync::RwLock;

use super::{CredentialProvider, Credentials};

/// Process-local holder for the credentials of the current session.
///
/// Reads take a short read lock and clone the credentials out, so the lock is
/// never held across an `.await`.
///
/// # Example
///
/// ```rust
/// use lakefs_client::auth::{CredentialProvider, Credentials, SessionStore};
///
/// let store = SessionStore::new();
/// assert!(store.credentials().is_none());
///
/// store.set(Credentials::new("key", "secret"));
/// assert_eq!(store.credentials().unwrap().access_key_id, "key");
///
/// store.clear();
/// assert!(store.credentials().is_none());
/// ```
#[derive(Debug, Default)]
pub struct SessionStore {
    current: RwLock<Option<Credentials>>,
}

impl SessionStore {
    /// Creates an empty session store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session store that already holds `credentials`.
    pub fn with_credentials(credentials: Credentials) -> Self {
        Self {
            current: RwLock::new(Some(credentials)),
        }
    }

    /// Replaces the stored credentials.
    pub fn set(&self, credentials: Credentials) {
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(credentials);
    }

    /// Forgets the stored credentials (logout).
    pub fn clear(&self) {
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        *guard = None;
    }
}

impl CredentialProvider for SessionStore {
    fn credentials(&self) -> Option<Credentials> {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_credentials() {
        let store = SessionStore::with_credentials(Credentials::new("a", "b"));
        assert_eq!(store.credentials(), Some(Credentials::new("a", "b")));
    }

    #[test]
    fn test_set_replaces_previous() {
        let store = SessionStore::new();
        store.set(Credentials::new("first", "x"));
        store.set(Credentials::new("second", "y"));
        assert_eq!(store.credentials().unwrap().access_key_id, "second");
    }
}
