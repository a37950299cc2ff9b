//! In-memory user directory
//!
//! A `UserService` backed by a set of active reader ids.

use std::collections::HashSet;
use std::sync::{PoisonError, RwLock};

use super::UserService;

/// Readers are inactive until activated.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    active: RwLock<HashSet<String>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a directory where the given readers are active
    pub fn with_active<I, S>(user_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            active: RwLock::new(user_ids.into_iter().map(Into::into).collect()),
        }
    }

    pub fn activate(&self, user_id: impl Into<String>) {
        let user_id = user_id.into();
        tracing::debug!(user_id = %user_id, "Reader activated");
        self.active
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(user_id);
    }

    pub fn deactivate(&self, user_id: &str) {
        tracing::debug!(user_id = %user_id, "Reader deactivated");
        self.active
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(user_id);
    }
}

impl UserService for InMemoryUserDirectory {
    fn is_user_active(&self, user_id: &str) -> bool {
        self.active
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(user_id)
    }
}
