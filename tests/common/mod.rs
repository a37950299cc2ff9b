//! Common test utilities

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use library_circulation::{LibraryManager, NotificationService, UserService};

/// UserService stub: answers from a fixed set and records every lookup
#[derive(Debug, Default)]
pub struct StubUserService {
    active: HashSet<String>,
    lookups: Mutex<Vec<String>>,
}

impl StubUserService {
    pub fn with_active(user_ids: &[&str]) -> Self {
        Self {
            active: user_ids.iter().map(|id| id.to_string()).collect(),
            lookups: Mutex::new(Vec::new()),
        }
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

impl UserService for StubUserService {
    fn is_user_active(&self, user_id: &str) -> bool {
        self.lookups.lock().unwrap().push(user_id.to_string());
        self.active.contains(user_id)
    }
}

/// NotificationService that keeps every (user, message) pair it was given
#[derive(Debug, Default)]
pub struct RecordingNotificationService {
    sent: Mutex<Vec<(String, String)>>,
}

impl RecordingNotificationService {
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

impl NotificationService for RecordingNotificationService {
    fn notify_user(&self, user_id: &str, message: &str) {
        self.sent
            .lock()
            .unwrap()
            .push((user_id.to_string(), message.to_string()));
    }
}

/// A manager wired to inspectable collaborators
pub struct Fixture {
    pub library: LibraryManager,
    pub users: Arc<StubUserService>,
    pub notifications: Arc<RecordingNotificationService>,
}

/// Three books with 5, 3 and 1 copies; the given readers are active
pub fn setup_library(active_users: &[&str]) -> Fixture {
    let users = Arc::new(StubUserService::with_active(active_users));
    let notifications = Arc::new(RecordingNotificationService::default());

    let mut library = LibraryManager::new(users.clone(), notifications.clone());
    library.add_book("availBookId1", 5);
    library.add_book("availBookId2", 3);
    library.add_book("availBookId3", 1);

    Fixture {
        library,
        users,
        notifications,
    }
}

pub fn sent(user_id: &str, message: &str) -> (String, String) {
    (user_id.to_string(), message.to_string())
}
