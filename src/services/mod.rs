//! Collaborator services
//!
//! Capabilities the library manager consumes but does not own: looking up
//! whether a reader may borrow, and delivering messages to readers.

mod notifier;
mod user_directory;

pub use notifier::TracingNotificationService;
pub use user_directory::InMemoryUserDirectory;

/// Reader activity lookup
pub trait UserService: Send + Sync {
    /// Whether the reader is currently allowed to borrow
    fn is_user_active(&self, user_id: &str) -> bool;
}

/// Message delivery to readers. Fire-and-forget.
pub trait NotificationService: Send + Sync {
    fn notify_user(&self, user_id: &str, message: &str);
}
