//! Notification service that writes messages to the tracing log.

use super::NotificationService;

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotificationService;

impl TracingNotificationService {
    pub fn new() -> Self {
        Self
    }
}

impl NotificationService for TracingNotificationService {
    fn notify_user(&self, user_id: &str, message: &str) {
        tracing::info!(user_id = %user_id, notice = %message, "Notification sent");
    }
}
