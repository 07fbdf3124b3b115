//! Notifications module - transient toast messages with auto-dismiss.

mod notification_model;
mod notification_service;

pub use notification_model::{Notification, NotificationId, NotificationLevel};
pub use notification_service::NotificationService;
