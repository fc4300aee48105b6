//! Notification module for formfill
//!
//! Provides a reusable toast system that displays transient messages.
//! Any component in the application can push notifications; they stack in
//! append order and expire on their own unless created sticky.

mod notify_render;
mod state;

pub use notify_render::render_notifications;
pub use state::{DEFAULT_DURATION_MS, Notification, NotificationId, NotificationState, Severity};
