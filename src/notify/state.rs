use std::time::{Duration, Instant};

use ratatui::style::Color;

/// Default toast lifetime in milliseconds
pub const DEFAULT_DURATION_MS: u64 = 3000;

/// Handle for dismissing a sticky notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationId(u64);

/// Notification severity tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn color(self) -> Color {
        match self {
            Severity::Success => Color::Green,
            Severity::Error => Color::Red,
            Severity::Warning => Color::Yellow,
            Severity::Info => Color::Blue,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Error => "✗",
            Severity::Warning => "!",
            Severity::Info => "i",
        }
    }
}

/// A transient message with severity and auto-expiry
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    pub message: String,
    pub severity: Severity,
    /// None means sticky: never auto-dismissed
    duration: Option<Duration>,
    created: Instant,
}

impl Notification {
    pub fn is_expired(&self, now: Instant) -> bool {
        match self.duration {
            Some(duration) => now.duration_since(self.created) >= duration,
            None => false,
        }
    }
}

/// All live notifications, in append order
pub struct NotificationState {
    notifications: Vec<Notification>,
    next_id: u64,
}

impl Default for NotificationState {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationState {
    pub fn new() -> Self {
        Self {
            notifications: Vec::new(),
            next_id: 0,
        }
    }

    /// Push a notification with the default lifetime
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> NotificationId {
        self.push_with_duration(message, severity, DEFAULT_DURATION_MS)
    }

    /// Push a notification with an explicit lifetime in milliseconds.
    /// A duration of 0 creates a sticky notification that lives until
    /// `dismiss` is called; used for "in progress" states.
    pub fn push_with_duration(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        duration_ms: u64,
    ) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        let duration = (duration_ms > 0).then(|| Duration::from_millis(duration_ms));
        self.notifications.push(Notification {
            id,
            message: message.into(),
            severity,
            duration,
            created: Instant::now(),
        });
        id
    }

    /// Remove one notification by handle; missing handles are a no-op
    pub fn dismiss(&mut self, id: NotificationId) {
        self.notifications.retain(|n| n.id != id);
    }

    /// Drop every notification whose lifetime has elapsed
    pub fn tick(&mut self, now: Instant) {
        self.notifications.retain(|n| !n.is_expired(now));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    #[cfg(test)]
    pub fn messages(&self) -> Vec<&str> {
        self.notifications.iter().map(|n| n.message.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_push_uses_default_duration() {
        let mut state = NotificationState::new();
        state.push("saved", Severity::Success);
        let n = state.iter().next().unwrap();
        assert_eq!(n.duration, Some(Duration::from_millis(DEFAULT_DURATION_MS)));
    }

    #[test]
    fn test_default_duration_expires_after_3000ms() {
        let mut state = NotificationState::new();
        state.push("saved", Severity::Success);
        let created = state.iter().next().unwrap().created;

        state.tick(created + Duration::from_millis(2999));
        assert_eq!(state.len(), 1);

        state.tick(created + Duration::from_millis(3000));
        assert!(state.is_empty());
    }

    #[test]
    fn test_sticky_notification_never_expires() {
        let mut state = NotificationState::new();
        let id = state.push_with_duration("working...", Severity::Info, 0);
        let created = state.iter().next().unwrap().created;

        state.tick(created + Duration::from_secs(3600));
        assert_eq!(state.len(), 1);

        state.dismiss(id);
        assert!(state.is_empty());
    }

    #[test]
    fn test_dismiss_unknown_id_is_noop() {
        let mut state = NotificationState::new();
        let id = state.push_with_duration("working...", Severity::Info, 0);
        state.dismiss(id);
        // Dismissing again must not panic or remove anything else
        state.push("done", Severity::Success);
        state.dismiss(id);
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_notifications_stack_in_append_order() {
        let mut state = NotificationState::new();
        state.push("first", Severity::Info);
        state.push("second", Severity::Error);
        state.push("third", Severity::Success);
        assert_eq!(state.messages(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_severity_colors_are_distinct() {
        let colors = [
            Severity::Success.color(),
            Severity::Error.color(),
            Severity::Warning.color(),
            Severity::Info.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    // For any positive duration, a notification is alive strictly before
    // its deadline and removed at or after it; duration 0 never expires.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_expiry_respects_duration(duration_ms in 1u64..60_000, elapsed_ms in 0u64..120_000) {
            let mut state = NotificationState::new();
            state.push_with_duration("msg", Severity::Info, duration_ms);
            let created = state.iter().next().unwrap().created;

            state.tick(created + Duration::from_millis(elapsed_ms));
            let expected_alive = elapsed_ms < duration_ms;
            prop_assert_eq!(state.len() == 1, expected_alive);
        }

        #[test]
        fn prop_sticky_survives_any_elapsed_time(elapsed_ms in 0u64..600_000) {
            let mut state = NotificationState::new();
            state.push_with_duration("msg", Severity::Warning, 0);
            let created = state.iter().next().unwrap().created;

            state.tick(created + Duration::from_millis(elapsed_ms));
            prop_assert_eq!(state.len(), 1);
        }
    }
}
