//! Notification state management
//!
//! Transient messages about dispatched searches, navigation requests, and
//! configuration problems.

use ratatui::style::Color;
use std::time::{Duration, Instant};

use crate::theme;

/// Notification type - determines style and duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationType {
    /// Info - short duration (1.5s) - for confirmations like "Search sent"
    #[default]
    Info,
    /// Warning - long duration (10s) - for warnings like invalid config
    Warning,
    /// Error - permanent until dismissed - for a dead event channel
    Error,
}

impl NotificationType {
    fn duration(self) -> Option<Duration> {
        match self {
            NotificationType::Info => Some(Duration::from_millis(1500)),
            NotificationType::Warning => Some(Duration::from_secs(10)),
            NotificationType::Error => None,
        }
    }

    fn style(self) -> NotificationStyle {
        let colors = match self {
            NotificationType::Info => &theme::notification::INFO,
            NotificationType::Warning => &theme::notification::WARNING,
            NotificationType::Error => &theme::notification::ERROR,
        };
        NotificationStyle {
            fg: colors.fg,
            bg: colors.bg,
            border: colors.border,
        }
    }
}

/// Style configuration for a notification
#[derive(Debug, Clone)]
pub struct NotificationStyle {
    pub fg: Color,
    pub bg: Color,
    pub border: Color,
}

/// A single notification with message, timing, and style
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub style: NotificationStyle,
    pub notification_type: NotificationType,
    pub created_at: Instant,
    pub duration: Option<Duration>, // None = permanent
}

impl Notification {
    pub fn with_type(message: &str, notification_type: NotificationType) -> Self {
        Self {
            message: message.to_string(),
            style: notification_type.style(),
            notification_type,
            created_at: Instant::now(),
            duration: notification_type.duration(),
        }
    }

    pub fn is_expired(&self) -> bool {
        match self.duration {
            Some(d) => self.created_at.elapsed() > d,
            None => false,
        }
    }
}

/// Notification state manager for the application
#[derive(Debug, Default)]
pub struct NotificationState {
    pub current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: &str) {
        self.show_with_type(message, NotificationType::Info);
    }

    pub fn show_with_type(&mut self, message: &str, notification_type: NotificationType) {
        self.current = Some(Notification::with_type(message, notification_type));
    }

    pub fn show_warning(&mut self, message: &str) {
        self.show_with_type(message, NotificationType::Warning);
    }

    pub fn show_error(&mut self, message: &str) {
        self.show_with_type(message, NotificationType::Error);
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Clear expired notification, returns true if cleared
    pub fn clear_if_expired(&mut self) -> bool {
        if let Some(ref notif) = self.current
            && notif.is_expired()
        {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    #[cfg(test)]
    pub fn current_message(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_info_notification() {
        let notif = Notification::with_type("Search sent", NotificationType::Info);
        assert_eq!(notif.message, "Search sent");
        assert_eq!(notif.duration, Some(Duration::from_millis(1500)));
        assert_eq!(notif.style.bg, theme::notification::INFO.bg);
        assert!(!notif.is_expired());
    }

    #[test]
    fn test_warning_notification() {
        let mut state = NotificationState::new();
        state.show_warning("Invalid config");

        let notif = state.current().unwrap();
        assert_eq!(notif.notification_type, NotificationType::Warning);
        assert_eq!(notif.duration, Some(Duration::from_secs(10)));
        assert_eq!(notif.style.bg, theme::notification::WARNING.bg);
    }

    #[test]
    fn test_error_notification_never_expires() {
        let mut state = NotificationState::new();
        state.show_error("Event channel closed");

        let notif = state.current().unwrap();
        assert_eq!(notif.notification_type, NotificationType::Error);
        assert_eq!(notif.duration, None);
        assert!(!state.clear_if_expired());
        assert!(state.current().is_some());
    }

    #[test]
    fn test_dismiss() {
        let mut state = NotificationState::new();
        state.show_error("boom");
        state.dismiss();
        assert!(state.current().is_none());
    }

    #[test]
    fn test_clear_if_expired() {
        let mut state = NotificationState::new();
        state.show("Test");

        if let Some(ref mut notif) = state.current {
            notif.duration = Some(Duration::from_millis(10));
        }

        assert!(!state.clear_if_expired());
        thread::sleep(Duration::from_millis(20));
        assert!(state.clear_if_expired());
        assert!(state.current().is_none());
    }

    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// For any sequence of notification messages, only the most recent
        /// notification should be visible.
        #[test]
        fn prop_notification_replacement(messages in prop::collection::vec("[a-zA-Z0-9 ]{1,50}", 1..10)) {
            let mut state = NotificationState::new();

            for msg in &messages {
                state.show(msg);
            }

            let last_message = messages.last().unwrap();
            prop_assert_eq!(state.current_message(), Some(last_message.as_str()));
        }
    }
}
