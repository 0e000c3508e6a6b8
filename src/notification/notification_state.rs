//! Notification state management
//!
//! Provides structures for displaying transient notifications in the UI.

use ratatui::style::Color;
use std::time::{Duration, Instant};

use crate::theme;

/// Notification type - determines style and duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationType {
    /// Short-lived hint
    #[default]
    Info,
    /// Stays long enough to read, e.g. an invalid config file
    Warning,
}

impl NotificationType {
    fn duration(self) -> Duration {
        match self {
            NotificationType::Info => Duration::from_millis(1500),
            NotificationType::Warning => Duration::from_secs(10),
        }
    }

    fn style(self) -> NotificationStyle {
        let colors = match self {
            NotificationType::Info => theme::notification::INFO,
            NotificationType::Warning => theme::notification::WARNING,
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
    pub duration: Duration,
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
        self.created_at.elapsed() > self.duration
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

    /// Show an info notification (1.5s)
    pub fn show(&mut self, message: &str) {
        self.current = Some(Notification::with_type(message, NotificationType::Info));
    }

    /// Show a warning notification (10s)
    pub fn show_warning(&mut self, message: &str) {
        self.current = Some(Notification::with_type(message, NotificationType::Warning));
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
