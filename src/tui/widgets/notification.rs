//! Toast notification widget
//!
//! Short non-blocking messages: a missing month selection, a request that
//! is still running, a finished export. Failures use the error dialog.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    /// Informational message, e.g. a request still running
    Info,
    /// A finished action such as a saved export
    Success,
    /// Something the user has to fix first
    Warning,
}

impl NotificationType {
    /// Border and title color for this notification type
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
        }
    }

    /// Title shown in the toast border
    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => "i Info",
            Self::Success => "+ Done",
            Self::Warning => "! Notice",
        }
    }

    /// How long a toast of this type stays up
    fn lifetime(&self) -> Duration {
        match self {
            Self::Success => Duration::from_secs(5),
            _ => Duration::from_secs(3),
        }
    }
}

/// A toast notification
#[derive(Debug, Clone)]
pub struct Notification {
    /// The notification message
    pub message: String,
    /// Type of notification
    pub notification_type: NotificationType,
    /// When the notification was raised (for auto-dismiss)
    pub created_at: Instant,
}

impl Notification {
    /// Create a new notification
    pub fn new(message: impl Into<String>, notification_type: NotificationType) -> Self {
        Self {
            message: message.into(),
            notification_type,
            created_at: Instant::now(),
        }
    }

    /// Create an info notification
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Info)
    }

    /// Create a success notification
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Success)
    }

    /// Create a warning notification
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Warning)
    }

    /// Check if the notification has outlived its type's lifetime
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.notification_type.lifetime()
    }
}

/// Widget for rendering a notification
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationWidget<'a> {
    /// Create a new notification widget
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }
}

impl<'a> Widget for NotificationWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let kind = self.notification.notification_type;
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(kind.color()))
            .title(format!(" {} ", kind.title()))
            .title_style(Style::default().fg(kind.color()).add_modifier(Modifier::BOLD));

        Paragraph::new(self.notification.message.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

/// Notifications waiting to be shown, oldest first
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    /// Create an empty notification queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a notification; an identical pending message is not repeated
    pub fn push(&mut self, notification: Notification) {
        let duplicate = self.notifications.iter().any(|n| {
            n.notification_type == notification.notification_type
                && n.message == notification.message
        });
        if !duplicate {
            self.notifications.push(notification);
        }
    }

    /// Remove expired notifications
    pub fn remove_expired(&mut self) {
        self.notifications.retain(|n| !n.is_expired());
    }

    /// The notification to display (if any)
    pub fn current(&self) -> Option<&Notification> {
        self.notifications.first()
    }

    /// Check if there are any notifications
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Get the number of pending notifications
    pub fn len(&self) -> usize {
        self.notifications.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_is_fifo() {
        let mut queue = NotificationQueue::new();
        assert!(queue.is_empty());

        queue.push(Notification::warning("Please select a month"));
        queue.push(Notification::success("Saved report.pdf"));

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.current().unwrap().message, "Please select a month");
    }

    #[test]
    fn test_repeated_message_collapses() {
        let mut queue = NotificationQueue::new();
        queue.push(Notification::warning("Please select a month"));
        queue.push(Notification::warning("Please select a month"));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_expired_notifications_removed() {
        let mut queue = NotificationQueue::new();
        let mut stale = Notification::info("old");
        stale.created_at = Instant::now() - Duration::from_secs(10);
        queue.push(stale);
        queue.push(Notification::info("fresh"));

        queue.remove_expired();

        assert_eq!(queue.len(), 1);
        assert_eq!(queue.current().unwrap().message, "fresh");
    }
}
