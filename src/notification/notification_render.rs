//! Notification rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::notification_state::NotificationState;
use crate::widgets::popup;

/// Render the notification overlay near the bottom-right corner
///
/// The top-right corner belongs to the tooltip, so notifications sit just
/// above the status line instead.
pub fn render_notification(frame: &mut Frame, notification: &mut NotificationState) {
    notification.clear_if_expired();

    let Some(notif) = notification.current() else {
        return;
    };

    let message = &notif.message;
    let style = &notif.style;

    let frame_area = frame.area();
    let margin = 2;
    let notification_width = (message.chars().count() as u16 + 4)
        .min(frame_area.width.saturating_sub(margin * 2));
    let notification_height = 3;

    let notification_area = Rect {
        x: frame_area.width.saturating_sub(notification_width + margin),
        y: frame_area.height.saturating_sub(notification_height + margin),
        width: notification_width,
        height: notification_height.min(frame_area.height),
    };

    if notification_area.width < 5 || frame_area.height < notification_height + margin {
        return;
    }

    popup::clear_area(frame, notification_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(style.border).bg(style.bg))
        .style(Style::default().bg(style.bg));

    let text = Line::from(Span::styled(
        format!(" {} ", message),
        Style::default().fg(style.fg).bg(style.bg),
    ));

    frame.render_widget(Paragraph::new(text).block(block), notification_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_string(notification: &mut NotificationState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| render_notification(f, notification))
            .unwrap();
        terminal.backend().to_string()
    }

    #[test]
    fn test_renders_message() {
        let mut notification = NotificationState::new();
        notification.show_warning("Invalid config: bad key");

        let output = render_to_string(&mut notification, 80, 24);
        assert!(output.contains("Invalid config: bad key"));
    }

    #[test]
    fn test_nothing_without_notification() {
        let mut notification = NotificationState::new();
        let output = render_to_string(&mut notification, 40, 10);
        assert!(!output.contains('┌'));
    }

    #[test]
    fn test_tiny_frame_is_skipped() {
        let mut notification = NotificationState::new();
        notification.show("hello");
        let output = render_to_string(&mut notification, 20, 3);
        assert!(!output.contains("hello"));
    }
}
