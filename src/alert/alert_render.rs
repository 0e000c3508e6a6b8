use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::alert_state::AlertState;
use crate::theme;
use crate::widgets::popup;

const ALERT_MAX_WIDTH: u16 = 70;
const ALERT_MAX_BODY_LINES: u16 = 12;
const ALERT_FOOTER: &str = "Enter / Esc to dismiss";

/// Render the alert centered over everything else
///
/// Returns the popup area, or `None` when nothing was drawn.
pub fn render_alert(frame: &mut Frame, alert: &AlertState) -> Option<Rect> {
    let message = alert.message()?;

    let frame_area = frame.area();
    let popup_width = ALERT_MAX_WIDTH.min(frame_area.width.saturating_sub(4));
    if popup_width < 10 || frame_area.height < 5 {
        return None;
    }

    let body_lines = message.lines().count().max(1) as u16;
    let popup_height = (body_lines.min(ALERT_MAX_BODY_LINES) + 4).min(frame_area.height);
    let popup_area = popup::centered_popup(frame_area, popup_width, popup_height);
    popup::clear_area(frame, popup_area);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .title(Line::from(Span::styled(" Lookup failed ", theme::alert::TITLE)))
        .border_style(Style::default().fg(theme::alert::BORDER))
        .style(Style::default().bg(theme::alert::BACKGROUND));

    if alert.pending() > 0 {
        block = block.title_bottom(
            Line::from(Span::styled(
                format!(" +{} more ", alert.pending()),
                Style::default().fg(theme::alert::FOOTER),
            ))
            .right_aligned(),
        );
    }

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::vertical([
        Constraint::Min(1),    // Message
        Constraint::Length(1), // Footer
    ])
    .split(inner);

    let lines: Vec<Line> = message
        .lines()
        .map(|line| {
            Line::from(Span::styled(
                line.to_string(),
                Style::default().fg(theme::alert::TEXT),
            ))
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false }),
        chunks[0],
    );

    let footer = Line::from(Span::styled(
        ALERT_FOOTER,
        Style::default().fg(theme::alert::FOOTER),
    ));
    frame.render_widget(Paragraph::new(footer).centered(), chunks[1]);

    Some(popup_area)
}
