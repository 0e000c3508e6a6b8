use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

use crate::help::{HELP_ENTRIES, HELP_FOOTER};
use crate::theme;
use crate::widgets::popup;

const KEY_COLUMN_WIDTH: usize = 18;

/// Render the help popup centered on screen
///
/// Returns the popup area for region tracking.
pub fn render_popup(frame: &mut Frame) -> Option<Rect> {
    let frame_area = frame.area();

    if frame_area.width < 40 || frame_area.height < 10 {
        return None;
    }

    let content_height = HELP_ENTRIES.len() as u16;
    let popup_width = 64u16.min(frame_area.width.saturating_sub(4));
    let popup_height = (content_height + 4).min(frame_area.height.saturating_sub(2));

    let popup_area = popup::centered_popup(frame_area, popup_width, popup_height);
    popup::clear_area(frame, popup_area);

    let outer_block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(Span::styled(
            " Keyboard Shortcuts ",
            theme::help::TITLE,
        )))
        .border_style(Style::default().fg(theme::help::BORDER))
        .style(Style::default().bg(theme::help::BACKGROUND));

    let inner_area = outer_block.inner(popup_area);
    frame.render_widget(outer_block, popup_area);

    let chunks = Layout::vertical([
        Constraint::Min(1),    // Entries
        Constraint::Length(1), // Footer
    ])
    .split(inner_area);

    frame.render_widget(Paragraph::new(Text::from(help_lines())), chunks[0]);

    let footer = Line::from(Span::styled(
        HELP_FOOTER,
        Style::default().fg(theme::help::FOOTER),
    ));
    frame.render_widget(Paragraph::new(footer).centered(), chunks[1]);

    Some(popup_area)
}

fn help_lines() -> Vec<Line<'static>> {
    HELP_ENTRIES
        .iter()
        .map(|(key, desc)| {
            if key.is_empty() {
                return Line::from("");
            }
            Line::from(vec![
                Span::styled(
                    format!("  {:width$}", key, width = KEY_COLUMN_WIDTH),
                    theme::help::KEY,
                ),
                Span::styled(*desc, Style::default().fg(theme::help::DESCRIPTION)),
            ])
        })
        .collect()
}
