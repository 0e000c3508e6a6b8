use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::tooltip_state::TooltipState;
use crate::theme;
use crate::widgets::popup;

const TOOLTIP_MIN_WIDTH: u16 = 30;
const TOOLTIP_BORDER: u16 = 2;
const TOOLTIP_MARGIN: u16 = 2;
const CLOSE_LABEL: &str = " X ";

/// Screen areas of a rendered tooltip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooltipAreas {
    pub popup: Rect,
    /// Close affordance in the top border, when shown
    pub close: Option<Rect>,
}

/// Break text into display lines no wider than `width` characters
///
/// Hard line breaks are kept; long lines are split at the width without
/// looking for word boundaries, since listings and signatures rarely have
/// useful ones.
pub fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for raw in text.split('\n') {
        let chars: Vec<char> = raw.chars().collect();
        if chars.is_empty() {
            lines.push(String::new());
            continue;
        }
        for chunk in chars.chunks(width) {
            lines.push(chunk.iter().collect());
        }
    }

    lines
}

/// Render the tooltip in the top-right corner, half the screen wide
///
/// Returns the popup and close affordance areas for click tracking.
pub fn render_popup(state: &TooltipState, frame: &mut Frame) -> Option<TooltipAreas> {
    if !state.is_visible() {
        return None;
    }

    let frame_area = frame.area();
    if frame_area.width < TOOLTIP_MIN_WIDTH + TOOLTIP_MARGIN || frame_area.height < 5 {
        return None;
    }

    let popup_width = (frame_area.width / 2).max(TOOLTIP_MIN_WIDTH);
    let text_width = popup_width.saturating_sub(TOOLTIP_BORDER + 2) as usize;
    let wrapped = wrap_lines(&state.content(), text_width);

    let max_height = frame_area.height.saturating_sub(TOOLTIP_MARGIN);
    let popup_height = (wrapped.len() as u16 + TOOLTIP_BORDER).min(max_height);

    let popup_area = popup::top_right_popup(frame_area, popup_width, popup_height, TOOLTIP_MARGIN, 1);
    popup::clear_area(frame, popup_area);

    let lines: Vec<Line> = wrapped
        .into_iter()
        .map(|line| {
            Line::from(Span::styled(
                format!(" {}", line),
                Style::default().fg(theme::tooltip::TEXT),
            ))
        })
        .collect();

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Line::from(Span::styled(" Tooltip ", theme::tooltip::TITLE)))
        .border_style(Style::default().fg(theme::tooltip::BORDER))
        .style(Style::default().bg(theme::tooltip::BACKGROUND));

    let close = if state.close_visible() {
        block = block.title_top(Line::from(Span::styled(CLOSE_LABEL, theme::tooltip::CLOSE)).right_aligned());
        Some(close_area(popup_area))
    } else {
        None
    };

    frame.render_widget(Paragraph::new(Text::from(lines)).block(block), popup_area);

    Some(TooltipAreas {
        popup: popup_area,
        close,
    })
}

/// Where a right-aligned close label lands in the top border
fn close_area(popup_area: Rect) -> Rect {
    let label_width = CLOSE_LABEL.len() as u16;
    Rect {
        x: popup_area.x + popup_area.width.saturating_sub(label_width + 1),
        y: popup_area.y,
        width: label_width,
        height: 1,
    }
}
