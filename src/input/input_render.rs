use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::InputState;
use crate::theme;

const PROMPT: &str = ">>> ";

/// Render one input box: committed transcript lines above the prompt line
pub fn render_input(input: &mut InputState, focused: bool, frame: &mut Frame, area: Rect) {
    let border_color = if focused {
        theme::input::BORDER_FOCUSED
    } else {
        theme::input::BORDER_UNFOCUSED
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", input.field_id()))
        .border_style(Style::default().fg(border_color));

    let inner_height = area.height.saturating_sub(2) as usize;
    let viewport_width = (area.width.saturating_sub(2) as usize).saturating_sub(PROMPT.len());
    input.calculate_scroll_offset(viewport_width);

    let history_rows = inner_height.saturating_sub(1);
    let skip = input.transcript.len().saturating_sub(history_rows);

    let mut lines: Vec<Line> = input.transcript[skip..]
        .iter()
        .map(|line| {
            Line::from(vec![
                Span::styled(PROMPT, Style::default().fg(theme::input::TRANSCRIPT)),
                Span::styled(line.clone(), Style::default().fg(theme::input::TRANSCRIPT)),
            ])
        })
        .collect();
    lines.push(prompt_line(input, focused, viewport_width));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn prompt_line(input: &InputState, focused: bool, viewport_width: usize) -> Line<'static> {
    let visible: Vec<char> = input
        .text()
        .chars()
        .skip(input.scroll_offset)
        .take(viewport_width)
        .collect();

    let mut spans = vec![Span::styled(
        PROMPT,
        Style::default().fg(theme::input::PROMPT),
    )];

    if !focused {
        spans.push(Span::raw(visible.into_iter().collect::<String>()));
        return Line::from(spans);
    }

    let cursor = input.textarea.cursor().1.saturating_sub(input.scroll_offset);
    let before: String = visible.iter().take(cursor).collect();
    spans.push(Span::raw(before));

    match visible.get(cursor) {
        Some(c) => {
            spans.push(Span::styled(c.to_string(), theme::palette::CURSOR));
            let after: String = visible.iter().skip(cursor + 1).collect();
            spans.push(Span::raw(after));
        }
        None => spans.push(Span::styled(" ", theme::palette::CURSOR)),
    }

    Line::from(spans)
}
