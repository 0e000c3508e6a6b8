use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::theme;

macro_rules! hints {
    ($($key:literal => $desc:literal),+ $(,)?) => {
        vec![$(($key, $desc)),+]
    };
}

fn get_context_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.alert.is_visible() {
        hints!["Enter/Esc" => "Dismiss"]
    } else if app.tooltip.help.visible {
        hints!["Esc/F1/q" => "Close help", "Ctrl+C" => "Quit"]
    } else if app.tooltip.state.is_visible() {
        hints!["F1" => "Help", "Esc/Ctrl+T" => "Hide tooltip", "Tab" => "Next input", "Ctrl+C" => "Quit"]
    } else {
        hints!["F1" => "Help", "(" => "Doc", "." => "Dir", "Tab" => "Next input", "Ctrl+C" => "Quit"]
    }
}

fn build_styled_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(theme::help_line::KEY);
    let desc_style = Style::default().fg(theme::help_line::DESCRIPTION);
    let sep_style = Style::default().fg(theme::help_line::SEPARATOR);

    let mut spans = Vec::with_capacity(hints.len() * 4 + 1);
    spans.push(Span::raw(" "));

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2022} ", sep_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, desc_style));
    }

    spans
}

pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_context_hints(app);
    let spans = build_styled_spans(&hints);
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
