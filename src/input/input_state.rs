use ratatui::style::Style;
use tui_textarea::TextArea;

use crate::tooltip::InputSnapshot;

/// One interpreter input box: the line being edited plus what was committed
pub struct InputState {
    pub uid: String,
    pub textarea: TextArea<'static>,
    pub transcript: Vec<String>,
    pub scroll_offset: usize,
}

fn new_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea
}

impl InputState {
    pub fn new(uid: &str) -> Self {
        Self {
            uid: uid.to_string(),
            textarea: new_textarea(),
            transcript: Vec::new(),
            scroll_offset: 0,
        }
    }

    /// Display id of the field, `in_<uid>`
    pub fn field_id(&self) -> String {
        format!("in_{}", self.uid)
    }

    pub fn text(&self) -> &str {
        self.textarea.lines().first().map(String::as_str).unwrap_or("")
    }

    /// End of the selection in characters, or the cursor column without one
    pub fn selection_end(&self) -> usize {
        match self.textarea.selection_range() {
            Some((_, (_, end_col))) => end_col,
            None => self.textarea.cursor().1,
        }
    }

    pub fn snapshot(&self) -> InputSnapshot<'_> {
        InputSnapshot {
            uid: &self.uid,
            text: self.text(),
            selection_end: self.selection_end(),
        }
    }

    /// Insert pasted text, flattened to one line
    pub fn paste(&mut self, text: &str) {
        let flattened: String = text
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();
        self.textarea.insert_str(flattened);
    }

    /// Move the current line into the transcript and start a fresh one
    pub fn commit_line(&mut self) -> String {
        let line = self.text().to_string();
        self.transcript.push(line.clone());
        self.textarea = new_textarea();
        self.scroll_offset = 0;
        line
    }

    /// Keep the cursor inside a viewport `viewport_width` characters wide
    pub fn calculate_scroll_offset(&mut self, viewport_width: usize) {
        if viewport_width == 0 {
            self.scroll_offset = 0;
            return;
        }

        let cursor_col = self.textarea.cursor().1;
        let text_length = self.text().chars().count();
        let mut new_scroll = self.scroll_offset;

        if cursor_col < new_scroll {
            new_scroll = cursor_col;
        } else if cursor_col >= new_scroll + viewport_width {
            new_scroll = cursor_col + 1 - viewport_width;
        }

        if text_length < new_scroll + viewport_width {
            let min_scroll = text_length.saturating_sub(viewport_width);
            let max_scroll_for_cursor = cursor_col.saturating_sub(viewport_width - 1);
            new_scroll = new_scroll.min(min_scroll.max(max_scroll_for_cursor));
        }

        self.scroll_offset = new_scroll;
    }
}
