//! Tooltip state management
//!
//! Visibility of the tooltip region and its close affordance, plus the text
//! currently placed in it.

/// Content of the tooltip region while nothing is shown
pub const PLACEHOLDER: &str = " ";

#[derive(Debug, Default)]
pub struct TooltipState {
    visible: bool,
    close_visible: bool,
    /// Text pieces in arrival order, kept verbatim
    segments: Vec<String>,
}

impl TooltipState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text and make the tooltip and its close affordance visible
    pub fn append(&mut self, text: &str) {
        self.segments.push(text.to_string());
        self.visible = true;
        self.close_visible = true;
    }

    /// Hide the tooltip and its close affordance and drop the text
    pub fn clear(&mut self) {
        self.visible = false;
        self.close_visible = false;
        self.segments.clear();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn close_visible(&self) -> bool {
        self.close_visible
    }

    /// All appended text
    pub fn text(&self) -> String {
        self.segments.concat()
    }

    /// What the region holds right now, the placeholder when empty
    pub fn content(&self) -> String {
        if self.segments.is_empty() {
            PLACEHOLDER.to_string()
        } else {
            self.text()
        }
    }
}
