//! Layout regions tracking for UI components
//!
//! Tracks where UI components are rendered for position-aware mouse interactions.

use ratatui::layout::Rect;

/// Identifies a UI component region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Input box, by index into `App::inputs`
    Input(usize),
    Tooltip,
    /// The ` X ` label in the tooltip title
    TooltipClose,
    HelpPopup,
    Alert,
}

/// Tracks rendered areas of UI components
///
/// Updated during each render pass. Popups are `None` when not visible.
#[derive(Default, Clone, Debug)]
pub struct LayoutRegions {
    pub inputs: Vec<Rect>,
    pub tooltip: Option<Rect>,
    pub tooltip_close: Option<Rect>,
    pub help_popup: Option<Rect>,
    pub alert: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all regions before a new render pass
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_resets_everything() {
        let mut regions = LayoutRegions::new();
        regions.inputs.push(Rect::new(0, 0, 10, 3));
        regions.tooltip = Some(Rect::new(5, 1, 10, 4));
        regions.tooltip_close = Some(Rect::new(11, 1, 3, 1));

        regions.clear();

        assert!(regions.inputs.is_empty());
        assert!(regions.tooltip.is_none());
        assert!(regions.tooltip_close.is_none());
    }
}
