//! Mouse click handling

use super::app_state::App;
use crate::layout::Region;

/// Handle a left click on the given region
pub fn handle_click(app: &mut App, region: Option<Region>) {
    // The alert is modal; clicks never reach what is behind it
    if app.alert.is_visible() {
        return;
    }

    // Clicking outside the help popup closes it
    if app.tooltip.help.visible && region != Some(Region::HelpPopup) {
        app.tooltip.hide_help();
        return;
    }

    match region {
        Some(Region::TooltipClose) => app.tooltip.hide_help(),
        Some(Region::Input(index)) if index < app.inputs.len() => app.focused = index,
        _ => {}
    }
}
