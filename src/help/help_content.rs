/// Keyboard shortcuts shown in the help popup
pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("F1", "Toggle this help"),
    ("Ctrl+C / Ctrl+D", "Quit"),
    ("Tab / Shift+Tab", "Next / previous input box"),
    ("Enter", "Commit the line and hide the tooltip"),
    ("Esc", "Hide the tooltip"),
    ("Ctrl+T", "Hide the tooltip"),
    ("", ""),
    ("(", "Show documentation for the call being typed"),
    (".", "Show members of the object being typed"),
    (")", "Hide the tooltip"),
    ("", ""),
    ("Click an input box", "Focus it"),
    ("Click tooltip X", "Close the tooltip and this help"),
];

pub const HELP_FOOTER: &str = "Esc / F1 / q to close";

