//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. Render files use
//! `theme::module::CONSTANT` instead of hardcoding `Color::*` values.

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(55, 55, 85);

    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const YELLOW: Color = Color::Rgb(255, 217, 61);
    pub const MAGENTA: Color = Color::Rgb(198, 120, 221);
    pub const RED: Color = Color::Rgb(224, 108, 117);

    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Interpreter input boxes
pub mod input {
    use super::*;

    pub const BORDER_FOCUSED: Color = palette::CYAN;
    pub const BORDER_UNFOCUSED: Color = palette::TEXT_DIM;
    pub const PROMPT: Color = palette::YELLOW;
    pub const TRANSCRIPT: Color = palette::TEXT_MUTED;
}

/// Doc/dir tooltip popup
pub mod tooltip {
    use super::*;

    pub const BORDER: Color = palette::MAGENTA;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const TITLE: Style = Style::new()
        .fg(palette::MAGENTA)
        .add_modifier(Modifier::BOLD);
    pub const TEXT: Color = palette::TEXT;
    pub const CLOSE: Style = Style::new()
        .fg(palette::YELLOW)
        .bg(Color::Rgb(51, 102, 153))
        .add_modifier(Modifier::BOLD);
}

/// Help popup
pub mod help {
    use super::*;

    pub const BORDER: Color = palette::CYAN;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const TITLE: Style = Style::new().fg(palette::CYAN).add_modifier(Modifier::BOLD);
    pub const KEY: Style = Style::new()
        .fg(palette::YELLOW)
        .add_modifier(Modifier::BOLD);
    pub const DESCRIPTION: Color = palette::TEXT;
    pub const FOOTER: Color = palette::TEXT_DIM;
}

/// Bottom status line with shortcut hints
pub mod help_line {
    use super::*;

    pub const KEY: Color = palette::TEXT_MUTED;
    pub const DESCRIPTION: Color = palette::TEXT_DIM;
    pub const SEPARATOR: Color = palette::TEXT_DIM;
}

/// Blocking alert popup
pub mod alert {
    use super::*;

    pub const BORDER: Color = palette::RED;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const TITLE: Style = Style::new().fg(palette::RED).add_modifier(Modifier::BOLD);
    pub const TEXT: Color = palette::TEXT;
    pub const FOOTER: Color = palette::TEXT_MUTED;
}

/// Transient notifications
pub mod notification {
    use super::*;

    pub struct NotificationColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
    }

    pub const INFO: NotificationColors = NotificationColors {
        fg: palette::TEXT,
        bg: palette::BG_HIGHLIGHT,
        border: palette::TEXT_MUTED,
    };

    pub const WARNING: NotificationColors = NotificationColors {
        fg: Color::Rgb(26, 26, 46),
        bg: palette::YELLOW,
        border: palette::YELLOW,
    };
}
