//! Key dispatch table
//!
//! Each accepted key code (or character code, for key code 0) maps to one
//! action. Several platforms report the same keys differently, so a key can
//! appear more than once under different codes.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::KeyEventMode;
use crate::lookup::LookupKind;

/// Key codes understood by the dispatch table
pub mod codes {
    pub const ENTER: u32 = 13;
    pub const ESCAPE: u32 = 27;

    // Reported after the character lands in the input
    pub const CLOSE_PAREN: u32 = 48;
    pub const OPEN_PAREN: u32 = 57;
    pub const PERIOD: u32 = 190;

    // Reported before the character lands in the input
    pub const PRESS_OPEN_PAREN: u32 = 40;
    pub const PRESS_CLOSE_PAREN: u32 = 41;
    pub const PRESS_PERIOD: u32 = 46;
}

/// A keystroke as a pair of codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyStroke {
    pub key_code: u32,
    /// Only meaningful when `key_code` is 0
    pub char_code: u32,
}

impl KeyStroke {
    pub const fn key(key_code: u32) -> Self {
        Self {
            key_code,
            char_code: 0,
        }
    }

    pub const fn char(char_code: u32) -> Self {
        Self {
            key_code: 0,
            char_code,
        }
    }
}

/// Where the lookup's query text comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuerySource {
    /// Input text cut at the selection end
    UpToSelection,
    /// Whole input text with the character appended
    Append(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Hide,
    Lookup(LookupKind, QuerySource),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMatch {
    /// Non-zero key code
    Key(u32),
    /// Key code 0 carrying this character code
    Char(u32),
}

impl KeyMatch {
    fn matches(self, stroke: KeyStroke) -> bool {
        match self {
            KeyMatch::Key(code) => stroke.key_code != 0 && stroke.key_code == code,
            KeyMatch::Char(code) => stroke.key_code == 0 && stroke.char_code == code,
        }
    }
}

const DOC_UP_TO_SELECTION: KeyAction =
    KeyAction::Lookup(LookupKind::Doc, QuerySource::UpToSelection);
const DIR_UP_TO_SELECTION: KeyAction =
    KeyAction::Lookup(LookupKind::Dir, QuerySource::UpToSelection);
const DOC_APPEND_PAREN: KeyAction = KeyAction::Lookup(LookupKind::Doc, QuerySource::Append('('));
const DIR_APPEND_PERIOD: KeyAction = KeyAction::Lookup(LookupKind::Dir, QuerySource::Append('.'));

pub const DISPATCH_TABLE: &[(KeyMatch, KeyAction)] = &[
    (KeyMatch::Key(codes::ENTER), KeyAction::Hide),
    (KeyMatch::Key(codes::ESCAPE), KeyAction::Hide),
    (KeyMatch::Key(codes::CLOSE_PAREN), KeyAction::Hide),
    (KeyMatch::Key(codes::OPEN_PAREN), DOC_UP_TO_SELECTION),
    (KeyMatch::Key(codes::PERIOD), DIR_UP_TO_SELECTION),
    (KeyMatch::Key(codes::PRESS_OPEN_PAREN), DOC_APPEND_PAREN),
    (KeyMatch::Key(codes::PRESS_CLOSE_PAREN), KeyAction::Hide),
    (KeyMatch::Key(codes::PRESS_PERIOD), DIR_APPEND_PERIOD),
    (KeyMatch::Char(codes::PRESS_OPEN_PAREN), DOC_APPEND_PAREN),
    (KeyMatch::Char(codes::PRESS_CLOSE_PAREN), KeyAction::Hide),
    (KeyMatch::Char(codes::PRESS_PERIOD), DIR_APPEND_PERIOD),
];

/// Look up the action bound to a keystroke
pub fn action_for(stroke: KeyStroke) -> Option<KeyAction> {
    DISPATCH_TABLE
        .iter()
        .find(|(key_match, _)| key_match.matches(stroke))
        .map(|(_, action)| *action)
}

/// Whether the controller sees the input before the typed character is inserted
pub fn runs_before_insert(mode: KeyEventMode) -> bool {
    !matches!(mode, KeyEventMode::Keyup)
}

/// Translate a terminal key into the codes the dispatch table expects
///
/// Returns `None` for keys that have no code in `mode`; those never reach the
/// controller.
pub fn stroke_for_key(key: KeyEvent, mode: KeyEventMode) -> Option<KeyStroke> {
    match key.code {
        KeyCode::Enter => Some(KeyStroke::key(codes::ENTER)),
        KeyCode::Esc => Some(KeyStroke::key(codes::ESCAPE)),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            char_stroke(c, mode)
        }
        _ => None,
    }
}

fn char_stroke(c: char, mode: KeyEventMode) -> Option<KeyStroke> {
    match mode {
        KeyEventMode::Keyup => match c {
            '(' => Some(KeyStroke::key(codes::OPEN_PAREN)),
            ')' => Some(KeyStroke::key(codes::CLOSE_PAREN)),
            '.' => Some(KeyStroke::key(codes::PERIOD)),
            _ => None,
        },
        KeyEventMode::Keypress => match c {
            '(' => Some(KeyStroke::key(codes::PRESS_OPEN_PAREN)),
            ')' => Some(KeyStroke::key(codes::PRESS_CLOSE_PAREN)),
            '.' => Some(KeyStroke::key(codes::PRESS_PERIOD)),
            _ => None,
        },
        KeyEventMode::Charcode => Some(KeyStroke::char(c as u32)),
    }
}
