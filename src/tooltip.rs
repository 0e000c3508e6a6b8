//! Tooltip module
//!
//! Turns keystrokes in an interpreter input box into doc or dir lookups and
//! renders the server's answer in a tooltip popup. The tooltip and the help
//! overlay share the same screen corner and are never shown together.

mod controller;
pub mod keymap;
mod status;
mod tooltip_state;
pub mod tooltip_render;

pub use controller::{Completion, InputSnapshot, KeyOutcome, LookupSettings, TooltipController};
pub use keymap::{KeyAction, KeyStroke, QuerySource};
pub use status::{Resolution, resolve};
pub use tooltip_state::TooltipState;
