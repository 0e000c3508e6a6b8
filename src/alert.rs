//! Alert module
//!
//! A modal message box for lookup failures. While it is up, input is blocked
//! until the user dismisses it.

mod alert_render;
mod alert_state;

pub use alert_render::render_alert;
pub use alert_state::AlertState;
