//! Shared test utilities for tipline
//!
//! Common fixtures and helper functions used across test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::sync::mpsc;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

    use crate::app::App;
    use crate::config::Config;
    use crate::lookup::{LookupRequest, LookupResponse};

    /// Helper to create App with default config for tests
    pub fn test_app() -> App {
        App::new(&Config::default())
    }

    /// Helper to create App with the given input ids
    pub fn app_with_inputs(ids: &[&str]) -> App {
        let mut config = Config::default();
        config.inputs.ids = ids.iter().map(|id| id.to_string()).collect();
        App::new(&config)
    }

    /// Wire the app's controller to channels the test drives directly
    ///
    /// The returned receiver sees every request; responses sent on the
    /// returned sender are picked up by `App::poll_lookups`.
    pub fn wire_lookups(
        app: &mut App,
    ) -> (UnboundedReceiver<LookupRequest>, mpsc::Sender<LookupResponse>) {
        let (request_tx, request_rx) = unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();
        app.tooltip.set_channels(request_tx, response_rx);
        (request_rx, response_tx)
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Type each character of `text` into the focused input
    pub fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
    }
}
