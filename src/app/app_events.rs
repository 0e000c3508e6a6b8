use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::app_state::App;
use super::mouse_events;
use crate::tooltip::keymap::{self, KeyStroke};
use crate::tooltip::{Completion, KeyOutcome};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.poll_lookups();

        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Paste(text) => {
                    self.handle_paste_event(&text);
                }
                Event::Mouse(mouse) => {
                    mouse_events::handle_mouse_event(self, mouse);
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Apply every lookup that finished since the last tick
    pub fn poll_lookups(&mut self) {
        for completion in self.tooltip.poll() {
            match completion {
                Completion::Shown { uid } => self.focus_uid(&uid),
                Completion::NoContent => {}
                Completion::Alert(message) => self.alert.show(&message),
            }
        }
    }

    pub(crate) fn handle_paste_event(&mut self, text: &str) {
        if self.alert.is_visible() || self.tooltip.help.visible {
            return;
        }
        self.focused_input_mut().paste(text);
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.alert.is_visible() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.alert.dismiss();
            }
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('d'))
        {
            self.should_quit = true;
            return;
        }

        if self.tooltip.help.visible {
            if matches!(key.code, KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q')) {
                self.tooltip.hide_help();
            }
            return;
        }

        match key.code {
            KeyCode::F(1) => self.tooltip.show_help(),
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_prev(),
            KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.tooltip.hide();
            }
            _ => self.handle_input_key(key),
        }
    }

    /// Edit the focused input and let the controller see the keystroke
    ///
    /// In keyup mode the controller runs after the edit, otherwise before it.
    fn handle_input_key(&mut self, key: KeyEvent) {
        let stroke = keymap::stroke_for_key(key, self.key_events);
        let before_insert = keymap::runs_before_insert(self.key_events);

        if before_insert {
            self.dispatch(stroke);
        }

        match key.code {
            KeyCode::Enter => {
                self.focused_input_mut().commit_line();
            }
            KeyCode::Esc => {}
            _ => {
                self.focused_input_mut().textarea.input(key);
            }
        }

        if !before_insert {
            self.dispatch(stroke);
        }
    }

    fn dispatch(&mut self, stroke: Option<KeyStroke>) {
        let Some(stroke) = stroke else {
            return;
        };

        let input = &self.inputs[self.focused];
        let outcome = self.tooltip.handle_key(stroke, &input.snapshot());

        if let KeyOutcome::Disabled(kind) = outcome {
            self.notification
                .show(&format!("{} lookups are disabled in config", kind.name()));
        }
    }
}
