//! Tooltip controller
//!
//! Owns the tooltip and help overlay visibility, dispatches keystrokes through
//! the key table, hands lookups to the worker and resolves their completions.

use std::sync::mpsc::{Receiver, TryRecvError};

use tokio::sync::mpsc::UnboundedSender;

use super::keymap::{self, KeyAction, KeyStroke, QuerySource};
use super::status::{Resolution, resolve};
use super::tooltip_state::TooltipState;
use crate::config::Config;
use crate::help::HelpPopupState;
use crate::lookup::{LookupKind, LookupRequest, LookupResponse, encode_component};

/// The input box a keystroke arrived in, as seen at dispatch time
#[derive(Debug, Clone, Copy)]
pub struct InputSnapshot<'a> {
    pub uid: &'a str,
    pub text: &'a str,
    /// Selection end (the cursor when nothing is selected), in characters
    pub selection_end: usize,
}

impl InputSnapshot<'_> {
    pub fn query_text(&self, source: QuerySource) -> String {
        match source {
            QuerySource::UpToSelection => self.text.chars().take(self.selection_end).collect(),
            QuerySource::Append(c) => {
                let mut text = self.text.to_string();
                text.push(c);
                text
            }
        }
    }
}

/// Which of the possible effects a keystroke had
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Ignored,
    Hidden,
    Requested(LookupKind),
    /// Lookup kind switched off in config; the tooltip was still hidden
    Disabled(LookupKind),
}

/// Result of resolving one finished lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Tooltip now shows the text; focus belongs to this input
    Shown { uid: String },
    NoContent,
    Alert(String),
}

#[derive(Debug, Clone)]
pub struct LookupSettings {
    /// Appended to the endpoint path segment
    pub session: String,
    pub doc_help: bool,
    pub dir_help: bool,
}

impl LookupSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            session: config.server.session.clone(),
            doc_help: config.tooltip.doc_help,
            dir_help: config.tooltip.dir_help,
        }
    }

    fn enabled(&self, kind: LookupKind) -> bool {
        match kind {
            LookupKind::Doc => self.doc_help,
            LookupKind::Dir => self.dir_help,
        }
    }
}

pub struct TooltipController {
    pub state: TooltipState,
    pub help: HelpPopupState,
    settings: LookupSettings,
    request_tx: Option<UnboundedSender<LookupRequest>>,
    response_rx: Option<Receiver<LookupResponse>>,
    /// Requests that never reached the worker, resolved on the next poll
    undelivered: Vec<LookupResponse>,
}

impl TooltipController {
    pub fn new(settings: LookupSettings) -> Self {
        Self {
            state: TooltipState::new(),
            help: HelpPopupState::new(),
            settings,
            request_tx: None,
            response_rx: None,
            undelivered: Vec::new(),
        }
    }

    pub fn set_channels(
        &mut self,
        request_tx: UnboundedSender<LookupRequest>,
        response_rx: Receiver<LookupResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// Dispatch one keystroke from the input box described by `input`
    pub fn handle_key(&mut self, stroke: KeyStroke, input: &InputSnapshot<'_>) -> KeyOutcome {
        if self.help.visible {
            return KeyOutcome::Ignored;
        }

        match keymap::action_for(stroke) {
            None => KeyOutcome::Ignored,
            Some(KeyAction::Hide) => {
                self.hide();
                KeyOutcome::Hidden
            }
            Some(KeyAction::Lookup(kind, source)) => {
                self.lookup(kind, input.uid, &input.query_text(source))
            }
        }
    }

    /// Clear the tooltip and send `query_text` to the `kind` endpoint
    pub fn lookup(&mut self, kind: LookupKind, uid: &str, query_text: &str) -> KeyOutcome {
        self.hide();

        if !self.settings.enabled(kind) {
            return KeyOutcome::Disabled(kind);
        }

        let request = LookupRequest {
            kind,
            uid: uid.to_string(),
            path: self.request_path(kind, uid),
            body: encode_component(query_text),
        };

        #[cfg(debug_assertions)]
        log::debug!("Queueing {} lookup: {} body={}", kind.name(), request.path, request.body);

        let sent = match &self.request_tx {
            Some(tx) => tx.send(request.clone()).is_ok(),
            None => false,
        };
        if !sent {
            log::warn!("Lookup worker unavailable, dropping {} request", kind.name());
            self.undelivered.push(LookupResponse::no_response(&request));
        }

        KeyOutcome::Requested(kind)
    }

    /// `/doc<session>?uid=<uid>` or the `/dir` equivalent, uid as given
    pub fn request_path(&self, kind: LookupKind, uid: &str) -> String {
        format!("{}{}?uid={}", kind.path_segment(), self.settings.session, uid)
    }

    /// Show `text` in the tooltip, closing help
    pub fn show(&mut self, text: &str) {
        self.help.close();
        self.state.append(text);
    }

    pub fn hide(&mut self) {
        self.state.clear();
    }

    /// Open the help overlay; the tooltip goes away
    pub fn show_help(&mut self) {
        self.hide();
        self.help.open();
    }

    /// Close the help overlay together with the tooltip
    pub fn hide_help(&mut self) {
        self.help.close();
        self.hide();
    }

    /// Resolve one finished lookup
    pub fn complete(&mut self, response: LookupResponse) -> Completion {
        #[cfg(debug_assertions)]
        log::debug!(
            "{} lookup for uid={} completed with {}",
            response.kind.name(),
            response.uid,
            response.status
        );

        match resolve(response.status, &response.body) {
            Resolution::Show(text) => {
                self.show(&text);
                Completion::Shown { uid: response.uid }
            }
            Resolution::NoContent => Completion::NoContent,
            Resolution::Alert(message) => Completion::Alert(message),
        }
    }

    /// Resolve everything that finished since the last poll, in arrival order
    pub fn poll(&mut self) -> Vec<Completion> {
        let mut responses: Vec<LookupResponse> = self.undelivered.drain(..).collect();
        let mut disconnected = false;

        if let Some(rx) = &self.response_rx {
            loop {
                match rx.try_recv() {
                    Ok(response) => responses.push(response),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        disconnected = true;
                        break;
                    }
                }
            }
        }

        if disconnected {
            log::warn!("Lookup worker disconnected");
            self.response_rx = None;
            self.request_tx = None;
        }

        responses
            .into_iter()
            .map(|response| self.complete(response))
            .collect()
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
