use std::collections::VecDeque;

/// Modal alerts, shown one at a time in arrival order
///
/// An alert raised while another is on screen waits its turn; dismissing
/// brings up the next one.
#[derive(Debug, Default)]
pub struct AlertState {
    queue: VecDeque<String>,
}

impl AlertState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: &str) {
        self.queue.push_back(message.to_string());
    }

    /// Close the alert on screen
    pub fn dismiss(&mut self) {
        self.queue.pop_front();
    }

    pub fn is_visible(&self) -> bool {
        !self.queue.is_empty()
    }

    /// The alert on screen
    pub fn message(&self) -> Option<&str> {
        self.queue.front().map(String::as_str)
    }

    /// Alerts waiting behind the one on screen
    pub fn pending(&self) -> usize {
        self.queue.len().saturating_sub(1)
    }
}
