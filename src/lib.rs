//! tipline library - interpreter input boxes with lookup tooltips
//!
//! This library exposes the core functionality of tipline for testing purposes.

pub mod alert;
pub mod app;
pub mod config;
pub mod error;
pub mod help;
pub mod input;
pub mod layout;
pub mod lookup;
pub mod notification;
pub mod theme;
pub mod tooltip;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use error::TipError;
