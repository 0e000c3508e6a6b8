// Configuration type definitions

use serde::Deserialize;

/// How terminal keys are turned into tooltip key strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum KeyEventMode {
    /// Character is inserted first, then `(` `)` `.` arrive as 57/48/190
    #[default]
    Keyup,
    /// Controller runs before insertion, `(` `)` `.` arrive as 40/41/46
    Keypress,
    /// Controller runs before insertion, key code 0 with the character code
    Charcode,
}

/// Lookup server section
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_url")]
    pub url: String,
    /// Per-session suffix appended to `/doc` and `/dir`
    #[serde(default)]
    pub session: String,
}

fn default_server_url() -> String {
    "http://127.0.0.1:8001".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            url: default_server_url(),
            session: String::new(),
        }
    }
}

/// Tooltip configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct TooltipConfig {
    #[serde(default = "default_true")]
    pub doc_help: bool,
    #[serde(default = "default_true")]
    pub dir_help: bool,
    #[serde(default)]
    pub key_events: KeyEventMode,
}

fn default_true() -> bool {
    true
}

impl Default for TooltipConfig {
    fn default() -> Self {
        TooltipConfig {
            doc_help: true,
            dir_help: true,
            key_events: KeyEventMode::Keyup,
        }
    }
}

/// Input boxes section
#[derive(Debug, Clone, Deserialize)]
pub struct InputsConfig {
    #[serde(default = "default_input_ids")]
    pub ids: Vec<String>,
}

fn default_input_ids() -> Vec<String> {
    vec!["1".to_string()]
}

impl Default for InputsConfig {
    fn default() -> Self {
        InputsConfig {
            ids: default_input_ids(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub tooltip: TooltipConfig,
    #[serde(default)]
    pub inputs: InputsConfig,
}
