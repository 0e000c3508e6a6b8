use thiserror::Error;

#[derive(Debug, Error)]
pub enum TipError {
    #[error("Invalid server URL '{url}': {reason}")]
    InvalidServerUrl { url: String, reason: String },

    #[error("No input boxes configured.\n\nAdd ids under [inputs] in ~/.config/tipline/config.toml or pass --input")]
    NoInputs,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
