mod compile;
mod parse;
mod preset;
mod raw;
mod symbols;

use std::path::PathBuf;

use thiserror::Error;

pub use compile::compile;
pub use parse::{load_preset, parse_preset};
pub use preset::{Action, CompiledPreset, Mapping};
pub use symbols::{button, event_code, event_name};

#[derive(Debug, Error)]
pub enum PresetError {
    #[error("the preset does not contain either 'buttons' or 'axis'")]
    Empty,
    #[error("invalid button: {0}")]
    InvalidButtonSymbol(String),
    #[error("invalid input event code: {0}")]
    InvalidEventCode(String),
    #[error("missing '{field}' attribute to {key}")]
    MissingField { field: &'static str, key: String },
    #[error("invalid axis '{axis}' for {key}, expected 'x' or 'y'")]
    InvalidAxis { key: String, axis: String },
    #[error("unable to read preset {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed preset: {0}")]
    Malformed(String),
}

impl From<serde_yaml::Error> for PresetError {
    fn from(err: serde_yaml::Error) -> Self {
        PresetError::Malformed(err.to_string())
    }
}
