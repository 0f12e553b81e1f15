use thiserror::Error;

use key2joy_gamepad::Error as GamepadError;
use key2joy_preset::PresetError;

/// Errors that stop translation.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("device not found: '{0}'")]
    DeviceNotFound(String),
    #[error("an input device was not provided")]
    MissingInput,
    #[error("failed to read input events: {0}")]
    SourceReadFailure(#[source] std::io::Error),
    #[error("failed to update virtual gamepad: {0}")]
    SinkWriteFailure(#[source] GamepadError),
    #[error("setup failed: {0}")]
    Setup(#[source] GamepadError),
    #[error("failed to set Ctrl+C handler: {0}")]
    Signal(#[from] ctrlc::Error),
}

impl From<GamepadError> for RuntimeError {
    fn from(err: GamepadError) -> Self {
        match err {
            GamepadError::DeviceNotFound(name) => RuntimeError::DeviceNotFound(name),
            other => RuntimeError::Setup(other),
        }
    }
}

/// Any fatal error of the application.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Preset(#[from] PresetError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
