use thiserror::Error;

/// Error type for input device and virtual gamepad operations.
#[derive(Debug, Error)]
pub enum Error {
    /// No attached input device carries the requested name.
    #[error("device not found: '{0}'")]
    DeviceNotFound(String),
    /// The uinput device could not be created.
    #[error("failed to create virtual gamepad: {0}")]
    CreateDevice(#[source] std::io::Error),
    /// Writing events to the virtual gamepad failed.
    #[error("failed to emit gamepad events: {0}")]
    Emit(#[source] std::io::Error),
    /// Spawning the device reader failed.
    #[error("failed to start input reader: {0}")]
    Reader(#[source] std::io::Error),
}

/// Convenient result alias for gamepad operations.
pub type Result<T> = std::result::Result<T, Error>;
