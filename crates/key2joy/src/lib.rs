//! Keyboard to virtual gamepad translation.

pub mod app;
pub mod error;
pub mod logging;

pub use error::{Error, RuntimeError};
