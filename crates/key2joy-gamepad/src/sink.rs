use crate::error::Result;
use crate::types::Button;

/// Destination that renders button and stick state to a gamepad.
///
/// Calls may be buffered until [`OutputSink::flush`].
pub trait OutputSink {
    fn press_button(&mut self, button: Button) -> Result<()>;

    fn release_button(&mut self, button: Button) -> Result<()>;

    /// Set the left stick position. Values are not clamped.
    fn set_left_stick(&mut self, x: f32, y: f32) -> Result<()>;

    fn flush(&mut self) -> Result<()>;
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn press_button(&mut self, button: Button) -> Result<()> {
        (**self).press_button(button)
    }

    fn release_button(&mut self, button: Button) -> Result<()> {
        (**self).release_button(button)
    }

    fn set_left_stick(&mut self, x: f32, y: f32) -> Result<()> {
        (**self).set_left_stick(x, y)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}
