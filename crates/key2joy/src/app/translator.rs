use colored::Colorize;

use key2joy_gamepad::{Axis, KeyValue, OutputSink, RawEvent};
use key2joy_preset::{event_name, Action, CompiledPreset};

use crate::error::RuntimeError;
use crate::print_debug;

/// Accumulated left stick vector.
///
/// Offsets are summed as keys go down and up. Nothing is clamped, so
/// overlapping presses on one axis can push the vector past the unit range.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AxisState {
    pub x: f32,
    pub y: f32,
}

impl AxisState {
    fn add(&mut self, axis: Axis, offset: f32) {
        match axis {
            Axis::X => self.x += offset,
            Axis::Y => self.y += offset,
        }
    }

    fn sub(&mut self, axis: Axis, offset: f32) {
        match axis {
            Axis::X => self.x -= offset,
            Axis::Y => self.y -= offset,
        }
    }
}

/// Mutable state of a translation run.
#[derive(Debug, Clone, Default)]
pub struct TranslatorState {
    axes: AxisState,
}

impl TranslatorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn axes(&self) -> AxisState {
        self.axes
    }
}

/// Applies key events to a gamepad according to a compiled preset.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    preset: &'a CompiledPreset,
}

impl<'a> Translator<'a> {
    pub fn new(preset: &'a CompiledPreset) -> Self {
        Self { preset }
    }

    /// Handle one input event.
    ///
    /// Non-key events are dropped. Every key event, mapped or not, ends with
    /// the current stick vector being written and flushed.
    pub fn on_event<S: OutputSink + ?Sized>(
        &self,
        state: &mut TranslatorState,
        event: &RawEvent,
        sink: &mut S,
    ) -> Result<(), RuntimeError> {
        if !event.is_key() {
            return Ok(());
        }

        let value = event.key_value();
        if let Some(action) = self.preset.get(event.code) {
            match (value, *action) {
                (KeyValue::Pressed, Action::Button(button)) => {
                    sink.press_button(button).map_err(RuntimeError::SinkWriteFailure)?;
                }
                (KeyValue::Released, Action::Button(button)) => {
                    sink.release_button(button).map_err(RuntimeError::SinkWriteFailure)?;
                }
                (KeyValue::Pressed, Action::Axis { axis, offset }) => {
                    state.axes.add(axis, offset);
                }
                (KeyValue::Released, Action::Axis { axis, offset }) => {
                    state.axes.sub(axis, offset);
                }
                // Autorepeat does not change the pad.
                (KeyValue::Repeat | KeyValue::Other(_), _) => {}
            }
        }

        let AxisState { x, y } = state.axes;
        print_debug!(
            "key {} ({}) {value:?} - stick x={x} y={y}",
            event_name(event.code).unwrap_or("?"),
            event.code
        );
        sink.set_left_stick(x, y).map_err(RuntimeError::SinkWriteFailure)?;
        sink.flush().map_err(RuntimeError::SinkWriteFailure)
    }
}
