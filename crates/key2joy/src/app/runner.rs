use key2joy_gamepad::{EventSource, OutputSink, SourceEvent};
use key2joy_preset::CompiledPreset;

use crate::app::{Translator, TranslatorState};
use crate::error::RuntimeError;

/// Why a translation run stopped without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The event source ran dry.
    Exhausted,
    /// The wait for the next event was interrupted.
    Cancelled,
}

/// Translate events until the source ends, is cancelled or fails.
///
/// Each event is fully applied to the sink before the next one is read.
pub fn run<E, S>(
    source: &mut E,
    preset: &CompiledPreset,
    sink: &mut S,
) -> Result<RunOutcome, RuntimeError>
where
    E: EventSource + ?Sized,
    S: OutputSink + ?Sized,
{
    let translator = Translator::new(preset);
    let mut state = TranslatorState::new();

    loop {
        match source.next_event() {
            SourceEvent::Event(event) => {
                translator.on_event(&mut state, &event, sink)?;
            }
            SourceEvent::End => return Ok(RunOutcome::Exhausted),
            SourceEvent::Cancelled => return Ok(RunOutcome::Cancelled),
            SourceEvent::Failed(err) => {
                return Err(RuntimeError::SourceReadFailure(err));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use key2joy_gamepad::{Button, RawEvent};
    use key2joy_preset::parse_preset;

    use super::*;

    struct ScriptedSource {
        script: VecDeque<SourceEvent>,
    }

    impl ScriptedSource {
        fn new(script: impl IntoIterator<Item = SourceEvent>) -> Self {
            Self {
                script: script.into_iter().collect(),
            }
        }
    }

    impl EventSource for ScriptedSource {
        fn next_event(&mut self) -> SourceEvent {
            self.script.pop_front().unwrap_or(SourceEvent::End)
        }
    }

    #[derive(Default)]
    struct CountingSink {
        presses: usize,
        sticks: Vec<(f32, f32)>,
        flushes: usize,
    }

    impl OutputSink for CountingSink {
        fn press_button(&mut self, _: Button) -> key2joy_gamepad::Result<()> {
            self.presses += 1;
            Ok(())
        }

        fn release_button(&mut self, _: Button) -> key2joy_gamepad::Result<()> {
            Ok(())
        }

        fn set_left_stick(&mut self, x: f32, y: f32) -> key2joy_gamepad::Result<()> {
            self.sticks.push((x, y));
            Ok(())
        }

        fn flush(&mut self) -> key2joy_gamepad::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    fn preset() -> CompiledPreset {
        parse_preset(
            "buttons:\n  KEY_A: BUTTON_A\naxis:\n  KEY_W: { axis: y, offset: 1 }\n",
            None,
        )
        .expect("preset should parse")
    }

    #[test]
    fn run_until_exhausted() {
        let preset = preset();
        let mut source = ScriptedSource::new([
            SourceEvent::Event(RawEvent::press(17)),
            SourceEvent::Event(RawEvent::press(30)),
        ]);
        let mut sink = CountingSink::default();

        let outcome = run(&mut source, &preset, &mut sink).expect("run");

        assert_eq!(outcome, RunOutcome::Exhausted);
        assert_eq!(sink.presses, 1);
        assert_eq!(sink.sticks, vec![(0.0, 1.0), (0.0, 1.0)]);
        assert_eq!(sink.flushes, 2);
    }

    #[test]
    fn cancellation_stops_without_further_writes() {
        let preset = preset();
        let mut source = ScriptedSource::new([
            SourceEvent::Event(RawEvent::press(17)),
            SourceEvent::Cancelled,
            SourceEvent::Event(RawEvent::release(17)),
        ]);
        let mut sink = CountingSink::default();

        let outcome = run(&mut source, &preset, &mut sink).expect("run");

        assert_eq!(outcome, RunOutcome::Cancelled);
        assert_eq!(sink.sticks, vec![(0.0, 1.0)]);
        assert_eq!(sink.flushes, 1);
    }

    #[test]
    fn read_failure_propagates() {
        let preset = preset();
        let mut source = ScriptedSource::new([
            SourceEvent::Event(RawEvent::press(30)),
            SourceEvent::Failed(std::io::Error::other("no such device")),
            SourceEvent::Event(RawEvent::release(30)),
        ]);
        let mut sink = CountingSink::default();

        let result = run(&mut source, &preset, &mut sink);

        assert!(matches!(result, Err(RuntimeError::SourceReadFailure(_))));
        assert_eq!(sink.flushes, 1);
    }
}
