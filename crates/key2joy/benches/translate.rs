use codspeed_criterion_compat::{black_box, criterion_group, criterion_main, Criterion};
use key2joy::app::{run, Translator, TranslatorState};
use key2joy_gamepad::{Button, IterSource, OutputSink, RawEvent};
use key2joy_preset::parse_preset;

const PRESET: &str = r#"
buttons:
  KEY_SPACE: BUTTON_A
  KEY_ENTER: BUTTON_START
axis:
  KEY_W: { axis: y, offset: 1.0 }
  KEY_S: { axis: y, offset: -1.0 }
  KEY_A: { axis: x, offset: -1.0 }
  KEY_D: { axis: x, offset: 1.0 }
"#;

const KEY_W: u16 = 17;
const KEY_A: u16 = 30;
const KEY_D: u16 = 32;
const KEY_SPACE: u16 = 57;

#[derive(Default)]
struct NullPad {
    writes: usize,
}

impl OutputSink for NullPad {
    fn press_button(&mut self, button: Button) -> key2joy_gamepad::Result<()> {
        black_box(button);
        self.writes += 1;
        Ok(())
    }

    fn release_button(&mut self, button: Button) -> key2joy_gamepad::Result<()> {
        black_box(button);
        self.writes += 1;
        Ok(())
    }

    fn set_left_stick(&mut self, x: f32, y: f32) -> key2joy_gamepad::Result<()> {
        black_box((x, y));
        self.writes += 1;
        Ok(())
    }

    fn flush(&mut self) -> key2joy_gamepad::Result<()> {
        Ok(())
    }
}

pub fn bench_axis_press_release(c: &mut Criterion) {
    let preset = parse_preset(PRESET, None).expect("preset");
    let translator = Translator::new(&preset);
    let mut state = TranslatorState::new();
    let mut pad = NullPad::default();
    let press = RawEvent::press(KEY_W);
    let release = RawEvent::release(KEY_W);

    c.bench_function("translate_axis_press_release", |b| {
        b.iter(|| {
            let _ = translator.on_event(&mut state, black_box(&press), &mut pad);
            let _ = translator.on_event(&mut state, black_box(&release), &mut pad);
        })
    });
}

pub fn bench_session(c: &mut Criterion) {
    let preset = parse_preset(PRESET, None).expect("preset");
    let events: Vec<RawEvent> = (0..64)
        .flat_map(|i| {
            let code = [KEY_W, KEY_A, KEY_D, KEY_SPACE][i % 4];
            [RawEvent::press(code), RawEvent::repeat(code), RawEvent::release(code)]
        })
        .collect();

    c.bench_function("translate_session_192_events", |b| {
        b.iter(|| {
            let mut source = IterSource::new(events.iter().copied());
            let mut pad = NullPad::default();
            let _ = run(&mut source, &preset, &mut pad);
            black_box(pad.writes)
        })
    });
}

criterion_group!(benches, bench_axis_press_release, bench_session);
criterion_main!(benches);
