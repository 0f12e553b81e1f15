use codspeed_criterion_compat::{black_box, criterion_group, criterion_main, Criterion};
use key2joy_preset::parse_preset;

const PRESET: &str = r#"
input: "AT Translated Set 2 keyboard"
buttons:
  KEY_J: XUSB_GAMEPAD_A
  KEY_K: XUSB_GAMEPAD_B
  KEY_U: XUSB_GAMEPAD_X
  KEY_I: XUSB_GAMEPAD_Y
  KEY_Q: XUSB_GAMEPAD_LEFT_SHOULDER
  KEY_E: XUSB_GAMEPAD_RIGHT_SHOULDER
  KEY_ENTER: XUSB_GAMEPAD_START
  KEY_BACKSPACE: XUSB_GAMEPAD_BACK
  KEY_UP: XUSB_GAMEPAD_DPAD_UP
  KEY_DOWN: XUSB_GAMEPAD_DPAD_DOWN
  KEY_LEFT: XUSB_GAMEPAD_DPAD_LEFT
  KEY_RIGHT: XUSB_GAMEPAD_DPAD_RIGHT
axis:
  KEY_W: { axis: y, offset: 1.0 }
  KEY_S: { axis: y, offset: -1.0 }
  KEY_A: { axis: x, offset: -1.0 }
  KEY_D: { axis: x, offset: 1.0 }
"#;

fn bench_parse_preset(c: &mut Criterion) {
    c.bench_function("preset_parse_gamepad_layout", |b| {
        b.iter(|| {
            let input = black_box(PRESET);
            let preset = parse_preset(input, None).expect("preset should parse");
            black_box(preset);
        })
    });
}

criterion_group!(benches, bench_parse_preset);
criterion_main!(benches);
