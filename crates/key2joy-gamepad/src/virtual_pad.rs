//! Virtual Xbox 360 style gamepad backed by uinput.

use evdev::{
    uinput::{VirtualDevice, VirtualDeviceBuilder},
    AbsInfo, AbsoluteAxisType, AttributeSet, BusType, EventType, InputEvent, InputId, Key,
    UinputAbsSetup,
};

use crate::error::{Error, Result};
use crate::sink::OutputSink;
use crate::types::Button;

pub const DEFAULT_DEVICE_NAME: &str = "key2joy Virtual Gamepad";

/// Stick range reported by xpad.
pub const STICK_MIN: i32 = -32768;
pub const STICK_MAX: i32 = 32767;

const STICK_SCALE: f32 = 32767.0;

/// Microsoft vendor ID.
const XBOX_VENDOR_ID: u16 = 0x045e;
/// Wired Xbox 360 controller.
const XBOX360_PRODUCT_ID: u16 = 0x028e;
const XBOX360_VERSION: u16 = 0x0110;

/// USB identity of a wired Xbox 360 pad, so SDL and games pick the right
/// controller mapping.
fn xbox360_id() -> InputId {
    InputId::new(BusType::BUS_USB, XBOX_VENDOR_ID, XBOX360_PRODUCT_ID, XBOX360_VERSION)
}

/// Virtual gamepad device.
///
/// Button and stick writes are queued and sent as one report on `flush`.
pub struct VirtualGamepad {
    device: VirtualDevice,
    pending: Vec<InputEvent>,
}

impl VirtualGamepad {
    pub fn new(name: &str) -> Result<Self> {
        let mut keys = AttributeSet::<Key>::new();
        for button in Button::ALL {
            keys.insert(button_key(button));
        }

        let stick = AbsInfo::new(0, STICK_MIN, STICK_MAX, 16, 128, 0);
        let device = VirtualDeviceBuilder::new()
            .map_err(Error::CreateDevice)?
            .name(name)
            .input_id(xbox360_id())
            .with_keys(&keys)
            .map_err(Error::CreateDevice)?
            .with_absolute_axis(&UinputAbsSetup::new(AbsoluteAxisType::ABS_X, stick))
            .map_err(Error::CreateDevice)?
            .with_absolute_axis(&UinputAbsSetup::new(AbsoluteAxisType::ABS_Y, stick))
            .map_err(Error::CreateDevice)?
            .build()
            .map_err(Error::CreateDevice)?;

        Ok(Self {
            device,
            pending: Vec::with_capacity(4),
        })
    }

    /// Get the device node (e.g. /dev/input/eventX).
    pub fn device_path(&mut self) -> Option<std::path::PathBuf> {
        self.device
            .enumerate_dev_nodes_blocking()
            .ok()?
            .next()?
            .ok()
    }

    fn queue_key(&mut self, button: Button, value: i32) {
        let key = button_key(button);
        self.pending
            .push(InputEvent::new(EventType::KEY, key.code(), value));
    }
}

impl OutputSink for VirtualGamepad {
    fn press_button(&mut self, button: Button) -> Result<()> {
        self.queue_key(button, 1);
        Ok(())
    }

    fn release_button(&mut self, button: Button) -> Result<()> {
        self.queue_key(button, 0);
        Ok(())
    }

    fn set_left_stick(&mut self, x: f32, y: f32) -> Result<()> {
        // evdev Y grows downwards, XInput Y grows upwards.
        let (x, y) = stick_position(x, y);
        self.pending.push(InputEvent::new(
            EventType::ABSOLUTE,
            AbsoluteAxisType::ABS_X.0,
            x,
        ));
        self.pending.push(InputEvent::new(
            EventType::ABSOLUTE,
            AbsoluteAxisType::ABS_Y.0,
            y,
        ));
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let result = self.device.emit(&self.pending).map_err(Error::Emit);
        self.pending.clear();
        result
    }
}

/// Scale a stick vector to device units. Saturates at the `i32` range only.
#[allow(clippy::cast_possible_truncation)]
fn stick_position(x: f32, y: f32) -> (i32, i32) {
    ((x * STICK_SCALE) as i32, (-y * STICK_SCALE) as i32)
}

/// Linux key code for a button, following the xpad layout.
fn button_key(button: Button) -> Key {
    match button {
        Button::A => Key::BTN_SOUTH,
        Button::B => Key::BTN_EAST,
        Button::X => Key::BTN_NORTH,
        Button::Y => Key::BTN_WEST,
        Button::LeftShoulder => Key::BTN_TL,
        Button::RightShoulder => Key::BTN_TR,
        Button::Back => Key::BTN_SELECT,
        Button::Start => Key::BTN_START,
        Button::Guide => Key::BTN_MODE,
        Button::LeftThumb => Key::BTN_THUMBL,
        Button::RightThumb => Key::BTN_THUMBR,
        Button::DPadUp => Key::BTN_DPAD_UP,
        Button::DPadDown => Key::BTN_DPAD_DOWN,
        Button::DPadLeft => Key::BTN_DPAD_LEFT,
        Button::DPadRight => Key::BTN_DPAD_RIGHT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stick_position_scales_and_flips_y() {
        assert_eq!(stick_position(0.0, 0.0), (0, 0));
        assert_eq!(stick_position(1.0, 1.0), (32767, -32767));
        assert_eq!(stick_position(-0.5, -1.0), (-16383, 32767));
    }

    #[test]
    fn stick_position_is_not_clamped() {
        let (x, _) = stick_position(2.0, 0.0);
        assert_eq!(x, 65534);
    }

    #[test]
    fn identifies_as_wired_xbox360_pad() {
        let id = xbox360_id();
        assert_eq!(id.bus_type(), BusType::BUS_USB);
        assert_eq!(id.vendor(), 0x045e);
        assert_eq!(id.product(), 0x028e);
        assert_eq!(id.version(), 0x0110);
    }

    #[test]
    fn every_button_has_its_own_key() {
        let mut codes: Vec<u16> =
            Button::ALL.iter().map(|b| button_key(*b).code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), Button::ALL.len());
    }

    #[test]
    #[ignore] // Requires uinput access (run with: cargo test -- --ignored)
    fn create_virtual_gamepad() {
        let gamepad = VirtualGamepad::new("key2joy Test Gamepad");
        assert!(gamepad.is_ok());
    }
}
