/// Logical buttons of the virtual Xbox 360 pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    DPadUp,
    DPadDown,
    DPadLeft,
    DPadRight,
    Start,
    Back,
    LeftThumb,
    RightThumb,
    LeftShoulder,
    RightShoulder,
    Guide,
    A,
    B,
    X,
    Y,
}

impl Button {
    /// All buttons the virtual pad exposes.
    pub const ALL: [Button; 15] = [
        Button::DPadUp,
        Button::DPadDown,
        Button::DPadLeft,
        Button::DPadRight,
        Button::Start,
        Button::Back,
        Button::LeftThumb,
        Button::RightThumb,
        Button::LeftShoulder,
        Button::RightShoulder,
        Button::Guide,
        Button::A,
        Button::B,
        Button::X,
        Button::Y,
    ];
}

/// Left stick dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

/// Kind of a raw input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Key,
    Other(u16),
}

/// Interpretation of the value carried by a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyValue {
    Released,
    Pressed,
    Repeat,
    Other(i32),
}

impl From<i32> for KeyValue {
    fn from(value: i32) -> Self {
        match value {
            0 => KeyValue::Released,
            1 => KeyValue::Pressed,
            2 => KeyValue::Repeat,
            other => KeyValue::Other(other),
        }
    }
}

/// An input event as read from the physical device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEvent {
    pub kind: EventKind,
    pub code: u16,
    pub value: i32,
}

impl RawEvent {
    pub fn key(code: u16, value: i32) -> Self {
        Self {
            kind: EventKind::Key,
            code,
            value,
        }
    }

    pub fn press(code: u16) -> Self {
        Self::key(code, 1)
    }

    pub fn release(code: u16) -> Self {
        Self::key(code, 0)
    }

    pub fn repeat(code: u16) -> Self {
        Self::key(code, 2)
    }

    pub fn is_key(&self) -> bool {
        self.kind == EventKind::Key
    }

    pub fn key_value(&self) -> KeyValue {
        KeyValue::from(self.value)
    }
}
