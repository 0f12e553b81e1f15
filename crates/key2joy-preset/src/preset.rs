use ahash::AHashMap;
use key2joy_gamepad::{Axis, Button};

/// What a mapped key does on the virtual gamepad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Button(Button),
    /// Offset added to the axis on press and removed on release.
    Axis { axis: Axis, offset: f32 },
}

/// Event code -> action.
pub type Mapping = AHashMap<u16, Action>;

/// A validated preset, ready for translation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompiledPreset {
    pub(crate) input: Option<String>,
    pub(crate) mapping: Mapping,
}

impl CompiledPreset {
    /// Name of the input device to read from, if known.
    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    #[inline]
    pub fn get(&self, code: u16) -> Option<&Action> {
        self.mapping.get(&code)
    }

    pub fn mapping(&self) -> &Mapping {
        &self.mapping
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}
