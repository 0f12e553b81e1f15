use std::path::Path;

use crate::compile::compile_raw;
use crate::raw::RawPreset;
use crate::{CompiledPreset, PresetError};

/// Parse and compile a yaml preset.
///
/// A key repeated within a section keeps its last value.
pub fn parse_preset(
    input: &str,
    input_override: Option<&str>,
) -> Result<CompiledPreset, PresetError> {
    match serde_yaml::from_str::<Option<RawPreset>>(input)? {
        Some(raw) => compile_raw(raw, input_override),
        None => Err(PresetError::Empty),
    }
}

/// Read, parse and compile the preset at `path`.
pub fn load_preset(
    path: &Path,
    input_override: Option<&str>,
) -> Result<CompiledPreset, PresetError> {
    let input =
        std::fs::read_to_string(path).map_err(|source| PresetError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
    parse_preset(&input, input_override)
}
