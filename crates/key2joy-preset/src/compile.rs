use key2joy_gamepad::Axis;
use serde_yaml::Value;

use crate::preset::{Action, CompiledPreset, Mapping};
use crate::raw::{RawAxisBinding, RawPreset};
use crate::{symbols, PresetError};

/// Validate a raw preset document and build the translation table.
///
/// `input_override` wins over the `input` field of the document. The first
/// invalid entry aborts compilation.
pub fn compile(
    raw: &Value,
    input_override: Option<&str>,
) -> Result<CompiledPreset, PresetError> {
    let raw: RawPreset = match raw {
        // An empty document has no sections at all.
        Value::Null => return Err(PresetError::Empty),
        Value::Mapping(_) => serde_yaml::from_value(raw.clone())?,
        other => {
            return Err(PresetError::Malformed(format!(
                "expected a mapping at the top level, got {}",
                describe(other)
            )))
        }
    };
    compile_raw(raw, input_override)
}

pub(crate) fn compile_raw(
    raw: RawPreset,
    input_override: Option<&str>,
) -> Result<CompiledPreset, PresetError> {
    if raw.buttons.is_none() && raw.axis.is_none() {
        return Err(PresetError::Empty);
    }

    let mut mapping = Mapping::default();

    if let Some(buttons) = raw.buttons.as_ref() {
        for (key, value) in buttons.iter() {
            let (code, action) = parse_button_binding(key, value)?;
            mapping.insert(code, action);
        }
    }

    if let Some(axes) = raw.axis.as_ref() {
        for (key, value) in axes.iter() {
            let (code, action) = parse_axis_binding(key, value)?;
            mapping.insert(code, action);
        }
    }

    let input = input_override.map(str::to_owned).or(raw.input);

    Ok(CompiledPreset { input, mapping })
}

/// Parse a `buttons` entry. The target button is checked before the key.
fn parse_button_binding(
    key: &Value,
    value: &Value,
) -> Result<(u16, Action), PresetError> {
    let target = value
        .as_str()
        .ok_or_else(|| PresetError::InvalidButtonSymbol(describe(value)))?;
    let button = symbols::button(target)
        .ok_or_else(|| PresetError::InvalidButtonSymbol(target.to_string()))?;
    let code = parse_event_code(key_name(key)?)?;

    Ok((code, Action::Button(button)))
}

/// Parse an `axis` entry.
fn parse_axis_binding(
    key: &Value,
    value: &Value,
) -> Result<(u16, Action), PresetError> {
    let name = key_name(key)?;
    let missing = |field: &'static str| PresetError::MissingField {
        field,
        key: name.to_string(),
    };

    if value.is_null() {
        return Err(missing("axis"));
    }
    let binding: RawAxisBinding = serde_yaml::from_value(value.clone())?;
    let axis = binding.axis.ok_or_else(|| missing("axis"))?;
    let offset = binding.offset.ok_or_else(|| missing("offset"))?;

    let axis = parse_axis(name, &axis)?;
    let code = parse_event_code(name)?;

    #[allow(clippy::cast_possible_truncation)]
    let offset = offset as f32;

    Ok((code, Action::Axis { axis, offset }))
}

fn parse_axis(key: &str, raw: &str) -> Result<Axis, PresetError> {
    Ok(match raw.to_lowercase().as_str() {
        "x" => Axis::X,
        "y" => Axis::Y,
        _ => {
            return Err(PresetError::InvalidAxis {
                key: key.to_string(),
                axis: raw.to_string(),
            })
        }
    })
}

fn parse_event_code(name: &str) -> Result<u16, PresetError> {
    symbols::event_code(name)
        .ok_or_else(|| PresetError::InvalidEventCode(name.to_string()))
}

fn key_name(key: &Value) -> Result<&str, PresetError> {
    key.as_str().ok_or_else(|| {
        PresetError::Malformed(format!(
            "event code names must be strings, got {}",
            describe(key)
        ))
    })
}

/// Short human readable form of a YAML value for error messages.
fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(_) => "a list".to_string(),
        Value::Mapping(_) => "a mapping".to_string(),
        Value::Tagged(tagged) => tagged.tag.to_string(),
    }
}
