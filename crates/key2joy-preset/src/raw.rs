use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_yaml::Value;

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawPreset {
    #[serde(default)]
    pub input: Option<String>,
    #[serde(default)]
    pub buttons: Option<Section>, // event code -> button
    #[serde(default)]
    pub axis: Option<Section>, // event code -> axis binding
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawAxisBinding {
    #[serde(default)]
    pub axis: Option<String>, // x | y
    #[serde(default, alias = "value")]
    pub offset: Option<f64>,
}

/// Entries of a preset section in document order.
///
/// A repeated key replaces the earlier value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Section {
    entries: Vec<(Value, Value)>,
}

impl Section {
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    fn insert(&mut self, key: Value, value: Value) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }
}

impl<'de> Deserialize<'de> for Section {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SectionVisitor;

        impl<'de> Visitor<'de> for SectionVisitor {
            type Value = Section;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a mapping of event codes")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Section, A::Error> {
                let mut section = Section::default();
                while let Some((key, value)) = map.next_entry::<Value, Value>()? {
                    section.insert(key, value);
                }
                Ok(section)
            }
        }

        deserializer.deserialize_map(SectionVisitor)
    }
}
