use std::fmt;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::core::decode_glyph;

/// Decoded index document for one asset version.
///
/// The host publishes `icons` either as a list of records or as an object
/// mapping icon names to glyph codes. Both decode into the same ordered
/// [`Icons`] list, keeping document order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IconIndexResponse {
    pub icons: Icons,

    #[serde(default)]
    pub version: Option<String>,

    /// Font files relative to the index, e.g. `./iconfont.ttf`.
    #[serde(default)]
    pub fonts: Vec<String>,
}

/// One entry of the `icons` list.
#[derive(Debug, Clone, PartialEq)]
pub enum IconDescriptor {
    /// `"name": "code"` entry of an object-shaped index.
    Glyph { name: String, code: String },
    /// Element of an array-shaped index, kept as-is.
    Record(Value),
}

impl IconDescriptor {
    /// Icon name, if the record carries one.
    pub fn name(&self) -> Option<&str> {
        match self {
            IconDescriptor::Glyph { name, .. } => Some(name.as_str()),
            IconDescriptor::Record(Value::String(name)) => Some(name.as_str()),
            IconDescriptor::Record(Value::Object(fields)) => fields.get("name")?.as_str(),
            IconDescriptor::Record(_) => None,
        }
    }

    /// Character drawn by this icon in the font.
    pub fn glyph(&self) -> Option<char> {
        match self {
            IconDescriptor::Glyph { code, .. } => decode_glyph(code),
            IconDescriptor::Record(Value::Object(fields)) => ["code", "unicode"]
                .iter()
                .find_map(|k| fields.get(*k)?.as_str())
                .and_then(decode_glyph),
            IconDescriptor::Record(_) => None,
        }
    }
}

impl fmt::Display for IconDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconDescriptor::Glyph { name, code } => write!(f, "{name}={code}"),
            IconDescriptor::Record(Value::String(s)) => f.write_str(s),
            IconDescriptor::Record(other) => write!(f, "{other}"),
        }
    }
}

/// Ordered list of icon descriptors.
///
/// Displays as `[a, b, c]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Icons(Vec<IconDescriptor>);

impl Icons {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IconDescriptor> {
        self.0.iter()
    }

    pub fn get(&self, name: &str) -> Option<&IconDescriptor> {
        self.0.iter().find(|icon| icon.name() == Some(name))
    }

    pub fn into_inner(self) -> Vec<IconDescriptor> {
        self.0
    }
}

impl From<Vec<IconDescriptor>> for Icons {
    fn from(icons: Vec<IconDescriptor>) -> Self {
        Self(icons)
    }
}

impl<'a> IntoIterator for &'a Icons {
    type Item = &'a IconDescriptor;
    type IntoIter = std::slice::Iter<'a, IconDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Icons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, icon) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{icon}")?;
        }
        f.write_str("]")
    }
}

impl<'de> Deserialize<'de> for Icons {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(IconsVisitor)
    }
}

struct IconsVisitor;

impl<'de> Visitor<'de> for IconsVisitor {
    type Value = Icons;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a list of icon records or a map of icon names to glyph codes")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Icons, A::Error> {
        let mut icons = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(record) = seq.next_element::<Value>()? {
            icons.push(IconDescriptor::Record(record));
        }
        Ok(Icons(icons))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Icons, A::Error> {
        let mut icons = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((name, code)) = map.next_entry::<String, Value>()? {
            let code = match code {
                Value::String(s) => s,
                // numbers are code points, rendered in the hex form string codes use
                other => match other.as_u64() {
                    Some(point) => format!("{point:x}"),
                    None => {
                        return Err(de::Error::invalid_type(
                            unexpected(&other),
                            &"a glyph code string or code point",
                        ));
                    }
                },
            };
            icons.push(IconDescriptor::Glyph { name, code });
        }
        Ok(Icons(icons))
    }
}

fn unexpected(value: &Value) -> de::Unexpected<'_> {
    match value {
        Value::Null => de::Unexpected::Unit,
        Value::Bool(b) => de::Unexpected::Bool(*b),
        Value::Array(_) => de::Unexpected::Seq,
        Value::Object(_) => de::Unexpected::Map,
        Value::Number(n) => match n.as_f64() {
            Some(f) => de::Unexpected::Float(f),
            None => de::Unexpected::Other("number"),
        },
        Value::String(_) => de::Unexpected::Other("string"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_index_keeps_order() {
        let index: IconIndexResponse =
            serde_json::from_str(r#"{"icons":["home","search","settings"]}"#).unwrap();

        assert_eq!(index.icons.len(), 3);
        let names: Vec<_> = index.icons.iter().filter_map(IconDescriptor::name).collect();
        assert_eq!(names, ["home", "search", "settings"]);
        assert_eq!(index.icons.to_string(), "[home, search, settings]");
        assert_eq!(index.version, None);
        assert!(index.fonts.is_empty());
    }

    #[test]
    fn test_object_index_keeps_document_order() {
        let json = r#"{
            "icons": {"zoom": "e003", "add": "e001", "menu": "e002"},
            "version": "0.0.1",
            "fonts": ["./iconfont.ttf"]
        }"#;
        let index: IconIndexResponse = serde_json::from_str(json).unwrap();

        assert_eq!(index.icons.to_string(), "[zoom=e003, add=e001, menu=e002]");
        assert_eq!(index.version.as_deref(), Some("0.0.1"));
        assert_eq!(index.fonts, ["./iconfont.ttf"]);
        assert_eq!(index.icons.get("add").and_then(IconDescriptor::glyph), Some('\u{e001}'));
    }

    #[test]
    fn test_record_objects() {
        let json = r#"{"icons":[{"name":"home","code":"e900"},{"id":7},42,null]}"#;
        let index: IconIndexResponse = serde_json::from_str(json).unwrap();

        let first = index.icons.iter().next().unwrap();
        assert_eq!(first.name(), Some("home"));
        assert_eq!(first.glyph(), Some('\u{e900}'));
        assert_eq!(index.icons.len(), 4);
        assert!(index.icons.to_string().ends_with(r#", {"id":7}, 42, null]"#));
    }

    #[test]
    fn test_numeric_glyph_code_is_a_code_point() {
        let index: IconIndexResponse =
            serde_json::from_str(r#"{"icons":{"home":57345,"menu":"e002"}}"#).unwrap();

        assert_eq!(index.icons.to_string(), "[home=e001, menu=e002]");
        assert_eq!(index.icons.get("home").and_then(IconDescriptor::glyph), Some('\u{e001}'));
    }

    #[test]
    fn test_fractional_or_negative_glyph_code_rejected() {
        assert!(serde_json::from_str::<IconIndexResponse>(r#"{"icons":{"home":1.5}}"#).is_err());
        assert!(serde_json::from_str::<IconIndexResponse>(r#"{"icons":{"home":-1}}"#).is_err());
    }

    #[test]
    fn test_empty_icons() {
        let index: IconIndexResponse = serde_json::from_str(r#"{"icons":[]}"#).unwrap();
        assert!(index.icons.is_empty());
        assert_eq!(index.icons.to_string(), "[]");
    }

    #[test]
    fn test_missing_or_invalid_icons_rejected() {
        assert!(serde_json::from_str::<IconIndexResponse>(r#"{"version":"0.0.1"}"#).is_err());
        assert!(serde_json::from_str::<IconIndexResponse>(r#"{"icons":null}"#).is_err());
        assert!(serde_json::from_str::<IconIndexResponse>(r#"{"icons":"home"}"#).is_err());
        assert!(serde_json::from_str::<IconIndexResponse>(r#"{"icons":{"home":[1]}}"#).is_err());
    }
}
