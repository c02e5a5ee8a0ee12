use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

pub const DATES_KEY: &str = "dates";
pub const PDF_LINKS_KEY: &str = "pdf_links";
pub const PARTIES_LINE_KEY: &str = "parties_line";
pub const TOP_TEXT_KEY: &str = "top_text";

/// Evidence stored under one label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Snippets(Vec<String>),
    Text(String),
}

impl FieldValue {
    /// Every piece of evidence as a list, a single text blob being one item.
    pub fn items(&self) -> Vec<&str> {
        match self {
            FieldValue::Snippets(items) => items.iter().map(String::as_str).collect(),
            FieldValue::Text(text) => vec![text.as_str()],
        }
    }

    pub fn as_snippets(&self) -> Option<&[String]> {
        match self {
            FieldValue::Snippets(items) => Some(items),
            FieldValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Snippets(_) => None,
        }
    }
}

/// Label to evidence mapping, kept in the order labels were first seen.
///
/// Lookups are linear; a record holds at most a few dozen labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedRecord {
    entries: Vec<(String, FieldValue)>,
}

impl ExtractedRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `snippet` to the list under `label`, creating the list on first use.
    pub fn insert_or_append(&mut self, label: &str, snippet: String) {
        match self.entries.iter_mut().find(|(key, _)| key == label) {
            Some((_, FieldValue::Snippets(items))) => items.push(snippet),
            Some((_, value @ FieldValue::Text(_))) => {
                let previous = std::mem::replace(value, FieldValue::Snippets(Vec::new()));
                if let FieldValue::Snippets(items) = value {
                    items.extend(previous.items().into_iter().map(str::to_string));
                    items.push(snippet);
                }
            }
            None => self
                .entries
                .push((label.to_string(), FieldValue::Snippets(vec![snippet]))),
        }
    }

    /// Stores `value` under `label` unless the label is already present.
    pub fn insert_if_absent(&mut self, label: &str, value: FieldValue) {
        if !self.contains(label) {
            self.entries.push((label.to_string(), value));
        }
    }

    /// Stores `value` under `label`, replacing any previous value in place.
    pub fn set(&mut self, label: &str, value: FieldValue) {
        match self.entries.iter_mut().find(|(key, _)| key == label) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((label.to_string(), value)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == label)
            .map(|(_, value)| value)
    }

    pub fn snippets(&self, label: &str) -> Option<&[String]> {
        self.get(label).and_then(FieldValue::as_snippets)
    }

    pub fn text(&self, label: &str) -> Option<&str> {
        self.get(label).and_then(FieldValue::as_text)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ExtractedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
