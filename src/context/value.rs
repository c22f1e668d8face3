// ABOUTME: Context value types for template rendering
// ABOUTME: Defines the Present/Absent tagged variant and the ordered rendering context mapping

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value as JsonValue;

/// A derived context value that is either real data or absent. Absence
/// converts to the template engine's falsy convention (`false`) only at the
/// binding boundary, so non-template consumers never have to guess whether
/// `false` means "missing" or "legitimately false".
#[derive(Debug, Clone, PartialEq)]
pub enum ContextValue {
    Present(JsonValue),
    Absent,
}

impl ContextValue {
    pub fn is_present(&self) -> bool {
        matches!(self, ContextValue::Present(_))
    }

    pub fn as_present(&self) -> Option<&JsonValue> {
        match self {
            ContextValue::Present(value) => Some(value),
            ContextValue::Absent => None,
        }
    }

    /// Convert to the renderer's native convention: absent becomes the
    /// literal `false`, so templates can branch with `{{#if ...}}` directly.
    pub fn into_template_value(self) -> JsonValue {
        match self {
            ContextValue::Present(value) => value,
            ContextValue::Absent => JsonValue::Bool(false),
        }
    }
}

impl From<Option<JsonValue>> for ContextValue {
    fn from(value: Option<JsonValue>) -> Self {
        match value {
            Some(value) => ContextValue::Present(value),
            None => ContextValue::Absent,
        }
    }
}

/// Ordered name → value mapping handed to the template engine for a single
/// render. Built fresh per invocation and never mutated after it reaches the
/// renderer.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct RenderingContext(IndexMap<String, JsonValue>);

impl RenderingContext {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn insert(&mut self, key: &str, value: JsonValue) {
        self.0.insert(key.to_string(), value);
    }

    /// Insert only if the key is not already present. Used when merging
    /// caller-supplied entries: derived entries own their names.
    pub fn insert_if_absent(&mut self, key: &str, value: JsonValue) {
        self.0.entry(key.to_string()).or_insert(value);
    }

    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &JsonValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, JsonValue)> for RenderingContext {
    fn from_iter<I: IntoIterator<Item = (String, JsonValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
