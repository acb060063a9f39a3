use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered mapping from option key (id or value) to image URL.
///
/// Built fresh on every render/format pass from the field's raw
/// `optionImages` text; the raw string is the source of truth, this
/// struct is never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageMap {
    entries: IndexMap<String, String>,
}

impl ImageMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse newline-delimited `key=value` text into an ordered map.
    ///
    /// Lines without `=` are skipped. Each remaining line is split on
    /// the first `=` (the URL may legally contain more), both halves
    /// trimmed. A repeated key overwrites its prior value. Never errors:
    /// any malformed input simply contributes nothing.
    pub fn parse(text: &str) -> Self {
        let mut entries = IndexMap::new();
        for line in text.split('\n') {
            let Some((key, url)) = line.split_once('=') else {
                continue;
            };
            entries.insert(key.trim().to_string(), url.trim().to_string());
        }
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Look up by option id first, falling back to the display label.
    /// Used by the read-side formatter; the renderer matches on id only.
    pub fn get_for_option(&self, id: &str, label: &str) -> Option<&str> {
        self.get(id).or_else(|| self.get(label))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
