use im::OrdMap;
use serde::{Deserialize, Serialize};

/// Value seeded when a key is renamed onto an entry that has no usable
/// predecessor.
pub const PLACEHOLDER_TEXT: &str = "Sample text";

/// Flat key -> value store backing every user-editable string of a
/// template: element content, media URLs, alt texts, link targets. Nodes
/// reference entries indirectly through generated keys; deleting a node
/// does NOT reclaim its entries, the exported document keeps them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataStore {
    entries: OrdMap<String, String>,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&String> {
        self.entries.get(key)
    }

    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.entries.get(key).map_or(default, String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn merge(&mut self, entries: impl IntoIterator<Item = (String, String)>) {
        for (key, value) in entries {
            self.entries.insert(key, value);
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Migrates a value when an element's data key is renamed. An empty new
    /// key leaves the store untouched; renaming onto the same key is a
    /// no-op; a rename with no (or an empty) previous value seeds the new
    /// key with placeholder text.
    pub fn rename_key(&mut self, old_key: Option<&str>, new_key: &str) {
        if new_key.is_empty() {
            return;
        }
        match old_key {
            Some(old) if old == new_key => {}
            Some(old) => {
                let value = self
                    .entries
                    .remove(old)
                    .filter(|v| !v.is_empty())
                    .unwrap_or_else(|| PLACEHOLDER_TEXT.to_string());
                self.entries.insert(new_key.to_string(), value);
            }
            None => {
                self.entries
                    .insert(new_key.to_string(), PLACEHOLDER_TEXT.to_string());
            }
        }
    }
}
