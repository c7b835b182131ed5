//! Directory entry stub handed to the listing callbacks.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A single entry of a virtual directory listing.
///
/// In the host this carries everything a skin needs to render one row;
/// here it only stores what it is given so callback log lines and tests
/// can read it back.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListItem {
    label: String,
    label2: String,
    path: String,
    art: HashMap<String, String>,
    properties: HashMap<String, String>,
}

impl ListItem {
    pub fn new(label: impl Into<String>) -> Self {
        ListItem {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn label2(&self) -> &str {
        &self.label2
    }

    pub fn set_label2(&mut self, label2: impl Into<String>) {
        self.label2 = label2.into();
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
    }

    pub fn art(&self, kind: &str) -> &str {
        self.art.get(kind).map(String::as_str).unwrap_or("")
    }

    pub fn set_art(&mut self, kind: impl Into<String>, url: impl Into<String>) {
        self.art.insert(kind.into(), url.into());
    }

    /// Property keys are case-insensitive in the host; they are stored
    /// lowercased here so lookups behave the same way.
    pub fn property(&self, key: &str) -> &str {
        self.properties
            .get(&key.to_lowercase())
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn set_property(&mut self, key: &str, value: impl Into<String>) {
        self.properties.insert(key.to_lowercase(), value.into());
    }
}

impl fmt::Display for ListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ListItem({})", self.label)
    }
}
