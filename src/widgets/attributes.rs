//! Host-supplied attribute map.
//!
//! Widgets read their configuration from string attributes the way an
//! element reads markup attributes: values are strings, and booleans are
//! presence-based (`paused` set to anything, including the empty string,
//! means true).

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    values: BTreeMap<String, String>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: &str, value: &str) {
        self.values.insert(name.to_string(), value.to_string());
    }

    /// Remove an attribute. Returns the previous value, if any.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.values.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Presence check used for boolean attributes.
    pub fn has(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Add the attribute when `present` is true, remove it otherwise.
    pub fn toggle(&mut self, name: &str, present: bool) {
        if present {
            self.set(name, "");
        } else {
            self.remove(name);
        }
    }
}
