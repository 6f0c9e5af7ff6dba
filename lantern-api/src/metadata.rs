//! Arbitrary values plugins attach to blocks and other objects.
//!
//! Every value is owned by the plugin that set it, so two plugins can store
//! values under the same key without clobbering each other.

use std::collections::{BTreeMap, HashMap};

use parking_lot::RwLock;
use serde_json::Value;

use crate::plugin::PluginMetadata;

/// A value stored by a plugin, with lenient conversions to primitive types.
#[derive(Clone, Debug, PartialEq)]
pub struct MetadataValue {
    owning_plugin: String,
    value: Value,
}

impl MetadataValue {
    pub fn new(owning_plugin: &PluginMetadata<'_>, value: impl Into<Value>) -> Self {
        Self {
            owning_plugin: owning_plugin.name.to_string(),
            value: value.into(),
        }
    }

    pub fn get_owning_plugin(&self) -> &str {
        &self.owning_plugin
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn as_long(&self) -> i64 {
        match &self.value {
            Value::Number(number) => number
                .as_i64()
                .or_else(|| number.as_f64().map(|float| float as i64))
                .unwrap_or_default(),
            Value::String(string) => string.trim().parse().unwrap_or_default(),
            _ => 0,
        }
    }

    pub fn as_int(&self) -> i32 {
        match &self.value {
            Value::String(string) => string.trim().parse().unwrap_or_default(),
            _ => self.as_long() as i32,
        }
    }

    pub fn as_double(&self) -> f64 {
        match &self.value {
            Value::Number(number) => number.as_f64().unwrap_or_default(),
            Value::String(string) => string.trim().parse().unwrap_or_default(),
            _ => 0.0,
        }
    }

    pub fn as_float(&self) -> f32 {
        self.as_double() as f32
    }

    /// Numbers are true when non-zero, strings when they spell `true`.
    pub fn as_boolean(&self) -> bool {
        match &self.value {
            Value::Bool(boolean) => *boolean,
            Value::Number(_) => self.as_long() != 0,
            Value::String(string) => string.eq_ignore_ascii_case("true"),
            Value::Null => false,
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    pub fn as_string(&self) -> String {
        match &self.value {
            Value::Null => String::new(),
            Value::String(string) => string.clone(),
            other => other.to_string(),
        }
    }
}

/// Per-object metadata contract.
pub trait Metadatable {
    /// Stores `value` under `key`, replacing any value the same plugin stored there before.
    fn set_metadata(&self, key: &str, value: MetadataValue);

    /// Every plugin's value for `key`.
    fn get_metadata(&self, key: &str) -> Vec<MetadataValue>;

    fn has_metadata(&self, key: &str) -> bool;

    /// Removes only the value `owning_plugin` stored under `key`.
    fn remove_metadata(&self, key: &str, owning_plugin: &str);
}

/// Thread-safe backing store for [`Metadatable`] implementations.
///
/// Subjects are identified by a string the implementation picks, e.g.
/// [`MetadataStore::block_subject`].
#[derive(Default, Debug)]
pub struct MetadataStore {
    map: RwLock<HashMap<String, BTreeMap<String, MetadataValue>>>,
}

impl MetadataStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subject string for the block at `x`/`y`/`z` of `world`.
    pub fn block_subject(world: &str, x: i32, y: i32, z: i32) -> String {
        format!("{world}:{x}:{y}:{z}")
    }

    fn disambiguate(subject: &str, key: &str) -> String {
        format!("{subject}:{key}")
    }

    pub fn set_metadata(&self, subject: &str, key: &str, value: MetadataValue) {
        let key = Self::disambiguate(subject, key);
        log::trace!("setting metadata {key} for {}", value.get_owning_plugin());
        self.map
            .write()
            .entry(key)
            .or_default()
            .insert(value.get_owning_plugin().to_string(), value);
    }

    /// Values in plugin name order.
    pub fn get_metadata(&self, subject: &str, key: &str) -> Vec<MetadataValue> {
        self.map
            .read()
            .get(&Self::disambiguate(subject, key))
            .map(|values| values.values().cloned().collect())
            .unwrap_or_default()
    }

    pub fn has_metadata(&self, subject: &str, key: &str) -> bool {
        self.map
            .read()
            .contains_key(&Self::disambiguate(subject, key))
    }

    pub fn remove_metadata(&self, subject: &str, key: &str, owning_plugin: &str) {
        let key = Self::disambiguate(subject, key);
        let mut map = self.map.write();
        if let Some(values) = map.get_mut(&key) {
            values.remove(owning_plugin);
            if values.is_empty() {
                map.remove(&key);
            }
        }
    }

    /// Drops every value owned by `owning_plugin`, e.g. when it unloads.
    pub fn invalidate_all(&self, owning_plugin: &str) {
        let mut map = self.map.write();
        map.retain(|_, values| {
            values.remove(owning_plugin);
            !values.is_empty()
        });
        log::trace!("invalidated metadata of {owning_plugin}");
    }
}
