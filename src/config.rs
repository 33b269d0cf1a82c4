//! Flat configuration records and their canonical serialization.
//!
//! A [`ConfigRecord`] is the shape every element kind reduces its inputs to
//! before signing: a flat map from string key to primitive value. Records
//! are backed by a `BTreeMap`, so key insertion order never influences the
//! canonical form — two records built from permuted key/value pairs are the
//! same record.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A primitive configuration value: string, number, boolean, or null.
///
/// Mirrors the value space callers supply (typically deserialized from
/// JSON-ish props). Absent optional inputs are represented as [`Null`]
/// rather than omitted, so a record's key set is stable per element kind.
///
/// [`Null`]: ConfigValue::Null
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// A string value. Callers are expected to sanitize before storing;
    /// the per-kind config variants do this automatically.
    Str(String),
    /// A numeric value.
    Num(f64),
    /// A boolean flag.
    Bool(bool),
    /// An explicitly absent value.
    Null,
}

impl ConfigValue {
    /// Returns true for [`ConfigValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, ConfigValue::Null)
    }
}

impl fmt::Display for ConfigValue {
    /// Renders the value as it appears in a record's canonical form.
    ///
    /// Integral numbers render without a trailing `.0` so that `2` and
    /// `2.0` canonicalize identically.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Str(s) => f.write_str(s),
            ConfigValue::Num(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            ConfigValue::Bool(b) => write!(f, "{}", b),
            ConfigValue::Null => f.write_str("null"),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::Str(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::Str(s)
    }
}

impl From<f64> for ConfigValue {
    fn from(n: f64) -> Self {
        ConfigValue::Num(n)
    }
}

impl From<u32> for ConfigValue {
    fn from(n: u32) -> Self {
        ConfigValue::Num(n.into())
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

impl<V: Into<ConfigValue>> From<Option<V>> for ConfigValue {
    fn from(value: Option<V>) -> Self {
        match value {
            Some(v) => v.into(),
            None => ConfigValue::Null,
        }
    }
}

/// A flat, order-independent configuration record.
///
/// # Example
///
/// ```rust
/// use instill::ConfigRecord;
///
/// let a = ConfigRecord::new().set("padding", "s1").set("invert", false);
/// let b = ConfigRecord::new().set("invert", false).set("padding", "s1");
///
/// // Insertion order never matters.
/// assert_eq!(a.canonical(), b.canonical());
/// assert_eq!(a.canonical(), "invert:false|padding:s1");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigRecord {
    entries: BTreeMap<String, ConfigValue>,
}

impl ConfigRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a key, returning the updated record for chaining.
    ///
    /// Setting an existing key overwrites its value.
    pub fn set(mut self, key: &str, value: impl Into<ConfigValue>) -> Self {
        self.entries.insert(key.to_string(), value.into());
        self
    }

    /// Looks up a value by key.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries.get(key)
    }

    /// Number of keys in the record.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the record has no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Renders the canonical form: `key:value` pairs joined by `|`, in key
    /// order.
    ///
    /// This string is the hasher's input; equal canonical forms are the
    /// definition of "the same configuration".
    pub fn canonical(&self) -> String {
        let mut out = String::new();
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push('|');
            }
            out.push_str(key);
            out.push(':');
            out.push_str(&value.to_string());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_display() {
        assert_eq!(ConfigValue::Str("s1".into()).to_string(), "s1");
        assert_eq!(ConfigValue::Num(2.0).to_string(), "2");
        assert_eq!(ConfigValue::Num(1.5).to_string(), "1.5");
        assert_eq!(ConfigValue::Bool(true).to_string(), "true");
        assert_eq!(ConfigValue::Null.to_string(), "null");
    }

    #[test]
    fn test_value_from_option() {
        let some: ConfigValue = Some("x").into();
        let none: ConfigValue = Option::<&str>::None.into();
        assert_eq!(some, ConfigValue::Str("x".into()));
        assert!(none.is_null());
    }

    #[test]
    fn test_record_set_overwrites() {
        let record = ConfigRecord::new().set("space", "s1").set("space", "s2");
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("space"), Some(&ConfigValue::Str("s2".into())));
    }

    #[test]
    fn test_canonical_empty() {
        assert_eq!(ConfigRecord::new().canonical(), "");
    }

    #[test]
    fn test_canonical_order_independent() {
        let a = ConfigRecord::new()
            .set("padding", "s1")
            .set("borderWidth", ConfigValue::Null)
            .set("invert", false);
        let b = ConfigRecord::new()
            .set("invert", false)
            .set("padding", "s1")
            .set("borderWidth", ConfigValue::Null);

        assert_eq!(a.canonical(), b.canonical());
        assert_eq!(a.canonical(), "borderWidth:null|invert:false|padding:s1");
    }

    #[test]
    fn test_canonical_integral_float_normalized() {
        let a = ConfigRecord::new().set("limit", 4u32);
        let b = ConfigRecord::new().set("limit", 4.0f64);
        assert_eq!(a.canonical(), b.canonical());
    }

    #[test]
    fn test_record_serde_round_trip() {
        let record = ConfigRecord::new()
            .set("space", "s1")
            .set("recursive", true)
            .set("splitAfter", ConfigValue::Null);

        let json = serde_json::to_string(&record).unwrap();
        let back: ConfigRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_record_deserializes_from_plain_object() {
        let record: ConfigRecord =
            serde_json::from_str(r#"{"padding":"s1","borderWidth":null,"invert":true}"#).unwrap();
        assert_eq!(record.get("padding"), Some(&ConfigValue::Str("s1".into())));
        assert_eq!(record.get("borderWidth"), Some(&ConfigValue::Null));
        assert_eq!(record.get("invert"), Some(&ConfigValue::Bool(true)));
    }
}
