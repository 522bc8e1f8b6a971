//! The style registry
//!
//! [`Params`] maps every [`Key`] to a [`Value`]. A fresh registry holds the defaults,
//! and [`Params::set`] checks each value against its key before storing it.
//!
//! A process-wide registry is available through [`rc_get`], [`rc_set`], [`rc_update`]
//! and friends. Renderers that prefer explicit configuration can take a [`Params`] directly.
use std::fmt;

#[cfg(feature = "diag")]
mod diag;
pub mod file;
mod global;
mod key;
mod value;

#[cfg(feature = "diag")]
pub use diag::{Diagnostic, Source};
pub use global::{rc_context, rc_defaults, rc_get, rc_params, rc_set, rc_set_str, rc_update};
pub use key::{Key, Kind};
pub use value::Value;

/// Error returned by registry updates
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The option name is not recognized
    UnknownKey(String),
    /// The value is not of the kind the key holds
    KindMismatch {
        /// The key being set
        key: Key,
        /// The kind the key holds
        expected: Kind,
        /// The kind that was supplied
        found: Kind,
    },
    /// A size or width is zero, negative or not finite
    NotPositive {
        /// The key being set
        key: Key,
        /// The rejected number
        value: f32,
    },
    /// The text could not be parsed for this key
    InvalidValue {
        /// The key being set
        key: Key,
        /// The rejected text
        text: String,
        /// Why it was rejected
        reason: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownKey(name) => write!(f, "unknown style key: \"{}\"", name),
            Error::KindMismatch {
                key,
                expected,
                found,
            } => write!(f, "{} expects a {}, got a {}", key, expected, found),
            Error::NotPositive { key, value } => {
                write!(f, "{} must be a positive number, got {}", key, value)
            }
            Error::InvalidValue { key, text, reason } => {
                write!(f, "invalid value \"{}\" for {}: {}", text, key, reason)
            }
        }
    }
}

impl std::error::Error for Error {}

/// A complete set of style options
///
/// Every key always holds a value of its kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Params {
    // indexed by `Key as usize`
    values: Vec<Value>,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            values: Key::ALL.iter().map(|k| k.default_value()).collect(),
        }
    }
}

impl Params {
    /// Create a registry holding the default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from rc text, starting from the defaults
    pub fn from_rc_str(src: &str) -> Result<Self, file::Error> {
        let mut params = Self::default();
        params.update_from_rc_str(src)?;
        Ok(params)
    }

    /// Get the value of a key
    pub fn get(&self, key: Key) -> &Value {
        &self.values[key as usize]
    }

    /// Set the value of a key and return the previous value.
    ///
    /// The registry is unchanged if the value is rejected.
    pub fn set<V>(&mut self, key: Key, value: V) -> Result<Value, Error>
    where
        V: Into<Value>,
    {
        let value = key.validate(value.into())?;
        log::trace!("{} = {}", key, value);
        Ok(std::mem::replace(&mut self.values[key as usize], value))
    }

    /// Set the value of a key, returning self for chaining
    pub fn with<V>(mut self, key: Key, value: V) -> Result<Self, Error>
    where
        V: Into<Value>,
    {
        self.set(key, value)?;
        Ok(self)
    }

    /// Set a key by name from its rc text form, and return the previous value
    pub fn set_str(&mut self, name: &str, text: &str) -> Result<Value, Error> {
        let key: Key = name.parse()?;
        let value = Value::parse(key.kind(), text).map_err(|reason| Error::InvalidValue {
            key,
            text: text.trim().to_string(),
            reason,
        })?;
        self.set(key, value)
    }

    /// Restore the default value of a key and return the previous value
    pub fn reset(&mut self, key: Key) -> Value {
        std::mem::replace(&mut self.values[key as usize], key.default_value())
    }

    /// Restore the default value of every key
    pub fn reset_all(&mut self) {
        *self = Self::default();
    }

    /// Whether a key holds its default value
    pub fn is_default(&self, key: Key) -> bool {
        *self.get(key) == key.default_value()
    }

    /// Iterate over all keys and their values, in key order
    pub fn iter(&self) -> impl Iterator<Item = (Key, &Value)> + '_ {
        Key::ALL.iter().copied().zip(self.values.iter())
    }

    /// The keys whose values differ from `other`
    pub fn diff(&self, other: &Params) -> Vec<Key> {
        self.iter()
            .filter(|(k, v)| other.get(*k) != *v)
            .map(|(k, _)| k)
            .collect()
    }

    /// Apply the entries of rc text.
    ///
    /// The whole text is parsed before anything is applied,
    /// so the registry is unchanged if an error is returned.
    pub fn update_from_rc_str(&mut self, src: &str) -> Result<(), file::Error> {
        let entries = file::parse(src)?;
        let mut updated = self.clone();
        for entry in entries {
            updated
                .set(entry.key, entry.value)
                .map_err(|source| file::Error::InvalidValue {
                    span: entry.value_span,
                    source,
                })?;
        }
        *self = updated;
        Ok(())
    }

    /// Write the entries that differ from the defaults as rc text
    pub fn to_rc_string(&self) -> String {
        self.iter()
            .filter(|(k, _)| !self.is_default(*k))
            .map(|(k, v)| format!("{}: {}\n", k, v.to_rc_text()))
            .collect()
    }

    pub(crate) fn float(&self, key: Key) -> f32 {
        match self.get(key) {
            Value::Float(v) => *v,
            other => unreachable!("{} holds {:?}", key, other),
        }
    }

    pub(crate) fn families(&self, key: Key) -> &[String] {
        match self.get(key) {
            Value::Families(fams) => fams.as_slice(),
            other => unreachable!("{} holds {:?}", key, other),
        }
    }

    pub(crate) fn color(&self, key: Key) -> plotive_base::ColorU8 {
        match self.get(key) {
            Value::Color(c) => *c,
            other => unreachable!("{} holds {:?}", key, other),
        }
    }

    pub(crate) fn font_size(&self, key: Key) -> crate::style::font::FontSize {
        match self.get(key) {
            Value::FontSize(sz) => *sz,
            other => unreachable!("{} holds {:?}", key, other),
        }
    }

    pub(crate) fn font_spec(&self, key: Key) -> &str {
        match self.get(key) {
            Value::FontSpec(spec) => spec.as_str(),
            other => unreachable!("{} holds {:?}", key, other),
        }
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.iter() {
            writeln!(f, "{}: {}", key, value.to_rc_text())?;
        }
        Ok(())
    }
}
