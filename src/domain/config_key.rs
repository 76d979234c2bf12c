// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration key newtype.
//!
//! Keys are matched exactly and case-sensitively in every layer. The only
//! normalisation applied is trimming surrounding whitespace before lookup.

use std::fmt;

/// A type-safe wrapper for configuration keys.
///
/// # Examples
///
/// ```
/// use propcfg::domain::config_key::ConfigKey;
///
/// let key = ConfigKey::from("  database.host ");
/// assert_eq!(key.normalized().unwrap().as_str(), "database.host");
/// assert!(ConfigKey::from("   ").normalized().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new `ConfigKey` from a `String`.
    pub fn new(key: String) -> Self {
        ConfigKey(key)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ConfigKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns `true` if the key is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Returns the trimmed key, or `None` if the key is blank.
    ///
    /// A blank key never matches anything, so callers can short-circuit on `None`.
    pub fn normalized(&self) -> Option<ConfigKey> {
        let trimmed = self.0.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == self.0.len() {
            Some(self.clone())
        } else {
            Some(ConfigKey(trimmed.to_string()))
        }
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey(s.to_string())
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
