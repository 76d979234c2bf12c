// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration service trait definition.
//!
//! `ConfigurationService` is the read side of the crate. Implementors supply
//! [`ConfigurationService::get`]; every other method, including the typed
//! getters, is derived from it and never fails: a missing key or a value that
//! does not convert yields the caller's default.

use crate::domain::{ConfigKey, ConfigValue, Result};
use std::str::FromStr;

/// The main configuration service trait.
///
/// # Examples
///
/// ```rust
/// use propcfg::domain::{ConfigError, ConfigKey, ConfigValue, ConfigurationService, Result};
///
/// struct Fixed;
///
/// impl ConfigurationService for Fixed {
///     fn get(&self, key: &ConfigKey) -> Result<ConfigValue> {
///         match key.as_str() {
///             "port" => Ok(ConfigValue::from("8080")),
///             other => Err(ConfigError::ConfigKeyNotFound { key: other.to_string() }),
///         }
///     }
/// }
///
/// let service = Fixed;
/// assert_eq!(service.get_i32("port", 80), 8080);
/// assert_eq!(service.get_i32("missing", 80), 80);
/// assert_eq!(service.get_str_or("missing", "fallback"), "fallback");
/// ```
pub trait ConfigurationService {
    /// Retrieves a configuration value for the given key.
    ///
    /// # Returns
    ///
    /// * `Ok(ConfigValue)` - The resolved (trimmed, non-blank) value
    /// * `Err(ConfigError::BlankKey)` - The key was blank
    /// * `Err(ConfigError::ConfigKeyNotFound)` - No layer had a non-blank value
    fn get(&self, key: &ConfigKey) -> Result<ConfigValue>;

    /// Resolves a key given as a string slice, returning `None` when absent.
    fn resolve(&self, key: &str) -> Option<ConfigValue> {
        self.get(&ConfigKey::from(key)).ok()
    }

    /// Retrieves a configuration value or returns `default` if not found.
    fn get_or_default(&self, key: &ConfigKey, default: &str) -> ConfigValue {
        self.get(key).unwrap_or_else(|_| ConfigValue::from(default))
    }

    /// Resolves `key` as a `String`, or returns `default` if not found.
    fn get_str_or(&self, key: &str, default: &str) -> String {
        self.resolve(key)
            .map(String::from)
            .unwrap_or_else(|| default.to_string())
    }

    /// Checks if any layer holds a non-blank value for `key`.
    fn has(&self, key: &ConfigKey) -> bool {
        self.get(key).is_ok()
    }

    /// Resolves `key` as an `i32`, or returns `default`.
    fn get_i32(&self, key: &str, default: i32) -> i32 {
        converted_or(key, self.resolve(key), default, |v| v.as_i32(key))
    }

    /// Resolves `key` as an `i64`, or returns `default`.
    fn get_i64(&self, key: &str, default: i64) -> i64 {
        converted_or(key, self.resolve(key), default, |v| v.as_i64(key))
    }

    /// Resolves `key` as an `f32`, or returns `default`.
    fn get_f32(&self, key: &str, default: f32) -> f32 {
        converted_or(key, self.resolve(key), default, |v| v.as_f32(key))
    }

    /// Resolves `key` as an `f64`, or returns `default`.
    fn get_f64(&self, key: &str, default: f64) -> f64 {
        converted_or(key, self.resolve(key), default, |v| v.as_f64(key))
    }

    /// Resolves `key` as a `bool` (`true`/`false`, any case), or returns `default`.
    fn get_bool(&self, key: &str, default: bool) -> bool {
        converted_or(key, self.resolve(key), default, |v| v.as_bool(key))
    }

    /// Resolves `key` and returns its first character, or `default` if absent.
    fn get_char(&self, key: &str, default: char) -> char {
        converted_or(key, self.resolve(key), default, |v| v.as_char(key))
    }

    /// Resolves `key` and parses it with `FromStr`, or returns `default`.
    fn get_parsed_or<T>(&self, key: &str, default: T) -> T
    where
        Self: Sized,
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        converted_or(key, self.resolve(key), default, |v| v.parse::<T>(key))
    }
}

/// Applies `convert` to a resolved value, falling back to `default` when the
/// value is absent or does not convert.
fn converted_or<T, F>(key: &str, value: Option<ConfigValue>, default: T, convert: F) -> T
where
    F: FnOnce(&ConfigValue) -> Result<T>,
{
    let Some(value) = value else {
        return default;
    };
    match convert(&value) {
        Ok(converted) => converted,
        Err(e) => {
            tracing::debug!("Using default for key '{}': {}", key, e);
            default
        }
    }
}
