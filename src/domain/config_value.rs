// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration value type with type-safe conversions.
//!
//! Every layer produces plain strings. `ConfigValue` carries such a string and
//! knows how to turn it into the primitive types the typed getters hand out.

use crate::domain::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A type-safe wrapper for configuration values.
///
/// # Examples
///
/// ```
/// use propcfg::domain::config_value::ConfigValue;
///
/// let value = ConfigValue::new("42".to_string());
/// assert_eq!(value.as_str(), "42");
/// assert_eq!(value.as_i32("test.key").unwrap(), 42);
/// assert_eq!(value.as_char("test.key").unwrap(), '4');
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigValue(String);

impl ConfigValue {
    /// Creates a new `ConfigValue` from a `String`.
    pub fn new(value: String) -> Self {
        ConfigValue(value)
    }

    /// Returns the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the value into a `String`.
    pub fn as_string(&self) -> String {
        self.0.clone()
    }

    /// Returns `true` if the value is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Returns the trimmed value, or `None` if it is blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use propcfg::domain::config_value::ConfigValue;
    ///
    /// assert_eq!(ConfigValue::from("  v ").trimmed(), Some(ConfigValue::from("v")));
    /// assert_eq!(ConfigValue::from(" \t").trimmed(), None);
    /// ```
    pub fn trimmed(&self) -> Option<ConfigValue> {
        let trimmed = self.0.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(ConfigValue(trimmed.to_string()))
        }
    }

    /// Converts the value to a boolean.
    ///
    /// Only the literals `true` and `false` are accepted, in any letter case.
    /// Anything else, including `1`, `yes` or `on`, is a conversion error.
    ///
    /// # Examples
    ///
    /// ```
    /// use propcfg::domain::config_value::ConfigValue;
    ///
    /// assert_eq!(ConfigValue::from("TRUE").as_bool("k").unwrap(), true);
    /// assert!(ConfigValue::from("1").as_bool("k").is_err());
    /// ```
    pub fn as_bool(&self, key: &str) -> Result<bool> {
        if self.0.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if self.0.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(ConfigError::invalid_bool(key.to_string(), &self.0))
        }
    }

    /// Converts the value to an `i32` (base 10, optional sign).
    pub fn as_i32(&self, key: &str) -> Result<i32> {
        self.0
            .parse::<i32>()
            .map_err(|e| ConfigError::from_parse_int_error(key.to_string(), e))
    }

    /// Converts the value to an `i64` (base 10, optional sign).
    ///
    /// # Examples
    ///
    /// ```
    /// use propcfg::domain::config_value::ConfigValue;
    ///
    /// let value = ConfigValue::from("9223372036854775807");
    /// assert_eq!(value.as_i64("test.key").unwrap(), i64::MAX);
    /// ```
    pub fn as_i64(&self, key: &str) -> Result<i64> {
        self.0
            .parse::<i64>()
            .map_err(|e| ConfigError::from_parse_int_error(key.to_string(), e))
    }

    /// Converts the value to an `f32`.
    pub fn as_f32(&self, key: &str) -> Result<f32> {
        self.0
            .parse::<f32>()
            .map_err(|e| ConfigError::from_parse_float_error(key.to_string(), e))
    }

    /// Converts the value to an `f64`.
    pub fn as_f64(&self, key: &str) -> Result<f64> {
        self.0
            .parse::<f64>()
            .map_err(|e| ConfigError::from_parse_float_error(key.to_string(), e))
    }

    /// Returns the first character of the value.
    ///
    /// Any non-empty value converts, whatever its content.
    ///
    /// # Examples
    ///
    /// ```
    /// use propcfg::domain::config_value::ConfigValue;
    ///
    /// assert_eq!(ConfigValue::from("texto").as_char("k").unwrap(), 't');
    /// assert_eq!(ConfigValue::from("9.5").as_char("k").unwrap(), '9');
    /// assert!(ConfigValue::from("").as_char("k").is_err());
    /// ```
    pub fn as_char(&self, key: &str) -> Result<char> {
        self.0.chars().next().ok_or_else(|| ConfigError::EmptyValue {
            key: key.to_string(),
            target_type: "char".to_string(),
        })
    }

    /// Parses the value into any type that implements `FromStr`.
    ///
    /// # Examples
    ///
    /// ```
    /// use propcfg::domain::config_value::ConfigValue;
    /// use std::net::IpAddr;
    ///
    /// let value = ConfigValue::from("127.0.0.1");
    /// let ip: IpAddr = value.parse("test.key").unwrap();
    /// assert_eq!(ip.to_string(), "127.0.0.1");
    /// ```
    pub fn parse<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.0
            .parse::<T>()
            .map_err(|e| ConfigError::TypeConversionError {
                key: key.to_string(),
                target_type: std::any::type_name::<T>().to_string(),
                source: Box::new(e),
            })
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue(s.to_string())
    }
}

impl From<ConfigValue> for String {
    fn from(value: ConfigValue) -> Self {
        value.0
    }
}

impl AsRef<str> for ConfigValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::IpAddr;

    #[test]
    fn test_config_value_display() {
        let value = ConfigValue::from("test");
        assert_eq!(format!("{}", value), "test");
    }

    #[test]
    fn test_as_bool_literals_any_case() {
        for val in ["true", "True", "TRUE", "tRuE"] {
            assert!(ConfigValue::from(val).as_bool("k").unwrap(), "{}", val);
        }
        for val in ["false", "False", "FALSE"] {
            assert!(!ConfigValue::from(val).as_bool("k").unwrap(), "{}", val);
        }
    }

    #[test]
    fn test_as_bool_rejects_other_words() {
        for val in ["1", "0", "yes", "no", "on", "off", "truthy", ""] {
            assert!(ConfigValue::from(val).as_bool("k").is_err(), "{}", val);
        }
    }

    #[test]
    fn test_as_i32() {
        assert_eq!(ConfigValue::from("111").as_i32("k").unwrap(), 111);
        assert_eq!(ConfigValue::from("-42").as_i32("k").unwrap(), -42);
        assert_eq!(ConfigValue::from("+7").as_i32("k").unwrap(), 7);
    }

    #[test]
    fn test_as_i32_invalid() {
        assert!(ConfigValue::from("texto").as_i32("k").is_err());
        assert!(ConfigValue::from("3.14").as_i32("k").is_err());
        assert!(ConfigValue::from("2147483648").as_i32("k").is_err());
    }

    #[test]
    fn test_as_i64() {
        assert_eq!(
            ConfigValue::from("-9223372036854775808").as_i64("k").unwrap(),
            i64::MIN
        );
        assert!(ConfigValue::from("0x10").as_i64("k").is_err());
    }

    #[test]
    fn test_as_f32() {
        assert_eq!(ConfigValue::from("111.13").as_f32("k").unwrap(), 111.13_f32);
        assert!(ConfigValue::from("abc").as_f32("k").is_err());
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(ConfigValue::from("111.13").as_f64("k").unwrap(), 111.13);
        assert_eq!(ConfigValue::from("1e3").as_f64("k").unwrap(), 1000.0);
        assert!(ConfigValue::from("1,5").as_f64("k").is_err());
    }

    #[test]
    fn test_as_char() {
        assert_eq!(ConfigValue::from("c").as_char("k").unwrap(), 'c');
        assert_eq!(ConfigValue::from("çedilha").as_char("k").unwrap(), 'ç');
        assert!(matches!(
            ConfigValue::from("").as_char("k"),
            Err(ConfigError::EmptyValue { .. })
        ));
    }

    #[test]
    fn test_parse_custom_type() {
        let ip: IpAddr = ConfigValue::from("::1").parse("k").unwrap();
        assert!(ip.is_loopback());

        let result: Result<IpAddr> = ConfigValue::from("not_an_ip").parse("k");
        assert!(matches!(
            result,
            Err(ConfigError::TypeConversionError { .. })
        ));
    }

    #[test]
    fn test_trimmed_and_blank() {
        assert_eq!(
            ConfigValue::from("  spaces  ").trimmed(),
            Some(ConfigValue::from("spaces"))
        );
        assert!(ConfigValue::from("").is_blank());
        assert!(ConfigValue::from("\t \n").is_blank());
        assert!(ConfigValue::from("\t \n").trimmed().is_none());
    }

    #[test]
    fn test_serde_transparent_shape() {
        fn assert_serde<T: Serialize + for<'de> Deserialize<'de>>() {}
        assert_serde::<ConfigValue>();
    }
}
