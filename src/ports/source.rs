// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration source trait definition.
//!
//! A `ConfigSource` is one layer of the resolution chain: the environment, the
//! system property store, a properties file, or anything a caller plugs in.

use crate::domain::{ConfigKey, ConfigValue, Result};

/// A trait for configuration sources.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; a single source instance is shared by
/// every domain of a registry.
///
/// # Priority
///
/// Sources are consulted from the highest priority value to the lowest. The
/// built-in layers use:
///
/// - **3 (highest)**: Environment variables
/// - **2**: System properties
/// - **1 (lowest)**: The domain's properties file
///
/// # Examples
///
/// ```rust
/// use propcfg::ports::ConfigSource;
/// use propcfg::domain::{ConfigKey, ConfigValue, Result};
///
/// struct Constant;
///
/// impl ConfigSource for Constant {
///     fn name(&self) -> &str {
///         "constant"
///     }
///
///     fn priority(&self) -> u8 {
///         0
///     }
///
///     fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
///         Ok((key.as_str() == "answer").then(|| ConfigValue::from("42")))
///     }
///
///     fn all_keys(&self) -> Result<Vec<ConfigKey>> {
///         Ok(vec![ConfigKey::from("answer")])
///     }
/// }
///
/// assert_eq!(Constant.get_str("answer").unwrap().unwrap().as_str(), "42");
/// ```
pub trait ConfigSource: Send + Sync {
    /// Returns the name of this source, used in log records and error messages.
    fn name(&self) -> &str;

    /// Returns the priority of this source. Higher values win.
    fn priority(&self) -> u8;

    /// Retrieves the raw value stored under `key`.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(ConfigValue))` - The key exists (the value may still be blank)
    /// * `Ok(None)` - The key does not exist in this source
    /// * `Err(ConfigError)` - The source could not be read
    fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>>;

    /// Returns all keys this source currently holds.
    fn all_keys(&self) -> Result<Vec<ConfigKey>>;

    /// Convenience form of [`ConfigSource::get`] taking a string slice.
    fn get_str(&self, key: &str) -> Result<Option<ConfigValue>> {
        self.get(&ConfigKey::from(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestSource {
        name: String,
        priority: u8,
    }

    impl ConfigSource for TestSource {
        fn name(&self) -> &str {
            &self.name
        }

        fn priority(&self) -> u8 {
            self.priority
        }

        fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
            Ok((key.as_str() == "present").then(|| ConfigValue::from("yes")))
        }

        fn all_keys(&self) -> Result<Vec<ConfigKey>> {
            Ok(vec![ConfigKey::from("present")])
        }
    }

    fn source() -> TestSource {
        TestSource {
            name: "test-source".to_string(),
            priority: 2,
        }
    }

    #[test]
    fn test_config_source_identity() {
        let source = source();
        assert_eq!(source.name(), "test-source");
        assert_eq!(source.priority(), 2);
    }

    #[test]
    fn test_config_source_get_str() {
        let source = source();
        assert_eq!(
            source.get_str("present").unwrap(),
            Some(ConfigValue::from("yes"))
        );
        assert!(source.get_str("absent").unwrap().is_none());
    }

    #[test]
    fn test_config_source_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn ConfigSource>();
    }
}
