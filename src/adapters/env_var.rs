// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable configuration source adapter.
//!
//! Keys are looked up verbatim: `PATH` finds `PATH`, and `db.host` finds a
//! variable literally named `db.host`. No prefixing, case folding or
//! underscore translation is applied.

use crate::domain::{ConfigKey, ConfigValue, Result};
use crate::ports::ConfigSource;
use std::collections::HashMap;
use std::env;

/// Maximum length for environment variable keys (prevents DoS)
const MAX_ENV_KEY_LEN: usize = 512;

/// Configuration source adapter for environment variables.
///
/// By default the live process environment is read on every lookup, so a
/// variable set after the registry was built is still seen. A fixed snapshot
/// can be supplied with [`EnvVarAdapter::with_values`].
///
/// # Priority
///
/// Environment variables have a priority of 3, the highest of the built-in
/// layers.
///
/// # Examples
///
/// ```rust
/// use propcfg::adapters::EnvVarAdapter;
/// use propcfg::ports::ConfigSource;
///
/// let adapter = EnvVarAdapter::new();
/// assert!(adapter.get_str("PATH").unwrap().is_some());
/// ```
#[derive(Debug, Default)]
pub struct EnvVarAdapter {
    /// Fixed values used instead of the process environment, if set
    snapshot: Option<HashMap<String, String>>,
}

impl EnvVarAdapter {
    /// Creates an adapter backed by the live process environment.
    pub fn new() -> Self {
        Self { snapshot: None }
    }

    /// Creates an adapter with pre-populated values.
    ///
    /// The process environment is not consulted at all. Useful for tests and
    /// for embedding a captured environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use propcfg::adapters::EnvVarAdapter;
    /// use propcfg::ports::ConfigSource;
    /// use std::collections::HashMap;
    ///
    /// let values = HashMap::from([("PATH".to_string(), "/opt/bin".to_string())]);
    /// let adapter = EnvVarAdapter::with_values(values);
    /// assert_eq!(adapter.get_str("PATH").unwrap().unwrap().as_str(), "/opt/bin");
    /// ```
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self {
            snapshot: Some(values),
        }
    }

    /// Captures the current process environment into a fixed snapshot.
    ///
    /// Variables whose name or value is not valid Unicode are skipped.
    pub fn snapshot() -> Self {
        Self::with_values(
            env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
                .collect(),
        )
    }

    fn lookup(&self, key: &str) -> Option<String> {
        if let Some(values) = &self.snapshot {
            return values.get(key).cloned();
        }

        // `env::var_os` rejects '=' and NUL in names
        if key.len() > MAX_ENV_KEY_LEN || key.contains(|c: char| c == '=' || c == '\0') {
            tracing::debug!(
                "Skipping environment lookup for unsupported key: key_len={}",
                key.len()
            );
            return None;
        }

        match env::var_os(key)?.into_string() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::debug!("Environment variable '{}' is not valid Unicode", key);
                None
            }
        }
    }
}

impl ConfigSource for EnvVarAdapter {
    fn name(&self) -> &str {
        "env"
    }

    fn priority(&self) -> u8 {
        3
    }

    fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
        Ok(self.lookup(key.as_str()).map(ConfigValue::from))
    }

    fn all_keys(&self) -> Result<Vec<ConfigKey>> {
        let keys = match &self.snapshot {
            Some(values) => values.keys().map(|k| ConfigKey::from(k.as_str())).collect(),
            None => env::vars_os()
                .filter_map(|(k, _)| k.into_string().ok())
                .map(ConfigKey::from)
                .collect(),
        };
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Helper to set and clean up environment variables
    struct EnvGuard {
        keys: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { keys: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.keys.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for key in &self.keys {
                env::remove_var(key);
            }
        }
    }

    #[test]
    fn test_env_adapter_identity() {
        let adapter = EnvVarAdapter::default();
        assert_eq!(adapter.name(), "env");
        assert_eq!(adapter.priority(), 3);
    }

    #[test]
    fn test_env_adapter_reads_live_environment() {
        let adapter = EnvVarAdapter::new();
        let key = ConfigKey::from("PROPCFG_UNIT_LIVE_VAR");
        assert!(adapter.get(&key).unwrap().is_none());

        let mut guard = EnvGuard::new();
        guard.set("PROPCFG_UNIT_LIVE_VAR", "now_visible");

        let value = adapter.get(&key).unwrap();
        assert_eq!(value.unwrap().as_str(), "now_visible");
    }

    #[test]
    fn test_env_adapter_exact_key() {
        let mut guard = EnvGuard::new();
        guard.set("PROPCFG_UNIT_EXACT", "value");

        let adapter = EnvVarAdapter::new();
        assert!(adapter.get_str("PROPCFG_UNIT_EXACT").unwrap().is_some());
        assert!(adapter.get_str("propcfg_unit_exact").unwrap().is_none());
        assert!(adapter.get_str("PROPCFG.UNIT.EXACT").unwrap().is_none());
    }

    #[test]
    fn test_env_adapter_dotted_key() {
        let mut guard = EnvGuard::new();
        guard.set("propcfg.unit.dotted", "dots");

        let adapter = EnvVarAdapter::new();
        let value = adapter.get_str("propcfg.unit.dotted").unwrap();
        assert_eq!(value.unwrap().as_str(), "dots");
    }

    #[test]
    fn test_env_adapter_unsupported_keys() {
        let adapter = EnvVarAdapter::new();
        assert!(adapter.get_str("A=B").unwrap().is_none());
        assert!(adapter.get_str("NUL\0KEY").unwrap().is_none());
        let long = "K".repeat(MAX_ENV_KEY_LEN + 1);
        assert!(adapter.get_str(&long).unwrap().is_none());
    }

    #[test]
    fn test_env_adapter_with_values_ignores_process_env() {
        let adapter = EnvVarAdapter::with_values(HashMap::from([(
            "only".to_string(),
            "here".to_string(),
        )]));
        assert_eq!(adapter.get_str("only").unwrap().unwrap().as_str(), "here");
        assert!(adapter.get_str("PATH").unwrap().is_none());
        assert_eq!(adapter.all_keys().unwrap(), vec![ConfigKey::from("only")]);
    }

    #[test]
    fn test_env_adapter_snapshot_is_frozen() {
        let mut guard = EnvGuard::new();
        guard.set("PROPCFG_UNIT_SNAPSHOT", "before");

        let adapter = EnvVarAdapter::snapshot();
        guard.set("PROPCFG_UNIT_SNAPSHOT", "after");

        let value = adapter.get_str("PROPCFG_UNIT_SNAPSHOT").unwrap();
        assert_eq!(value.unwrap().as_str(), "before");
    }

    #[test]
    fn test_env_adapter_all_keys_live() {
        let mut guard = EnvGuard::new();
        guard.set("PROPCFG_UNIT_KEYS_1", "value1");

        let keys = EnvVarAdapter::new().all_keys().unwrap();
        assert!(keys.contains(&ConfigKey::from("PROPCFG_UNIT_KEYS_1")));
    }
}
