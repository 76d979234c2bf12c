// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runtime system property store.
//!
//! System properties are process-level settings that sit between the
//! environment and the properties files. They can be set programmatically at
//! any time or taken from launch arguments such as `-Dserver.port=8080`.

use crate::domain::{ConfigKey, ConfigValue, Result};
use crate::ports::ConfigSource;
use std::collections::HashMap;
use std::env;
use std::path::MAIN_SEPARATOR;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A shared, mutable store of system properties.
///
/// Cloning a `SystemProperties` yields another handle to the same store, so a
/// value set through one handle is visible to every domain resolving through
/// another.
///
/// # Priority
///
/// System properties have a priority of 2: they override properties files
/// (priority 1) and are overridden by environment variables (priority 3).
///
/// # Examples
///
/// ```rust
/// use propcfg::adapters::SystemProperties;
/// use propcfg::ports::ConfigSource;
///
/// let props = SystemProperties::new();
/// let handle = props.clone();
/// handle.set("server.port", "8080");
///
/// assert_eq!(props.property("server.port").as_deref(), Some("8080"));
/// assert_eq!(props.get_str("server.port").unwrap().unwrap().as_str(), "8080");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SystemProperties {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl SystemProperties {
    /// Creates an empty property store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with properties describing the host.
    ///
    /// | Property         | Value                                    |
    /// |------------------|------------------------------------------|
    /// | `os.name`        | `std::env::consts::OS`                   |
    /// | `os.arch`        | `std::env::consts::ARCH`                 |
    /// | `os.family`      | `std::env::consts::FAMILY`               |
    /// | `file.separator` | the platform path separator              |
    /// | `path.separator` | `;` on Windows, `:` elsewhere            |
    /// | `user.dir`       | the current working directory, if known  |
    /// | `user.home`      | the user's home directory, if known      |
    /// | `tmp.dir`        | `std::env::temp_dir()`                   |
    pub fn with_standard() -> Self {
        let props = Self::new();
        props.set("os.name", env::consts::OS);
        props.set("os.arch", env::consts::ARCH);
        props.set("os.family", env::consts::FAMILY);
        props.set("file.separator", MAIN_SEPARATOR.to_string());
        props.set("path.separator", if cfg!(windows) { ";" } else { ":" });
        if let Ok(dir) = env::current_dir() {
            props.set("user.dir", dir.to_string_lossy());
        }
        if let Some(base) = directories::BaseDirs::new() {
            props.set("user.home", base.home_dir().to_string_lossy());
        }
        props.set("tmp.dir", env::temp_dir().to_string_lossy());
        props
    }

    /// Creates a store from launch arguments. See [`SystemProperties::apply_args`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use propcfg::adapters::SystemProperties;
    ///
    /// let props = SystemProperties::from_args(["-Dapp.mode=batch", "--threads", "4"]);
    /// assert_eq!(props.property("app.mode").as_deref(), Some("batch"));
    /// assert_eq!(props.property("threads").as_deref(), Some("4"));
    /// ```
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let props = Self::new();
        props.apply_args(args);
        props
    }

    /// Creates a store with the standard host properties and the process's
    /// own launch arguments (program name skipped).
    pub fn from_env_args() -> Self {
        let props = Self::with_standard();
        props.apply_args(env::args().skip(1));
        props
    }

    /// Sets `key` to `value`, returning the previous value.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.write().insert(key.into(), value.into())
    }

    /// Removes `key`, returning its value.
    pub fn remove(&self, key: &str) -> Option<String> {
        self.write().remove(key)
    }

    /// Returns the raw value stored under `key`.
    pub fn property(&self, key: &str) -> Option<String> {
        self.read().get(key).cloned()
    }

    /// Removes every property.
    pub fn clear(&self) {
        self.write().clear();
    }

    /// Returns the number of properties stored.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns `true` if no properties are stored.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Parses launch arguments into properties.
    ///
    /// Recognised forms:
    /// - `-Dkey=value`: property definition
    /// - `-Dkey`: property defined with an empty value
    /// - `--key=value`: long form with equals sign
    /// - `--key value`: long form with space-separated value
    ///
    /// Anything else (positional arguments, short flags, a `--key` with no
    /// following value) is ignored. Later definitions replace earlier ones.
    pub fn apply_args<I, S>(&self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<S> = args.into_iter().collect();
        let mut values = self.write();
        let mut i = 0;
        while i < args.len() {
            let arg = args[i].as_ref();

            if let Some(definition) = arg.strip_prefix("-D") {
                let (key, value) = definition.split_once('=').unwrap_or((definition, ""));
                if !key.is_empty() {
                    values.insert(key.to_string(), value.to_string());
                }
                i += 1;
            } else if let Some(long) = arg.strip_prefix("--") {
                if let Some((key, value)) = long.split_once('=') {
                    if !key.is_empty() {
                        values.insert(key.to_string(), value.to_string());
                    }
                    i += 1;
                } else {
                    // The next argument is a value only if it is not another flag
                    match args.get(i + 1).map(|s| s.as_ref()) {
                        Some(next) if !long.is_empty() && !next.starts_with('-') => {
                            values.insert(long.to_string(), next.to_string());
                            i += 2;
                        }
                        _ => i += 1,
                    }
                }
            } else {
                i += 1;
            }
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, String>> {
        self.values.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, String>> {
        self.values.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ConfigSource for SystemProperties {
    fn name(&self) -> &str {
        "system"
    }

    fn priority(&self) -> u8 {
        2
    }

    fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
        Ok(self.property(key.as_str()).map(ConfigValue::from))
    }

    fn all_keys(&self) -> Result<Vec<ConfigKey>> {
        Ok(self
            .read()
            .keys()
            .map(|k| ConfigKey::from(k.as_str()))
            .collect())
    }
}
