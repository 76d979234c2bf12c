// SPDX-License-Identifier: MIT OR Apache-2.0

//! A named configuration domain.
//!
//! A domain owns the resolution chain for one properties resource: the shared
//! environment and system property layers, any extra sources the registry was
//! built with, and the domain's own file layer.

use crate::domain::{ConfigError, ConfigKey, ConfigValue, ConfigurationService, Result};
use crate::ports::ConfigSource;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// File extension of the resource backing a domain.
pub const PROPERTIES_EXTENSION: &str = "properties";

/// A named set of configuration layers, queried from highest to lowest priority.
///
/// Domains are normally obtained from a
/// [`DomainRegistry`](crate::service::DomainRegistry), which builds each one
/// once. They can also be assembled by hand:
///
/// # Examples
///
/// ```rust
/// use propcfg::prelude::*;
/// use propcfg::adapters::{EnvVarAdapter, PropertiesFileAdapter};
/// use std::collections::HashMap;
/// use std::sync::Arc;
///
/// # fn main() -> Result<()> {
/// let mut domain = ConfigDomain::new("demo");
/// domain.add_source(Arc::new(PropertiesFileAdapter::parse_str("demo.properties", "port = 80 ")?));
/// domain.add_source(Arc::new(EnvVarAdapter::with_values(HashMap::from([(
///     "port".to_string(),
///     "8080".to_string(),
/// )]))));
///
/// assert_eq!(domain.resource_name(), "demo.properties");
/// assert_eq!(domain.get_i32("port", 0), 8080);
/// # Ok(())
/// # }
/// ```
pub struct ConfigDomain {
    name: String,
    resource: String,
    /// Kept sorted by priority, highest first
    sources: Vec<Arc<dyn ConfigSource>>,
}

impl ConfigDomain {
    /// Creates a domain with no layers, backed by `<name>.properties`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let resource = format!("{}.{}", name.trim(), PROPERTIES_EXTENSION);
        Self {
            name,
            resource,
            sources: Vec::new(),
        }
    }

    /// Adds a layer. Layers of equal priority keep their insertion order.
    pub fn add_source(&mut self, source: Arc<dyn ConfigSource>) {
        self.sources.push(source);
        self.sources.sort_by_key(|s| std::cmp::Reverse(s.priority()));
    }

    /// Returns the domain name as given.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the name of the resource backing the file layer.
    pub fn resource_name(&self) -> &str {
        &self.resource
    }

    /// Returns the layer names in the order they are consulted.
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Returns every key any layer knows about, sorted and deduplicated.
    ///
    /// Layers that fail to list their keys are skipped.
    pub fn all_keys(&self) -> BTreeSet<ConfigKey> {
        let mut keys = BTreeSet::new();
        for source in &self.sources {
            match source.all_keys() {
                Ok(found) => keys.extend(found),
                Err(e) => tracing::debug!(
                    "Error listing keys of source '{}' in domain '{}': {}",
                    source.name(),
                    self.name,
                    e
                ),
            }
        }
        keys
    }

    fn query_sources(&self, key: &ConfigKey) -> Option<ConfigValue> {
        for source in &self.sources {
            match source.get(key) {
                Ok(Some(value)) => match value.trimmed() {
                    Some(value) => return Some(value),
                    None => {
                        tracing::trace!(
                            "Blank value for key '{}' in source '{}', falling through",
                            key,
                            source.name()
                        );
                    }
                },
                Ok(None) => {}
                Err(e) => {
                    tracing::debug!(
                        "Error querying source '{}' for key '{}': {}",
                        source.name(),
                        key,
                        e
                    );
                }
            }
        }
        None
    }
}

impl ConfigurationService for ConfigDomain {
    fn get(&self, key: &ConfigKey) -> Result<ConfigValue> {
        let key = key.normalized().ok_or(ConfigError::BlankKey)?;
        self.query_sources(&key)
            .ok_or_else(|| ConfigError::ConfigKeyNotFound { key: key.into_string() })
    }
}

impl fmt::Debug for ConfigDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigDomain")
            .field("name", &self.name)
            .field("resource", &self.resource)
            .field("sources", &self.source_names())
            .finish()
    }
}
