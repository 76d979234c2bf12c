// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registry of configuration domains.
//!
//! The registry hands out one [`ConfigDomain`] per name. A domain is built on
//! first request by loading `<name>.properties` through the registry's
//! resource loader, then cached for the lifetime of the registry.

use super::domain::ConfigDomain;
use crate::adapters::{
    DirectoryResources, EmbeddedResources, EnvVarAdapter, PropertiesFileAdapter, ResourceChain,
    SystemProperties,
};
use crate::domain::Result;
use crate::ports::{ConfigSource, ResourceLoader};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};

/// Name of the domain returned by [`DomainRegistry::default_domain`] unless
/// configured otherwise.
///
/// Earlier releases of this resolver always used the `souza` domain here.
/// Call `with_default_domain("souza")` on [`DomainRegistryBuilder`] to keep
/// that behaviour.
pub const DEFAULT_DOMAIN: &str = "application";

type DomainCell = Arc<OnceCell<Arc<ConfigDomain>>>;

/// Lazily populated, thread-safe map from domain name to domain.
///
/// Every domain of a registry shares the same environment and system property
/// layers; only the file layer differs. Concurrent first requests for the same
/// name load the resource exactly once and all receive the same handle.
///
/// # Examples
///
/// ```rust
/// use propcfg::prelude::*;
/// use propcfg::adapters::EmbeddedResources;
/// use std::sync::Arc;
///
/// # fn main() -> Result<()> {
/// let registry = DomainRegistry::builder()
///     .with_embedded(EmbeddedResources::new().with("app.properties", "threads = 4\ndebug=TRUE"))
///     .build()?;
///
/// let app = registry.domain("app");
/// assert_eq!(app.get_i32("threads", 1), 4);
/// assert!(app.get_bool("debug", false));
/// assert_eq!(app.get_str_or("missing", "fallback"), "fallback");
/// assert!(Arc::ptr_eq(&app, &registry.domain("app")));
/// # Ok(())
/// # }
/// ```
pub struct DomainRegistry {
    loader: Box<dyn ResourceLoader>,
    env: Arc<dyn ConfigSource>,
    system: SystemProperties,
    extra_sources: Vec<Arc<dyn ConfigSource>>,
    default_name: String,
    domains: RwLock<HashMap<String, DomainCell>>,
}

impl DomainRegistry {
    /// Creates a registry with the default layers and resource roots.
    ///
    /// Equivalent to `DomainRegistry::builder().build()`.
    pub fn new() -> Self {
        DomainRegistryBuilder::new().assemble()
    }

    /// Creates a new registry builder.
    pub fn builder() -> DomainRegistryBuilder {
        DomainRegistryBuilder::new()
    }

    /// Returns the domain named `name`, loading it on first request.
    ///
    /// A resource that is missing, unreadable or malformed leaves the domain
    /// with an empty file layer; the failure is logged at `warn`.
    pub fn domain(&self, name: &str) -> Arc<ConfigDomain> {
        let cell = self.cell(name);
        Arc::clone(cell.get_or_init(|| Arc::new(self.load_domain(name))))
    }

    /// Returns the default domain (`"application"` unless configured).
    pub fn default_domain(&self) -> Arc<ConfigDomain> {
        self.domain(&self.default_name)
    }

    /// Returns the name of the default domain.
    pub fn default_domain_name(&self) -> &str {
        &self.default_name
    }

    /// Returns `true` if a domain named `name` has been requested.
    pub fn contains(&self, name: &str) -> bool {
        self.domains
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    /// Returns the number of domains requested so far.
    pub fn len(&self) -> usize {
        self.domains
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if no domain has been requested yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the names of the domains requested so far, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .domains
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }

    /// Returns a handle to the system property store shared by all domains.
    ///
    /// Properties set through the handle are visible to subsequent lookups
    /// in every domain, including domains already loaded.
    pub fn system_properties(&self) -> SystemProperties {
        self.system.clone()
    }

    /// Returns the cell for `name`, inserting an empty one if needed.
    fn cell(&self, name: &str) -> DomainCell {
        if let Some(cell) = self
            .domains
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
        {
            return Arc::clone(cell);
        }

        let mut domains = self.domains.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(domains.entry(name.to_string()).or_default())
    }

    fn load_domain(&self, name: &str) -> ConfigDomain {
        let mut domain = ConfigDomain::new(name);
        domain.add_source(Arc::clone(&self.env));
        domain.add_source(Arc::new(self.system.clone()));
        for source in &self.extra_sources {
            domain.add_source(Arc::clone(source));
        }

        let file = if name.trim().is_empty() {
            tracing::warn!("Blank configuration domain name, using an empty file layer");
            PropertiesFileAdapter::empty(domain.resource_name())
        } else {
            match PropertiesFileAdapter::from_resource(self.loader.as_ref(), domain.resource_name()) {
                Ok(file) => {
                    tracing::debug!(
                        "Loaded {} properties for domain '{}' from '{}' via {}",
                        file.len(),
                        name,
                        domain.resource_name(),
                        self.loader.name()
                    );
                    file
                }
                Err(e) => {
                    tracing::warn!(
                        "Could not load '{}' for domain '{}', using an empty file layer: {}",
                        domain.resource_name(),
                        name,
                        e
                    );
                    PropertiesFileAdapter::empty(domain.resource_name())
                }
            }
        };
        domain.add_source(Arc::new(file));
        domain
    }
}

impl Default for DomainRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DomainRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomainRegistry")
            .field("loader", &self.loader.name())
            .field("default_name", &self.default_name)
            .field("domains", &self.names())
            .finish()
    }
}

/// Builder for constructing a [`DomainRegistry`].
///
/// Resource loaders added with `with_resource_loader`, `with_resource_dir`,
/// `with_embedded` and `with_user_config_dir` are consulted in the order
/// they were added. If none is added, resources are read from
/// `PROPCFG_RESOURCE_PATH` or, failing that, `./resources` and `.`.
///
/// # Examples
///
/// ```rust
/// use propcfg::prelude::*;
/// use propcfg::adapters::SystemProperties;
///
/// # fn main() -> Result<()> {
/// let props = SystemProperties::new();
/// let registry = DomainRegistry::builder()
///     .with_resource_dir("config")
///     .with_system_properties(props.clone())
///     .with_default_domain("myapp")
///     .build()?;
///
/// props.set("server.port", "9090");
/// assert_eq!(registry.default_domain().get_i32("server.port", 80), 9090);
/// # Ok(())
/// # }
/// ```
pub struct DomainRegistryBuilder {
    loaders: ResourceChain,
    env: Option<Arc<dyn ConfigSource>>,
    system: Option<SystemProperties>,
    extra_sources: Vec<Arc<dyn ConfigSource>>,
    default_name: String,
}

impl DomainRegistryBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            loaders: ResourceChain::new(),
            env: None,
            system: None,
            extra_sources: Vec::new(),
            default_name: DEFAULT_DOMAIN.to_string(),
        }
    }

    /// Adds a resource loader.
    pub fn with_resource_loader(mut self, loader: Box<dyn ResourceLoader>) -> Self {
        self.loaders.push(loader);
        self
    }

    /// Adds a directory to search for `<name>.properties` resources.
    pub fn with_resource_dir(self, dir: impl Into<PathBuf>) -> Self {
        self.with_resource_loader(Box::new(DirectoryResources::new(dir)))
    }

    /// Adds in-memory resources.
    pub fn with_embedded(self, resources: EmbeddedResources) -> Self {
        self.with_resource_loader(Box::new(resources))
    }

    /// Adds the OS-specific configuration directory of the application.
    ///
    /// # Errors
    ///
    /// Fails if the OS directories cannot be determined (no home directory).
    pub fn with_user_config_dir(self, app_name: &str, qualifier: &str) -> Result<Self> {
        let resources = DirectoryResources::from_default_location(app_name, qualifier)?;
        Ok(self.with_resource_loader(Box::new(resources)))
    }

    /// Replaces the environment layer, e.g. with a fixed snapshot.
    pub fn with_env_vars(mut self, env: EnvVarAdapter) -> Self {
        self.env = Some(Arc::new(env));
        self
    }

    /// Uses `props` as the system property layer.
    ///
    /// Defaults to [`SystemProperties::with_standard`].
    pub fn with_system_properties(mut self, props: SystemProperties) -> Self {
        self.system = Some(props);
        self
    }

    /// Adds a further layer to every domain, ordered by its priority.
    pub fn with_source(mut self, source: Arc<dyn ConfigSource>) -> Self {
        self.extra_sources.push(source);
        self
    }

    /// Sets the name of the domain returned by `default_domain`.
    pub fn with_default_domain(mut self, name: impl Into<String>) -> Self {
        self.default_name = name.into();
        self
    }

    /// Builds the registry.
    pub fn build(self) -> Result<DomainRegistry> {
        Ok(self.assemble())
    }

    fn assemble(self) -> DomainRegistry {
        let loader: Box<dyn ResourceLoader> = if self.loaders.is_empty() {
            Box::new(DirectoryResources::default())
        } else {
            Box::new(self.loaders)
        };

        DomainRegistry {
            loader,
            env: self.env.unwrap_or_else(|| Arc::new(EnvVarAdapter::new())),
            system: self.system.unwrap_or_else(SystemProperties::with_standard),
            extra_sources: self.extra_sources,
            default_name: self.default_name,
            domains: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for DomainRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
