// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resource loader adapters.
//!
//! Three loaders are provided: resources compiled into the binary, resources
//! found under a list of directories, and an ordered chain of other loaders.

use super::properties_file::read_properties_file;
use crate::domain::{ConfigError, Result};
use crate::ports::ResourceLoader;
use directories::ProjectDirs;
use std::borrow::Cow;
use std::collections::HashMap;
use std::env;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Environment variable holding the resource search path.
///
/// Uses the platform's path-list syntax (`:`-separated on Unix, `;` on Windows).
pub const RESOURCE_PATH_ENV: &str = "PROPCFG_RESOURCE_PATH";

/// Resources held in memory, usually via `include_str!`.
///
/// # Examples
///
/// ```rust
/// use propcfg::adapters::EmbeddedResources;
/// use propcfg::ports::ResourceLoader;
///
/// let resources = EmbeddedResources::new().with("application.properties", "port=8080");
/// assert_eq!(resources.load("application.properties").unwrap(), "port=8080");
/// assert!(resources.load("other.properties").unwrap_err().is_not_found());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmbeddedResources {
    resources: HashMap<String, Cow<'static, str>>,
}

impl EmbeddedResources {
    /// Creates an empty set of resources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a resource, replacing any previous one of the same name.
    pub fn with(mut self, name: impl Into<String>, content: impl Into<Cow<'static, str>>) -> Self {
        self.insert(name, content);
        self
    }

    /// Adds a resource in place.
    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<Cow<'static, str>>) {
        self.resources.insert(name.into(), content.into());
    }

    /// Returns `true` if a resource named `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.resources.contains_key(name)
    }
}

impl ResourceLoader for EmbeddedResources {
    fn name(&self) -> &str {
        "embedded"
    }

    fn load(&self, resource: &str) -> Result<String> {
        self.resources
            .get(resource)
            .map(|content| content.to_string())
            .ok_or_else(|| ConfigError::ResourceNotFound {
                name: resource.to_string(),
            })
    }
}

/// Resources looked up under an ordered list of root directories.
///
/// The first root containing the resource wins.
#[derive(Debug, Clone)]
pub struct DirectoryResources {
    roots: Vec<PathBuf>,
}

impl DirectoryResources {
    /// Creates a loader searching a single root directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            roots: vec![root.into()],
        }
    }

    /// Creates a loader searching `roots` in order.
    pub fn with_roots<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }

    /// Appends a root to search after the existing ones.
    pub fn add_root(&mut self, root: impl Into<PathBuf>) {
        self.roots.push(root.into());
    }

    /// Reads roots from [`RESOURCE_PATH_ENV`], if it is set and non-empty.
    pub fn from_env() -> Option<Self> {
        let paths = env::var_os(RESOURCE_PATH_ENV)?;
        let roots: Vec<PathBuf> = env::split_paths(&paths)
            .filter(|p| !p.as_os_str().is_empty())
            .collect();
        if roots.is_empty() {
            None
        } else {
            Some(Self { roots })
        }
    }

    /// Creates a loader for the OS-specific configuration directory.
    ///
    /// - Linux: `~/.config/<app_name>/`
    /// - macOS: `~/Library/Application Support/<qualifier>.<app_name>/`
    /// - Windows: `%APPDATA%\<qualifier>\<app_name>\config\`
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use propcfg::adapters::DirectoryResources;
    ///
    /// let resources = DirectoryResources::from_default_location("myapp", "com.example").unwrap();
    /// ```
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::SourceError {
                source_name: "resources".to_string(),
                message: "Failed to determine project directories".to_string(),
                source: None,
            })?;
        Ok(Self::new(proj_dirs.config_dir()))
    }

    /// Returns the roots in search order.
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    fn validate(resource: &str) -> Result<&Path> {
        let path = Path::new(resource);
        let valid = !resource.trim().is_empty()
            && path
                .components()
                .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if valid {
            Ok(path)
        } else {
            Err(ConfigError::SourceError {
                source_name: "resources".to_string(),
                message: format!("Invalid resource name: '{}'", resource),
                source: None,
            })
        }
    }
}

impl Default for DirectoryResources {
    /// Roots from [`RESOURCE_PATH_ENV`], or `./resources` then `.`.
    fn default() -> Self {
        Self::from_env().unwrap_or_else(|| Self::with_roots(["resources", "."]))
    }
}

impl ResourceLoader for DirectoryResources {
    fn name(&self) -> &str {
        "directory"
    }

    fn load(&self, resource: &str) -> Result<String> {
        let relative = Self::validate(resource)?;
        for root in &self.roots {
            let candidate = root.join(relative);
            match read_properties_file(&candidate) {
                Ok(content) => {
                    tracing::debug!("Found resource '{}' at {}", resource, candidate.display());
                    return Ok(content);
                }
                Err(e) if e.is_not_found() => continue,
                Err(e) => return Err(e),
            }
        }
        Err(ConfigError::ResourceNotFound {
            name: resource.to_string(),
        })
    }
}

/// An ordered list of loaders; the first that has the resource wins.
///
/// A loader reporting [`ConfigError::ResourceNotFound`] passes the request on
/// to the next one. Any other error stops the search.
///
/// # Examples
///
/// ```rust
/// use propcfg::adapters::{EmbeddedResources, ResourceChain};
/// use propcfg::ports::ResourceLoader;
///
/// let chain = ResourceChain::new()
///     .with_loader(EmbeddedResources::new().with("a.properties", "x=1"))
///     .with_loader(EmbeddedResources::new().with("b.properties", "x=2"));
/// assert_eq!(chain.load("b.properties").unwrap(), "x=2");
/// ```
#[derive(Default)]
pub struct ResourceChain {
    loaders: Vec<Box<dyn ResourceLoader>>,
}

impl ResourceChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a loader.
    pub fn with_loader(mut self, loader: impl ResourceLoader + 'static) -> Self {
        self.push(Box::new(loader));
        self
    }

    /// Appends an already boxed loader.
    pub fn push(&mut self, loader: Box<dyn ResourceLoader>) {
        self.loaders.push(loader);
    }

    /// Returns the number of loaders.
    pub fn len(&self) -> usize {
        self.loaders.len()
    }

    /// Returns `true` if the chain has no loaders.
    pub fn is_empty(&self) -> bool {
        self.loaders.is_empty()
    }
}

impl fmt::Debug for ResourceChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.loaders.iter().map(|l| l.name()))
            .finish()
    }
}

impl ResourceLoader for ResourceChain {
    fn name(&self) -> &str {
        "chain"
    }

    fn load(&self, resource: &str) -> Result<String> {
        for loader in &self.loaders {
            match loader.load(resource) {
                Ok(content) => return Ok(content),
                Err(e) if e.is_not_found() => continue,
                Err(e) => return Err(e),
            }
        }
        Err(ConfigError::ResourceNotFound {
            name: resource.to_string(),
        })
    }
}
