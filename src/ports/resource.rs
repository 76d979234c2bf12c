// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resource loader trait definition.
//!
//! A resource is a named blob of text that ships with the application, such as
//! `application.properties`. Where it physically lives (compiled into the
//! binary, next to it on disk, in the user's config directory) is up to the
//! adapter.

use crate::domain::Result;

/// A trait for looking up bundled resources by name.
///
/// # Examples
///
/// ```rust
/// use propcfg::ports::ResourceLoader;
/// use propcfg::domain::{ConfigError, Result};
///
/// struct Nothing;
///
/// impl ResourceLoader for Nothing {
///     fn name(&self) -> &str {
///         "nothing"
///     }
///
///     fn load(&self, resource: &str) -> Result<String> {
///         Err(ConfigError::ResourceNotFound { name: resource.to_string() })
///     }
/// }
///
/// assert!(Nothing.load("app.properties").unwrap_err().is_not_found());
/// ```
pub trait ResourceLoader: Send + Sync {
    /// Returns a short description of the loader, used in log records.
    fn name(&self) -> &str;

    /// Loads the resource named `resource` as text.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The resource content
    /// * `Err(ConfigError::ResourceNotFound)` - This loader does not have it
    /// * `Err(_)` - The resource exists but could not be read
    fn load(&self, resource: &str) -> Result<String>;
}
