// SPDX-License-Identifier: MIT OR Apache-2.0

//! A layered configuration value resolver.
//!
//! Values are organised in named domains. Looking up a key in a domain checks,
//! in order:
//!
//! 1. the process environment variable of exactly that name,
//! 2. the runtime system property of that name,
//! 3. the domain's `<name>.properties` resource,
//!
//! and returns the first non-blank value, trimmed. Typed getters convert the
//! result and fall back to a caller-supplied default when the key is absent
//! or the value does not convert.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`ConfigKey`, `ConfigValue`, errors) and the
//!   `ConfigurationService` trait with its typed getters
//! - **Ports**: Trait definitions (`ConfigSource`, `ConfigParser`, `ResourceLoader`)
//! - **Adapters**: Environment, system properties, properties files, resource loaders
//! - **Service**: `ConfigDomain` and the `DomainRegistry` that caches domains
//!
//! # Quick Start
//!
//! ```rust
//! use propcfg::prelude::*;
//! use propcfg::adapters::EmbeddedResources;
//!
//! # fn main() -> Result<()> {
//! let registry = DomainRegistry::builder()
//!     .with_embedded(EmbeddedResources::new().with(
//!         "application.properties",
//!         "server.port = 8080\nserver.secure=true\n",
//!     ))
//!     .build()?;
//!
//! let config = registry.default_domain();
//! assert_eq!(config.get_i32("server.port", 80), 8080);
//! assert!(config.get_bool("server.secure", false));
//! assert_eq!(config.get_str_or("server.name", "localhost"), "localhost");
//!
//! // System properties override the file, environment variables override both
//! registry.system_properties().set("server.port", "9090");
//! assert_eq!(config.get_i32("server.port", 80), 9090);
//! # Ok(())
//! # }
//! ```
//!
//! # Resources
//!
//! Unless configured otherwise, `<name>.properties` is looked up in the
//! directories listed in `PROPCFG_RESOURCE_PATH`, or in `./resources` and
//! then the current directory. A domain whose resource is missing or broken
//! still works; its file layer is simply empty and a warning is logged
//! through `tracing`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{EnvVarAdapter, PropertiesFileAdapter, SystemProperties};
    pub use crate::domain::{ConfigError, ConfigKey, ConfigValue, ConfigurationService, Result};
    pub use crate::ports::{ConfigParser, ConfigSource, ResourceLoader};
    pub use crate::service::{ConfigDomain, DomainRegistry, DomainRegistryBuilder};
}
