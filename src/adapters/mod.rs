// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing the resolution layers and resource loaders.
//!
//! Each layer implements the `ConfigSource` trait from the ports layer; each
//! loader implements `ResourceLoader`.

pub mod env_var;
pub mod properties_file;
pub mod resources;
pub mod system_props;

pub use env_var::EnvVarAdapter;
pub use properties_file::{PropertiesFileAdapter, PropertiesParser};
pub use resources::{DirectoryResources, EmbeddedResources, ResourceChain, RESOURCE_PATH_ENV};
pub use system_props::SystemProperties;
