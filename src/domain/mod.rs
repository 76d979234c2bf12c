// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! Keys, values, errors and the read-side service trait. Nothing here touches
//! the environment, the filesystem or any shared state.

pub mod config_key;
pub mod config_value;
pub mod errors;
pub mod service;

pub use config_key::ConfigKey;
pub use config_value::ConfigValue;
pub use errors::{ConfigError, Result};
pub use service::ConfigurationService;
