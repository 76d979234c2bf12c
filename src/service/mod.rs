// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer: configuration domains and the registry that caches them.

pub mod domain;
pub mod registry;

pub use domain::ConfigDomain;
pub use registry::{DomainRegistry, DomainRegistryBuilder, DEFAULT_DOMAIN};
