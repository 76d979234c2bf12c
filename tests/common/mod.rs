// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for the integration tests.

#![allow(dead_code)]

use propcfg::adapters::{EnvVarAdapter, SystemProperties};
use propcfg::domain::Result;
use propcfg::ports::ResourceLoader;
use propcfg::service::DomainRegistry;
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Directory holding the `.properties` fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("resources")
}

/// A registry over the fixtures with the live environment and standard
/// system properties, the way an application would see it.
pub fn fixture_registry() -> DomainRegistry {
    DomainRegistry::builder()
        .with_resource_dir(fixtures_dir())
        .with_default_domain("souza")
        .build()
        .unwrap()
}

/// A registry over the fixtures whose environment and system property layers
/// are fully controlled by the test.
pub fn isolated_registry(
    env_values: &[(&str, &str)],
    props: SystemProperties,
) -> DomainRegistry {
    let env_values: HashMap<String, String> = env_values
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    DomainRegistry::builder()
        .with_resource_dir(fixtures_dir())
        .with_env_vars(EnvVarAdapter::with_values(env_values))
        .with_system_properties(props)
        .with_default_domain("souza")
        .build()
        .unwrap()
}

/// Wraps a loader and counts how often it is asked for a resource.
pub struct CountingLoader<L> {
    inner: L,
    loads: Arc<AtomicUsize>,
}

impl<L: ResourceLoader> CountingLoader<L> {
    pub fn new(inner: L) -> (Self, Arc<AtomicUsize>) {
        let loads = Arc::new(AtomicUsize::new(0));
        (
            Self {
                inner,
                loads: Arc::clone(&loads),
            },
            loads,
        )
    }
}

impl<L: ResourceLoader> ResourceLoader for CountingLoader<L> {
    fn name(&self) -> &str {
        "counting"
    }

    fn load(&self, resource: &str) -> Result<String> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.inner.load(resource)
    }
}

/// Sets environment variables and removes them again on drop.
pub struct EnvGuard {
    keys: Vec<String>,
}

impl EnvGuard {
    pub fn new() -> Self {
        EnvGuard { keys: Vec::new() }
    }

    pub fn set(&mut self, key: &str, value: &str) {
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
