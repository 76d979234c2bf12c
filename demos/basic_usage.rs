// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the propcfg crate.
//!
//! This example demonstrates:
//! - Building a registry and fetching the default domain
//! - Typed getters with defaults
//! - How system properties and environment variables override the file
//!
//! To run this example:
//! ```bash
//! # Dotted names are not shell identifiers, so pass them through `env`
//! env 'database.port=6543' cargo run --example basic_usage -- -Dapp.name=FromArgs --enable.debug=true
//! ```

use propcfg::adapters::EmbeddedResources;
use propcfg::prelude::*;

const APPLICATION_PROPERTIES: &str = "\
# Shipped defaults
app.name = Basic Usage Demo
database.port = 5432
enable.debug = false
api.timeout = 30.5
log.level = info
";

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== propcfg: Basic Usage ===\n");

    // Launch arguments such as -Dkey=value become system properties
    let registry = DomainRegistry::builder()
        .with_embedded(
            EmbeddedResources::new().with("application.properties", APPLICATION_PROPERTIES),
        )
        .with_resource_dir("resources")
        .with_system_properties(SystemProperties::from_env_args())
        .build()?;

    let config = registry.default_domain();
    println!(
        "Domain '{}' layers: {:?}\n",
        config.name(),
        config.source_names()
    );

    println!("--- String Values ---");
    println!("app.name     = {}", config.get_str_or("app.name", "DefaultApp"));

    println!("\n--- Typed Values ---");
    println!("database.port = {}", config.get_i32("database.port", 3000));
    println!("enable.debug  = {}", config.get_bool("enable.debug", false));
    println!("api.timeout   = {}", config.get_f64("api.timeout", 10.0));

    println!("\n--- Missing Keys ---");
    let key = ConfigKey::from("some.random.key");
    println!("has('some.random.key') = {}", config.has(&key));
    println!(
        "log.format = {} (default)",
        config.get_str_or("log.format", "plain")
    );

    println!("\n--- Runtime Overrides ---");
    registry.system_properties().set("log.level", "debug");
    println!("log.level after set = {}", config.get_str_or("log.level", "warn"));

    println!("\n--- Other Domains ---");
    let missing = registry.domain("not-shipped");
    println!(
        "not-shipped keys from file: {}",
        missing.get_str_or("app.name", "<none>")
    );

    println!("\n=== Example Complete ===");
    Ok(())
}
