// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for domain lookups and typed getters.
//!
//! These tests resolve against the fixtures in `tests/resources/` with the
//! live environment and the standard system properties.

mod common;

use common::fixture_registry;
use propcfg::domain::{ConfigKey, ConfigurationService};
use std::env;
use std::sync::Arc;

#[test]
fn test_default_domain() {
    let registry = fixture_registry();
    let config = registry.default_domain();
    assert_eq!(config.name(), "souza");
    assert_eq!(config.get_str_or("name", ""), "souzaProperties");
}

#[test]
fn test_named_domain() {
    let registry = fixture_registry();
    let other = registry.domain("other");
    assert_eq!(other.resolve("name").unwrap().as_str(), "otherProperties");
    assert!(!Arc::ptr_eq(&other, &registry.default_domain()));
}

#[test]
fn test_environment_beats_file() {
    let registry = fixture_registry();
    let path = registry.default_domain().resolve("PATH").unwrap();
    assert_ne!(path.as_str(), "PATH do souza.properties");
    assert_eq!(path.as_str(), env::var("PATH").unwrap().trim());
}

#[test]
fn test_system_property_beats_file() {
    let registry = fixture_registry();
    let os_name = registry.default_domain().resolve("os.name").unwrap();
    assert_ne!(os_name.as_str(), "OS do souza.properties");
    assert_eq!(os_name.as_str(), env::consts::OS);
}

#[test]
fn test_get_string() {
    let config = fixture_registry().default_domain();
    assert_eq!(
        config.resolve("string.texto").unwrap().as_str(),
        "texto da propriedade"
    );
    assert_eq!(
        config.get_str_or("string.texto", "valor padrão"),
        "texto da propriedade"
    );
    assert_eq!(
        config.get_str_or("string.inexistente", "valor padrão"),
        "valor padrão"
    );
}

#[test]
fn test_get_string_blank_is_absent() {
    let config = fixture_registry().default_domain();
    assert!(config.resolve("string.blank").is_none());
    assert_eq!(config.get_str_or("string.blank", "padrão"), "padrão");
    assert!(!config.has(&ConfigKey::from("string.blank")));
}

#[test]
fn test_get_with_padded_key() {
    let config = fixture_registry().default_domain();
    assert_eq!(config.get_str_or("  name  ", ""), "souzaProperties");
    assert!(config.resolve("   ").is_none());
}

#[test]
fn test_continued_line() {
    let config = fixture_registry().default_domain();
    assert_eq!(config.get_str_or("continued.value", ""), "first,second");
}

#[test]
fn test_get_char() {
    let config = fixture_registry().default_domain();
    assert_eq!(config.get_char("char.ok", 'v'), 'c');
    assert_eq!(config.get_char("char.string", 'v'), 't');
    assert_eq!(config.get_char("char.numero", 'v'), '9');
    assert_eq!(config.get_char("char.inexistente", 'v'), 'v');
}

#[test]
fn test_get_i32() {
    let config = fixture_registry().default_domain();
    assert_eq!(config.get_i32("int.ok", 2), 111);
    assert_eq!(config.get_i32("int.string", 3), 3);
    assert_eq!(config.get_i32("int.inexistente", 4), 4);
}

#[test]
fn test_get_i64() {
    let config = fixture_registry().default_domain();
    assert_eq!(config.get_i64("int.ok", 2), 111);
    assert_eq!(config.get_i64("int.string", 3), 3);
    assert_eq!(config.get_i64("long.inexistente", 4), 4);
}

#[test]
fn test_get_f32() {
    let config = fixture_registry().default_domain();
    assert_eq!(config.get_f32("decimal.ok", 2.0), 111.13_f32);
    assert_eq!(config.get_f32("int.string", 3.0), 3.0);
    assert_eq!(config.get_f32("long.inexistente", 4.0), 4.0);
}

#[test]
fn test_get_f64() {
    let config = fixture_registry().default_domain();
    assert_eq!(config.get_f64("decimal.ok", 2.0), 111.13);
    assert_eq!(config.get_f64("int.string", 3.0), 3.0);
    assert_eq!(config.get_f64("long.inexistente", 4.0), 4.0);
}

#[test]
fn test_get_bool() {
    let config = fixture_registry().default_domain();
    assert!(config.get_bool("boolean.ok", false));
    assert!(!config.get_bool("boolean.numero", false));
    assert!(config.get_bool("boolean.numero", true));
    assert!(!config.get_bool("boolean.inexistente", false));
}

#[test]
fn test_get_parsed() {
    let config = fixture_registry().default_domain();
    assert_eq!(config.get_parsed_or::<u8>("int.ok", 0), 111);
    assert_eq!(config.get_parsed_or::<u8>("decimal.ok", 7), 7);
}

#[test]
fn test_missing_domain_still_resolves_layers() {
    let registry = fixture_registry();
    let missing = registry.domain("does-not-exist");
    assert!(missing.resolve("name").is_none());
    assert!(missing.resolve("PATH").is_some());
    assert_eq!(missing.get_i32("int.ok", 5), 5);
}

#[test]
fn test_all_keys_includes_file_keys() {
    let config = fixture_registry().domain("other");
    let keys = config.all_keys();
    assert!(keys.contains(&ConfigKey::from("name")));
    assert!(keys.contains(&ConfigKey::from("os.name")));
}
