// SPDX-License-Identifier: MIT OR Apache-2.0

//! Properties file configuration source adapter.
//!
//! This module provides a parser for the classic `.properties` format and an
//! adapter that serves the parsed pairs as the lowest-priority layer of a
//! domain.

use crate::domain::{ConfigError, ConfigKey, ConfigValue, Result};
use crate::ports::{ConfigParser, ConfigSource, ResourceLoader};
use java_properties::PropertiesIter;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Maximum allowed file size for properties files (10MB)
const MAX_PROPERTIES_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Parser for the `.properties` format.
///
/// The grammar is the one `java.util.Properties` reads: `key=value`,
/// `key: value` or `key value` pairs, `#`/`!` comments, backslash line
/// continuations and `\uXXXX` escapes. A later duplicate key replaces an
/// earlier one.
///
/// Content handed to the parser is already decoded text, so it is read back
/// as UTF-8 rather than the ISO-8859-1 the format historically assumes.
///
/// # Examples
///
/// ```rust
/// use propcfg::adapters::PropertiesParser;
/// use propcfg::ports::ConfigParser;
///
/// let content = "# comment\nname = souza\npath:/usr/bin\\\n    :/bin\ngreeting hello\\u0021";
/// let map = PropertiesParser::new().parse(content).unwrap();
/// assert_eq!(map["name"], "souza");
/// assert_eq!(map["path"], "/usr/bin:/bin");
/// assert_eq!(map["greeting"], "hello!");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PropertiesParser;

impl PropertiesParser {
    /// Creates a new properties parser.
    pub fn new() -> Self {
        PropertiesParser
    }
}

impl ConfigParser for PropertiesParser {
    fn parse(&self, content: &str) -> Result<BTreeMap<String, String>> {
        let mut result = BTreeMap::new();
        PropertiesIter::new_with_encoding(content.as_bytes(), encoding_rs::UTF_8)
            .read_into(|key, value| {
                result.insert(key, value);
            })
            .map_err(|e| ConfigError::ParseError {
                message: format!("Failed to parse properties: {}", e),
                source: Some(Box::new(e)),
            })?;
        Ok(result)
    }
}

/// Configuration source adapter for a parsed properties resource.
///
/// The values are read once at construction and never change afterwards.
///
/// # Priority
///
/// Properties files have a priority of 1, which means they are overridden by
/// both system properties (priority 2) and environment variables (priority 3).
///
/// # Examples
///
/// ```rust
/// use propcfg::adapters::PropertiesFileAdapter;
/// use propcfg::ports::ConfigSource;
///
/// let adapter = PropertiesFileAdapter::parse_str("inline", "name=souza").unwrap();
/// assert_eq!(adapter.get_str("name").unwrap().unwrap().as_str(), "souza");
/// ```
#[derive(Debug, Clone)]
pub struct PropertiesFileAdapter {
    /// Where the values came from (file path or resource name)
    origin: String,
    /// Parsed configuration values
    values: BTreeMap<String, String>,
}

impl PropertiesFileAdapter {
    /// Creates an adapter with no values.
    ///
    /// Used as the file layer of a domain whose resource could not be loaded.
    pub fn empty(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            values: BTreeMap::new(),
        }
    }

    /// Parses `content` into a new adapter.
    pub fn parse_str(origin: impl Into<String>, content: &str) -> Result<Self> {
        Ok(Self {
            origin: origin.into(),
            values: PropertiesParser::new().parse(content)?,
        })
    }

    /// Reads and parses a properties file.
    ///
    /// Files larger than 10MB are rejected. Content that is not valid UTF-8
    /// is decoded as ISO-8859-1.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use propcfg::adapters::PropertiesFileAdapter;
    ///
    /// let adapter = PropertiesFileAdapter::from_file("/etc/myapp/app.properties").unwrap();
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = read_properties_file(path)?;
        Self::parse_str(path.display().to_string(), &content)
    }

    /// Loads `resource` through `loader` and parses it.
    pub fn from_resource(loader: &dyn ResourceLoader, resource: &str) -> Result<Self> {
        let content = loader.load(resource)?;
        Self::parse_str(resource, &content)
    }

    /// Returns where the values came from.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Returns the parsed key/value pairs.
    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    /// Returns the number of parsed pairs.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no pairs were parsed.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ConfigSource for PropertiesFileAdapter {
    fn name(&self) -> &str {
        "properties-file"
    }

    fn priority(&self) -> u8 {
        1
    }

    fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
        Ok(self
            .values
            .get(key.as_str())
            .map(|v| ConfigValue::from(v.as_str())))
    }

    fn all_keys(&self) -> Result<Vec<ConfigKey>> {
        Ok(self
            .values
            .keys()
            .map(|k| ConfigKey::from(k.as_str()))
            .collect())
    }
}

/// Reads a properties file from disk, enforcing the size limit and decoding.
///
/// A missing file is reported as [`ConfigError::ResourceNotFound`].
pub(crate) fn read_properties_file(path: &Path) -> Result<String> {
    let file_name = || {
        path.file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("<unknown>")
            .to_string()
    };

    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::ResourceNotFound { name: file_name() });
        }
        Err(e) => return Err(e.into()),
    };

    if !metadata.is_file() {
        return Err(ConfigError::ResourceNotFound { name: file_name() });
    }

    if metadata.len() > MAX_PROPERTIES_FILE_SIZE {
        return Err(ConfigError::SourceError {
            source_name: "properties-file".to_string(),
            message: format!(
                "Configuration file too large: {} bytes (max {} bytes)",
                metadata.len(),
                MAX_PROPERTIES_FILE_SIZE
            ),
            source: None,
        });
    }

    let bytes = fs::read(path)?;

    Ok(decode_properties(bytes))
}

/// Decodes file bytes as UTF-8, falling back to ISO-8859-1.
pub(crate) fn decode_properties(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        // Every byte maps to the code point of the same value in ISO-8859-1
        Err(e) => e.into_bytes().into_iter().map(char::from).collect(),
    }
}
