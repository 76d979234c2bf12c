// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! Resolution itself never surfaces these to callers of the typed getters; they
//! travel between the layers (resource loading, parsing, sources) and are turned
//! into defaults or log records at the service boundary.

use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// The main error type for configuration operations.
///
/// Marked `#[non_exhaustive]` so variants can be added without breaking callers.
///
/// # Examples
///
/// ```
/// use propcfg::domain::errors::ConfigError;
///
/// fn lookup() -> Result<String, ConfigError> {
///     Err(ConfigError::ConfigKeyNotFound {
///         key: "database.host".to_string(),
///     })
/// }
///
/// assert!(lookup().is_err());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The requested configuration key was not found in any source.
    #[error("Configuration key not found: {key}")]
    ConfigKeyNotFound {
        /// The key that was not found
        key: String,
    },

    /// The requested key was empty or whitespace only.
    #[error("Configuration key is blank")]
    BlankKey,

    /// Failed to convert a configuration value to the requested type.
    #[error(
        "Failed to convert configuration value for key '{key}' to type {target_type}: {source}"
    )]
    TypeConversionError {
        /// The key being converted
        key: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A value was empty where at least one character was required.
    #[error("Configuration value for key '{key}' is empty, cannot convert to {target_type}")]
    EmptyValue {
        /// The key being converted
        key: String,
        /// The target type name
        target_type: String,
    },

    /// An error occurred in a configuration source.
    #[error("Configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to parse a configuration file or value.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// No resource loader could provide the named resource.
    #[error("Configuration resource not found: {name}")]
    ResourceNotFound {
        /// The resource name that was requested
        name: String,
    },

    /// An I/O error occurred while reading configuration.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    /// Creates a TypeConversionError from a ParseIntError.
    pub fn from_parse_int_error(key: String, err: ParseIntError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "integer".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError from a ParseFloatError.
    pub fn from_parse_float_error(key: String, err: ParseFloatError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "float".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError for a value that is not a boolean literal.
    pub fn invalid_bool(key: String, value: &str) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "boolean".to_string(),
            source: format!("'{}' is not 'true' or 'false'", value).into(),
        }
    }

    /// Returns `true` if this error means "nothing there" rather than "something broke".
    ///
    /// Used by resource chains and resolution to decide whether to fall through quietly.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ConfigError::ConfigKeyNotFound { .. }
                | ConfigError::ResourceNotFound { .. }
                | ConfigError::BlankKey
        )
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
