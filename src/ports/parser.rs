// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.

use crate::domain::Result;
use std::collections::BTreeMap;

/// A trait for parsing configuration file content into a flat key/value map.
///
/// Keys are kept exactly as written in the file; no nesting is implied by dots.
///
/// # Examples
///
/// ```rust
/// use propcfg::ports::ConfigParser;
/// use propcfg::domain::Result;
/// use std::collections::BTreeMap;
///
/// struct LineParser;
///
/// impl ConfigParser for LineParser {
///     fn parse(&self, content: &str) -> Result<BTreeMap<String, String>> {
///         Ok(content
///             .lines()
///             .filter_map(|l| l.split_once('='))
///             .map(|(k, v)| (k.to_string(), v.to_string()))
///             .collect())
///     }
/// }
///
/// let map = LineParser.parse("a=1\nb=2").unwrap();
/// assert_eq!(map.get("b").map(String::as_str), Some("2"));
/// ```
pub trait ConfigParser: Send + Sync {
    /// Parses `content` into a flat map. Later duplicates replace earlier ones.
    fn parse(&self, content: &str) -> Result<BTreeMap<String, String>>;
}
