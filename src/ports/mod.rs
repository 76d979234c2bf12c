// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing the interfaces adapters implement.

pub mod parser;
pub mod resource;
pub mod source;

pub use parser::ConfigParser;
pub use resource::ResourceLoader;
pub use source::ConfigSource;
