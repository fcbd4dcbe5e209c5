//! XML node source.
//!
//! This module provides a `NodeSource` backed by `quick-xml`. It handles file
//! I/O and tokenizing, emitting depth-annotated node events for the
//! dispatcher.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use layout::DEFAULT_CONFIG_PATH;
pub use parser::XmlSource;
