//! MMML is a minimal, line-oriented markup language for describing
//! hierarchical musical event trees. This crate converts MMML text into
//! events and events back into MMML text.

pub mod encoding;
pub mod error;
pub mod language;
pub mod parsing;
pub mod registry;
pub mod solving;
pub mod templating;

/// The indentation unit. One unit per nesting level; tabs are argument
/// separators inside a header, never indentation.
pub const INDENTATION: &str = "    ";

/// Argument placeholder meaning "use the handler's own default for this
/// position". The registry passes it through unchanged; each handler
/// decides what its default is.
pub const IGNORE_TOKEN: &str = "_";
