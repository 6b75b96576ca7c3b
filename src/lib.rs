//! # xdgini
//!
//! A round-trip-preserving parser and serializer for XDG desktop entry files (`.desktop`) and
//! `mimeapps.list`.
//!
//! Tools that edit these files usually show the user a diff before writing. This crate keeps that
//! diff minimal: text that is parsed and rendered again without changes is reproduced byte for
//! byte, and only the lines of groups and entries that were actually created or modified differ.
//!
//! ## Features
//!
//! - **Lossless parsing**: comments, blank lines, whitespace and line terminators are kept
//! - **Tolerant**: missing `]`, missing `=`, duplicate groups and duplicate keys are accepted
//! - **Selective regeneration**: only lines whose value changed are rewritten
//! - **Deterministic placement**: new groups and entries are appended in a stable order
//! - **Explicit layout**: fresh documents can be built with fixed line orders
//!
//! The format is handled as plain `key=value` text: there is no validation against the desktop
//! entry specification, and no support for lists, escapes or localized keys.
//!
//! ## Example
//!
//! ```rust
//! let input = "# Associations\n[Default Applications]\ntext/html=firefox.desktop\n";
//! let mut config = xdgini::parse(input);
//!
//! // Rendering an unmodified configuration reproduces the input
//! assert_eq!(config.render(), input);
//!
//! config
//!     .get_or_create_group("Default Applications")
//!     .get_or_create_entry("image/png", "eog.desktop");
//!
//! assert_eq!(
//!     config.render(),
//!     "# Associations\n[Default Applications]\ntext/html=firefox.desktop\nimage/png=eog.desktop\n"
//! );
//! ```
//!
//! ## Building a Fresh Document
//!
//! ```rust
//! use xdgini::{Configuration, Entry, Group};
//!
//! let entry = Configuration::new().with_group(
//!     "Desktop Entry",
//!     Group::with_order(1)
//!         .with_entry("Type", Entry::with_order("Application", 1))
//!         .with_entry("Name", Entry::with_order("Image Viewer", 2))
//!         .with_entry("Exec", Entry::with_order("viewer %f", 3)),
//! );
//!
//! assert_eq!(
//!     entry.render(),
//!     "[Desktop Entry]\nType=Application\nName=Image Viewer\nExec=viewer %f\n"
//! );
//! ```

// Module declarations
mod document;
mod error;
mod mutation;
mod parser;
mod render;
mod types;

// Public API exports
pub use document::{Configuration, Entry, Group};
pub use error::{ConfigError, ParseResult};
pub use parser::{Line, LineParser};
pub use types::{ORDER_STEP, Order, RawLine};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse desktop entry text into a [`Configuration`].
///
/// Parsing never fails. Malformed lines are kept as they are: a header without its closing bracket
/// names the text after `[`, a line without `=` is a key with an empty value, and for duplicate
/// keys the first value wins while later lines are preserved for rendering.
pub fn parse(input: &str) -> Configuration {
    parser::parse_config(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_parsing() {
        let config = parse("[Foo]\nKey1=Value1\n");
        assert_eq!(config.get("Foo", "Key1").unwrap(), "Value1");
        assert_eq!(config.groups().count(), 1);
    }

    #[test]
    fn test_round_trip() {
        let input = "[Foo]\nKey1=Value1\n";
        assert_eq!(parse(input).render(), input);
    }

    #[test]
    fn test_set_value() {
        let mut config = parse("[Foo]\nKey1=Value1\n");
        config
            .group_mut("Foo")
            .unwrap()
            .entry_mut("Key1")
            .unwrap()
            .set_value("Value2");
        assert_eq!(config.render(), "[Foo]\nKey1=Value2\n");
    }

    #[test]
    fn test_new_group() {
        let mut config = parse("[Foo]\nKey1=Value1\n");
        config
            .get_or_create_group("Bar")
            .get_or_create_entry("Key2", "Value2");
        assert_eq!(config.render(), "[Foo]\nKey1=Value1\n[Bar]\nKey2=Value2\n");
    }
}
