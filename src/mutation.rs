//! Configuration mutation API.
//!
//! Groups and entries are created lazily: a created element has no [`RawLine`](crate::RawLine)
//! records, so its header or `key=value` line is synthesized at the end of the document when
//! rendered. Updating a value keeps the records of the parsed lines; only the lines encoding the
//! old value are regenerated.
//!
//! # Examples
//!
//! ```
//! let mut config = xdgini::parse("[Default Applications]\ntext/html=firefox.desktop\n");
//!
//! let defaults = config.get_or_create_group("Default Applications");
//! defaults
//!     .get_or_create_entry("text/html", "chromium.desktop")
//!     .set_value("chromium.desktop");
//! defaults.get_or_create_entry("image/png", "eog.desktop");
//!
//! assert_eq!(
//!     config.render(),
//!     "[Default Applications]\ntext/html=chromium.desktop\nimage/png=eog.desktop\n"
//! );
//! ```

use crate::document::{Configuration, Entry, Group};
use tracing::trace;

impl Configuration {
    /// Get the group named `name`, creating an empty one if it does not exist.
    pub fn get_or_create_group(&mut self, name: &str) -> &mut Group {
        if !self.groups.contains_key(name) {
            trace!("Creating group [{}]", name);
        }
        self.groups.entry(name.to_string()).or_default()
    }
}

impl Group {
    /// Get the entry for `key`, creating it with `value` if it does not exist.
    ///
    /// An existing entry keeps its current value.
    pub fn get_or_create_entry(&mut self, key: &str, value: &str) -> &mut Entry {
        if !self.entries.contains_key(key) {
            trace!("Creating entry {:?} = {:?}", key, value);
        }
        self.entries
            .entry(key.to_string())
            .or_insert_with(|| Entry::new(value))
    }
}

impl Entry {
    /// Replace the current value.
    ///
    /// Parsed lines are kept for placement; the ones that encode a different value are
    /// regenerated when rendered.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}
