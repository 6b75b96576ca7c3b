//! Document model for desktop entry files.
//!
//! This module provides the data structures a parsed file is materialized into. Every group and
//! entry keeps the [`RawLine`] records of the physical lines that defined it, so unchanged content
//! can be rendered back byte for byte.
//!
//! The main types are:
//! - [`Configuration`] - The whole document: groups plus the end-of-file marker
//! - [`Group`] - A named section and its entries
//! - [`Entry`] - A single key's current value

use crate::error::{ConfigError, ParseResult};
use crate::types::{ORDER_STEP, Order, RawLine};
use std::collections::HashMap;
use std::fmt;

/// A parsed (or freshly built) desktop entry document.
///
/// Groups are stored in an unordered map. Output order is derived from the order keys of their
/// [`RawLine`] records, not from insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Groups by name; the empty name holds lines that precede the first header
    pub(crate) groups: HashMap<String, Group>,

    /// End-of-file marker: trailing comments, and the order given to new content
    pub(crate) end: RawLine,
}

/// A named section of entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    pub(crate) entries: HashMap<String, Entry>,

    /// One record per header line naming this group, in source order
    pub(crate) raws: Vec<RawLine>,
}

/// A key's value within a group
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    pub(crate) value: String,

    /// One record per `key=value` line defining this key, in source order
    pub(crate) raws: Vec<RawLine>,
}

impl Configuration {
    /// Create an empty configuration.
    ///
    /// Renders to the empty string, exactly like the result of parsing `""`.
    pub fn new() -> Self {
        Self {
            groups: HashMap::new(),
            end: RawLine::placeholder(ORDER_STEP),
        }
    }

    /// Parse desktop entry text. See [`crate::parse`].
    pub fn parse(input: &str) -> Self {
        crate::parser::parse_config(input)
    }

    /// Add a group, replacing any group of the same name
    pub fn with_group(mut self, name: impl Into<String>, group: Group) -> Self {
        self.groups.insert(name.into(), group);
        self
    }

    /// Get a group by name
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.get(name)
    }

    /// Get a mutable group by name
    pub fn group_mut(&mut self, name: &str) -> Option<&mut Group> {
        self.groups.get_mut(name)
    }

    /// Check if a group exists
    pub fn contains_group(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    /// Iterate over all groups in no particular order
    pub fn groups(&self) -> impl Iterator<Item = (&str, &Group)> {
        self.groups.iter().map(|(name, group)| (name.as_str(), group))
    }

    /// Get the end-of-file marker
    pub fn end_marker(&self) -> &RawLine {
        &self.end
    }

    /// Order key given to groups and entries that were not parsed from the source
    pub fn end_order(&self) -> Order {
        self.end.order
    }

    /// Look up the current value of `key` in `group`
    pub fn get(&self, group: &str, key: &str) -> ParseResult<&str> {
        let found = self
            .groups
            .get(group)
            .ok_or_else(|| ConfigError::group_not_found(group))?;
        found
            .entry(key)
            .map(Entry::value)
            .ok_or_else(|| ConfigError::key_not_found(group, key))
    }

    /// Render the configuration back to text.
    ///
    /// Unchanged lines are reproduced verbatim; created groups and entries are appended after the
    /// parsed content, before any trailing comments.
    pub fn render(&self) -> String {
        crate::render::render(self)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl Group {
    /// Create a group with no header line in the source.
    ///
    /// Its header is synthesized at the end of the document when rendered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a group whose header is placed at `order`.
    ///
    /// Used to lay out a fresh document explicitly, e.g. a new `.desktop` file.
    pub fn with_order(order: Order) -> Self {
        Self {
            entries: HashMap::new(),
            raws: vec![RawLine::placeholder(order)],
        }
    }

    /// Add an entry, replacing any entry with the same key
    pub fn with_entry(mut self, key: impl Into<String>, entry: Entry) -> Self {
        self.entries.insert(key.into(), entry);
        self
    }

    /// Get an entry by key
    pub fn entry(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    /// Get a mutable entry by key
    pub fn entry_mut(&mut self, key: &str) -> Option<&mut Entry> {
        self.entries.get_mut(key)
    }

    /// Check if an entry exists
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate over all entries in no particular order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    /// Header records, in source order
    pub fn raw_lines(&self) -> &[RawLine] {
        &self.raws
    }
}

impl Entry {
    /// Create an entry with no line in the source
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            raws: Vec::new(),
        }
    }

    /// Create an entry whose line is placed at `order`
    pub fn with_order(value: impl Into<String>, order: Order) -> Self {
        Self {
            value: value.into(),
            raws: vec![RawLine::placeholder(order)],
        }
    }

    /// Get the current value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Records of the `key=value` lines defining this entry, in source order
    pub fn raw_lines(&self) -> &[RawLine] {
        &self.raws
    }
}
