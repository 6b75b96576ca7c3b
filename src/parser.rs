use pest::Parser;
use pest_derive::Parser;
use tracing::{debug, warn};
use crate::document::{Configuration, Entry, Group};
use crate::error::{ConfigError, ParseResult};
use crate::types::{ORDER_STEP, Order, RawLine};

#[derive(Parser)]
#[grammar = "xdgini.pest"]
pub struct LineParser;

/// Classification of one physical line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty or whitespace-only line
    Blank,

    /// Line starting with `#`
    Comment,

    /// Group header: [name]
    Header { name: &'a str },

    /// Entry: key=value (value is empty when the line has no '=')
    KeyValue { key: &'a str, value: &'a str },
}

impl LineParser {
    /// Classify a single line. Trailing whitespace, including the terminator, is ignored.
    pub fn classify(line: &str) -> ParseResult<Line<'_>> {
        let trimmed = line.trim_end();
        let pairs = LineParser::parse(Rule::line, trimmed)?;

        for pair in pairs.flatten() {
            match pair.as_rule() {
                Rule::blank => return Ok(Line::Blank),

                Rule::comment => return Ok(Line::Comment),

                Rule::header => {
                    let name = pair.into_inner().next().map_or("", |p| p.as_str());
                    return Ok(Line::Header { name });
                }

                Rule::key_value => {
                    let mut inner = pair.into_inner();
                    let key = inner.next().map_or("", |p| p.as_str());

                    // Without '=' the whole line is the key
                    return Ok(match inner.next() {
                        Some(value) => Line::KeyValue {
                            key: key.trim(),
                            value: value.as_str().trim(),
                        },
                        None => Line::KeyValue {
                            key: trimmed,
                            value: "",
                        },
                    });
                }

                _ => {}
            }
        }

        Err(ConfigError::line_syntax(1, 1, "line matched no classification"))
    }

    /// Classify a line, falling back to a bare key for anything the grammar rejects
    pub fn classify_lossy(line: &str) -> Line<'_> {
        Self::classify(line).unwrap_or_else(|err| {
            warn!("Treating unclassifiable line {:?} as a bare key: {}", line, err);
            Line::KeyValue {
                key: line.trim_end(),
                value: "",
            }
        })
    }

    /// Group name a raw header line encodes, or "" if the line is not a header
    pub fn header_name(line: &str) -> &str {
        match Self::classify_lossy(line) {
            Line::Header { name } => name,
            _ => "",
        }
    }

    /// Key and value a raw entry line encodes, or None if the line is not an entry
    pub fn key_value(line: &str) -> Option<(&str, &str)> {
        match Self::classify_lossy(line) {
            Line::KeyValue { key, value } => Some((key, value)),
            _ => None,
        }
    }
}

/// Position of the most recent substantive line, which collects following blank lines
enum Anchor {
    Header { group: String, index: usize },
    Entry { group: String, key: String, index: usize },
}

/// Single forward scan building a [`Configuration`]
struct Scanner {
    config: Configuration,
    order: Order,
    current_group: Option<String>,
    open: Option<Anchor>,
    pending: Vec<String>,
}

impl Scanner {
    fn new() -> Self {
        Self {
            config: Configuration::new(),
            order: ORDER_STEP,
            current_group: None,
            open: None,
            pending: Vec::new(),
        }
    }

    fn next_order(&mut self) -> Order {
        let order = self.order;
        self.order += ORDER_STEP;
        order
    }

    fn take_record(&mut self, line: &str) -> RawLine {
        let order = self.next_order();
        RawLine::new(order, line, std::mem::take(&mut self.pending))
    }

    fn open_line_mut(&mut self) -> Option<&mut RawLine> {
        match self.open.as_ref()? {
            Anchor::Header { group, index } => self.config.groups.get_mut(group)?.raws.get_mut(*index),
            Anchor::Entry { group, key, index } => self
                .config
                .groups
                .get_mut(group)?
                .entries
                .get_mut(key)?
                .raws
                .get_mut(*index),
        }
    }

    fn scan_line(&mut self, line: &str) {
        match LineParser::classify_lossy(line) {
            Line::Blank => {
                if let Some(open) = self.open_line_mut() {
                    open.trailing.push(line.to_string());
                } else {
                    self.pending.push(line.to_string());
                }
            }

            Line::Comment => {
                self.open = None;
                self.pending.push(line.to_string());
            }

            Line::Header { name } => self.scan_header(name, line),

            Line::KeyValue { key, value } => self.scan_entry(key, value, line),
        }
    }

    fn scan_header(&mut self, name: &str, line: &str) {
        if !line.trim_end().ends_with(']') {
            debug!("Group header {:?} has no closing bracket", line.trim_end());
        }

        let record = self.take_record(line);
        if self.config.groups.contains_key(name) {
            debug!("Duplicate group header [{}] at order {}", name, record.order);
        }

        let group = self.config.groups.entry(name.to_string()).or_default();
        group.raws.push(record);

        self.open = Some(Anchor::Header {
            group: name.to_string(),
            index: group.raws.len() - 1,
        });
        self.current_group = Some(name.to_string());
    }

    fn scan_entry(&mut self, key: &str, value: &str, line: &str) {
        let group_name = match self.current_group.clone() {
            Some(name) => name,
            None => {
                // Lines before any header live in the empty-name group
                let order = self.next_order();
                self.config.groups.insert(
                    String::new(),
                    Group {
                        raws: vec![RawLine::placeholder(order)],
                        ..Group::default()
                    },
                );
                self.current_group = Some(String::new());
                String::new()
            }
        };

        let record = self.take_record(line);
        let group = self.config.groups.entry(group_name.clone()).or_default();
        let index = match group.entries.get_mut(key) {
            Some(entry) => {
                debug!(
                    "Duplicate key {:?} in [{}]; keeping first value {:?}",
                    key, group_name, entry.value
                );
                entry.raws.push(record);
                entry.raws.len() - 1
            }
            None => {
                group.entries.insert(
                    key.to_string(),
                    Entry {
                        value: value.to_string(),
                        raws: vec![record],
                    },
                );
                0
            }
        };

        self.open = Some(Anchor::Entry {
            group: group_name,
            key: key.to_string(),
            index,
        });
    }

    fn finish(mut self) -> Configuration {
        let order = self.next_order();
        self.config.end = RawLine {
            order,
            line: String::new(),
            leading: Vec::new(),
            trailing: self.pending,
        };
        self.config
    }
}

/// Parse desktop entry text into a [`Configuration`]. Never fails: malformed lines are kept
/// in the structure as they are.
pub fn parse_config(input: &str) -> Configuration {
    let mut scanner = Scanner::new();
    for line in input.split_inclusive('\n') {
        scanner.scan_line(line);
    }
    scanner.finish()
}
