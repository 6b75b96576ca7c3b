//! Rendering of a [`Configuration`] back to text.
//!
//! Every group contributes one item per header record and one or more items per entry. Items are
//! ordered by their order keys, then split into sections at each header line, and sections from all
//! groups are merged by order key. Lines of unchanged elements are emitted verbatim together with
//! the comments attached to them; changed or created elements get a synthesized line.

use crate::document::{Configuration, Entry, Group};
use crate::parser::LineParser;
use crate::types::{Order, RawLine};
use std::borrow::Cow;
use std::cmp::Ordering;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ItemKind {
    Header,
    Entry,
}

/// One output line of a group, before ordering
#[derive(Debug)]
struct Item<'a> {
    order: Order,
    kind: ItemKind,
    key: &'a str,
    /// Current value of the entry; empty for headers
    value: &'a str,
    line: Cow<'a, str>,
    /// Record supplying the attached comments, if any
    raw: Option<&'a RawLine>,
}

impl<'a> Item<'a> {
    fn header(order: Order, line: Cow<'a, str>, raw: Option<&'a RawLine>) -> Self {
        Self {
            order,
            kind: ItemKind::Header,
            key: "",
            value: "",
            line,
            raw,
        }
    }

    fn entry(
        key: &'a str,
        entry: &'a Entry,
        order: Order,
        line: Cow<'a, str>,
        raw: Option<&'a RawLine>,
    ) -> Self {
        Self {
            order,
            kind: ItemKind::Entry,
            key,
            value: &entry.value,
            line,
            raw,
        }
    }

    /// Order key first; on ties headers precede entries, and entries compare by value, then key
    fn compare(&self, other: &Self) -> Ordering {
        self.order
            .cmp(&other.order)
            .then_with(|| match (self.kind, other.kind) {
                (ItemKind::Header, ItemKind::Entry) => Ordering::Less,
                (ItemKind::Entry, ItemKind::Header) => Ordering::Greater,
                (ItemKind::Header, ItemKind::Header) => Ordering::Equal,
                (ItemKind::Entry, ItemKind::Entry) => self
                    .value
                    .cmp(other.value)
                    .then_with(|| self.key.cmp(other.key)),
            })
    }
}

/// A header line and the lines that follow it up to the next header of the same group
struct Section<'a> {
    order: Order,
    name: &'a str,
    lines: Vec<Cow<'a, str>>,
    /// Index of the header line within `lines`
    header: usize,
}

impl<'a> Section<'a> {
    fn new(order: Order, name: &'a str) -> Self {
        Self {
            order,
            name,
            lines: Vec::new(),
            header: 0,
        }
    }

    fn push(&mut self, item: Item<'a>) {
        if let Some(raw) = item.raw {
            self.lines.extend(raw.leading.iter().map(|l| Cow::Borrowed(l.as_str())));
        }
        if item.kind == ItemKind::Header {
            self.header = self.lines.len();
        }
        self.lines.push(item.line);
        if let Some(raw) = item.raw {
            self.lines.extend(raw.trailing.iter().map(|l| Cow::Borrowed(l.as_str())));
        }
    }
}

/// Header line for a group whose recorded header cannot be reused.
///
/// The empty-name group gets an empty line here; whether it needs a literal `[]` depends on its
/// position in the output and is decided in [`render`].
fn header_line(name: &str) -> Cow<'_, str> {
    if name.is_empty() {
        Cow::Borrowed("")
    } else {
        Cow::Owned(format!("[{}]\n", name))
    }
}

fn entry_line(key: &str, value: &str) -> Cow<'static, str> {
    Cow::Owned(format!("{}={}\n", key, value))
}

fn group_items<'a>(name: &'a str, group: &'a Group, end_order: Order) -> Vec<Item<'a>> {
    let mut items = Vec::with_capacity(group.raws.len() + group.entries.len() + 1);

    for raw in &group.raws {
        let line = if LineParser::header_name(&raw.line) == name {
            Cow::Borrowed(raw.line.as_str())
        } else {
            header_line(name)
        };
        items.push(Item::header(raw.order, line, Some(raw)));
    }
    if group.raws.is_empty() {
        items.push(Item::header(end_order, header_line(name), None));
    }

    for (key, entry) in &group.entries {
        let Some(first) = entry.raws.first() else {
            items.push(Item::entry(
                key,
                entry,
                end_order,
                entry_line(key, &entry.value),
                None,
            ));
            continue;
        };

        if LineParser::key_value(&first.line) == Some((key.as_str(), entry.value.as_str())) {
            for raw in &entry.raws {
                items.push(Item::entry(
                    key,
                    entry,
                    raw.order,
                    Cow::Borrowed(raw.line.as_str()),
                    Some(raw),
                ));
            }
        } else {
            trace!("Regenerating line for {:?} in [{}]", key, name);
            items.push(Item::entry(
                key,
                entry,
                first.order,
                entry_line(key, &entry.value),
                Some(first),
            ));
        }
    }

    items
}

/// Split a sorted item list into sections, one per header item
fn push_sections<'a>(name: &'a str, items: Vec<Item<'a>>, sections: &mut Vec<Section<'a>>) {
    let mut current: Option<Section<'a>> = None;

    for item in items {
        if item.kind == ItemKind::Header || current.is_none() {
            sections.extend(current.take());
            current = Some(Section::new(item.order, name));
        }
        if let Some(section) = current.as_mut() {
            section.push(item);
        }
    }

    sections.extend(current);
}

/// Render the configuration to text
pub(crate) fn render(config: &Configuration) -> String {
    let end_order = config.end.order;
    let mut sections = Vec::new();

    for (name, group) in &config.groups {
        let mut items = group_items(name, group, end_order);
        items.sort_by(Item::compare);

        // Entries must follow a header of their own group
        if let Some(first_header) = items.iter().position(|i| i.kind == ItemKind::Header) {
            items[..=first_header].rotate_right(1);
        }

        push_sections(name, items, &mut sections);
    }

    sections.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.name.cmp(b.name)));

    let mut lines: Vec<Cow<'_, str>> = Vec::new();
    for (index, mut section) in sections.into_iter().enumerate() {
        // Content before the first header needs no header line of its own
        if index > 0 && section.lines[section.header].is_empty() {
            section.lines[section.header] = Cow::Borrowed("[]\n");
        }
        lines.extend(section.lines);
    }
    lines.extend(config.end.trailing.iter().map(|l| Cow::Borrowed(l.as_str())));

    let mut output = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    let last = lines.len().saturating_sub(1);
    for (index, line) in lines.iter().enumerate() {
        output.push_str(line);
        if index < last && !line.is_empty() && !line.ends_with('\n') {
            output.push('\n');
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use crate::document::{Configuration, Entry, Group};
    use crate::parse;

    #[test]
    fn test_render_empty() {
        assert_eq!(Configuration::new().render(), "");
    }

    #[test]
    fn test_render_builder_uses_explicit_orders() {
        let config = Configuration::new().with_group(
            "Desktop Entry",
            Group::with_order(1)
                .with_entry("Type", Entry::with_order("Application", 1))
                .with_entry("Name", Entry::with_order("Viewer", 3))
                .with_entry("NoDisplay", Entry::with_order("true", 2)),
        );

        assert_eq!(
            config.render(),
            "[Desktop Entry]\nType=Application\nNoDisplay=true\nName=Viewer\n"
        );
    }

    #[test]
    fn test_render_ties_break_by_value_then_key() {
        let mut config = parse("[Foo]\n");
        let foo = config.get_or_create_group("Foo");
        foo.get_or_create_entry("b", "2");
        foo.get_or_create_entry("a", "2");
        foo.get_or_create_entry("c", "1");

        assert_eq!(config.render(), "[Foo]\nc=1\na=2\nb=2\n");
    }

    #[test]
    fn test_render_new_empty_name_group_first() {
        let mut config = Configuration::new();
        config.get_or_create_group("").get_or_create_entry("Key", "Value");
        assert_eq!(config.render(), "Key=Value\n");
    }

    #[test]
    fn test_render_new_empty_name_group_after_content() {
        let mut config = parse("[Foo]\nA=1\n");
        config.get_or_create_group("").get_or_create_entry("Key", "Value");
        assert_eq!(config.render(), "[Foo]\nA=1\n[]\nKey=Value\n");
    }

    #[test]
    fn test_render_terminates_unterminated_lines() {
        let mut config = parse("[Foo]\nA=1");
        config.get_or_create_group("Foo").get_or_create_entry("B", "2");
        assert_eq!(config.render(), "[Foo]\nA=1\nB=2\n");
    }
}
