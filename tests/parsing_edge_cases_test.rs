//! Edge case tests for tolerated malformed input.

use xdgini::{ConfigError, parse};

// ========== GROUP HEADERS ==========

#[test]
fn test_header_missing_closing_bracket() {
    let config = parse("[Foo\nKey1=Value1\n");
    assert_eq!(config.get("Foo", "Key1").unwrap(), "Value1");
}

#[test]
fn test_header_trailing_whitespace_is_trimmed() {
    let config = parse("[Foo] \t\nKey1=Value1\n");
    assert!(config.contains_group("Foo"));
    assert!(!config.contains_group("Foo] "));
}

#[test]
fn test_header_inner_whitespace_is_kept() {
    let config = parse("[ Foo ]\nKey1=Value1\n");
    assert!(config.contains_group(" Foo "));
}

#[test]
fn test_duplicate_headers_merge_keys() {
    let config = parse("[A]\nx=1\n[B]\ny=2\n[A]\nz=3\n");

    let a = config.group("A").unwrap();
    assert_eq!(a.raw_lines().len(), 2);
    assert_eq!(a.raw_lines()[0].line, "[A]\n");
    assert_eq!(a.raw_lines()[1].line, "[A]\n");

    let mut keys: Vec<&str> = a.entries().map(|(key, _)| key).collect();
    keys.sort();
    assert_eq!(keys, vec!["x", "z"]);
}

// ========== KEY-VALUE LINES ==========

#[test]
fn test_missing_equals_is_key_with_empty_value() {
    let config = parse("[Foo]\nBar\n");
    assert_eq!(config.get("Foo", "Bar").unwrap(), "");
}

#[test]
fn test_value_keeps_inner_equals() {
    let config = parse("[Desktop Entry]\nExec=app --mode=fast %U\n");
    assert_eq!(
        config.get("Desktop Entry", "Exec").unwrap(),
        "app --mode=fast %U"
    );
}

#[test]
fn test_whitespace_around_key_and_value_is_trimmed() {
    let config = parse("[Foo]\n  Key1  =  Value 1  \n");
    assert_eq!(config.get("Foo", "Key1").unwrap(), "Value 1");
}

#[test]
fn test_duplicate_key_first_value_wins() {
    let config = parse("[Foo]\nKey=first\nKey=second\n");
    let entry = config.group("Foo").unwrap().entry("Key").unwrap();
    assert_eq!(entry.value(), "first");
    assert_eq!(entry.raw_lines().len(), 2);
}

#[test]
fn test_same_key_in_different_groups() {
    let config = parse("[Foo]\nName=foo\n[Bar]\nName=bar\n");
    assert_eq!(config.get("Foo", "Name").unwrap(), "foo");
    assert_eq!(config.get("Bar", "Name").unwrap(), "bar");
}

#[test]
fn test_lines_before_first_header() {
    let config = parse("Key1=Value1\n[Foo]\n");
    assert_eq!(config.get("", "Key1").unwrap(), "Value1");
    assert!(config.group("Foo").unwrap().entries().next().is_none());
}

#[test]
fn test_indented_comment_is_an_entry() {
    let config = parse("[Foo]\n  # not a comment\n");
    assert_eq!(config.get("Foo", "  # not a comment").unwrap(), "");
}

// ========== COMMENTS ==========

#[test]
fn test_trailing_comments_go_to_end_marker() {
    let config = parse("[Foo]\nKey1=Value1\n# one\n\n# two\n");
    assert_eq!(config.end_marker().trailing, vec!["# one\n", "\n", "# two\n"]);
}

#[test]
fn test_blank_lines_attach_to_preceding_line() {
    let config = parse("[Foo]\nKey1=Value1\n\n\nKey2=Value2\n");
    let foo = config.group("Foo").unwrap();
    assert_eq!(foo.entry("Key1").unwrap().raw_lines()[0].trailing, vec!["\n", "\n"]);
    assert!(foo.entry("Key2").unwrap().raw_lines()[0].leading.is_empty());
}

#[test]
fn test_blank_after_comment_leads_next_line() {
    let config = parse("[Foo]\n# note\n\nKey1=Value1\n");
    let key = &config.group("Foo").unwrap().entry("Key1").unwrap().raw_lines()[0];
    assert_eq!(key.leading, vec!["# note\n", "\n"]);
}

// ========== LOOKUP ERRORS ==========

#[test]
fn test_get_missing_group() {
    let config = parse("[Foo]\nKey1=Value1\n");
    assert_eq!(
        config.get("Bar", "Key1"),
        Err(ConfigError::GroupNotFound {
            group: "Bar".to_string()
        })
    );
}

#[test]
fn test_get_missing_key() {
    let config = parse("[Foo]\nKey1=Value1\n");
    let err = config.get("Foo", "Key2").unwrap_err();
    assert_eq!(err.to_string(), "Key 'Key2' not found in group '[Foo]'");
}
