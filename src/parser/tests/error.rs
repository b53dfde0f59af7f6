/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use pretty_assertions::assert_eq;

use crate::{parse, Category, Error};

fn rejected(source: &str) -> Error
{
    match parse(source)
    {
        Ok(stream) => panic!("expected {:?} to be rejected, got {:?}", source, stream),
        Err(e) => e,
    }
}

#[test]
fn trailing_input_is_rejected()
{
    let data = &["[a] b", "a: 1\n b: 2", "{a: 1", "a: [1, 2", "key: 'open", "- a\nb: 1"];

    for &t in data
    {
        let err = rejected(t);

        assert_eq!(err.classify(), Category::Syntax, "for {:?}", t);
        assert!(
            err.diagnostic().map_or(false, |d| d.mentions("failed to parse remaining input")),
            "for {:?}",
            t
        );
    }
}

#[test]
fn absent_optional_rules_are_not_reported()
{
    let data = &["key: *missing", "# lead\nkey: *missing", "- a\n- *missing"];

    for &t in data
    {
        let err = rejected(t);
        let diagnostic = match err.diagnostic()
        {
            Some(diagnostic) => diagnostic,
            None => panic!("expected a diagnostic for {:?}", t),
        };

        assert!(diagnostic.mentions("missing is not anchored"), "for {:?}", t);
        assert!(!diagnostic.mentions("failed to parse comment"), "for {:?}:\n{}", t, diagnostic);
    }
}

#[test]
fn escape_errors()
{
    let data = &[r#"a: "\q""#, r#"a: "\xZZ""#, r#"a: "\x4"#, r#"a: "\uD800""#];
    let expected = &[Category::Syntax, Category::Syntax, Category::EOF, Category::Syntax];
    let messages = &[
        "unknown escape sequence \\q",
        "invalid hex digit",
        "unterminated escape sequence",
        "D800 is not a valid codepoint",
    ];

    for ((&t, &ex), &message) in data.iter().zip(expected).zip(messages)
    {
        let err = rejected(t);

        assert_eq!(err.classify(), ex, "for {:?}", t);
        assert!(err.diagnostic().map_or(false, |d| d.mentions(message)), "for {:?}", t);
    }
}

#[test]
fn error_position()
{
    let err = rejected("a: 1\nb: \"\\q\"");

    assert!(err.has_context());
    assert_eq!(err.line(), 2);
}

#[test]
fn error_display_lists_messages()
{
    let err = rejected("a: *missing");
    let display = err.to_string();

    assert!(display.contains("missing is not anchored"), "{}", display);
    assert!(display.contains("line 1"), "{}", display);
}

#[test]
fn diagnostic_entries_are_located()
{
    let err = rejected("a: [");
    let diagnostic = match err.diagnostic()
    {
        Some(diagnostic) => diagnostic,
        None => panic!("expected a diagnostic"),
    };

    assert!(!diagnostic.is_empty());

    for entry in diagnostic.entries()
    {
        assert!(entry.location().line >= 1);
        assert!(entry.location().column >= 1);
    }
}
