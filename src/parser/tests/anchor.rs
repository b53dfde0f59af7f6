/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use anyhow::anyhow;
use pretty_assertions::assert_eq;

use super::*;
use crate::{
    flag::{O_STRICT_ANCHORS, O_ZEROED},
    parse_with, Category,
};

#[test]
fn alias_shares_node() -> TestResult
{
    let document = single("a: &a 5\nb: *a")?;
    let root = document.root();

    let a = root.get("a").ok_or_else(|| anyhow!("no a"))?;
    let b = root.get("b").ok_or_else(|| anyhow!("no b"))?;

    assert_eq!(a.index(), b.index());
    assert_eq!(a.anchor(), Some("a"));
    assert_eq!(b.as_str(), Some("5"));
    assert_eq!(document.node_count(), 4);
    assert_eq!(document.anchored("a").map(|node| node.index()), Some(a.index()));

    Ok(())
}

#[test]
fn anchored_collections() -> TestResult
{
    let data = &[
        "base: &b\n  x: 1\ncopy: *b",
        "base: &b [1, 2]\ncopy: *b",
        "base: &b\n  - 1\ncopy: *b",
        "- &b {x: 1}\n- *b",
    ];

    for (i, &t) in data.iter().enumerate()
    {
        let document = single(t).map_err(|e| anyhow!("on iteration {}, test errored with {}", i, e))?;

        let anchored = document
            .anchored("b")
            .ok_or_else(|| anyhow!("on iteration {}, b is not anchored", i))?;

        assert!(!anchored.is_scalar(), "on iteration {}", i);
    }

    Ok(())
}

#[test]
fn alias_in_flow() -> TestResult
{
    let document = single("a: &x 1\nb: [*x, 2, *x]")?;
    let x = document.anchored("x").ok_or_else(|| anyhow!("x is not anchored"))?;

    let items: Vec<_> = document
        .root()
        .get("b")
        .and_then(|b| b.items())
        .ok_or_else(|| anyhow!("b is not a sequence"))?
        .collect();

    assert_eq!(items.len(), 3);
    assert_eq!(items[0], x);
    assert_eq!(items[2], x);

    Ok(())
}

#[test]
fn unknown_alias_is_an_error()
{
    let data = &["*unknown", "a: *unknown", "[*unknown]", "a: *unknown\nunknown: &unknown 1"];

    for &t in data
    {
        let err = match crate::parse(t)
        {
            Ok(_) => panic!("expected an error for {:?}", t),
            Err(e) => e,
        };

        assert_eq!(err.classify(), Category::Syntax, "for {:?}", t);
        assert!(err.to_string().contains("unknown"), "for {:?}", t);
        assert!(
            err.diagnostic().map_or(false, |d| d.mentions("unknown is not anchored")),
            "for {:?}",
            t
        );
    }
}

#[test]
fn redefined_anchor_last_wins() -> TestResult
{
    let document = single("a: &x 1\nb: &x 2\nc: *x")?;

    assert_eq!(text_at(&document, "c")?, "2");
    assert_eq!(document.anchored("x").and_then(|node| node.as_str()), Some("2"));

    Ok(())
}

#[test]
fn redefined_anchor_strict()
{
    let source = "a: &x 1\nb: &x 2";

    assert!(parse_with(source, O_ZEROED).is_ok());

    let err = match parse_with(source, O_STRICT_ANCHORS)
    {
        Ok(_) => panic!("expected a duplicate anchor error"),
        Err(e) => e,
    };

    assert_eq!(err.classify(), Category::Syntax);
    assert!(err.diagnostic().map_or(false, |d| d.mentions("x is anchored more than once")));
}

#[test]
fn anchors_are_per_document()
{
    assert!(crate::parse("--- &a x\n--- *a").is_err());
    assert!(parse_with("--- &a x\n--- &a y", O_STRICT_ANCHORS).is_ok());
}
