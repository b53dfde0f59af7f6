/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use anyhow::anyhow;
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn inconsistent_indentation_is_rejected()
{
    let data = &["a:\n    b: 1\n  c: 2", "a:\n\tb: 1", "a:\n  b: 1\n   c: 2"];

    for &t in data
    {
        assert!(crate::parse(t).is_err(), "for {:?}", t);
    }
}

#[test]
fn dedent_closes_collections() -> TestResult
{
    let document = single("a:\n  b:\n    c: 1\n  d: 2\ne: 3")?;
    let root = document.root();

    let a = root.get("a").ok_or_else(|| anyhow!("no a"))?;
    let b = a.get("b").ok_or_else(|| anyhow!("no b"))?;

    assert_eq!(b.get("c").and_then(|c| c.as_str()), Some("1"));
    assert_eq!(a.get("d").and_then(|d| d.as_str()), Some("2"));
    assert_eq!(text_at(&document, "e")?, "3");

    Ok(())
}

#[test]
fn any_indent_width() -> TestResult
{
    let data = &["a:\n b: 1", "a:\n  b: 1", "a:\n        b: 1"];

    for (i, &t) in data.iter().enumerate()
    {
        let document = single(t).map_err(|e| anyhow!("on iteration {}, test errored with {}", i, e))?;
        let b = document
            .root()
            .get("a")
            .and_then(|a| a.get("b"))
            .and_then(|b| b.as_str());

        assert_eq!(b, Some("1"), "on iteration {}", i);
    }

    Ok(())
}

#[test]
fn sequence_of_mappings() -> TestResult
{
    let document = single("items:\n  - name: x\n    size: 1\n  - name: y\n    size: 2\n")?;
    let items: Vec<_> = document
        .root()
        .get("items")
        .and_then(|items| items.items())
        .ok_or_else(|| anyhow!("items is not a sequence"))?
        .collect();

    assert_eq!(items.len(), 2);

    for (item, (name, size)) in items.iter().zip(&[("x", "1"), ("y", "2")])
    {
        assert_eq!(item.get("name").and_then(|n| n.as_str()), Some(*name));
        assert_eq!(item.get("size").and_then(|s| s.as_str()), Some(*size));
    }

    Ok(())
}

#[test]
fn block_scalar_indentation() -> TestResult
{
    let data = &[
        "a: |2\n    x\n",
        "a: |1\n  x\n",
        "a: |\n    x\n     y\n",
        "a:\n  b: >2-\n      x\n",
        "a: |\n  x\n\n  y\nb: 1",
    ];
    let expected = &["  x\n", " x\n", "x\n y\n", "  x", "x\n\ny\n"];

    for (i, (&t, &ex)) in data.iter().zip(expected).enumerate()
    {
        let document = single(t).map_err(|e| anyhow!("on iteration {}, test errored with {}", i, e))?;
        let root = document.root();
        let text = root
            .get("a")
            .and_then(|a| a.as_str().or_else(|| a.get("b").and_then(|b| b.as_str())));

        assert_eq!(text, Some(ex), "on iteration {}", i);
    }

    Ok(())
}

#[test]
fn multi_line_plain_needs_indent()
{
    // Continuation lines must be indented past their key
    assert!(crate::parse("a: one\ntwo").is_err());
    assert!(crate::parse("a: one\n two").is_ok());
}
