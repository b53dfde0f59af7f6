/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use anyhow::anyhow;
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn multiple_documents() -> TestResult
{
    let stream = crate::parse("a: 1\n---\nb: 2\n...\n--- c\n")?;
    let documents = stream.documents();

    assert_eq!(documents.len(), 3);
    assert_eq!(text_at(&documents[0], "a")?, "1");
    assert_eq!(text_at(&documents[1], "b")?, "2");
    assert_eq!(documents[2].root().as_str(), Some("c"));

    Ok(())
}

#[test]
fn empty_streams() -> TestResult
{
    let data = &["", "\n\n", "# only a comment\n", "  # indented comment\n\n# another"];

    for (i, &t) in data.iter().enumerate()
    {
        let stream = crate::parse(t).map_err(|e| anyhow!("on iteration {}, test errored with {}", i, e))?;

        assert!(stream.is_empty(), "on iteration {}", i);
    }

    Ok(())
}

#[test]
fn empty_documents() -> TestResult
{
    let data = &["---", "---\n", "--- # comment\n", "---\n---\n", "---\n...\n"];
    let expected = &[1, 1, 1, 2, 1];

    for (i, (&t, &ex)) in data.iter().zip(expected).enumerate()
    {
        let stream = crate::parse(t).map_err(|e| anyhow!("on iteration {}, test errored with {}", i, e))?;

        assert_eq!(stream.len(), ex, "on iteration {}", i);

        for document in &stream
        {
            assert_eq!(document.root().as_str(), Some(""), "on iteration {}", i);
        }
    }

    Ok(())
}

#[test]
fn bare_top_level_scalars() -> TestResult
{
    let data = &["hello", "hello\n", "  hello", "'quoted'", "\"two\n  lines\"", "|\n text\n", "hello\n---\nworld"];
    let expected = &["hello", "hello", "hello", "quoted", "two lines", "text\n", "hello"];

    for (i, (&t, &ex)) in data.iter().zip(expected).enumerate()
    {
        let stream = crate::parse(t).map_err(|e| anyhow!("on iteration {}, test errored with {}", i, e))?;
        let root = stream
            .documents()
            .first()
            .map(|d| d.root().as_str())
            .ok_or_else(|| anyhow!("on iteration {}, no document", i))?;

        assert_eq!(root, Some(ex), "on iteration {}", i);
    }

    Ok(())
}

#[test]
fn leading_comments() -> TestResult
{
    let document = single("# header\n\n# more\na: 1 # trailing\n# footer\n")?;

    assert_eq!(text_at(&document, "a")?, "1");
    assert_eq!(document.root().len(), 1);

    Ok(())
}

#[test]
fn document_end_marker() -> TestResult
{
    let stream = crate::parse("a: 1\n... # done\n%YAML 1.2\n---\nb: 2\n")?;
    let documents = stream.documents();

    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0].version(), None);
    assert!(documents[1].version().is_some());

    Ok(())
}

#[test]
fn node_marks() -> TestResult
{
    let document = single("key: value")?;
    let value = document.root().get("key").ok_or_else(|| anyhow!("no key"))?;
    let mark = value.mark().ok_or_else(|| anyhow!("no mark"))?;

    assert_eq!((mark.start(), mark.end()), (5, 10));

    Ok(())
}

#[test]
fn stream_iteration() -> TestResult
{
    let stream = crate::parse("--- a\n--- b\n--- c")?;

    let roots: Vec<_> = stream.iter().map(|d| d.root().as_str().map(String::from)).collect();
    assert_eq!(roots, vec![Some("a".into()), Some("b".into()), Some("c".into())]);

    let owned = stream.into_documents();
    assert_eq!(owned.len(), 3);

    Ok(())
}
