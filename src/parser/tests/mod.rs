/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! End to end tests, parsing whole YAML streams through the
//! public entry points.

mod anchor;
mod document;
mod error;
mod indent;

use anyhow::anyhow;

use crate::node::Document;

type TestResult = anyhow::Result<()>;

/// Parse .source, which must hold exactly one document
fn single(source: &str) -> anyhow::Result<Document>
{
    let mut documents = crate::parse(source)?.into_documents();

    match documents.len()
    {
        1 => Ok(documents.remove(0)),
        n => Err(anyhow!("expected a single document, found {}", n)),
    }
}

/// The text of the scalar at .key in the root mapping of
/// .document
fn text_at<'a>(document: &'a Document, key: &str) -> anyhow::Result<&'a str>
{
    document
        .root()
        .get(key)
        .and_then(|node| node.as_str())
        .ok_or_else(|| anyhow!("no scalar at key {:?}", key))
}
