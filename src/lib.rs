/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! This library parses YAML text into a generic tree of
//! scalars, sequences and mappings.
//!
//! The parser is a backtracking recursive descent over the
//! YAML grammar, tracking indentation as it goes. It
//! supports block and flow collections, every scalar style,
//! anchors and aliases, tags and directives, and multiple
//! documents per stream.
//!
//! ```
//! use yaml_grammar::parse;
//!
//! let stream = parse("name:\n  x: 10\n  y: 20").unwrap();
//! let root = stream.documents()[0].root();
//!
//! let x = root.get("name").and_then(|n| n.get("x"));
//! assert_eq!(x.and_then(|n| n.as_str()), Some("10"));
//! ```
//!
//! A rejected stream returns an [`Error`] whose
//! [`Diagnostic`] lists every message the parser recorded on
//! its way to the failure, each with a line and column.

#![allow(clippy::suspicious_else_formatting)]

pub mod convert;
pub mod flag;
pub mod node;

mod cursor;
mod error;
mod indent;
mod ledger;
mod parser;
mod reader;

pub use self::{
    cursor::Location,
    error::{Category, Diagnostic, DiagnosticEntry, Error, Result},
    parser::{parse, parse_with},
    reader::{from_reader, load, load_with},
};
