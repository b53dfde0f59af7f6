/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Contains the indexable view over the source text the
//! parser walks, and the structure used for locating a
//! position in it, namely:
//!
//! - How far into the source are we?
//! - Which line is that on?
//! - What column of that line?

use std::fmt;

/// U+FEFF, which is not content when it starts a stream
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Symbol addressable view of a source string.
///
/// Positions are indices into the decoded symbols, not byte
/// offsets, so multi byte characters take up exactly one
/// position.
#[derive(Debug, Clone)]
pub(crate) struct Cursor
{
    symbols: Vec<char>,
    /// Position of the first symbol of every line
    lines:   Vec<usize>,
}

impl Cursor
{
    /// Index .text, skipping a leading byte order mark
    pub fn new(text: &str) -> Self
    {
        let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
        let symbols: Vec<char> = text.chars().collect();
        let mut lines = vec![0];

        for (pos, &symbol) in symbols.iter().enumerate()
        {
            match symbol
            {
                // "\r\n" is a single break
                '\r' if symbols.get(pos + 1) == Some(&'\n') => {},
                '\r' | '\n' => lines.push(pos + 1),
                _ => {},
            }
        }

        Self { symbols, lines }
    }

    /// Count of symbols in the source
    pub fn len(&self) -> usize
    {
        self.symbols.len()
    }

    /// Check if .pos is inside the source
    pub fn has_input(&self, pos: usize) -> bool
    {
        pos < self.symbols.len()
    }

    /// Fetch the symbol at .pos, if there is one
    pub fn symbol_at(&self, pos: usize) -> Option<char>
    {
        self.symbols.get(pos).copied()
    }

    /// Locate .pos in the source. Positions past the end
    /// are clamped to the end of the source.
    pub fn location(&self, pos: usize) -> Location
    {
        let index = pos.min(self.len());
        let line = match self.lines.binary_search(&index)
        {
            Ok(line) => line,
            Err(next) => next - 1,
        };

        Location {
            index,
            line: line + 1,
            column: index - self.lines[line] + 1,
        }
    }

    /// Render .message with the position of .pos prepended
    pub fn format_error(&self, pos: usize, message: &str) -> String
    {
        let location = self.location(pos);

        format!(
            "line {}, column {}: {}",
            location.line, location.column, message
        )
    }
}

/// Position in a source, as a symbol .index and its 1
/// based .line and .column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location
{
    pub index:  usize,
    pub line:   usize,
    pub column: usize,
}

impl fmt::Display for Location
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}
