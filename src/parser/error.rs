/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use crate::error::internal::ErrorCode;

pub(crate) type ParseResult<T> = std::result::Result<T, ParseError>;

/// Outcome of a grammar rule that did not succeed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParseError
{
    /// The rule did not match here, the parser rewinds and
    /// may try something else
    NoMatch,

    /// The input is invalid no matter which alternative is
    /// tried, stop parsing immediately
    Halt(ErrorCode),
}

impl From<ErrorCode> for ParseError
{
    fn from(code: ErrorCode) -> Self
    {
        ParseError::Halt(code)
    }
}

impl fmt::Display for ParseError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self
        {
            ParseError::NoMatch => f.write_str("no match"),
            ParseError::Halt(code) => fmt::Display::fmt(code, f),
        }
    }
}
