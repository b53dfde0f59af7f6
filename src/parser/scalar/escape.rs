/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use crate::{
    error::internal::ErrorCode,
    parser::{
        error::{ParseError, ParseResult},
        primitive::as_hex,
        Parser,
    },
};

const NEL: char = '\u{85}';
const NBS: char = '\u{A0}';
const LS: char = '\u{2028}';
const PS: char = '\u{2029}';

impl Parser
{
    /// Decode a single escape sequence inside a double
    /// quoted scalar.
    ///
    /// A backslash followed by a line break (or nothing) is
    /// not an escape, and does not match.
    pub(in crate::parser) fn escape_sequence(&mut self) -> ParseResult<char>
    {
        if !check!(self => '\\')
        {
            return Err(ParseError::NoMatch);
        }

        let symbol = match self.peek_at(1)
        {
            None | Some('\r') | Some('\n') => return Err(ParseError::NoMatch),
            Some(symbol) => symbol,
        };

        // See 5.7: Escaped Characters
        // yaml.org/spec/1.2/spec.html#id2776092
        let decoded = match symbol
        {
            '0' => '\0',
            'a' => '\x07',
            'b' => '\x08',
            't' | '\t' => '\x09',
            'n' => '\x0A',
            'v' => '\x0B',
            'f' => '\x0C',
            'r' => '\x0D',
            'e' => '\x1B',
            ' ' => '\x20',
            '"' => '"',
            '\'' => '\'',
            '/' => '/',
            '\\' => '\\',
            'N' => NEL,
            '_' => NBS,
            'L' => LS,
            'P' => PS,
            'x' => return self.unicode_escape(2),
            'u' => return self.unicode_escape(4),
            unknown =>
            {
                self.pos += 1;

                return self.halt(
                    ErrorCode::UnknownEscape,
                    format!("unknown escape sequence \\{}", unknown),
                );
            },
        };

        self.pos += 2;

        Ok(decoded)
    }

    /// Decode the .digits hex digits after \x or \u
    fn unicode_escape(&mut self, digits: usize) -> ParseResult<char>
    {
        let start = self.pos;
        let mut value: u32 = 0;

        self.pos += 2;

        for _ in 0..digits
        {
            match self.peek()
            {
                Some(c) if c.is_ascii_hexdigit() => value = (value << 4) + as_hex(c),
                Some(_) => return self.halt(ErrorCode::UnknownEscape, "invalid hex digit in escape sequence"),
                None => return self.halt(ErrorCode::UnexpectedEOF, "unterminated escape sequence"),
            }
            self.pos += 1;
        }

        match char::from_u32(value)
        {
            Some(decoded) => Ok(decoded),
            None =>
            {
                self.pos = start;

                self.halt(
                    ErrorCode::InvalidCodepoint,
                    format!("\\u{:04X} is not a valid codepoint", value),
                )
            },
        }
    }
}
