/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Symbol matchers and the whitespace, comment and
//! indentation rules every other part of the grammar is
//! built from.
//!
//! Matchers advance past what they matched, and leave the
//! position untouched when they fail.

use crate::parser::{
    error::{ParseError, ParseResult},
    Parser,
};

/// Symbols allowed in a URI, in addition to word chars and
/// %-escapes
const URI_SET: &str = ";/?:@&=+$,_.!~*'()[]";
/// As URI_SET, minus '!' which would end a tag handle
const TAG_SET: &str = ";/?:@&=+$,_.~*'()[]";

impl Parser
{
    pub(super) fn peek(&self) -> Option<char>
    {
        self.cursor.symbol_at(self.pos)
    }

    pub(super) fn peek_at(&self, offset: usize) -> Option<char>
    {
        self.cursor.symbol_at(self.pos + offset)
    }

    /// The symbol just before the current position
    pub(super) fn previous(&self) -> Option<char>
    {
        self.pos
            .checked_sub(1)
            .and_then(|pos| self.cursor.symbol_at(pos))
    }

    /// Consume one symbol if it satisfies .predicate
    pub(super) fn eat_if<F>(&mut self, predicate: F) -> ParseResult<char>
    where
        F: FnOnce(char) -> bool,
    {
        match self.peek()
        {
            Some(symbol) if predicate(symbol) =>
            {
                self.pos += 1;

                Ok(symbol)
            },
            _ => Err(ParseError::NoMatch),
        }
    }

    pub(super) fn eat(&mut self, expected: char) -> ParseResult<char>
    {
        self.eat_if(|symbol| symbol == expected)
    }

    pub(super) fn eat_range(&mut self, start: char, end: char) -> ParseResult<char>
    {
        self.eat_if(|symbol| start <= symbol && symbol <= end)
    }

    /// Consume one symbol from .set
    pub(super) fn eat_set(&mut self, set: &str) -> ParseResult<char>
    {
        self.eat_if(|symbol| set.contains(symbol))
    }

    /// Consume one symbol not in .set
    pub(super) fn eat_except(&mut self, set: &str) -> ParseResult<char>
    {
        self.eat_if(|symbol| !set.contains(symbol))
    }

    /// Consume .expected in its entirety, or nothing at all
    pub(super) fn eat_str(&mut self, expected: &str) -> ParseResult<()>
    {
        let mut len = 0;

        for symbol in expected.chars()
        {
            if self.peek_at(len) != Some(symbol)
            {
                return Err(ParseError::NoMatch);
            }
            len += 1;
        }

        self.pos += len;

        Ok(())
    }

    /// Match the end of input
    pub(super) fn eof(&mut self) -> ParseResult<()>
    {
        match self.cursor.has_input(self.pos)
        {
            true => Err(ParseError::NoMatch),
            false => Ok(()),
        }
    }

    /// Match the start of a line
    pub(super) fn start_of_line(&mut self) -> ParseResult<()>
    {
        match self.previous()
        {
            None | Some('\n') | Some('\r') => Ok(()),
            _ => Err(ParseError::NoMatch),
        }
    }

    pub(super) fn space(&mut self) -> ParseResult<char>
    {
        self.eat(' ')
    }

    pub(super) fn blank(&mut self) -> ParseResult<char>
    {
        self.eat_set(" \t")
    }

    /// Zero or more spaces
    pub(super) fn ignored_space(&mut self) -> ParseResult<()>
    {
        while self.space().is_ok() {}

        Ok(())
    }

    /// Zero or more spaces or tabs
    pub(super) fn ignored_blank(&mut self) -> ParseResult<()>
    {
        while self.blank().is_ok() {}

        Ok(())
    }

    /// One or more spaces
    pub(super) fn separation_space(&mut self) -> ParseResult<()>
    {
        self.space()?;
        self.ignored_space()
    }

    /// A line break, returning the exact break matched
    pub(super) fn line_break(&mut self) -> ParseResult<&'static str>
    {
        if self.eat_str("\r\n").is_ok()
        {
            return Ok("\r\n");
        }

        match self.eat_set("\r\n")?
        {
            '\r' => Ok("\r"),
            _ => Ok("\n"),
        }
    }

    /// A line break or the end of input
    pub(super) fn line_end(&mut self) -> ParseResult<()>
    {
        match self.line_break()
        {
            Ok(_) => Ok(()),
            Err(_) => self.eof(),
        }
    }

    pub(super) fn non_space_char(&mut self) -> ParseResult<char>
    {
        self.eat_except(" \t\r\n")
    }

    pub(super) fn non_break_char(&mut self) -> ParseResult<char>
    {
        self.eat_except("\r\n")
    }

    /// [a-zA-Z0-9-]
    pub(super) fn word_char(&mut self) -> ParseResult<char>
    {
        self.eat_if(|symbol| symbol.is_ascii_alphanumeric() || symbol == '-')
    }

    pub(super) fn digit(&mut self) -> ParseResult<char>
    {
        self.eat_range('0', '9')
    }

    pub(super) fn hex_digit(&mut self) -> ParseResult<char>
    {
        self.eat_if(|symbol| symbol.is_ascii_hexdigit())
    }

    /// One or more digits
    pub(super) fn integer(&mut self) -> ParseResult<String>
    {
        self.many1(|p| p.digit())
            .map(|digits| digits.into_iter().collect())
    }

    pub(super) fn uri_char(&mut self) -> ParseResult<char>
    {
        self.escapable_char(URI_SET)
    }

    pub(super) fn tag_char(&mut self) -> ParseResult<char>
    {
        self.escapable_char(TAG_SET)
    }

    /// A word char, a %HH escape or a symbol from .set
    fn escapable_char(&mut self, set: &str) -> ParseResult<char>
    {
        if let Ok(symbol) = self.word_char()
        {
            return Ok(symbol);
        }

        if let Ok(symbol) = self.attempt(|p| p.percent_escape())
        {
            return Ok(symbol);
        }

        self.eat_set(set)
    }

    /// %HH, decoded to the symbol with that value
    fn percent_escape(&mut self) -> ParseResult<char>
    {
        self.eat('%')?;
        let high = self.hex_digit()?;
        let low = self.hex_digit()?;

        let value = (as_hex(high) << 4) | as_hex(low);

        Ok(char::from(value as u8))
    }

    /// A full line comment, or a blank line
    pub(super) fn comment(&mut self) -> ParseResult<()>
    {
        self.rule("comment", |p| {
            p.not(|p| p.eof())?;
            p.ignored_space()?;
            p.optional(|p| p.comment_text())?;

            p.line_end()
        })
    }

    /// The rest of a line, after the content on it
    pub(super) fn inline_comment(&mut self) -> ParseResult<()>
    {
        self.rule("inline comment", |p| {
            p.optional(|p| {
                p.separation_space()?;
                p.optional(|p| p.comment_text())
            })?;

            p.line_end()
        })
    }

    /// '#' and everything up to the line break
    fn comment_text(&mut self) -> ParseResult<()>
    {
        self.eat('#')?;
        while self.non_break_char().is_ok() {}

        Ok(())
    }

    /// The rest of a line, followed by any comment or blank
    /// lines
    pub(super) fn inline_comments(&mut self) -> ParseResult<()>
    {
        self.inline_comment()?;
        self.skip_many(|p| p.comment())?;

        Ok(())
    }

    /// One or more comment or blank lines
    pub(super) fn comments(&mut self) -> ParseResult<()>
    {
        match self.skip_many(|p| p.comment())?
        {
            0 => Err(ParseError::NoMatch),
            _ => Ok(()),
        }
    }

    /// Separation between properties and content: either
    /// the rest of the line and the next line's indentation,
    /// or spaces on the same line
    pub(super) fn separation_lines(&mut self) -> ParseResult<()>
    {
        alt!(self =>
            |p| {
                p.inline_comments()?;
                p.indent()
            },
            |p| p.separation_space(),
        )
    }

    /// As separation_lines, but inside a flow collection
    /// where the following line may be indented further
    pub(super) fn separation_lines_in_flow(&mut self) -> ParseResult<()>
    {
        alt!(self =>
            |p| {
                p.inline_comments()?;
                p.indent.disarm();
                p.indent()?;
                p.ignored_space()
            },
            |p| p.separation_space(),
        )
    }

    /// One or more spaces, each counted as a level of
    /// indentation
    pub(super) fn separation_space_as_indent(&mut self) -> ParseResult<()>
    {
        self.space()?;
        self.indent.widen();

        while self.space().is_ok()
        {
            self.indent.widen();
        }

        Ok(())
    }

    /// Match the current indentation.
    ///
    /// If detection is armed, any further spaces are counted
    /// and become part of the indentation.
    pub(super) fn indent(&mut self) -> ParseResult<()>
    {
        let required = self.indent.required();

        if (0..required).any(|offset| self.peek_at(offset) != Some(' '))
        {
            return Err(ParseError::NoMatch);
        }
        self.pos += required;

        if self.indent.detecting()
        {
            let mut extra = 0;
            while self.space().is_ok()
            {
                extra += 1;
            }

            self.indent.adopt(extra);
        }

        Ok(())
    }

    /// A line holding nothing but spaces, returning its
    /// break
    pub(super) fn empty_line_block(&mut self) -> ParseResult<&'static str>
    {
        self.attempt(|p| {
            p.ignored_space()?;
            p.line_break()
        })
    }

    /// "---" or "..." at the start of a line, followed by a
    /// space, a line break or the end of input
    pub(super) fn document_marker(&mut self) -> ParseResult<()>
    {
        self.attempt(|p| {
            p.start_of_line()?;

            if p.eat_str("---").is_err()
            {
                p.eat_str("...")?;
            }

            match p.peek()
            {
                None | Some(' ') | Some('\r') | Some('\n') => Ok(()),
                _ => Err(ParseError::NoMatch),
            }
        })
    }
}

/// Value of a single hex digit
pub(super) fn as_hex(symbol: char) -> u32
{
    symbol.to_digit(16).unwrap_or(0)
}

#[cfg(test)]
mod tests
{
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::flag::O_ZEROED;

    type TestResult = anyhow::Result<()>;

    #[test]
    fn eat_str_is_atomic()
    {
        let mut parser = Parser::new("abd", O_ZEROED);

        assert_eq!(parser.eat_str("abc"), Err(ParseError::NoMatch));
        assert_eq!(parser.pos, 0);
        assert_eq!(parser.eat_str("ab"), Ok(()));
        assert_eq!(parser.pos, 2);
    }

    #[test]
    fn matchers_at_end_of_input()
    {
        let mut parser = Parser::new("", O_ZEROED);

        assert!(parser.eat('a').is_err());
        assert!(parser.eat_except("a").is_err());
        assert!(parser.eat_range('a', 'z').is_err());
        assert!(parser.line_break().is_err());
        assert!(parser.eof().is_ok());
        assert!(parser.line_end().is_ok());
    }

    #[test]
    fn line_breaks() -> TestResult
    {
        let data = &["\r\n", "\r", "\n"];

        for &brk in data
        {
            let mut parser = Parser::new(brk, O_ZEROED);

            assert_eq!(parser.line_break(), Ok(brk));
            assert!(parser.eof().is_ok(), "for {:?}", brk);
        }

        Ok(())
    }

    #[test]
    fn uri_percent_escapes()
    {
        let mut parser = Parser::new("%41%zz", O_ZEROED);

        assert_eq!(parser.uri_char(), Ok('A'));
        assert_eq!(parser.uri_char(), Err(ParseError::NoMatch));
        assert_eq!(parser.pos, 3);
    }

    #[test]
    fn tag_char_excludes_bang()
    {
        let mut parser = Parser::new("!", O_ZEROED);

        assert!(parser.tag_char().is_err());
        assert_eq!(parser.uri_char(), Ok('!'));
    }

    #[test]
    fn comment_lines()
    {
        let mut parser = Parser::new("  # hello\n\n   \n# last", O_ZEROED);

        assert_eq!(parser.comments(), Ok(()));
        assert!(parser.eof().is_ok());
    }

    #[test]
    fn comment_needs_input()
    {
        let mut parser = Parser::new("", O_ZEROED);

        assert_eq!(parser.comment(), Err(ParseError::NoMatch));
    }

    #[test]
    fn inline_comment_needs_separation()
    {
        let mut parser = Parser::new("#no", O_ZEROED);
        assert!(parser.inline_comment().is_err());

        let mut parser = Parser::new("  #yes\n", O_ZEROED);
        assert!(parser.inline_comment().is_ok());
        assert!(parser.eof().is_ok());
    }

    #[test]
    fn indent_detects_extra_spaces()
    {
        let mut parser = Parser::new("    x", O_ZEROED);

        parser.indent.increase();
        parser.indent.adopt(1);
        parser.indent.increase();

        assert_eq!(parser.indent(), Ok(()));
        assert_eq!(parser.indent.current(), 4);
        assert!(!parser.indent.detecting());
        assert_eq!(parser.peek(), Some('x'));
    }

    #[test]
    fn indent_requires_spaces()
    {
        let mut parser = Parser::new(" x", O_ZEROED);

        parser.indent.increase();
        parser.indent.adopt(2);

        assert_eq!(parser.indent(), Err(ParseError::NoMatch));
        assert_eq!(parser.pos, 0);
    }

    #[test]
    fn document_markers()
    {
        let data = &["---", "--- a", "...\n", "a\n---\n"];
        let expected = &[0, 0, 0, 2];

        for (&text, &at) in data.iter().zip(expected)
        {
            let mut parser = Parser::new(text, O_ZEROED);
            parser.pos = at;

            assert_eq!(parser.document_marker(), Ok(()), "for {:?}", text);
        }

        let data = &["---a", " ---", "a---"];
        let expected = &[0, 1, 1];

        for (&text, &at) in data.iter().zip(expected)
        {
            let mut parser = Parser::new(text, O_ZEROED);
            parser.pos = at;

            assert_eq!(parser.document_marker(), Err(ParseError::NoMatch), "for {:?}", text);
            assert_eq!(parser.pos, at);
        }
    }

    #[test]
    fn separation_space_as_indent_widens()
    {
        let mut parser = Parser::new("   x", O_ZEROED);

        parser.indent.increase();
        parser.indent.increase();

        assert_eq!(parser.separation_space_as_indent(), Ok(()));
        assert_eq!(parser.indent.current(), 4);
    }
}
