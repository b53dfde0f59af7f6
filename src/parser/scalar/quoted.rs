/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Single and double quoted scalars.
//!
//! Both styles come in a single line form and a multi line
//! form, tried in that order. A multi line scalar is made
//! of a first line, any number of inner lines and a last
//! line which holds the closing quote. Blanks at the end of
//! a line are dropped, and the breaks between lines folded.

use crate::parser::{error::ParseResult, Parser};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quote
{
    Single,
    Double,
}

impl Quote
{
    fn symbol(self) -> char
    {
        match self
        {
            Self::Single => '\'',
            Self::Double => '"',
        }
    }
}

impl Parser
{
    pub(in crate::parser) fn double_quoted(&mut self) -> ParseResult<String>
    {
        self.rule("double quoted text", |p| {
            alt!(p =>
                |p| p.quoted_single_line(Quote::Double),
                |p| p.quoted_multi_line(Quote::Double),
            )
        })
    }

    pub(in crate::parser) fn single_quoted(&mut self) -> ParseResult<String>
    {
        self.rule("single quoted text", |p| {
            alt!(p =>
                |p| p.quoted_single_line(Quote::Single),
                |p| p.quoted_multi_line(Quote::Single),
            )
        })
    }

    pub(in crate::parser) fn double_quoted_single_line(&mut self) -> ParseResult<String>
    {
        self.quoted_single_line(Quote::Double)
    }

    pub(in crate::parser) fn single_quoted_single_line(&mut self) -> ParseResult<String>
    {
        self.quoted_single_line(Quote::Single)
    }

    fn quoted_single_line(&mut self, quote: Quote) -> ParseResult<String>
    {
        self.attempt(|p| {
            p.eat(quote.symbol())?;
            let text = p.many(|p| p.quoted_char(quote))?;
            p.eat(quote.symbol())?;

            Ok(text.into_iter().collect())
        })
    }

    fn quoted_multi_line(&mut self, quote: Quote) -> ParseResult<String>
    {
        self.attempt(|p| {
            let mut text = String::new();

            // First line
            p.eat(quote.symbol())?;
            text.extend(p.many(|p| p.quoted_folded_char(quote))?);
            p.ignored_blank()?;
            text.push_str(&p.quoted_break(quote)?);

            // Inner lines
            let inner = p.many(|p| {
                p.indent()?;
                p.ignored_blank()?;
                let line = p.many1(|p| p.quoted_folded_char(quote))?;
                p.ignored_blank()?;
                let folded = p.quoted_break(quote)?;

                Ok((line, folded))
            })?;

            for (line, folded) in inner
            {
                text.extend(line);
                text.push_str(&folded);
            }

            // Last line
            p.indent()?;
            p.ignored_blank()?;
            text.extend(p.many(|p| p.quoted_char(quote))?);
            p.eat(quote.symbol())?;

            Ok(text)
        })
    }

    /// A symbol inside quotes, decoding escapes
    fn quoted_char(&mut self, quote: Quote) -> ParseResult<char>
    {
        match quote
        {
            Quote::Double if check!(self => '\\') => self.escape_sequence(),
            Quote::Double => self.eat_except("\"\\\r\n"),
            Quote::Single if self.eat_str("''").is_ok() => Ok('\''),
            Quote::Single => self.eat_except("'\r\n"),
        }
    }

    /// A symbol on a line that continues onto the next:
    /// blanks are only kept if more text follows them
    fn quoted_folded_char(&mut self, quote: Quote) -> ParseResult<char>
    {
        if check!(self => ' ' | '\t')
        {
            self.not(|p| {
                p.ignored_blank()?;
                p.line_break()
            })?;

            return self.blank();
        }

        self.quoted_char(quote)
    }

    /// The break at the end of a quoted line. Double quoted
    /// scalars may also escape the break, which then
    /// disappears entirely.
    fn quoted_break(&mut self, quote: Quote) -> ParseResult<String>
    {
        match quote
        {
            Quote::Single => self.line_folding(),
            Quote::Double => alt!(self =>
                |p| p.line_folding(),
                |p| p.escaped_line_break().map(|_| String::new()),
            ),
        }
    }
}
