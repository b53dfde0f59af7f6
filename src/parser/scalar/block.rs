/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Literal ("|") and folded (">") block scalars, their
//! header modifier and the chomping of trailing breaks.

use std::num::NonZeroU8;

use atoi::atoi;

use super::fold;
use crate::{
    node::{BlockScalarModifier, Chomping},
    parser::{
        error::{ParseError, ParseResult},
        Parser,
    },
};

impl Parser
{
    pub(in crate::parser) fn literal_text(&mut self) -> ParseResult<String>
    {
        self.rule("literal text", |p| {
            p.eat('|')?;
            let modifier = p.block_scalar_modifier()?;

            p.block_indented(modifier.indent(), |p| {
                p.inline_comment()?;

                p.optional(|p| p.literal_content(modifier.chomping()))
                    .map(Option::unwrap_or_default)
            })
        })
    }

    pub(in crate::parser) fn folded_text(&mut self) -> ParseResult<String>
    {
        self.rule("folded text", |p| {
            p.eat('>')?;
            let modifier = p.block_scalar_modifier()?;

            p.block_indented(modifier.indent(), |p| {
                p.inline_comment()?;

                p.optional(|p| p.folded_content(modifier.chomping()))
                    .map(Option::unwrap_or_default)
            })
        })
    }

    /// Indentation and chomping indicators, in either
    /// order, both optional
    fn block_scalar_modifier(&mut self) -> ParseResult<BlockScalarModifier>
    {
        let modifier = alt!(self =>
            |p| {
                let indent = p.indent_indicator()?;
                let chomping = p.optional(|p| p.chomping_indicator())?;

                Ok(BlockScalarModifier::new(Some(indent), chomping.unwrap_or_default()))
            },
            |p| {
                let chomping = p.chomping_indicator()?;
                let indent = p.optional(|p| p.indent_indicator())?;

                Ok(BlockScalarModifier::new(indent, chomping))
            },
        );

        match modifier
        {
            Err(ParseError::NoMatch) => Ok(BlockScalarModifier::default()),
            result => result,
        }
    }

    fn indent_indicator(&mut self) -> ParseResult<NonZeroU8>
    {
        let digit = self.eat_range('1', '9')?;
        let mut buffer = [0; 4];

        atoi::<u8>(digit.encode_utf8(&mut buffer).as_bytes())
            .and_then(NonZeroU8::new)
            .ok_or(ParseError::NoMatch)
    }

    fn chomping_indicator(&mut self) -> ParseResult<Chomping>
    {
        match self.eat_set("-+")?
        {
            '-' => Ok(Chomping::Strip),
            _ => Ok(Chomping::Keep),
        }
    }

    fn literal_content(&mut self, chomping: Chomping) -> ParseResult<String>
    {
        let mut text = self.literal_line(None)?;

        loop
        {
            let line = self.optional(|p| {
                let first = p.line_break()?;
                p.literal_line(Some(first))
            })?;

            match line
            {
                Some(line) => text.push_str(&line),
                None => break,
            }
        }

        text.push_str(&self.chomped_line_break(chomping)?);
        self.optional(|p| p.comments())?;

        Ok(text)
    }

    /// A line of literal content, with any empty lines
    /// before it. .leading is the break that ended the
    /// previous content line, if there was one.
    fn literal_line(&mut self, leading: Option<&'static str>) -> ParseResult<String>
    {
        let mut text: String = leading.into_iter().collect();

        for empty in self.many(|p| p.empty_line_block())?
        {
            text.push_str(empty);
        }

        self.indent()?;

        let line = self.many1(|p| p.non_break_char())?;
        text.extend(line);

        Ok(text)
    }

    fn folded_content(&mut self, chomping: Chomping) -> ParseResult<String>
    {
        let mut text = self.many(|p| p.empty_line_block())?.concat();

        text.push_str(&self.folded_lines()?);
        text.push_str(&self.chomped_line_break(chomping)?);
        self.optional(|p| p.comments())?;

        Ok(text)
    }

    /// Folded lines, joined by line folding. Lines that
    /// start with a blank are more indented than their
    /// neighbours, and the breaks around them are kept as
    /// is.
    fn folded_lines(&mut self) -> ParseResult<String>
    {
        let mut text = self.folded_line()?;
        let mut spaced = starts_with_blank(&text);

        loop
        {
            let next = self.optional(|p| {
                let breaks = p.break_run()?;
                let line = p.folded_line()?;

                Ok((breaks, line))
            })?;

            let (breaks, line) = match next
            {
                Some(next) => next,
                None => break,
            };

            let next_spaced = starts_with_blank(&line);

            match spaced || next_spaced
            {
                true => text.push_str(&breaks.concat()),
                false => text.push_str(&fold(&breaks)),
            }
            text.push_str(&line);

            spaced = next_spaced;
        }

        Ok(text)
    }

    /// A single line of folded content, which must hold
    /// more than blanks
    fn folded_line(&mut self) -> ParseResult<String>
    {
        self.attempt(|p| {
            p.indent()?;
            p.not(|p| {
                p.ignored_blank()?;
                p.line_end()
            })?;

            p.many1(|p| p.non_break_char())
                .map(|line| line.into_iter().collect())
        })
    }

    /// The breaks trailing a block scalar's content, run
    /// through .chomping
    fn chomped_line_break(&mut self, chomping: Chomping) -> ParseResult<String>
    {
        let breaks = alt!(self =>
            |p| {
                let first = p.line_break()?;

                let mut breaks = vec![first];
                breaks.extend(p.many(|p| {
                    p.ignored_space()?;
                    p.line_break()
                })?);

                Ok(breaks)
            },
            |p| p.eof().map(|_| Vec::new()),
        )?;

        Ok(chomp(&breaks, chomping, self.opts.clip_default()))
    }
}

fn starts_with_blank(line: &str) -> bool
{
    line.starts_with(|c| c == ' ' || c == '\t')
}

/// Apply .chomping to the trailing .breaks of a block
/// scalar, using .default as the clipped terminator if no
/// break was captured
pub(in crate::parser) fn chomp(breaks: &[&str], chomping: Chomping, default: &'static str) -> String
{
    match chomping
    {
        Chomping::Strip => String::new(),
        Chomping::Keep => breaks.concat(),
        Chomping::Clip => breaks.first().copied().unwrap_or(default).to_owned(),
    }
}
