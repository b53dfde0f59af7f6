/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Plain (unquoted) scalars.
//!
//! Block and flow plain scalars share their structure,
//! differing only in which symbols may appear: in flow
//! context the flow indicators end the scalar.

use crate::{
    node::NodeContext,
    parser::{
        error::{ParseError, ParseResult},
        Parser,
    },
};

/// Symbols that can never start a plain scalar
const INDICATORS: &str = "-?:,[]{}#&*!|>'\"%@`";
/// Symbols that end a plain scalar in flow context
const FLOW_INDICATORS: &str = ",[]{}";

impl Parser
{
    /// A plain scalar, possibly spanning several lines
    pub(in crate::parser) fn plain_text(&mut self, context: NodeContext) -> ParseResult<String>
    {
        self.rule("plain text", |p| {
            let mut text = p.plain_single_line(context)?;

            for line in p.many(|p| p.plain_more_line(context))?
            {
                text.push_str(&line);
            }

            Ok(text)
        })
    }

    /// A plain scalar on a single line
    pub(in crate::parser) fn plain_single_line(&mut self, context: NodeContext) -> ParseResult<String>
    {
        self.attempt(|p| {
            p.not(|p| p.document_marker())?;

            let mut text = p.plain_first_char(context)?;
            p.plain_chars(context, &mut text)?;

            Ok(text)
        })
    }

    /// A continuation line of a plain scalar, with the
    /// folded break before it
    fn plain_more_line(&mut self, context: NodeContext) -> ParseResult<String>
    {
        self.attempt(|p| {
            p.ignored_blank()?;
            let mut text = p.line_folding()?;
            p.not(|p| p.document_marker())?;
            p.indent()?;
            p.ignored_space()?;

            let len = text.len();
            p.plain_chars(context, &mut text)?;

            match text.len() == len
            {
                true => Err(ParseError::NoMatch),
                false => Ok(text),
            }
        })
    }

    /// Append zero or more plain chars, each possibly
    /// preceded by spaces, to .text
    fn plain_chars(&mut self, context: NodeContext, text: &mut String) -> ParseResult<()>
    {
        loop
        {
            let chunk = self.optional(|p| {
                let spaces = p.skip_many(|p| p.space())?;
                let symbol = p.plain_char(context)?;

                Ok((spaces, symbol))
            })?;

            match chunk
            {
                Some((spaces, symbol)) =>
                {
                    text.extend(std::iter::repeat(' ').take(spaces));
                    text.push(symbol);
                },
                None => break,
            }
        }

        Ok(())
    }

    /// The first symbol(s) of a plain scalar: anything but
    /// an indicator, or one of "-?:" followed by a non space
    fn plain_first_char(&mut self, context: NodeContext) -> ParseResult<String>
    {
        if let Ok(symbol) = self.eat_if(|c| !is_space_or_break(c) && !INDICATORS.contains(c))
        {
            return Ok(symbol.to_string());
        }

        self.attempt(|p| {
            let indicator = p.eat_set("-?:")?;
            let next = p.eat_if(|c| is_safe(c, context))?;

            Ok([indicator, next].iter().collect())
        })
    }

    /// A single symbol inside a plain scalar
    fn plain_char(&mut self, context: NodeContext) -> ParseResult<char>
    {
        match self.peek()
        {
            // ':' only if followed by something that can continue the scalar
            Some(':') if self.peek_at(1).map_or(false, |c| is_safe(c, context)) => self.eat(':'),
            Some(':') => Err(ParseError::NoMatch),
            // '#' only if it is not the start of a comment
            Some('#') if self.previous().map_or(false, |c| !is_space_or_break(c)) => self.eat('#'),
            Some('#') => Err(ParseError::NoMatch),
            Some(c) if is_safe(c, context) => self.eat(c),
            _ => Err(ParseError::NoMatch),
        }
    }
}

fn is_space_or_break(c: char) -> bool
{
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Can .c appear in a plain scalar in .context
fn is_safe(c: char, context: NodeContext) -> bool
{
    match context
    {
        NodeContext::Block => !is_space_or_break(c),
        NodeContext::Flow => !is_space_or_break(c) && !FLOW_INDICATORS.contains(c),
    }
}
