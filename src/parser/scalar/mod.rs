/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Scalar rules: plain, quoted and block scalars, and the
//! line folding shared between them.

use crate::{
    node::{Node, NodeContext, NodeIndex, ScalarStyle},
    parser::{error::ParseResult, Parser},
};

mod block;
mod escape;
mod plain;
mod quoted;

impl Parser
{
    /// A plain or quoted scalar, using the plain scalar
    /// rules of .context
    pub(super) fn flow_scalar(&mut self, context: NodeContext) -> ParseResult<NodeIndex>
    {
        let start = self.pos;

        let (text, style) = alt!(self =>
            |p| p.plain_text(context).map(|text| (text, ScalarStyle::Plain)),
            |p| p.single_quoted().map(|text| (text, ScalarStyle::SingleQuote)),
            |p| p.double_quoted().map(|text| (text, ScalarStyle::DoubleQuote)),
        )?;

        Ok(self.insert(Node::scalar(text, style), context, start))
    }

    /// A scalar that must fit on a single line, used for
    /// implicit keys
    pub(super) fn key_scalar(&mut self, context: NodeContext) -> ParseResult<NodeIndex>
    {
        let start = self.pos;

        let (text, style) = alt!(self =>
            |p| p.plain_single_line(context).map(|text| (text, ScalarStyle::Plain)),
            |p| p.double_quoted_single_line().map(|text| (text, ScalarStyle::DoubleQuote)),
            |p| p.single_quoted_single_line().map(|text| (text, ScalarStyle::SingleQuote)),
        )?;

        Ok(self.insert(Node::scalar(text, style), context, start))
    }

    /// A literal or folded block scalar
    pub(super) fn block_scalar(&mut self) -> ParseResult<NodeIndex>
    {
        let start = self.pos;

        let (text, style) = alt!(self =>
            |p| p.literal_text().map(|text| (text, ScalarStyle::Literal)),
            |p| p.folded_text().map(|text| (text, ScalarStyle::Folded)),
        )?;

        Ok(self.insert(Node::scalar(text, style), NodeContext::Block, start))
    }

    /// Fold one or more line breaks. A single break becomes
    /// a space; a break followed by blank lines keeps only
    /// the breaks of the blank lines.
    pub(super) fn line_folding(&mut self) -> ParseResult<String>
    {
        self.rule("line folding", |p| p.break_run().map(|breaks| fold(&breaks)))
    }

    /// A line break and the breaks of any blank lines after
    /// it, provided the next line is indented enough to
    /// continue the current node
    pub(super) fn break_run(&mut self) -> ParseResult<Vec<&'static str>>
    {
        self.attempt(|p| {
            let first = p.line_break()?;

            let mut breaks = vec![first];
            breaks.extend(p.many(|p| {
                p.ignored_blank()?;
                p.line_break()
            })?);

            p.lookahead(|p| p.indent())?;

            Ok(breaks)
        })
    }

    /// A backslash escaped line break in a double quoted
    /// scalar, swallowing the break and any blank lines that
    /// follow it
    pub(super) fn escaped_line_break(&mut self) -> ParseResult<()>
    {
        self.attempt(|p| {
            p.eat('\\')?;
            p.line_break()?;

            p.skip_many(|p| {
                p.ignored_blank()?;
                p.line_break()
            })?;

            Ok(())
        })
    }
}

/// Fold a run of .breaks: a lone break becomes a space,
/// otherwise the first break is dropped
fn fold(breaks: &[&str]) -> String
{
    match breaks
    {
        [] | [_] => String::from(" "),
        [_, rest @ ..] => rest.concat(),
    }
}

#[cfg(test)]
mod tests
{
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{flag::O_ZEROED, parser::error::ParseError};

    type TestResult = anyhow::Result<()>;

    #[test]
    fn line_folding_counts_breaks() -> TestResult
    {
        let data = &["\nx", "\n\nx", "\n  \n\t\nx", "\r\n\r\nx"];
        let expected = &[" ", "\n", "\n\n", "\r\n"];

        for (&t, &ex) in data.iter().zip(expected)
        {
            let mut parser = Parser::new(t, O_ZEROED);

            assert_eq!(parser.line_folding(), Ok(ex.to_owned()), "for {:?}", t);
            assert_eq!(parser.peek(), Some('x'), "for {:?}", t);
        }

        Ok(())
    }

    #[test]
    fn line_folding_requires_indent()
    {
        let mut parser = Parser::new("\nx", O_ZEROED);

        parser.indent.increase();
        parser.indent.adopt(2);

        assert_eq!(parser.line_folding(), Err(ParseError::NoMatch));
        assert_eq!(parser.pos, 0);
    }

    #[test]
    fn escaped_line_break_swallows_blank_lines()
    {
        let mut parser = Parser::new("\\\n  \n\nx", O_ZEROED);

        assert_eq!(parser.escaped_line_break(), Ok(()));
        assert_eq!(parser.peek(), Some('x'));
    }
}
