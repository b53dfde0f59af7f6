/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Node properties (tags and anchors) and aliases.

use crate::{
    error::internal::ErrorCode,
    node::{NodeIndex, NodeProperty, Tag, TagHandle},
    parser::{error::ParseResult, Parser},
};

/// Symbols that end an anchor or alias name
const NAME_TERMINATORS: &str = " \t\r\n,[]{}";

impl Parser
{
    /// A tag, an anchor, or both in either order
    pub(super) fn node_property(&mut self) -> ParseResult<NodeProperty>
    {
        self.rule("node property", |p| {
            alt!(p =>
                |p| {
                    let tag = p.tag()?;
                    let anchor = p.optional(|p| {
                        p.separation_lines()?;
                        p.anchor()
                    })?;

                    Ok(NodeProperty::new(Some(tag), anchor))
                },
                |p| {
                    let anchor = p.anchor()?;
                    let tag = p.optional(|p| {
                        p.separation_lines()?;
                        p.tag()
                    })?;

                    Ok(NodeProperty::new(tag, Some(anchor)))
                },
            )
        })
    }

    pub(super) fn anchor(&mut self) -> ParseResult<String>
    {
        self.attempt(|p| {
            p.eat('&')?;
            p.anchor_name()
        })
    }

    fn anchor_name(&mut self) -> ParseResult<String>
    {
        self.many1(|p| p.eat_except(NAME_TERMINATORS))
            .map(|name| name.into_iter().collect())
    }

    /// An alias, resolving to the node its anchor was bound
    /// to. Aliasing an unknown anchor halts the parse.
    pub(super) fn alias(&mut self) -> ParseResult<NodeIndex>
    {
        self.rule("alias node", |p| {
            let start = p.pos;

            p.eat('*')?;
            let name = p.anchor_name()?;

            match p.graph.anchored(&name)
            {
                Some(id) => Ok(id),
                None =>
                {
                    p.pos = start;

                    p.halt(ErrorCode::UnknownAnchor, format!("{} is not anchored", name))
                },
            }
        })
    }

    pub(super) fn tag(&mut self) -> ParseResult<Tag>
    {
        alt!(self =>
            |p| p.verbatim_tag(),
            |p| p.shorthand_tag(),
            |p| p.eat('!').map(|_| Tag::NonSpecific),
        )
    }

    /// !<uri>
    fn verbatim_tag(&mut self) -> ParseResult<Tag>
    {
        self.eat_str("!<")?;
        let uri = self.many1(|p| p.uri_char())?;
        self.eat('>')?;

        Ok(Tag::Verbatim(uri.into_iter().collect()))
    }

    fn shorthand_tag(&mut self) -> ParseResult<Tag>
    {
        alt!(self =>
            |p| p.shorthand_with(|p| p.named_tag_handle()),
            |p| p.shorthand_with(|p| p.eat_str("!!").map(|_| TagHandle::Secondary)),
            |p| p.shorthand_with(|p| p.eat('!').map(|_| TagHandle::Primary)),
        )
    }

    /// A tag handle matched by .handle, and a suffix of one
    /// or more tag chars
    fn shorthand_with<F>(&mut self, handle: F) -> ParseResult<Tag>
    where
        F: FnOnce(&mut Self) -> ParseResult<TagHandle>,
    {
        let handle = handle(self)?;
        let suffix = self.many1(|p| p.tag_char())?;

        Ok(Tag::Shorthand {
            handle,
            suffix: suffix.into_iter().collect(),
        })
    }

    /// A handle as written in a %TAG directive
    pub(super) fn tag_handle(&mut self) -> ParseResult<TagHandle>
    {
        alt!(self =>
            |p| p.named_tag_handle(),
            |p| p.eat_str("!!").map(|_| TagHandle::Secondary),
            |p| p.eat('!').map(|_| TagHandle::Primary),
        )
    }

    /// !word!
    fn named_tag_handle(&mut self) -> ParseResult<TagHandle>
    {
        self.eat('!')?;
        let name = self.many1(|p| p.word_char())?;
        self.eat('!')?;

        Ok(TagHandle::Named(name.into_iter().collect()))
    }
}

#[cfg(test)]
mod tests
{
    use anyhow::anyhow;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{flag::O_ZEROED, parser::error::ParseError};

    type TestResult = anyhow::Result<()>;

    /// A property that must span the whole input
    fn property_only(parser: &mut Parser) -> ParseResult<NodeProperty>
    {
        let property = parser.node_property()?;
        parser.eof()?;

        Ok(property)
    }

    fn shorthand(handle: TagHandle, suffix: &str) -> Tag
    {
        Tag::Shorthand {
            handle,
            suffix: suffix.to_owned(),
        }
    }

    #[test]
    fn tags() -> TestResult
    {
        let data = &["!", "!local", "!!str", "!e!tag%21", "!<tag:yaml.org,2002:int>"];
        let expected = &[
            Tag::NonSpecific,
            shorthand(TagHandle::Primary, "local"),
            shorthand(TagHandle::Secondary, "str"),
            shorthand(TagHandle::Named("e".into()), "tag!"),
            Tag::Verbatim("tag:yaml.org,2002:int".into()),
        ];

        for (i, (&t, ex)) in data.iter().zip(expected).enumerate()
        {
            let mut parser = Parser::new(t, O_ZEROED);

            let tag = parser
                .tag()
                .map_err(|e| anyhow!("on iteration {}, test errored with {}", i, e))?;

            assert_eq!(&tag, ex, "on iteration {}", i);
            assert!(parser.eof().is_ok(), "on iteration {}", i);
        }

        Ok(())
    }

    #[test]
    fn properties_in_either_order() -> TestResult
    {
        let data = &["&a !!str", "!!str &a", "&a", "!x"];
        let expected = &[
            NodeProperty::new(Some(shorthand(TagHandle::Secondary, "str")), Some("a".into())),
            NodeProperty::new(Some(shorthand(TagHandle::Secondary, "str")), Some("a".into())),
            NodeProperty::new(None, Some("a".into())),
            NodeProperty::new(Some(shorthand(TagHandle::Primary, "x")), None),
        ];

        for (i, (&t, ex)) in data.iter().zip(expected).enumerate()
        {
            let mut parser = Parser::new(t, O_ZEROED);

            let property = property_only(&mut parser)
                .map_err(|e| anyhow!("on iteration {}, test errored with {}", i, e))?;

            assert_eq!(&property, ex, "on iteration {}", i);
        }

        Ok(())
    }

    #[test]
    fn anchor_names_stop_at_flow_indicators()
    {
        let mut parser = Parser::new("&name, rest", O_ZEROED);

        assert_eq!(parser.anchor(), Ok(String::from("name")));
        assert_eq!(parser.peek(), Some(','));
    }

    #[test]
    fn unknown_alias_halts()
    {
        let mut parser = Parser::new("*missing", O_ZEROED);

        assert_eq!(parser.alias(), Err(ParseError::Halt(ErrorCode::UnknownAnchor)));
        assert!(parser.ledger.render(&parser.cursor, None).mentions("missing is not anchored"));
    }

    #[test]
    fn tag_handles() -> TestResult
    {
        let data = &["!", "!!", "!yaml!"];
        let expected = &[
            TagHandle::Primary,
            TagHandle::Secondary,
            TagHandle::Named("yaml".into()),
        ];

        for (i, (&t, ex)) in data.iter().zip(expected).enumerate()
        {
            let mut parser = Parser::new(t, O_ZEROED);

            let handle = parser
                .tag_handle()
                .map_err(|e| anyhow!("on iteration {}, test errored with {}", i, e))?;

            assert_eq!(&handle, ex, "on iteration {}", i);
        }

        Ok(())
    }
}
