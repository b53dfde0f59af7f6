/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The stream of documents, and the directives preceding
//! an explicit document.

use atoi::atoi;

use crate::{
    error::internal::ErrorCode,
    node::{Directive, Document, NodeIndex, Stream, TagPrefix, Version},
    parser::{
        error::{ParseError, ParseResult},
        Parser,
    },
};

impl Parser
{
    /// Every document in the source: leading comments, an
    /// optional bare document, then any number of explicit
    /// ("---") documents
    pub(super) fn stream(&mut self) -> ParseResult<Stream>
    {
        self.skip_many(|p| p.comment())?;

        let mut documents = Vec::new();

        if let Some(document) = self.optional(|p| p.implicit_document())?
        {
            documents.push(document);
        }
        documents.extend(self.many(|p| p.explicit_document())?);

        Ok(Stream::new(documents))
    }

    fn implicit_document(&mut self) -> ParseResult<Document>
    {
        self.rule("implicit document", |p| {
            p.indent.reset();

            let root = p.indented(|p| p.indented_block())?;
            p.optional(|p| p.end_of_document())?;

            Ok(p.finish_document(Vec::new(), root))
        })
    }

    fn explicit_document(&mut self) -> ParseResult<Document>
    {
        self.rule("explicit document", |p| {
            p.indent.reset();

            let directives = p.directives()?;
            p.eat_str("---")?;
            let root = p.indented(|p| p.separated_block())?;
            p.optional(|p| p.end_of_document())?;

            Ok(p.finish_document(directives, root))
        })
    }

    /// Move the nodes and anchors built so far into a new
    /// Document
    fn finish_document(&mut self, directives: Vec<Directive>, root: NodeIndex) -> Document
    {
        let (store, anchors) = self.graph.finish();

        Document::new(directives, root, store, anchors)
    }

    /// "..."
    fn end_of_document(&mut self) -> ParseResult<()>
    {
        self.eat_str("...")?;

        self.inline_comments()
    }

    /// Zero or more directives. A document may declare its
    /// version once, and each tag handle once.
    fn directives(&mut self) -> ParseResult<Vec<Directive>>
    {
        let mut directives: Vec<Directive> = Vec::new();

        loop
        {
            let start = self.pos;

            let directive = match self.optional(|p| p.directive())?
            {
                Some(directive) => directive,
                None => break,
            };

            let duplicate = directives.iter().any(|seen| match (seen, &directive)
            {
                (Directive::Yaml(_), Directive::Yaml(_)) => true,
                (Directive::Tag { handle: a, .. }, Directive::Tag { handle: b, .. }) => a == b,
                _ => false,
            });

            match (duplicate, &directive)
            {
                (true, Directive::Yaml(version)) =>
                {
                    self.pos = start;
                    let message = format!("%YAML {} follows an earlier %YAML directive", version);

                    return self.halt(ErrorCode::DuplicateVersion, message);
                },
                (true, Directive::Tag { handle, .. }) =>
                {
                    self.pos = start;
                    let message = format!("%TAG {} is declared more than once", handle);

                    return self.halt(ErrorCode::DuplicateTagDirective, message);
                },
                _ => directives.push(directive),
            }
        }

        Ok(directives)
    }

    fn directive(&mut self) -> ParseResult<Directive>
    {
        self.rule("directive", |p| {
            p.eat('%')?;

            let directive = alt!(p =>
                |p| p.yaml_directive(),
                |p| p.tag_directive(),
                |p| p.reserved_directive(),
            )?;
            p.inline_comments()?;

            Ok(directive)
        })
    }

    /// YAML major.minor
    fn yaml_directive(&mut self) -> ParseResult<Directive>
    {
        self.eat_str("YAML")?;
        self.separation_space()?;

        let version = self.attempt(|p| {
            let major = p.version_number()?;
            p.eat('.')?;
            let minor = p.version_number()?;

            Ok(Version { major, minor })
        });

        match version
        {
            Ok(version) => Ok(Directive::Yaml(version)),
            Err(ParseError::NoMatch) =>
            {
                self.halt(ErrorCode::InvalidVersion, "expected a %YAML version of the form major.minor")
            },
            Err(e) => Err(e),
        }
    }

    fn version_number(&mut self) -> ParseResult<u8>
    {
        let digits = self.integer()?;

        atoi::<u8>(digits.as_bytes()).ok_or(ParseError::NoMatch)
    }

    /// TAG handle prefix
    fn tag_directive(&mut self) -> ParseResult<Directive>
    {
        self.eat_str("TAG")?;
        self.separation_space()?;
        let handle = self.tag_handle()?;
        self.separation_space()?;
        let prefix = self.tag_prefix()?;

        Ok(Directive::Tag { handle, prefix })
    }

    fn tag_prefix(&mut self) -> ParseResult<TagPrefix>
    {
        alt!(self =>
            |p| {
                p.eat('!')?;
                let rest = p.many(|p| p.uri_char())?;

                Ok(TagPrefix::Local(rest.into_iter().collect()))
            },
            |p| {
                let prefix = p.many1(|p| p.uri_char())?;

                Ok(TagPrefix::Global(prefix.into_iter().collect()))
            },
        )
    }

    /// Any other directive: a name and its parameters, kept
    /// but otherwise ignored
    fn reserved_directive(&mut self) -> ParseResult<Directive>
    {
        let name = self.many1(|p| p.non_space_char())?.into_iter().collect();

        let parameters = self.many(|p| {
            p.separation_space()?;
            p.not(|p| p.eat('#'))?;

            p.many1(|p| p.non_space_char())
                .map(|param| param.into_iter().collect())
        })?;

        Ok(Directive::Reserved { name, parameters })
    }
}
