/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Block nodes: the indentation driven sequences and
//! mappings, and the blocks holding a document's or a
//! collection entry's content.
//!
//! A block is either "indented", starting at the beginning
//! of a line, or "separated", following some indicator
//! ("---", "- ", "key:") on the same line. Separated blocks
//! may also move their content down to the next line, or be
//! empty altogether.

use crate::{
    node::{MappingEntry, Node, NodeContext, NodeIndex, NodeProperty},
    parser::{error::ParseResult, Parser},
};

impl Parser
{
    /// A node starting at the beginning of a line, one
    /// indentation level deeper than its parent
    pub(super) fn indented_block(&mut self) -> ParseResult<NodeIndex>
    {
        self.rule("indented block", |p| {
            alt!(p =>
                |p| p.indented_content(),
                |p| {
                    p.indent()?;
                    let id = p.alias()?;
                    p.inline_comments()?;

                    Ok(id)
                },
                |p| {
                    p.indent()?;
                    let property = p.node_property()?;

                    p.property_content(property)
                },
            )
        })
    }

    /// A node following an indicator on the same line, one
    /// indentation level deeper than its parent
    pub(super) fn separated_block(&mut self) -> ParseResult<NodeIndex>
    {
        self.rule("separated block", |p| {
            alt!(p =>
                |p| p.separated_content(),
                |p| {
                    p.separation_lines()?;
                    let id = p.alias()?;
                    p.inline_comments()?;

                    Ok(id)
                },
                |p| {
                    p.separation_space()?;
                    let property = p.node_property()?;

                    p.property_content(property)
                },
                |p| {
                    p.inline_comments()?;

                    Ok(p.insert_empty(NodeContext::Block))
                },
            )
        })
    }

    /// The content following .property, or an empty scalar
    /// if nothing but comments follow it
    fn property_content(&mut self, property: NodeProperty) -> ParseResult<NodeIndex>
    {
        let id = alt!(self =>
            |p| p.separated_content(),
            |p| {
                p.inline_comments()?;

                Ok(p.insert_empty(NodeContext::Block))
            },
        )?;

        self.apply_property(id, property)?;

        Ok(id)
    }

    fn indented_content(&mut self) -> ParseResult<NodeIndex>
    {
        alt!(self =>
            |p| {
                p.indent()?;
                p.block_content()
            },
            |p| {
                p.indent()?;
                let id = p.flow_content(NodeContext::Block)?;
                p.inline_comments()?;

                Ok(id)
            },
        )
    }

    fn separated_content(&mut self) -> ParseResult<NodeIndex>
    {
        alt!(self =>
            |p| {
                p.inline_comments()?;
                p.indented_content()
            },
            |p| {
                p.separation_space()?;
                p.block_scalar()
            },
            |p| {
                p.separation_space()?;
                let id = p.flow_content(NodeContext::Block)?;
                p.inline_comments()?;

                Ok(id)
            },
        )
    }

    fn block_content(&mut self) -> ParseResult<NodeIndex>
    {
        alt!(self =>
            |p| p.block_scalar(),
            |p| p.block_sequence(),
            |p| p.block_mapping(),
        )
    }

    fn block_collection(&mut self) -> ParseResult<NodeIndex>
    {
        alt!(self =>
            |p| p.block_sequence(),
            |p| p.block_mapping(),
        )
    }

    /// The node after a "-", "?" or ":" indicator. A
    /// collection starting on the same line as its indicator
    /// is indented by the width of the indicator and the
    /// spaces after it.
    fn block_collection_entry(&mut self) -> ParseResult<NodeIndex>
    {
        alt!(self =>
            |p| p.indented(|p| {
                p.separation_space_as_indent()?;
                p.block_collection()
            }),
            |p| p.indented(|p| p.separated_block()),
        )
    }

    pub(super) fn block_sequence(&mut self) -> ParseResult<NodeIndex>
    {
        self.rule("block sequence", |p| {
            let start = p.pos;

            let mut items = vec![p.block_sequence_entry()?];
            items.extend(p.many(|p| {
                p.indent()?;
                p.block_sequence_entry()
            })?);

            Ok(p.insert(Node::sequence(items), NodeContext::Block, start))
        })
    }

    fn block_sequence_entry(&mut self) -> ParseResult<NodeIndex>
    {
        self.eat('-')?;

        self.block_collection_entry()
    }

    pub(super) fn block_mapping(&mut self) -> ParseResult<NodeIndex>
    {
        self.rule("block mapping", |p| {
            let start = p.pos;

            let mut entries = vec![p.block_mapping_entry()?];
            entries.extend(p.many(|p| {
                p.indent()?;
                p.block_mapping_entry()
            })?);

            Ok(p.insert(Node::mapping(entries), NodeContext::Block, start))
        })
    }

    fn block_mapping_entry(&mut self) -> ParseResult<MappingEntry>
    {
        alt!(self =>
            |p| {
                let key = p.block_explicit_key()?;
                let value = p.block_explicit_value()?;

                Ok(MappingEntry::new(key, value))
            },
            |p| {
                let key = p.block_explicit_key()?;

                Ok(MappingEntry::new(key, p.insert_empty(NodeContext::Block)))
            },
            |p| {
                let key = p.block_simple_key()?;
                let value = p.block_collection_entry()?;

                Ok(MappingEntry::new(key, value))
            },
            |p| {
                let key = p.block_simple_key()?;
                p.inline_comments()?;

                Ok(MappingEntry::new(key, p.insert_empty(NodeContext::Block)))
            },
        )
    }

    /// ? key
    fn block_explicit_key(&mut self) -> ParseResult<NodeIndex>
    {
        self.eat('?')?;

        self.block_collection_entry()
    }

    /// : value, on its own line after an explicit key
    fn block_explicit_value(&mut self) -> ParseResult<NodeIndex>
    {
        self.indent()?;
        self.eat(':')?;

        self.block_collection_entry()
    }

    /// key:
    fn block_simple_key(&mut self) -> ParseResult<NodeIndex>
    {
        let key = self.simple_key(NodeContext::Block)?;
        self.eat(':')?;

        Ok(key)
    }

    /// An implicit key: a single line scalar, optionally
    /// preceded by a node property, and any separation
    /// before the ':' indicator
    pub(super) fn simple_key(&mut self, context: NodeContext) -> ParseResult<NodeIndex>
    {
        let property = self.optional(|p| {
            let property = p.node_property()?;
            p.separation_space()?;

            Ok(property)
        })?;

        let key = self.key_scalar(context)?;

        if let Some(property) = property
        {
            self.apply_property(key, property)?;
        }

        match context
        {
            NodeContext::Block => self.optional(|p| p.separation_space())?,
            NodeContext::Flow => self.optional(|p| p.separation_lines_in_flow())?,
        };

        Ok(key)
    }
}
