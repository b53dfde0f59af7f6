/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Flow collections ("[...]" and "{...}") and the nodes
//! inside them.

use crate::{
    node::{MappingEntry, Node, NodeContext, NodeIndex},
    parser::{error::ParseResult, Parser},
};

impl Parser
{
    /// A flow scalar or collection, using the plain scalar
    /// rules of .context
    pub(super) fn flow_content(&mut self, context: NodeContext) -> ParseResult<NodeIndex>
    {
        alt!(self =>
            |p| p.flow_scalar(context),
            |p| p.flow_sequence(),
            |p| p.flow_mapping(),
        )
    }

    pub(super) fn flow_sequence(&mut self) -> ParseResult<NodeIndex>
    {
        self.rule("flow sequence", |p| {
            let start = p.pos;

            p.eat('[')?;
            p.optional(|p| p.separation_lines_in_flow())?;
            let items = p.flow_entries(|p| p.flow_sequence_entry())?;
            p.eat(']')?;

            Ok(p.insert(Node::sequence(items), NodeContext::Flow, start))
        })
    }

    pub(super) fn flow_mapping(&mut self) -> ParseResult<NodeIndex>
    {
        self.rule("flow mapping", |p| {
            let start = p.pos;

            p.eat('{')?;
            p.optional(|p| p.separation_lines_in_flow())?;
            let entries = p.flow_entries(|p| p.flow_mapping_entry())?;
            p.eat('}')?;

            Ok(p.insert(Node::mapping(entries), NodeContext::Flow, start))
        })
    }

    /// Zero or more .entry separated by commas, allowing a
    /// trailing comma
    fn flow_entries<T, F>(&mut self, mut entry: F) -> ParseResult<Vec<T>>
    where
        F: FnMut(&mut Self) -> ParseResult<T>,
    {
        let mut entries = Vec::new();

        if let Some(first) = self.optional(&mut entry)?
        {
            entries.push(first);
            entries.extend(self.many(|p| {
                p.eat(',')?;
                p.optional(|p| p.separation_lines_in_flow())?;

                entry(p)
            })?);

            self.optional(|p| {
                p.eat(',')?;
                p.optional(|p| p.separation_lines_in_flow())
            })?;
        }

        Ok(entries)
    }

    /// A sequence entry. A single "key: value" pair becomes
    /// a mapping holding just that entry.
    fn flow_sequence_entry(&mut self) -> ParseResult<NodeIndex>
    {
        alt!(self =>
            |p| {
                let start = p.pos;
                let pair = p.flow_single_pair()?;

                Ok(p.insert(Node::mapping(vec![pair]), NodeContext::Flow, start))
            },
            |p| {
                let id = p.flow_node()?;
                p.optional(|p| p.separation_lines_in_flow())?;

                Ok(id)
            },
        )
    }

    fn flow_mapping_entry(&mut self) -> ParseResult<MappingEntry>
    {
        alt!(self =>
            |p| p.flow_single_pair(),
            |p| {
                let key = p.simple_key(NodeContext::Flow)?;

                Ok(MappingEntry::new(key, p.insert_empty(NodeContext::Flow)))
            },
        )
    }

    /// A key with a value, or an explicit key on its own
    fn flow_single_pair(&mut self) -> ParseResult<MappingEntry>
    {
        alt!(self =>
            |p| {
                let key = p.explicit_key()?;
                let value = p.explicit_value()?;

                Ok(MappingEntry::new(key, value))
            },
            |p| {
                let key = p.explicit_key()?;

                Ok(MappingEntry::new(key, p.insert_empty(NodeContext::Flow)))
            },
            |p| {
                let key = p.simple_key(NodeContext::Flow)?;
                let value = p.explicit_value()?;

                Ok(MappingEntry::new(key, value))
            },
        )
    }

    /// ? key
    fn explicit_key(&mut self) -> ParseResult<NodeIndex>
    {
        self.eat('?')?;

        self.indicated_flow_node()
    }

    /// : value
    fn explicit_value(&mut self) -> ParseResult<NodeIndex>
    {
        self.eat(':')?;

        self.indicated_flow_node()
    }

    /// The node after a "?" or ":" indicator, which is empty
    /// if only separation follows the indicator
    fn indicated_flow_node(&mut self) -> ParseResult<NodeIndex>
    {
        alt!(self =>
            |p| {
                p.separation_lines_in_flow()?;
                let id = p.flow_node()?;
                p.optional(|p| p.separation_lines_in_flow())?;

                Ok(id)
            },
            |p| {
                let id = p.insert_empty(NodeContext::Flow);
                p.separation_lines_in_flow()?;

                Ok(id)
            },
        )
    }

    /// A node inside a flow collection
    fn flow_node(&mut self) -> ParseResult<NodeIndex>
    {
        alt!(self =>
            |p| p.alias(),
            |p| p.flow_content(NodeContext::Flow),
            |p| {
                let property = p.node_property()?;

                let content = p.optional(|p| {
                    p.separation_lines_in_flow()?;
                    p.flow_content(NodeContext::Flow)
                })?;
                let id = match content
                {
                    Some(id) => id,
                    None => p.insert_empty(NodeContext::Flow),
                };

                p.apply_property(id, property)?;

                Ok(id)
            },
        )
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

    /// Number of children of the collection at .id
    fn children(parser: &mut Parser, id: NodeIndex) -> usize
    {
        let (store, _) = parser.graph.finish();

        match store.nodes().get(id)
        {
            Some(Node::Sequence(sequence)) => sequence.items().len(),
            Some(Node::Mapping(mapping)) => mapping.entries().len(),
            _ => 0,
        }
    }

    #[test]
    fn flow_sequences() -> TestResult
    {
        let data = &["[]", "[ ]", "[a]", "[a, b, c]", "[a, b,]", "[a,\n b]", "[[a], {b: c}]", "[a: b]"];
        let expected = &[0, 0, 1, 3, 2, 2, 2, 1];

        for (i, (&t, &ex)) in data.iter().zip(expected).enumerate()
        {
            let mut parser = Parser::new(t, O_ZEROED);

            let id = parser
                .flow_sequence()
                .map_err(|e| anyhow!("on iteration {}, test errored with {}", i, e))?;

            assert!(parser.eof().is_ok(), "on iteration {}", i);
            assert_eq!(children(&mut parser, id), ex, "on iteration {}", i);
        }

        Ok(())
    }

    #[test]
    fn flow_mappings() -> TestResult
    {
        let data = &["{}", "{a: 1}", "{a: 1, b: 2,}", "{a, b}", "{? a : 1}", "{? }", "{a: }", "{&x a: !t 1}"];
        let expected = &[0, 1, 2, 2, 1, 1, 1, 1];

        for (i, (&t, &ex)) in data.iter().zip(expected).enumerate()
        {
            let mut parser = Parser::new(t, O_ZEROED);

            let id = parser
                .flow_mapping()
                .map_err(|e| anyhow!("on iteration {}, test errored with {}", i, e))?;

            assert!(parser.eof().is_ok(), "on iteration {}", i);
            assert_eq!(children(&mut parser, id), ex, "on iteration {}", i);
        }

        Ok(())
    }

    #[test]
    fn unclosed_flow_collections()
    {
        let data = &["[a, b", "{a: 1", "[a,, b]", "{a: 1 b: 2}"];

        for &t in data
        {
            let mut parser = Parser::new(t, O_ZEROED);

            let result = parser.flow_content(NodeContext::Block);

            assert_eq!(result.map(drop), Err(ParseError::NoMatch), "for {:?}", t);
            assert_eq!(parser.graph.len(), 0, "for {:?}", t);
        }
    }
}
