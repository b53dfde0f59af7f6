/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The parser walks the source with a backtracking
//! recursive descent over the YAML grammar, building each
//! document's nodes as it goes.
//!
//! Every grammar rule is a method returning a
//! [`ParseResult`]. A [`ParseError::NoMatch`] is a
//! speculative failure: the caller rewinds (see
//! [`Parser::attempt`]) and may try another alternative. A
//! [`ParseError::Halt`] is terminal, and stops the parse
//! with the ledger's messages.

#[macro_use]
mod macros;

mod block;
mod document;
mod error;
mod flow;
mod primitive;
mod property;
mod scalar;

#[cfg(test)]
mod tests;

use std::num::NonZeroU8;

use tracing::debug;

pub(crate) use self::error::{ParseError, ParseResult};
use crate::{
    cursor::Cursor,
    error::{internal, Result},
    flag::{Flags, O_ZEROED},
    indent::{IndentTracker, Snapshot},
    ledger::Ledger,
    node::{Graph, Mark, Node, NodeContext, NodeData, NodeIndex, NodeMark, NodeProperty, Stream},
};

/// Parse every document in .text with the default options
pub fn parse(text: &str) -> Result<Stream>
{
    parse_with(text, O_ZEROED)
}

/// Parse every document in .text, using .opts to control
/// parser policy
pub fn parse_with(text: &str, opts: Flags) -> Result<Stream>
{
    Parser::new(text, opts).run()
}

pub(crate) struct Parser
{
    cursor: Cursor,
    pos:    usize,
    indent: IndentTracker,
    ledger: Ledger,
    opts:   Flags,
    graph:  Graph,
}

impl Parser
{
    pub fn new(text: &str, opts: Flags) -> Self
    {
        Self {
            cursor: Cursor::new(text),
            pos: 0,
            indent: IndentTracker::new(),
            ledger: Ledger::new(),
            opts,
            graph: Graph::new(),
        }
    }

    /// Parse the whole source, failing if any of it is left
    /// unconsumed
    pub fn run(mut self) -> Result<Stream>
    {
        let result = match self.stream()
        {
            Ok(_) if self.cursor.has_input(self.pos) =>
            {
                self.ledger.record_rule(self.pos, "remaining input");
                Err(None)
            },
            Ok(stream) => Ok(stream),
            Err(ParseError::NoMatch) => Err(None),
            Err(ParseError::Halt(code)) => Err(Some(code)),
        };

        match result
        {
            Ok(stream) =>
            {
                debug!(documents = stream.len(), "accepted YAML stream");

                Ok(stream)
            },
            Err(cause) =>
            {
                let diagnostic = self.ledger.render(&self.cursor, cause);

                debug!(
                    messages = self.ledger.len(),
                    furthest = %diagnostic.furthest().map_or_else(String::new, |entry| {
                        self.cursor.format_error(entry.location().index, entry.message())
                    }),
                    "rejected YAML stream"
                );

                Err(internal::Error::rejected(diagnostic).into())
            },
        }
    }

    /// Run .f speculatively: if it does not match, the
    /// position, indentation and any nodes or anchors it
    /// added are rewound to where they were before.
    fn attempt<T, F>(&mut self, f: F) -> ParseResult<T>
    where
        F: FnOnce(&mut Self) -> ParseResult<T>,
    {
        let saved = self.save();
        let result = f(self);

        if let Err(ParseError::NoMatch) = result
        {
            self.restore(saved);
        }

        result
    }

    /// Run .f as the named grammar rule .name.
    ///
    /// On success every message recorded by .f is dropped,
    /// otherwise "failed to parse .name" is recorded where
    /// it gave up.
    fn rule<T, F>(&mut self, name: &'static str, f: F) -> ParseResult<T>
    where
        F: FnOnce(&mut Self) -> ParseResult<T>,
    {
        let checkpoint = self.ledger.checkpoint();
        let saved = self.save();
        let result = f(self);

        match result
        {
            Ok(_) => self.ledger.discard(checkpoint),
            Err(ParseError::NoMatch) =>
            {
                self.ledger.record_rule(self.pos, name);
                self.restore(saved);
            },
            Err(ParseError::Halt(_)) => {},
        }

        result
    }

    /// Zero or one .f
    fn optional<T, F>(&mut self, f: F) -> ParseResult<Option<T>>
    where
        F: FnOnce(&mut Self) -> ParseResult<T>,
    {
        let checkpoint = self.ledger.checkpoint();
        let start = self.pos;

        match self.attempt(f)
        {
            Ok(value) => Ok(Some(value)),
            Err(ParseError::NoMatch) =>
            {
                self.ledger.prune(checkpoint, start);

                Ok(None)
            },
            Err(e) => Err(e),
        }
    }

    /// Zero or more .f, stopping at the first failure or at
    /// the first match that consumed nothing
    fn many<T, F>(&mut self, mut f: F) -> ParseResult<Vec<T>>
    where
        F: FnMut(&mut Self) -> ParseResult<T>,
    {
        let mut items = Vec::new();

        loop
        {
            let checkpoint = self.ledger.checkpoint();
            let start = self.pos;

            match self.attempt(&mut f)
            {
                Ok(item) =>
                {
                    items.push(item);

                    if self.pos == start
                    {
                        break;
                    }
                },
                Err(ParseError::NoMatch) =>
                {
                    self.ledger.prune(checkpoint, start);
                    break;
                },
                Err(e) => return Err(e),
            }
        }

        Ok(items)
    }

    /// One or more .f
    fn many1<T, F>(&mut self, f: F) -> ParseResult<Vec<T>>
    where
        F: FnMut(&mut Self) -> ParseResult<T>,
    {
        let items = self.many(f)?;

        match items.is_empty()
        {
            true => Err(ParseError::NoMatch),
            false => Ok(items),
        }
    }

    /// Zero or more .f, discarding the results and
    /// returning how many matched
    fn skip_many<T, F>(&mut self, mut f: F) -> ParseResult<usize>
    where
        F: FnMut(&mut Self) -> ParseResult<T>,
    {
        let mut count = 0;

        loop
        {
            let checkpoint = self.ledger.checkpoint();
            let start = self.pos;

            match self.attempt(&mut f)
            {
                Ok(_) if self.pos == start =>
                {
                    count += 1;
                    break;
                },
                Ok(_) => count += 1,
                Err(ParseError::NoMatch) =>
                {
                    self.ledger.prune(checkpoint, start);
                    break;
                },
                Err(e) => return Err(e),
            }
        }

        Ok(count)
    }

    /// Positive lookahead: match .f without consuming
    /// anything
    fn lookahead<T, F>(&mut self, f: F) -> ParseResult<()>
    where
        F: FnOnce(&mut Self) -> ParseResult<T>,
    {
        let checkpoint = self.ledger.checkpoint();
        let saved = self.save();
        let result = f(self);

        if let Err(ParseError::Halt(code)) = result
        {
            return Err(ParseError::Halt(code));
        }

        self.restore(saved);
        self.ledger.discard(checkpoint);

        result.map(drop)
    }

    /// Negative lookahead: succeed only if .f does not
    /// match here, never consuming anything
    fn not<T, F>(&mut self, f: F) -> ParseResult<()>
    where
        F: FnOnce(&mut Self) -> ParseResult<T>,
    {
        match self.lookahead(f)
        {
            Ok(_) => Err(ParseError::NoMatch),
            Err(ParseError::NoMatch) => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Record .message at the current position and stop
    /// parsing with .code
    fn halt<T, M>(&mut self, code: internal::ErrorCode, message: M) -> ParseResult<T>
    where
        M: Into<std::borrow::Cow<'static, str>>,
    {
        self.ledger.record(self.pos, message);

        Err(ParseError::Halt(code))
    }

    /// Run .f one indentation level deeper
    fn indented<T, F>(&mut self, f: F) -> ParseResult<T>
    where
        F: FnOnce(&mut Self) -> ParseResult<T>,
    {
        self.indent.increase();
        let result = f(self);
        self.indent.decrease();

        result
    }

    /// Run .f with the indentation of a block scalar's
    /// content, see IndentTracker::add_block_indent
    fn block_indented<T, F>(&mut self, indicator: Option<NonZeroU8>, f: F) -> ParseResult<T>
    where
        F: FnOnce(&mut Self) -> ParseResult<T>,
    {
        self.indent.add_block_indent(indicator);
        let result = f(self);
        self.indent.decrease();

        result
    }

    /// Store .node in the current document, marked from
    /// .start to the current position
    fn insert(&mut self, node: Node, context: NodeContext, start: usize) -> NodeIndex
    {
        let data = NodeData::new(context, NodeMark::new(start, self.pos));

        self.graph.insert(node, data)
    }

    /// Insert an empty plain scalar at the current position
    fn insert_empty(&mut self, context: NodeContext) -> NodeIndex
    {
        let pos = self.pos;

        self.insert(Node::empty(), context, pos)
    }

    /// Attach .property to the node .id, binding its anchor
    /// if it has one
    fn apply_property(&mut self, id: NodeIndex, property: NodeProperty) -> ParseResult<()>
    {
        if let Some(name) = property.anchor()
        {
            let strict = self.opts.contains(crate::flag::O_STRICT_ANCHORS);

            if strict && self.graph.anchored(name).is_some()
            {
                let message = format!("{} is anchored more than once", name);

                return self.halt(internal::ErrorCode::DuplicateAnchor, message);
            }

            self.graph.bind(name.to_owned(), id);
        }

        self.graph.set_property(id, property);

        Ok(())
    }

    fn save(&self) -> Saved
    {
        Saved {
            pos:    self.pos,
            indent: self.indent.snapshot(),
            mark:   self.graph.mark(),
        }
    }

    fn restore(&mut self, saved: Saved)
    {
        self.pos = saved.pos;
        self.indent.rewind(saved.indent);
        self.graph.rollback(saved.mark);
    }
}

/// Parser state captured before a speculative parse
#[derive(Debug, Clone, Copy)]
struct Saved
{
    pos:    usize,
    indent: Snapshot,
    mark:   Mark,
}
