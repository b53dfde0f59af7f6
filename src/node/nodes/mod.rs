/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use slotmap::new_key_type;

pub use self::{
    mapping::{MappingEntry, MappingNode},
    scalar::{BlockScalarModifier, Chomping, ScalarNode, ScalarStyle},
    sequence::SequenceNode,
};

mod mapping;
mod scalar;
mod sequence;

new_key_type! {
    /// Identifier used for locating [Node]s in a document.
    ///
    /// An invariant of this type is that one should never use
    /// [NodeIndex]s as indexes into documents that did not
    /// generate the [NodeIndex]. Behavior is safe and cannot
    /// cause UB, but is unspecified, and never what you want.
    pub struct NodeIndex;
}

/// Possible nodes one can encounter while traversing a
/// document.
///
/// Only `Scalar`s contain text, the other variants deal
/// with the structure of the document and refer to their
/// children by [NodeIndex].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node
{
    /// Data container, storing a single decoded scalar
    Scalar(ScalarNode),
    /// List node, storing a sequence of nodes
    Sequence(SequenceNode),
    /// Mapping node, storing key value node pairs
    Mapping(MappingNode),
}

impl Node
{
    pub fn scalar<S>(text: S, style: ScalarStyle) -> Self
    where
        S: Into<String>,
    {
        Node::Scalar(ScalarNode::new(text.into(), style))
    }

    /// The empty plain scalar standing in for omitted keys,
    /// values and entries
    pub fn empty() -> Self
    {
        Self::scalar(String::new(), ScalarStyle::Plain)
    }

    pub fn sequence(items: Vec<NodeIndex>) -> Self
    {
        Node::Sequence(SequenceNode::new(items))
    }

    pub fn mapping(entries: Vec<MappingEntry>) -> Self
    {
        Node::Mapping(MappingNode::new(entries))
    }

    pub fn kind(&self) -> NodeKind
    {
        match self
        {
            Node::Scalar(_) => NodeKind::Scalar,
            Node::Sequence(_) => NodeKind::Sequence,
            Node::Mapping(_) => NodeKind::Mapping,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind
{
    Scalar,
    Sequence,
    Mapping,
}

impl fmt::Display for NodeKind
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self
        {
            NodeKind::Scalar => f.write_str("scalar"),
            NodeKind::Sequence => f.write_str("sequence"),
            NodeKind::Mapping => f.write_str("mapping"),
        }
    }
}

/// Metadata stored alongside every [Node]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData
{
    property: Option<NodeProperty>,
    context:  NodeContext,
    mark:     NodeMark,
}

impl NodeData
{
    pub fn new(context: NodeContext, mark: NodeMark) -> Self
    {
        Self {
            property: None,
            context,
            mark,
        }
    }

    pub fn property(&self) -> Option<&NodeProperty>
    {
        self.property.as_ref()
    }

    pub fn context(&self) -> NodeContext
    {
        self.context
    }

    pub fn mark(&self) -> NodeMark
    {
        self.mark
    }

    pub(crate) fn set_property(&mut self, property: NodeProperty)
    {
        self.property = Some(property)
    }
}

/// The optional tag and anchor written before a node's
/// content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeProperty
{
    tag:    Option<Tag>,
    anchor: Option<String>,
}

impl NodeProperty
{
    pub fn new(tag: Option<Tag>, anchor: Option<String>) -> Self
    {
        Self { tag, anchor }
    }

    pub fn tag(&self) -> Option<&Tag>
    {
        self.tag.as_ref()
    }

    pub fn anchor(&self) -> Option<&str>
    {
        self.anchor.as_deref()
    }
}

/// A node's tag, as written in the source
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag
{
    /// !<uri>
    Verbatim(String),
    /// handle + suffix, e.g !!str or !local
    Shorthand
    {
        handle: TagHandle,
        suffix: String,
    },
    /// A lone !
    NonSpecific,
}

impl fmt::Display for Tag
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self
        {
            Tag::Verbatim(uri) => write!(f, "!<{}>", uri),
            Tag::Shorthand { handle, suffix } => write!(f, "{}{}", handle, suffix),
            Tag::NonSpecific => f.write_str("!"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TagHandle
{
    /// !
    Primary,
    /// !!
    Secondary,
    /// !name!
    Named(String),
}

impl fmt::Display for TagHandle
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self
        {
            TagHandle::Primary => f.write_str("!"),
            TagHandle::Secondary => f.write_str("!!"),
            TagHandle::Named(name) => write!(f, "!{}!", name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeContext
{
    Block,
    Flow,
}

impl NodeContext
{
    pub const fn is_block(self) -> bool
    {
        matches!(self, Self::Block)
    }

    pub const fn is_flow(self) -> bool
    {
        !self.is_block()
    }
}

impl Default for NodeContext
{
    fn default() -> Self
    {
        Self::Block
    }
}

/// Start and end symbol indices of a node in its source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeMark
{
    start: usize,
    end:   usize,
}

impl NodeMark
{
    pub const fn new(start: usize, end: usize) -> Self
    {
        Self { start, end }
    }

    pub const fn start(&self) -> usize
    {
        self.start
    }

    pub const fn end(&self) -> usize
    {
        self.end
    }
}

impl From<(usize, usize)> for NodeMark
{
    fn from((start, end): (usize, usize)) -> Self
    {
        Self::new(start, end)
    }
}
