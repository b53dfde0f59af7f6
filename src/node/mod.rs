/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The generic tree a YAML stream is parsed into.
//!
//! A [Stream] holds [Document]s in source order. Each
//! document owns the storage of its nodes, which refer to
//! each other by [NodeIndex]. Walk a document from
//! [Document::root] with the borrowed [NodeRef] view.

use std::{iter::FusedIterator, slice};

pub(crate) use self::{
    anchor::AnchorTable,
    graph::{Graph, Mark},
};
pub use self::{
    directive::{Directive, TagPrefix, Version},
    nodes::{
        BlockScalarModifier, Chomping, MappingEntry, MappingNode, Node, NodeContext, NodeData,
        NodeIndex, NodeKind, NodeMark, NodeProperty, ScalarNode, ScalarStyle, SequenceNode, Tag,
        TagHandle,
    },
};
use self::graph::Storage;

mod anchor;
mod directive;
mod graph;
mod nodes;

/// The YAML stream, every document in file order
#[derive(Debug, Clone, Default)]
pub struct Stream
{
    documents: Vec<Document>,
}

impl Stream
{
    pub(crate) fn new(documents: Vec<Document>) -> Self
    {
        Self { documents }
    }

    pub fn documents(&self) -> &[Document]
    {
        &self.documents
    }

    pub fn len(&self) -> usize
    {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.documents.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Document>
    {
        self.documents.iter()
    }

    pub fn into_documents(self) -> Vec<Document>
    {
        self.documents
    }
}

impl<'a> IntoIterator for &'a Stream
{
    type Item = &'a Document;
    type IntoIter = slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.iter()
    }
}

impl IntoIterator for Stream
{
    type Item = Document;
    type IntoIter = std::vec::IntoIter<Document>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.documents.into_iter()
    }
}

/// A single document: its directives, its root node and
/// the storage every node of the document lives in
#[derive(Debug, Clone)]
pub struct Document
{
    directives: Vec<Directive>,
    root:       NodeIndex,
    store:      Storage,
    anchors:    AnchorTable,
}

impl Document
{
    pub(crate) fn new(
        directives: Vec<Directive>,
        root: NodeIndex,
        store: Storage,
        anchors: AnchorTable,
    ) -> Self
    {
        Self {
            directives,
            root,
            store,
            anchors,
        }
    }

    /// The document's root node
    pub fn root(&self) -> NodeRef<'_>
    {
        NodeRef {
            document: self,
            index:    self.root,
        }
    }

    /// Look up a node by its .index, returning None if the
    /// index did not come from this document
    pub fn node(&self, index: NodeIndex) -> Option<NodeRef<'_>>
    {
        self.store.nodes().get(index).map(|_| NodeRef {
            document: self,
            index,
        })
    }

    /// The node the anchor .name was bound to, the last
    /// binding winning if the name was used more than once
    pub fn anchored(&self, name: &str) -> Option<NodeRef<'_>>
    {
        self.anchors.get(name).and_then(|index| self.node(index))
    }

    /// Every anchor name bound in this document, in no
    /// particular order
    pub fn anchors(&self) -> impl Iterator<Item = &str>
    {
        self.anchors.names()
    }

    pub fn directives(&self) -> &[Directive]
    {
        &self.directives
    }

    /// The version declared by a %YAML directive, if any
    pub fn version(&self) -> Option<Version>
    {
        self.directives.iter().find_map(|directive| match directive
        {
            Directive::Yaml(version) => Some(*version),
            _ => None,
        })
    }

    /// Number of distinct nodes in the document. Aliased
    /// nodes are counted once.
    pub fn node_count(&self) -> usize
    {
        self.store.len()
    }

    /// Expand .tag into its full form.
    ///
    /// Shorthand tags use this document's %TAG directives
    /// first, then the default handles: "!" expands to "!"
    /// and "!!" to "tag:yaml.org,2002:". Verbatim tags are
    /// returned as is. Returns None for the non specific
    /// tag, or a named handle without a %TAG directive.
    pub fn resolve_tag(&self, tag: &Tag) -> Option<String>
    {
        match tag
        {
            Tag::Verbatim(uri) => Some(uri.clone()),
            Tag::NonSpecific => None,
            Tag::Shorthand { handle, suffix } =>
            {
                let declared = self.directives.iter().find_map(|directive| match directive
                {
                    Directive::Tag { handle: h, prefix } if h == handle => Some(prefix),
                    _ => None,
                });

                match (declared, handle)
                {
                    (Some(prefix), _) => Some(prefix.expand(suffix)),
                    (None, TagHandle::Primary) => Some(format!("!{}", suffix)),
                    (None, TagHandle::Secondary) => Some(format!("tag:yaml.org,2002:{}", suffix)),
                    (None, TagHandle::Named(_)) => None,
                }
            },
        }
    }

    fn get(&self, index: NodeIndex) -> Option<(&Node, &NodeData)>
    {
        let node = self.store.nodes().get(index)?;
        let data = self.store.node_data().get(index)?;

        Some((node, data))
    }
}

/// Borrowed view of a node inside its [Document]
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a>
{
    document: &'a Document,
    index:    NodeIndex,
}

impl<'a> NodeRef<'a>
{
    pub fn index(&self) -> NodeIndex
    {
        self.index
    }

    pub fn document(&self) -> &'a Document
    {
        self.document
    }

    /// The node this view refers to
    pub fn node(&self) -> Option<&'a Node>
    {
        self.document.get(self.index).map(|(node, _)| node)
    }

    pub fn data(&self) -> Option<&'a NodeData>
    {
        self.document.get(self.index).map(|(_, data)| data)
    }

    pub fn kind(&self) -> Option<NodeKind>
    {
        self.node().map(Node::kind)
    }

    pub fn is_scalar(&self) -> bool
    {
        self.kind() == Some(NodeKind::Scalar)
    }

    pub fn is_sequence(&self) -> bool
    {
        self.kind() == Some(NodeKind::Sequence)
    }

    pub fn is_mapping(&self) -> bool
    {
        self.kind() == Some(NodeKind::Mapping)
    }

    /// The decoded text, if this is a scalar
    pub fn as_str(&self) -> Option<&'a str>
    {
        match self.node()?
        {
            Node::Scalar(scalar) => Some(scalar.text()),
            _ => None,
        }
    }

    /// The scalar style, if this is a scalar
    pub fn style(&self) -> Option<ScalarStyle>
    {
        match self.node()?
        {
            Node::Scalar(scalar) => Some(scalar.style()),
            _ => None,
        }
    }

    /// Iterate a sequence's items, None if this is not a
    /// sequence
    pub fn items(&self) -> Option<Items<'a>>
    {
        match self.node()?
        {
            Node::Sequence(sequence) => Some(Items {
                document: self.document,
                inner:    sequence.items().iter(),
            }),
            _ => None,
        }
    }

    /// Iterate a mapping's (key, value) pairs in insertion
    /// order, None if this is not a mapping
    pub fn entries(&self) -> Option<Entries<'a>>
    {
        match self.node()?
        {
            Node::Mapping(mapping) => Some(Entries {
                document: self.document,
                inner:    mapping.entries().iter(),
            }),
            _ => None,
        }
    }

    /// Find the value of the first mapping entry whose key
    /// is a scalar equal to .key
    pub fn get(&self, key: &str) -> Option<NodeRef<'a>>
    {
        self.entries()?
            .find(|(k, _)| k.as_str() == Some(key))
            .map(|(_, value)| value)
    }

    /// Number of children: items of a sequence, entries of
    /// a mapping, or zero for a scalar
    pub fn len(&self) -> usize
    {
        match self.node()
        {
            Some(Node::Sequence(sequence)) => sequence.items().len(),
            Some(Node::Mapping(mapping)) => mapping.entries().len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }

    pub fn property(&self) -> Option<&'a NodeProperty>
    {
        self.data()?.property()
    }

    pub fn tag(&self) -> Option<&'a Tag>
    {
        self.property()?.tag()
    }

    pub fn anchor(&self) -> Option<&'a str>
    {
        self.property()?.anchor()
    }

    pub fn context(&self) -> Option<NodeContext>
    {
        self.data().map(NodeData::context)
    }

    pub fn mark(&self) -> Option<NodeMark>
    {
        self.data().map(NodeData::mark)
    }
}

impl PartialEq for NodeRef<'_>
{
    /// Two views are equal if they refer to the same node
    /// of the same document
    fn eq(&self, other: &Self) -> bool
    {
        std::ptr::eq(self.document, other.document) && self.index == other.index
    }
}

impl Eq for NodeRef<'_> {}

/// Iterator over a sequence's items, see [NodeRef::items]
#[derive(Debug, Clone)]
pub struct Items<'a>
{
    document: &'a Document,
    inner:    slice::Iter<'a, NodeIndex>,
}

impl<'a> Iterator for Items<'a>
{
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item>
    {
        let document = self.document;

        self.inner.next().map(|&index| NodeRef { document, index })
    }

    fn size_hint(&self) -> (usize, Option<usize>)
    {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Items<'_> {}
impl FusedIterator for Items<'_> {}

/// Iterator over a mapping's entries, see
/// [NodeRef::entries]
#[derive(Debug, Clone)]
pub struct Entries<'a>
{
    document: &'a Document,
    inner:    slice::Iter<'a, MappingEntry>,
}

impl<'a> Iterator for Entries<'a>
{
    type Item = (NodeRef<'a>, NodeRef<'a>);

    fn next(&mut self) -> Option<Self::Item>
    {
        let document = self.document;

        self.inner.next().map(|entry| {
            (
                NodeRef {
                    document,
                    index: entry.key(),
                },
                NodeRef {
                    document,
                    index: entry.value(),
                },
            )
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>)
    {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Entries<'_> {}
impl FusedIterator for Entries<'_> {}
