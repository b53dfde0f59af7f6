/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::mem;

use slotmap::{SecondaryMap, SlotMap};

use crate::node::{
    anchor::AnchorTable,
    nodes::{Node, NodeData, NodeIndex, NodeProperty},
};

/// Node storage of a single document
#[derive(Debug, Clone, Default)]
pub(crate) struct Storage
{
    nodes:     SlotMap<NodeIndex, Node>,
    node_data: SecondaryMap<NodeIndex, NodeData>,
}

impl Storage
{
    pub fn nodes(&self) -> &SlotMap<NodeIndex, Node>
    {
        &self.nodes
    }

    pub fn node_data(&self) -> &SecondaryMap<NodeIndex, NodeData>
    {
        &self.node_data
    }

    pub fn node_data_mut(&mut self) -> &mut SecondaryMap<NodeIndex, NodeData>
    {
        &mut self.node_data
    }

    pub fn insert(&mut self, node: Node, data: NodeData) -> NodeIndex
    {
        let id = self.nodes.insert(node);
        self.node_data.insert(id, data);

        id
    }

    pub fn remove(&mut self, id: NodeIndex)
    {
        self.nodes.remove(id);
        self.node_data.remove(id);
    }

    pub fn len(&self) -> usize
    {
        self.nodes.len()
    }
}

/// Builds the storage and anchor table of the document
/// currently being parsed.
///
/// Every insertion and anchor binding is journaled, so a
/// failed speculative parse can [`rollback`](#method.rollback)
/// everything it added.
#[derive(Debug, Default)]
pub(crate) struct Graph
{
    store:   Storage,
    anchors: AnchorTable,
    journal: Vec<JournalEntry>,
}

impl Graph
{
    /// Create a new, empty Graph
    pub fn new() -> Self
    {
        Self::default()
    }

    pub fn insert(&mut self, node: Node, data: NodeData) -> NodeIndex
    {
        let id = self.store.insert(node, data);
        self.journal.push(JournalEntry::Node(id));

        id
    }

    /// Attach .property to the node at .id
    pub fn set_property(&mut self, id: NodeIndex, property: NodeProperty)
    {
        if let Some(data) = self.store.node_data_mut().get_mut(id)
        {
            data.set_property(property)
        }
    }

    /// Bind .name to .id, returning the node it replaced
    pub fn bind(&mut self, name: String, id: NodeIndex) -> Option<NodeIndex>
    {
        let previous = self.anchors.bind(name.clone(), id);
        self.journal.push(JournalEntry::Anchor(name, previous));

        previous
    }

    pub fn anchored(&self, name: &str) -> Option<NodeIndex>
    {
        self.anchors.get(name)
    }

    pub fn mark(&self) -> Mark
    {
        Mark(self.journal.len())
    }

    /// Remove every node and anchor binding added after
    /// .mark, newest first
    pub fn rollback(&mut self, mark: Mark)
    {
        while self.journal.len() > mark.0
        {
            match self.journal.pop()
            {
                Some(JournalEntry::Node(id)) => self.store.remove(id),
                Some(JournalEntry::Anchor(name, previous)) => self.anchors.unbind(&name, previous),
                None => break,
            }
        }
    }

    /// Take the finished storage and anchors, leaving this
    /// Graph empty for the next document
    pub fn finish(&mut self) -> (Storage, AnchorTable)
    {
        self.journal.clear();

        (mem::take(&mut self.store), mem::take(&mut self.anchors))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize
    {
        self.store.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Mark(usize);

#[derive(Debug, Clone)]
enum JournalEntry
{
    Node(NodeIndex),
    Anchor(String, Option<NodeIndex>),
}

#[cfg(test)]
mod tests
{
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::node::nodes::{NodeContext, NodeMark, ScalarStyle};

    fn scalar(graph: &mut Graph, text: &str) -> NodeIndex
    {
        graph.insert(
            Node::scalar(text, ScalarStyle::Plain),
            NodeData::new(NodeContext::Block, NodeMark::new(0, 0)),
        )
    }

    #[test]
    fn rollback_removes_nodes()
    {
        let mut graph = Graph::new();

        scalar(&mut graph, "kept");
        let mark = graph.mark();
        scalar(&mut graph, "dropped");
        scalar(&mut graph, "dropped");

        graph.rollback(mark);

        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn rollback_restores_anchors()
    {
        let mut graph = Graph::new();

        let first = scalar(&mut graph, "first");
        graph.bind("a".into(), first);

        let mark = graph.mark();
        let second = scalar(&mut graph, "second");
        assert_eq!(graph.bind("a".into(), second), Some(first));
        let other = scalar(&mut graph, "other");
        graph.bind("b".into(), other);

        graph.rollback(mark);

        assert_eq!(graph.anchored("a"), Some(first));
        assert_eq!(graph.anchored("b"), None);
    }

    #[test]
    fn finish_leaves_empty()
    {
        let mut graph = Graph::new();

        let id = scalar(&mut graph, "x");
        graph.bind("x".into(), id);

        let (store, anchors) = graph.finish();

        assert_eq!(store.len(), 1);
        assert_eq!(anchors.get("x"), Some(id));
        assert_eq!(graph.len(), 0);
        assert_eq!(graph.anchored("x"), None);
    }
}
