/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::collections::HashMap;

use crate::node::nodes::NodeIndex;

/// Per document lookup of anchor names to the node they
/// were attached to. The table only refers into the
/// document's node storage, it never owns nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct AnchorTable
{
    anchors: HashMap<String, NodeIndex>,
}

impl AnchorTable
{
    /// Bind .name to .id, returning the node it was
    /// previously bound to, if any
    pub fn bind(&mut self, name: String, id: NodeIndex) -> Option<NodeIndex>
    {
        self.anchors.insert(name, id)
    }

    /// Undo a binding of .name, restoring .previous
    pub fn unbind(&mut self, name: &str, previous: Option<NodeIndex>)
    {
        match previous
        {
            Some(id) =>
            {
                if let Some(slot) = self.anchors.get_mut(name)
                {
                    *slot = id
                }
            },
            None =>
            {
                self.anchors.remove(name);
            },
        }
    }

    pub fn get(&self, name: &str) -> Option<NodeIndex>
    {
        self.anchors.get(name).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &str>
    {
        self.anchors.keys().map(String::as_str)
    }
}
