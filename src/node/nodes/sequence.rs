/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use crate::node::nodes::NodeIndex;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceNode
{
    items: Vec<NodeIndex>,
}

impl SequenceNode
{
    pub fn new(items: Vec<NodeIndex>) -> Self
    {
        Self { items }
    }

    /// Child nodes, in source order. An aliased node may
    /// appear more than once.
    pub fn items(&self) -> &[NodeIndex]
    {
        &self.items
    }
}
