/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use crate::node::nodes::NodeIndex;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingNode
{
    entries: Vec<MappingEntry>,
}

impl MappingNode
{
    pub fn new(entries: Vec<MappingEntry>) -> Self
    {
        Self { entries }
    }

    /// Key value pairs, in insertion order
    pub fn entries(&self) -> &[MappingEntry]
    {
        &self.entries
    }
}

/// A single key value pair. Omitted keys or values are
/// stored as empty plain scalars, so both always exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MappingEntry
{
    key:   NodeIndex,
    value: NodeIndex,
}

impl MappingEntry
{
    pub fn new(key: NodeIndex, value: NodeIndex) -> Self
    {
        Self { key, value }
    }

    pub fn key(&self) -> NodeIndex
    {
        self.key
    }

    pub fn value(&self) -> NodeIndex
    {
        self.value
    }
}
