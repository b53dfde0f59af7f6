/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use crate::node::nodes::TagHandle;

/// A % line preceding an explicit document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive
{
    /// %YAML major.minor
    Yaml(Version),
    /// %TAG handle prefix
    Tag
    {
        handle: TagHandle,
        prefix: TagPrefix,
    },
    /// Any other %NAME, with its space separated parameters
    Reserved
    {
        name:       String,
        parameters: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version
{
    pub major: u8,
    pub minor: u8,
}

impl fmt::Display for Version
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// The prefix a %TAG handle expands to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TagPrefix
{
    /// A prefix beginning with !, stored without it
    Local(String),
    Global(String),
}

impl TagPrefix
{
    /// The prefix as it is prepended to a tag suffix
    pub fn expand(&self, suffix: &str) -> String
    {
        match self
        {
            TagPrefix::Local(prefix) => format!("!{}{}", prefix, suffix),
            TagPrefix::Global(prefix) => format!("{}{}", prefix, suffix),
        }
    }
}
