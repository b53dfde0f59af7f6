/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::num::NonZeroU8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarNode
{
    text:  String,
    style: ScalarStyle,
}

impl ScalarNode
{
    pub fn new(text: String, style: ScalarStyle) -> Self
    {
        Self { text, style }
    }

    /// The fully decoded content of this scalar
    pub fn text(&self) -> &str
    {
        &self.text
    }

    pub fn style(&self) -> ScalarStyle
    {
        self.style
    }
}

/// The presentation style a scalar was written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarStyle
{
    Plain,
    SingleQuote,
    DoubleQuote,
    Literal,
    Folded,
}

impl ScalarStyle
{
    pub const fn is_block(self) -> bool
    {
        matches!(self, Self::Literal | Self::Folded)
    }
}

/// The header of a block scalar, e.g the "2-" of "|2-"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockScalarModifier
{
    indent:   Option<NonZeroU8>,
    chomping: Chomping,
}

impl BlockScalarModifier
{
    pub fn new(indent: Option<NonZeroU8>, chomping: Chomping) -> Self
    {
        Self { indent, chomping }
    }

    /// The explicit indentation indicator (1-9), if any
    pub fn indent(&self) -> Option<NonZeroU8>
    {
        self.indent
    }

    pub fn chomping(&self) -> Chomping
    {
        self.chomping
    }
}

/// Policy for the line breaks trailing a block scalar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chomping
{
    /// Keep the first break only (default)
    Clip,
    /// Remove every trailing break, "-"
    Strip,
    /// Keep every trailing break, "+"
    Keep,
}

impl Default for Chomping
{
    fn default() -> Self
    {
        Self::Clip
    }
}
