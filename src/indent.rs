/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Tracks the indentation a block node requires.
//!
//! The tracker holds the current indent, a stack of saved
//! indents and whether the next indentation match should
//! auto detect any extra spaces. Every push has a matching
//! pop; the parser wraps them in scoped helpers so this
//! holds on every exit path.

use std::num::NonZeroU8;

/// A wrapper around usize, that allows it us to express the
/// "-1"nth indent without needing to use a signed type.
/// This occurs when we have not yet entered the root node
/// of a document, in which case we don't really have an
/// indent so to speak, hence the "-1"nth-ness
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Indent(Option<usize>);

impl Indent
{
    pub const START: Indent = Indent(None);

    /// The number of spaces this indent requires
    pub fn spaces(self) -> usize
    {
        self.0.unwrap_or(0)
    }

    /// The indent one level deeper than this one
    fn next(self) -> Self
    {
        Self(Some(self.0.map_or(0, |indent| indent + 1)))
    }
}

impl From<usize> for Indent
{
    fn from(indent: usize) -> Self
    {
        Self(Some(indent))
    }
}

impl PartialEq<usize> for Indent
{
    fn eq(&self, other: &usize) -> bool
    {
        match self.0
        {
            Some(ref indent) => indent == other,
            None => false,
        }
    }
}

/// Stack entry for tracking indentation levels, and
/// associated metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct IndentEntry
{
    indent: Indent,

    /// Whether auto detection was armed when this entry
    /// was saved, restored alongside the indent
    detect: bool,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct IndentTracker
{
    current: Indent,
    stack:   Vec<IndentEntry>,
    detect:  bool,
}

impl IndentTracker
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Reset the tracker to its starting state, typically
    /// this should be used when starting a document
    pub fn reset(&mut self)
    {
        self.current = Indent::START;
        self.stack.clear();
        self.detect = false;
    }

    #[cfg(test)]
    pub fn current(&self) -> Indent
    {
        self.current
    }

    /// Number of spaces an indentation match must consume
    pub fn required(&self) -> usize
    {
        self.current.spaces()
    }

    /// Is the next indentation match detecting extra spaces
    pub fn detecting(&self) -> bool
    {
        self.detect
    }

    /// Save the current indent without modifying it
    pub fn remember(&mut self)
    {
        self.stack.push(IndentEntry {
            indent: self.current,
            detect: self.detect,
        })
    }

    /// Enter a nested block collection: one level deeper,
    /// with detection armed
    pub fn increase(&mut self)
    {
        self.remember();
        self.current = self.current.next();
        self.detect = true;
    }

    /// Mandatory indentation for a block scalar at the top
    /// level: one level deeper only if the current indent
    /// is zero, with detection armed
    pub fn increase_if_zero(&mut self)
    {
        self.remember();
        if self.current == 0
        {
            self.current = 1.into();
        }
        self.detect = true;
    }

    /// Set up the indent of a block scalar's content.
    ///
    /// An explicit .indicator is relative to the parent
    /// node's indent, which is one below the current level,
    /// and fixes the indent outright. Without an indicator
    /// this behaves as [`increase_if_zero`](#method.increase_if_zero).
    ///
    /// Adding .indicator to the current level instead, with
    /// detection left armed, would over indent the content
    /// by one and is intentionally not done here.
    pub fn add_block_indent(&mut self, indicator: Option<NonZeroU8>)
    {
        match indicator
        {
            Some(indicator) =>
            {
                self.remember();
                self.current = (self.required().saturating_sub(1) + indicator.get() as usize).into();
                self.detect = false;
            },
            None => self.increase_if_zero(),
        }
    }

    /// Leave the level entered by the matching push,
    /// restoring both its indent and detection state
    pub fn decrease(&mut self)
    {
        if let Some(entry) = self.stack.pop()
        {
            self.current = entry.indent;
            self.detect = entry.detect;
        }
    }

    /// Accept .extra detected spaces on top of the current
    /// indent, disarming detection
    pub fn adopt(&mut self, extra: usize)
    {
        self.current = (self.required() + extra).into();
        self.detect = false;
    }

    /// Count one consumed separation space as indentation,
    /// used by compact collection entries which fix their
    /// own indent
    pub fn widen(&mut self)
    {
        self.current = self.current.next();
        self.detect = false;
    }

    pub fn disarm(&mut self)
    {
        self.detect = false;
    }

    /// Capture the tracker's state for a later rewind
    pub fn snapshot(&self) -> Snapshot
    {
        Snapshot {
            current: self.current,
            detect:  self.detect,
            depth:   self.stack.len(),
        }
    }

    /// Return to the state captured by .snapshot
    pub fn rewind(&mut self, snapshot: Snapshot)
    {
        self.current = snapshot.current;
        self.detect = snapshot.detect;
        self.stack.truncate(snapshot.depth);
    }

    #[cfg(test)]
    pub fn depth(&self) -> usize
    {
        self.stack.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Snapshot
{
    current: Indent,
    detect:  bool,
    depth:   usize,
}
