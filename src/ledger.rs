/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The error ledger records why speculative parses failed.
//!
//! Messages are only ever appended, and are removed in
//! bulk by truncating back to a previously taken
//! checkpoint. Windows are nested checkpoints used by
//! ordered choice: if any alternative matches, everything
//! the abandoned alternatives recorded is dropped.

use std::{borrow::Cow, fmt};

use crate::{
    cursor::Cursor,
    error::{internal::ErrorCode, Diagnostic, DiagnosticEntry},
};

#[derive(Debug, Clone, Default)]
pub(crate) struct Ledger
{
    entries: Vec<Entry>,
    windows: Vec<usize>,
}

impl Ledger
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Append .message, recorded at .at
    pub fn record<M>(&mut self, at: usize, message: M)
    where
        M: Into<Cow<'static, str>>,
    {
        self.entries.push(Entry {
            at,
            message: Message::Note(message.into()),
        })
    }

    /// Append "failed to parse .rule", recorded at .at
    pub fn record_rule(&mut self, at: usize, rule: &'static str)
    {
        self.entries.push(Entry {
            at,
            message: Message::Rule(rule),
        })
    }

    /// Take a checkpoint that can later be discarded to
    pub fn checkpoint(&self) -> Checkpoint
    {
        Checkpoint(self.entries.len())
    }

    /// Drop every message recorded after .checkpoint
    pub fn discard(&mut self, checkpoint: Checkpoint)
    {
        self.entries.truncate(checkpoint.0)
    }

    /// Drop the messages recorded after .checkpoint that
    /// got no further than .at
    ///
    /// Used when a speculative parse that started at .at is
    /// abandoned without failing its caller, keeping only
    /// what it learned past that point.
    pub fn prune(&mut self, checkpoint: Checkpoint, at: usize)
    {
        let start = checkpoint.0.min(self.entries.len());
        let mut tail = self.entries.split_off(start);

        tail.retain(|entry| entry.at > at);
        self.entries.append(&mut tail);
    }

    /// Open a new window at the current end of the ledger
    pub fn open(&mut self)
    {
        self.windows.push(self.entries.len())
    }

    /// Close the innermost window, dropping every message
    /// recorded inside it if it was .committed
    pub fn close(&mut self, committed: bool)
    {
        if let Some(start) = self.windows.pop()
        {
            if committed
            {
                self.entries.truncate(start)
            }
        }
    }

    pub fn len(&self) -> usize
    {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool
    {
        self.entries.is_empty()
    }

    /// Render every message into a diagnostic, resolving
    /// their positions against .cursor
    pub fn render(&self, cursor: &Cursor, cause: Option<ErrorCode>) -> Diagnostic
    {
        let entries = self
            .entries
            .iter()
            .map(|entry| DiagnosticEntry::new(entry.message.to_string(), cursor.location(entry.at)))
            .collect();

        Diagnostic::new(entries, cause)
    }
}

/// Opaque marker of a ledger length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Checkpoint(usize);

#[derive(Debug, Clone)]
struct Entry
{
    at:      usize,
    message: Message,
}

/// Rule failures are by far the most common message, and
/// are only formatted if the ledger is rendered
#[derive(Debug, Clone)]
enum Message
{
    Rule(&'static str),
    Note(Cow<'static, str>),
}

impl fmt::Display for Message
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self
        {
            Message::Rule(rule) => write!(f, "failed to parse {}", rule),
            Message::Note(note) => f.write_str(note),
        }
    }
}

#[cfg(test)]
mod tests
{
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn discard_truncates_to_checkpoint()
    {
        let mut ledger = Ledger::new();

        ledger.record(0, "kept");
        let checkpoint = ledger.checkpoint();
        ledger.record(1, "dropped");
        ledger.record(2, format!("also {}", "dropped"));

        ledger.discard(checkpoint);

        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn prune_keeps_progress()
    {
        let cursor = Cursor::new("key: value");
        let mut ledger = Ledger::new();

        ledger.record(0, "before");
        let checkpoint = ledger.checkpoint();
        ledger.record_rule(0, "comment");
        ledger.record(5, "deeper");
        ledger.record_rule(2, "inline comment");

        ledger.prune(checkpoint, 2);

        assert_eq!(
            ledger.render(&cursor, None).to_string(),
            "before, on line 1, column 1\ndeeper, on line 1, column 6"
        );
    }

    #[test]
    fn committed_window_drops_alternatives()
    {
        let mut ledger = Ledger::new();

        ledger.record(0, "before");
        ledger.open();
        ledger.record(1, "first alternative");
        ledger.open();
        ledger.record(2, "nested");
        ledger.close(false);
        ledger.close(true);

        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn failed_window_keeps_messages()
    {
        let mut ledger = Ledger::new();

        ledger.open();
        ledger.record(0, "first alternative");
        ledger.record(0, "second alternative");
        ledger.close(false);

        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn rule_messages()
    {
        let cursor = Cursor::new("[a, b");
        let mut ledger = Ledger::new();

        ledger.record_rule(5, "flow sequence");

        let diagnostic = ledger.render(&cursor, None);

        assert_eq!(diagnostic.to_string(), "failed to parse flow sequence, on line 1, column 6");
    }

    #[test]
    fn render_resolves_positions()
    {
        let cursor = Cursor::new("a: 1\nb: *x");
        let mut ledger = Ledger::new();

        ledger.record(8, "x is not anchored");

        let diagnostic = ledger.render(&cursor, None);

        assert_eq!(diagnostic.to_string(), "x is not anchored, on line 2, column 4");
    }

    #[test]
    fn close_without_window_is_noop()
    {
        let mut ledger = Ledger::new();

        ledger.record(0, "only");
        ledger.close(true);

        assert!(!ledger.is_empty());
    }
}
