/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Options controlling parser policy, see each O_ variant
//! for an explanation of how each works.

use bitflags::bitflags;

/// An empty, zeroed flag set. This is the default set, with
/// all other flags disabled.
pub const O_ZEROED: Flags = Flags::empty();
/// Reject documents that bind the same anchor name more
/// than once.
///
/// By default a later anchor silently replaces an earlier
/// one of the same name, and aliases after it resolve to
/// the newer node. If this flag is set the Parser instead
/// halts with a duplicate anchor error.
pub const O_STRICT_ANCHORS: Flags = Flags::STRICT_ANCHORS;
/// Use "\r\n" as the terminator a clipped block scalar
/// receives when its content captured no line break at
/// all.
///
/// Without this flag the terminator is "\n". The platform
/// is never consulted.
pub const O_CLIP_CRLF: Flags = Flags::CLIP_CRLF;

bitflags! {
    /// Directives controlling various behaviors of the Parser,
    /// see each O_ variant for an explanation of how each works
    #[derive(Default)]
    pub struct Flags: u32 {
        const STRICT_ANCHORS = 0b00000001;
        const CLIP_CRLF      = 0b00000010;
    }
}

impl Flags
{
    /// The terminator a clipped block scalar gets when it
    /// captured no line break
    pub(crate) fn clip_default(self) -> &'static str
    {
        match self.contains(O_CLIP_CRLF)
        {
            true => "\r\n",
            false => "\n",
        }
    }
}
