/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! This module contains the various macros used by
//! lib/parser.

/// Ordered choice: try each .production against .parser in
/// turn, returning the first result that is not a NoMatch.
///
/// Every production runs under Parser::attempt, so a failed
/// alternative leaves no trace on the position, indentation
/// or document. The alternatives share a ledger window,
/// which is dropped if any of them succeeds.
///
/// Variants
///     /1 .parser => .production [, .production ..]
macro_rules! alt {
    ($parser:expr => $( $production:expr ),+ $(,)? ) => {{
        let parser = &mut *$parser;
        let mut result = Err($crate::parser::error::ParseError::NoMatch);

        parser.ledger.open();
        $(
            if matches!(result, Err($crate::parser::error::ParseError::NoMatch))
            {
                result = parser.attempt($production);
            }
        )+
        parser.ledger.close(result.is_ok());

        result
    }};
}

/// Check if the symbol under the parser (@ .offset) matches
/// the given .pattern
///
/// Variants
///     /1 .parser => .pattern := /2 .parser, 0 => .pattern
///     /2 .parser, .offset => .pattern
macro_rules! check {
    ($parser:expr $(, $offset:expr )? => $( $match:pat )|+ ) => {
        matches!($parser.peek_at(0 $( + $offset )?), Some($( $match )|+))
    };
}
