/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Conversions from parsed nodes into plain Rust
//! collections.

use std::collections::HashMap;

use tracing::trace;

use crate::{
    error::{
        internal::{self, ErrorCode},
        Result,
    },
    node::NodeRef,
};

/// Casing applied to each key by [to_numeric_map]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCase
{
    ForceUpper,
    ForceLower,
    Unchanged,
}

impl KeyCase
{
    fn apply(self, key: &str) -> String
    {
        match self
        {
            KeyCase::ForceUpper => key.to_uppercase(),
            KeyCase::ForceLower => key.to_lowercase(),
            KeyCase::Unchanged => key.to_owned(),
        }
    }
}

impl Default for KeyCase
{
    fn default() -> Self
    {
        KeyCase::Unchanged
    }
}

/// Convert the mapping at .node into a map of integers,
/// recasing each key according to .case.
///
/// Every value must be a scalar holding a decimal number.
/// Fractional values are rounded to the nearest integer,
/// with ties going to the even neighbour.
///
/// ## Errors
///
/// Fails if .node is not a mapping, if any key or value is
/// not a scalar, if a value is not a number or does not fit
/// an i32, or if two keys are equal once recased.
pub fn to_numeric_map(node: NodeRef<'_>, case: KeyCase) -> Result<HashMap<String, i32>>
{
    let entries = node.entries().ok_or_else(|| code(ErrorCode::NotAMapping))?;
    let mut map = HashMap::with_capacity(entries.len());

    for (key, value) in entries
    {
        let key = key.as_str().ok_or_else(|| code(ErrorCode::NotAScalar))?;
        let text = value.as_str().ok_or_else(|| code(ErrorCode::NotAScalar))?;

        let number = to_i32(text)?;
        let key = case.apply(key);

        trace!(key = %key, value = number, "converted mapping entry");

        if map.insert(key, number).is_some()
        {
            return Err(code(ErrorCode::DuplicateKey));
        }
    }

    Ok(map)
}

fn to_i32(text: &str) -> Result<i32>
{
    let value: f64 = text.trim().parse().map_err(|_| code(ErrorCode::NotANumber))?;

    if value.is_nan()
    {
        return Err(code(ErrorCode::NotANumber));
    }

    let rounded = round_half_even(value);

    if rounded < i32::MIN as f64 || rounded > i32::MAX as f64
    {
        return Err(code(ErrorCode::IntOverflow));
    }

    Ok(rounded as i32)
}

fn round_half_even(value: f64) -> f64
{
    match (value - value.trunc()).abs() == 0.5
    {
        true => 2.0 * (value / 2.0).round(),
        false => value.round(),
    }
}

fn code(code: ErrorCode) -> crate::Error
{
    internal::Error::new(code).into()
}
