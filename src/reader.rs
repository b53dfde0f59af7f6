/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Entry points that read a YAML source from a file or an
//! arbitrary byte stream before parsing it.
//!
//! The source is read in full and must be valid UTF8. Any
//! IO or encoding failure surfaces as an
//! [`Error`](crate::Error) classified as
//! [`Category::IO`](crate::Category::IO).

use std::{fs::File, io, path::Path, str};

use tracing::trace;

use crate::{
    error::{internal, Result},
    flag::{Flags, O_ZEROED},
    node::Stream,
    parser::parse_with,
};

const DEFAULT_BUFFER_SIZE: usize = 8 * 1024;

/// Read and parse the YAML file at .path with the default
/// options
pub fn load<P>(path: P) -> Result<Stream>
where
    P: AsRef<Path>,
{
    load_with(path, O_ZEROED)
}

/// Read and parse the YAML file at .path, using .opts to
/// control parser policy
pub fn load_with<P>(path: P, opts: Flags) -> Result<Stream>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    trace!(path = %path.display(), "opening YAML file");

    let file = File::open(path).map_err(source_error)?;

    from_reader(file, opts)
}

/// Read .src to its end and parse the YAML it holds
pub fn from_reader<R>(mut src: R, opts: Flags) -> Result<Stream>
where
    R: io::Read,
{
    let mut buffer = Vec::with_capacity(DEFAULT_BUFFER_SIZE);

    src.read_to_end(&mut buffer).map_err(source_error)?;
    trace!(bytes = buffer.len(), "read YAML source");

    let text = str::from_utf8(&buffer).map_err(source_error)?;

    parse_with(text, opts)
}

fn source_error<E>(err: E) -> crate::Error
where
    E: Into<internal::SourceError>,
{
    internal::Error::new(err.into()).into()
}
