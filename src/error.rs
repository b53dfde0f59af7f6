/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::{error::Error as StdError, fmt};

use crate::cursor::Location;

/// Result typedef used throughout this library's public API
pub type Result<T> = std::result::Result<T, Error>;

/// Opaque type representing all possible errors which can
/// occur during library usage.
pub struct Error
{
    inner: Box<internal::Error>,
}

impl Error
{
    /// The line at which the error occurred.
    pub fn line(&self) -> u64
    {
        self.inner.line
    }

    /// The column into the line where the error occurred.
    pub fn column(&self) -> u64
    {
        self.inner.column
    }

    /// The symbol index into the source at which the error
    /// occurred.
    pub fn at(&self) -> u64
    {
        self.inner.at
    }

    /// Categorize the error into one of the following:
    ///
    /// - [`Category::Syntax`] The YAML stream was
    ///   syntactically invalid
    /// - [`Category::Data`] The YAML stream contained data
    ///   that could not be converted
    /// - [`Category::IO`] The underlying byte stream
    ///   surfaced an error while doing IO
    /// - [`Category::EOF`] The YAML stream ended
    ///   unexpectedly
    pub fn classify(&self) -> Category
    {
        self.inner.classify()
    }

    /// Checks whether this error was contextualized.
    ///
    /// If this method returns false then the methods
    ///
    /// - [`at()`](#method.at)
    /// - [`column()`](#method.column)
    /// - [`line()`](#method.line)
    ///
    /// will return meaningless values.
    pub fn has_context(&self) -> bool
    {
        self.inner.has_context()
    }

    /// The aggregated parse diagnostic, if this error was
    /// produced by rejecting a YAML stream.
    pub fn diagnostic(&self) -> Option<&Diagnostic>
    {
        match self.inner.kind
        {
            internal::ErrorKind::Parse(ref diagnostic) => Some(diagnostic),
            _ => None,
        }
    }

    /// Boxes the internal error, returning new public error
    /// type
    pub(crate) fn new(err: internal::Error) -> Self
    {
        Self {
            inner: Box::new(err),
        }
    }
}

impl fmt::Debug for Error
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl fmt::Display for Error
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl StdError for Error
{
    fn source(&self) -> Option<&(dyn StdError + 'static)>
    {
        self.inner.source()
    }
}

/// Rough category of an [`Error`].
///
/// Useful for making decisions upon encountering an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category
{
    /// The underlying byte stream returned an error while
    /// attempting IO
    IO,

    /// The YAML stream was not syntactically valid
    Syntax,

    /// There was an issue with the data contained in the
    /// YAML stream (e.g: a value was not a number)
    Data,

    /// The YAML stream unexpectedly terminated before it
    /// was appropriate to do so
    EOF,
}

/// Every message retained by the parser when it rejected a
/// YAML stream, in the order they were recorded.
///
/// Its [`Display`](fmt::Display) implementation renders one
/// line per message, each annotated with its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic
{
    entries: Vec<DiagnosticEntry>,
    cause:   Option<internal::ErrorCode>,
}

impl Diagnostic
{
    pub(crate) fn new(entries: Vec<DiagnosticEntry>, cause: Option<internal::ErrorCode>)
        -> Self
    {
        Self { entries, cause }
    }

    /// The retained messages
    pub fn entries(&self) -> &[DiagnosticEntry]
    {
        &self.entries
    }

    pub fn len(&self) -> usize
    {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.entries.is_empty()
    }

    /// The message recorded furthest into the source, which
    /// is usually the most relevant one. Ties go to the
    /// latest recorded message.
    pub fn furthest(&self) -> Option<&DiagnosticEntry>
    {
        self.entries
            .iter()
            .rev()
            .max_by_key(|entry| entry.location.index)
    }

    /// Check whether any retained message contains .needle
    pub fn mentions(&self, needle: &str) -> bool
    {
        self.entries
            .iter()
            .any(|entry| entry.message.contains(needle))
    }

    pub(crate) fn cause(&self) -> Option<internal::ErrorCode>
    {
        self.cause
    }
}

impl fmt::Display for Diagnostic
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        for (i, entry) in self.entries.iter().enumerate()
        {
            if i > 0
            {
                f.write_str("\n")?;
            }

            fmt::Display::fmt(entry, f)?;
        }

        Ok(())
    }
}

/// A single positioned message of a [`Diagnostic`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEntry
{
    message:  String,
    location: Location,
}

impl DiagnosticEntry
{
    pub(crate) fn new(message: String, location: Location) -> Self
    {
        Self { message, location }
    }

    pub fn message(&self) -> &str
    {
        &self.message
    }

    pub fn location(&self) -> Location
    {
        self.location
    }
}

impl fmt::Display for DiagnosticEntry
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(
            f,
            "{}, on line {}, column {}",
            self.message, self.location.line, self.location.column
        )
    }
}

pub(crate) mod internal
{
    use std::{error::Error as StdError, fmt, io, str::Utf8Error};

    use super::{Category, Diagnostic};

    /// Internal error representation used throughout the
    /// library.
    ///
    /// Contains enough metadata about the position of the
    /// error that we can contextualize it later
    pub(crate) struct Error
    {
        /// Error variant encountered
        pub kind:   ErrorKind,
        /// Symbol index in the source that the error
        /// occurred
        pub at:     u64,
        /// Line number of the error
        pub line:   u64,
        /// Offset into current line the error occurred at
        pub column: u64,
    }

    impl Error
    {
        /// Create a new, contextless [`Error`].
        ///
        /// Care should be taken to later apply context, if
        /// at all possible.
        pub fn new<T>(err: T) -> Self
        where
            T: Into<ErrorKind>,
        {
            Self::with_context(err, 0, 0, 0)
        }

        /// Create a new, contextualized [`Error`].
        pub fn with_context<T>(err: T, at: u64, line: u64, column: u64) -> Self
        where
            T: Into<ErrorKind>,
        {
            let kind = err.into();

            Self {
                kind,
                at,
                line,
                column,
            }
        }

        /// Create an error from a rejected stream's
        /// diagnostic, taking context from its furthest
        /// message
        pub fn rejected(diagnostic: Diagnostic) -> Self
        {
            let location = diagnostic.furthest().map(|entry| entry.location());

            let mut this = Self::new(diagnostic);

            if let Some(location) = location
            {
                this.context(
                    location.index as u64,
                    location.line as u64,
                    location.column as u64,
                );
            }

            this
        }

        /// Add context to this error, replacing the
        /// existing context (if any exists).
        pub fn context(&mut self, at: u64, line: u64, column: u64) -> &mut Self
        {
            self.at = at;
            self.line = line;
            self.column = column;

            self
        }

        /// Checks whether this error is contextualized
        pub fn has_context(&self) -> bool
        {
            // Only errors created without context will have a line
            // number of 0
            self.line != 0
        }

        /// Categorize this error
        pub fn classify(&self) -> Category
        {
            Into::into(&self.kind)
        }
    }

    /// Unified wrapper around the actual error variants we
    /// can produce
    #[derive(Debug)]
    pub(crate) enum ErrorKind
    {
        Code(ErrorCode),
        Source(SourceError),
        Parse(Diagnostic),
    }

    /// Lightweight errors, specific to this library.
    ///
    /// This enum should never be polluted with large
    /// variants, or wrap underlying errors. Use
    /// [`SourceError`] for those.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub(crate) enum ErrorCode
    {
        /*
         * ==== Grammar Errors ====
         */
        /// Got end of stream while parsing an escape
        /// sequence
        UnexpectedEOF,

        /// An alias referenced an anchor that was not
        /// defined earlier in the document.
        ///
        /// ## Examples
        ///
        /// ```yaml
        /// key: *missing
        /// #    ^^^^^^^^ UnknownAnchor
        /// ```
        UnknownAnchor,

        /// An anchor name was bound twice in a single
        /// document, only reported if the parser was asked
        /// to be strict about anchors.
        ///
        /// ## Examples
        ///
        /// ```yaml
        /// first:  &anchor 1
        /// second: &anchor 2
        /// #       ^^^^^^^ DuplicateAnchor
        /// ```
        DuplicateAnchor,

        /// A character that was not valid for the escape
        /// sequence was encountered
        ///
        /// ## Examples
        ///
        /// ```yaml
        /// key: "\q"
        /// #      ^ UnknownEscape
        /// ```
        UnknownEscape,

        /// A \u escape did not name a valid unicode scalar
        /// value
        ///
        /// ## Examples
        ///
        /// ```yaml
        /// key: "\uD800"
        /// #     ^^^^^^ InvalidCodepoint
        /// ```
        InvalidCodepoint,

        /// A %YAML directive major or minor version was not
        /// a valid integer
        InvalidVersion,

        /// More than one `%YAML` directive was found inside
        /// a single document's context.
        ///
        /// ## Examples
        ///
        /// ```yaml
        /// %YAML 1.2
        /// %YAML 1.2
        /// #^^^^^^^^ DuplicateVersion
        /// ---
        /// ```
        DuplicateVersion,

        /// More than one `%TAG` directive was found _for
        /// the same handle_ inside a single
        /// document's context.
        ///
        /// ## Examples
        ///
        /// ```yaml
        /// %TAG !handle! my:custom:tag/
        /// %TAG !handle! my:other:tag/
        /// #    ^^^^^^^^ DuplicateTagDirective
        /// ---
        /// ```
        DuplicateTagDirective,

        /*
         * ==== Conversion Errors ====
         */
        /// A node that must be a mapping was not
        NotAMapping,

        /// A mapping key or value that must be a scalar
        /// was not
        NotAScalar,

        /// A scalar that must be numeric could not be
        /// parsed as a number
        NotANumber,

        /// A number did not fit in the requested integer
        IntOverflow,

        /// Two mapping keys collided once their case was
        /// normalized
        DuplicateKey,
    }

    /// Heavy and/or external errors that can occur during
    /// library usage
    #[derive(Debug)]
    pub(crate) enum SourceError
    {
        /// Catch all wrapper for any underlying IO errors
        /// reported to us
        IO(io::Error),

        /// Encountered invalid an UTF8 sequence
        UTF8(Utf8Error),
    }

    impl fmt::Debug for Error
    {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
        {
            let mut this = f.debug_struct("Error");

            this.field("kind", &self.kind);

            if self.has_context()
            {
                this.field("line", &self.line)
                    .field("column", &self.column)
                    .field("index", &self.at);
            }

            this.finish()
        }
    }

    impl fmt::Display for Error
    {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
        {
            use fmt::Display;

            match self.kind
            {
                // Diagnostics carry their own positions
                ErrorKind::Parse(ref diagnostic) => Display::fmt(diagnostic, f),
                ref kind if self.has_context() => f.write_fmt(format_args!(
                    "{}, on line {}, column {}, at index {}",
                    kind, self.line, self.column, self.at
                )),
                ref kind => Display::fmt(kind, f),
            }
        }
    }

    impl StdError for Error
    {
        fn source(&self) -> Option<&(dyn StdError + 'static)>
        {
            match self.kind
            {
                ErrorKind::Source(SourceError::IO(ref e)) => Some(e),
                ErrorKind::Source(SourceError::UTF8(ref e)) => Some(e),
                _ => None,
            }
        }
    }

    impl From<Error> for super::Error
    {
        fn from(err: Error) -> Self
        {
            Self::new(err)
        }
    }

    impl<T> From<T> for Error
    where
        T: Into<ErrorKind>,
    {
        fn from(t: T) -> Self
        {
            Error::new(t.into())
        }
    }

    impl From<&'_ ErrorKind> for Category
    {
        fn from(kind: &'_ ErrorKind) -> Self
        {
            match kind
            {
                ErrorKind::Code(e) => e.into(),
                ErrorKind::Source(e) => e.into(),
                ErrorKind::Parse(d) => d.cause().map_or(Category::Syntax, Into::into),
            }
        }
    }

    impl fmt::Display for ErrorKind
    {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
        {
            match self
            {
                ErrorKind::Code(ref e) => fmt::Display::fmt(e, f),
                ErrorKind::Source(ref e) => fmt::Display::fmt(e, f),
                ErrorKind::Parse(ref d) => fmt::Display::fmt(d, f),
            }
        }
    }

    impl From<ErrorCode> for ErrorKind
    {
        fn from(e: ErrorCode) -> Self
        {
            ErrorKind::Code(e)
        }
    }

    impl From<SourceError> for ErrorKind
    {
        fn from(e: SourceError) -> Self
        {
            ErrorKind::Source(e)
        }
    }

    impl From<Diagnostic> for ErrorKind
    {
        fn from(d: Diagnostic) -> Self
        {
            ErrorKind::Parse(d)
        }
    }

    impl From<io::Error> for SourceError
    {
        fn from(e: io::Error) -> Self
        {
            SourceError::IO(e)
        }
    }

    impl From<Utf8Error> for SourceError
    {
        fn from(e: Utf8Error) -> Self
        {
            SourceError::UTF8(e)
        }
    }

    impl From<ErrorCode> for Category
    {
        fn from(code: ErrorCode) -> Self
        {
            use ErrorCode::*;

            match code
            {
                UnknownAnchor
                | DuplicateAnchor
                | UnknownEscape
                | InvalidCodepoint
                | InvalidVersion
                | DuplicateVersion
                | DuplicateTagDirective => Category::Syntax,

                NotAMapping | NotAScalar | NotANumber | IntOverflow | DuplicateKey =>
                {
                    Category::Data
                },

                UnexpectedEOF => Category::EOF,
            }
        }
    }

    impl From<&'_ ErrorCode> for Category
    {
        fn from(code: &'_ ErrorCode) -> Self
        {
            From::from(*code)
        }
    }

    impl From<&'_ SourceError> for Category
    {
        fn from(_: &'_ SourceError) -> Self
        {
            Category::IO
        }
    }

    impl fmt::Display for ErrorCode
    {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
        {
            use ErrorCode::*;

            match self
            {
                UnexpectedEOF => f.write_str("unexpected EOF"),
                UnknownAnchor => f.write_str("alias refers to an undefined anchor"),
                DuplicateAnchor => f.write_str("anchor was defined twice in a document"),
                UnknownEscape => f.write_str("unknown escape sequence"),
                InvalidCodepoint => f.write_str("escape sequence is not a unicode scalar value"),
                InvalidVersion => f.write_str("%YAML directive is invalid"),
                DuplicateVersion => f.write_str("duplicate %YAML directive found in a document"),
                DuplicateTagDirective =>
                {
                    f.write_str("duplicate %TAG directive for a handle found in a document")
                },
                NotAMapping => f.write_str("node is not a mapping"),
                NotAScalar => f.write_str("node is not a scalar"),
                NotANumber => f.write_str("scalar is not a number"),
                IntOverflow => f.write_str("integer overflow while converting"),
                DuplicateKey => f.write_str("duplicate mapping key after case conversion"),
            }
        }
    }

    impl fmt::Display for SourceError
    {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
        {
            match self
            {
                SourceError::IO(ref e) => fmt::Display::fmt(e, f),
                SourceError::UTF8(ref e) => fmt::Display::fmt(e, f),
            }
        }
    }
}

#[cfg(test)]
mod tests
{
    use pretty_assertions::assert_eq;

    use super::{
        internal::{Error as InternalError, ErrorCode},
        *,
    };

    #[test]
    fn diagnostic_display_one_line_per_entry()
    {
        let diagnostic = Diagnostic::new(
            vec![
                DiagnosticEntry::new("failed to parse block mapping".into(), loc(0, 1, 1)),
                DiagnosticEntry::new("foo is not anchored".into(), loc(7, 2, 3)),
            ],
            Some(ErrorCode::UnknownAnchor),
        );

        assert_eq!(
            diagnostic.to_string(),
            "failed to parse block mapping, on line 1, column 1\nfoo is not anchored, on line \
             2, column 3"
        );
    }

    #[test]
    fn rejected_error_takes_furthest_context()
    {
        let diagnostic = Diagnostic::new(
            vec![
                DiagnosticEntry::new("deep".into(), loc(12, 3, 2)),
                DiagnosticEntry::new("shallow".into(), loc(4, 1, 5)),
            ],
            None,
        );
        let error = Error::from(InternalError::rejected(diagnostic));

        assert!(error.has_context());
        assert_eq!((error.at(), error.line(), error.column()), (12, 3, 2));
        assert_eq!(error.classify(), Category::Syntax);
        assert!(error.diagnostic().map_or(false, |d| d.mentions("deep")));
    }

    #[test]
    fn code_classification()
    {
        let data = &[
            (ErrorCode::UnknownAnchor, Category::Syntax),
            (ErrorCode::NotANumber, Category::Data),
            (ErrorCode::UnexpectedEOF, Category::EOF),
        ];

        for &(code, expected) in data
        {
            let error = Error::from(InternalError::new(code));

            assert!(!error.has_context());
            assert_eq!(error.classify(), expected, "for {:?}", code);
        }
    }

    fn loc(index: usize, line: usize, column: usize) -> Location
    {
        Location {
            index,
            line,
            column,
        }
    }
}
