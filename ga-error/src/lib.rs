//! Contains the common [`ErrorKind`] trait used by all source-located errors to display
//! user-facing error messages.

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::Debug, ops::Range};

/// The color to use to highlight terms.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur while reading term text.
pub trait ErrorKind: Debug + Send {
    /// Returns the error as [`Any`], so callers can recover the concrete error kind.
    fn as_any(&self) -> &dyn Any;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source text that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source text that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Returns the kind of this error as `T`, if it is one.
    pub fn downcast_ref<T: ErrorKind + 'static>(&self) -> Option<&T> {
        self.kind.as_any().downcast_ref::<T>()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Writes the report for this error to the given writer, using `source` as the text the
    /// spans point into.
    pub fn write_report(&self, src_id: &str, source: &str, w: impl std::io::Write) -> std::io::Result<()> {
        self.build_report(src_id).write((src_id, Source::from(source)), w)
    }
}
