use ariadne::Source;
use ga_algebra::MissingMapping;
use ga_error::Error as ParseError;

/// Utility enum to package errors that can occur while evaluating / rendering a formula.
#[derive(Debug)]
pub enum Error {
    /// Errors that occurred while parsing one of the term lists of a formula.
    Parse {
        /// Names the term list in reports.
        src_id: String,

        /// The term list that failed to parse.
        source: String,

        /// Every malformed term in the list.
        errors: Vec<ParseError>,
    },

    /// A multiplier had no code mapping.
    Render(MissingMapping),
}

impl Error {
    /// Report the errors in this [`Error`] to stderr.
    ///
    /// The `ariadne` crate's [`Report`](ariadne::Report) type has no `Display` implementation, so
    /// parse errors can only be printed with its `eprint` method.
    pub fn report_to_stderr(&self) {
        match self {
            Self::Parse { src_id, source, errors } => errors.iter().for_each(|err| {
                let report = err.build_report(src_id);
                if report.eprint((src_id.as_str(), Source::from(source))).is_err() {
                    eprintln!("failed to parse `{}`", source);
                }
            }),
            Self::Render(err) => eprintln!("error: {}", err),
        }
    }
}

impl From<MissingMapping> for Error {
    fn from(err: MissingMapping) -> Self {
        Self::Render(err)
    }
}
