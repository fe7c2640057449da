//! The errors that can occur while parsing term text.

use ariadne::Fmt;
use ga_attrs::ErrorKind;
use ga_error::EXPR;

/// A term with no multipliers and no basis symbols, such as the empty string or a lone `-`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected a term",
    label = format!("I expected to see a {} here", "term".fg(EXPR)),
    help = "a term is an optional `-`, then multiplier letters, then basis symbols, as in `-ax`",
)]
pub struct EmptyTerm;

/// A `-` anywhere but at the very start of a term.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "misplaced sign",
    label = "this sign must come first",
    help = format!("write the sign at the start of the term, as in `{}`", "-ax".fg(EXPR)),
)]
pub struct MisplacedSign;

/// A multiplier letter after the basis symbols of a term have started.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("multiplier `{}` follows the basis symbols", name),
    label = format!("move this {} before the basis symbols", "multiplier".fg(EXPR)),
    help = "basis symbols (`x`, `y`, `z`) must be the last characters of a term",
)]
pub struct MultiplierAfterBasis {
    /// The offending multiplier.
    pub name: String,
}

/// Whitespace inside text that should hold exactly one term.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected whitespace",
    label = "a single term cannot contain whitespace",
    help = "to read several terms at once, parse them as a term list",
)]
pub struct UnexpectedWhitespace;
