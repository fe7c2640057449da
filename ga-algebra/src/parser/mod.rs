//! Parser for the compact term notation.
//!
//! A term is an optional leading `-`, followed by any number of single-character multiplier
//! names, followed by the basis symbols `x`, `y` and `z`:
//!
//! ```text
//! -izy    ax    s    xyz
//! ```
//!
//! The parser only checks the shape of the text; it does not merge multipliers or canonicalize
//! the basis symbols. That is left to [`Algebra`](crate::Algebra), which turns a [`RawTerm`]
//! into a [`Monomial`](crate::Monomial).

pub mod error;

use crate::{basis::Basis, tokenizer::{tokenize_complete, Token, TokenKind}};
pub use ga_error::Error;
use std::ops::Range;

/// A term as written, before canonicalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTerm {
    /// Whether the term started with a `-`.
    pub negative: bool,

    /// The multiplier names, in the order they were written. Repeated names are kept.
    pub multipliers: Vec<String>,

    /// The basis symbols, in the order they were written.
    pub basis: Vec<Basis>,

    /// The region of the source text that this term was parsed from.
    pub span: Range<usize>,
}

impl RawTerm {
    /// The signed unit coefficient of the term.
    pub fn count(&self) -> i64 {
        if self.negative { -1 } else { 1 }
    }
}

/// A parser for term text.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens of the source text.
    tokens: Box<[Token<'source>]>,

    /// The length of the source text, in bytes.
    len: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            len: source.len(),
        }
    }

    /// Returns a span pointing at the end of the source text.
    fn eof_span(&self) -> Range<usize> {
        self.len..self.len
    }

    /// Parses the whole source as a single term.
    pub fn try_parse_term(&self) -> Result<RawTerm, Error> {
        if self.tokens.is_empty() {
            return Err(Error::new(vec![self.eof_span()], error::EmptyTerm));
        }
        parse_term(&self.tokens)
    }

    /// Parses the source as a list of terms separated by whitespace.
    ///
    /// Every term is parsed, even after an error, so that all malformed terms are reported at
    /// once.
    pub fn try_parse_term_list(&self) -> Result<Vec<RawTerm>, Vec<Error>> {
        let mut terms = Vec::new();
        let mut errors = Vec::new();

        for tokens in self.tokens.split(Token::is_whitespace).filter(|tokens| !tokens.is_empty()) {
            match parse_term(tokens) {
                Ok(term) => terms.push(term),
                Err(err) => errors.push(err),
            }
        }

        if terms.is_empty() && errors.is_empty() {
            errors.push(Error::new(vec![self.eof_span()], error::EmptyTerm));
        }

        if errors.is_empty() {
            Ok(terms)
        } else {
            Err(errors)
        }
    }
}

/// Parses a single term from the given non-empty slice of tokens.
fn parse_term(tokens: &[Token]) -> Result<RawTerm, Error> {
    let span = match (tokens.first(), tokens.last()) {
        (Some(first), Some(last)) => first.span.start..last.span.end,
        _ => 0..0,
    };

    let mut negative = false;
    let mut multipliers = Vec::new();
    let mut basis = Vec::new();
    let mut basis_start = None;

    for (i, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::Minus if i == 0 => negative = true,
            TokenKind::Minus => {
                return Err(Error::new(vec![token.span.clone()], error::MisplacedSign));
            },
            TokenKind::Multiplier => {
                if let Some(start) = basis_start {
                    return Err(Error::new(
                        vec![token.span.clone(), start..token.span.start],
                        error::MultiplierAfterBasis { name: token.lexeme.to_string() },
                    ));
                }
                multipliers.push(token.lexeme.to_string());
            },
            TokenKind::Basis(symbol) => {
                basis_start.get_or_insert(token.span.start);
                basis.push(symbol);
            },
            TokenKind::Whitespace => {
                return Err(Error::new(vec![token.span.clone()], error::UnexpectedWhitespace));
            },
        }
    }

    if multipliers.is_empty() && basis.is_empty() {
        return Err(Error::new(vec![span], error::EmptyTerm));
    }

    Ok(RawTerm { negative, multipliers, basis, span })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn parse(source: &str) -> Result<RawTerm, Error> {
        Parser::new(source).try_parse_term()
    }

    #[test]
    fn bare_multiplier() {
        assert_eq!(parse("a").unwrap(), RawTerm {
            negative: false,
            multipliers: vec![String::from("a")],
            basis: vec![],
            span: 0..1,
        });
    }

    #[test]
    fn negative_bivector() {
        assert_eq!(parse("-izy").unwrap(), RawTerm {
            negative: true,
            multipliers: vec![String::from("i")],
            basis: vec![Basis::Z, Basis::Y],
            span: 0..4,
        });
    }

    #[test]
    fn basis_only() {
        let term = parse("-yx").unwrap();
        assert_eq!(term.count(), -1);
        assert!(term.multipliers.is_empty());
        assert_eq!(term.basis, vec![Basis::Y, Basis::X]);
    }

    #[test]
    fn repeated_multipliers_kept() {
        let term = parse("aab").unwrap();
        assert_eq!(term.multipliers, vec!["a", "a", "b"]);
    }

    #[test]
    fn empty_input() {
        let err = parse("").unwrap_err();
        assert!(err.downcast_ref::<error::EmptyTerm>().is_some());
        assert_eq!(err.spans, vec![0..0]);
    }

    #[test]
    fn lone_sign() {
        let err = parse("-").unwrap_err();
        assert!(err.downcast_ref::<error::EmptyTerm>().is_some());
        assert_eq!(err.spans, vec![0..1]);
    }

    #[test]
    fn multiplier_after_basis() {
        let err = parse("axb").unwrap_err();
        assert_eq!(
            err.downcast_ref::<error::MultiplierAfterBasis>(),
            Some(&error::MultiplierAfterBasis { name: String::from("b") }),
        );
        assert_eq!(err.spans, vec![2..3, 1..2]);
    }

    #[test]
    fn misplaced_sign() {
        let err = parse("a-x").unwrap_err();
        assert!(err.downcast_ref::<error::MisplacedSign>().is_some());
        assert_eq!(err.spans, vec![1..2]);

        let err = parse("--a").unwrap_err();
        assert!(err.downcast_ref::<error::MisplacedSign>().is_some());
    }

    #[test]
    fn whitespace_in_term() {
        let err = parse("a x").unwrap_err();
        assert!(err.downcast_ref::<error::UnexpectedWhitespace>().is_some());
    }

    #[test]
    fn term_list() {
        let terms = Parser::new("  s -izy\tjxz ").try_parse_term_list().unwrap();
        let spans = terms.iter().map(|term| term.span.clone()).collect::<Vec<_>>();
        assert_eq!(spans, vec![2..3, 4..8, 9..12]);
        assert!(terms[1].negative);
    }

    #[test]
    fn term_list_reports_every_error() {
        let errs = Parser::new("ax bxc - yz").try_parse_term_list().unwrap_err();
        assert_eq!(errs.len(), 2);
        assert!(errs[0].downcast_ref::<error::MultiplierAfterBasis>().is_some());
        assert!(errs[1].downcast_ref::<error::EmptyTerm>().is_some());
        assert_eq!(errs[1].spans, vec![7..8]);
    }

    #[test]
    fn report() {
        let source = "abxc";
        let err = parse(source).unwrap_err();
        let mut out = Vec::new();
        err.write_report("input", source, &mut out).unwrap();

        let text = String::from_utf8(strip_ansi_escapes::strip(out)).unwrap();
        assert!(text.contains("multiplier `c` follows the basis symbols"));
        assert!(text.contains("move this multiplier before the basis symbols"));
    }

    #[test]
    fn empty_term_list() {
        let errs = Parser::new("   ").try_parse_term_list().unwrap_err();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].spans, vec![3..3]);
    }
}
