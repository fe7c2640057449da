use crate::basis::Basis;
use logos::Logos;
use std::ops::Range;

/// The different kinds of tokens that can appear in term text.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    #[regex(r"\s+")]
    Whitespace,

    #[token("-")]
    Minus,

    #[token("x", |_| Basis::X)]
    #[token("y", |_| Basis::Y)]
    #[token("z", |_| Basis::Z)]
    Basis(Basis),

    /// Any other single character names a multiplier.
    #[regex(r"[^xyz\s-]")]
    Multiplier,
}

/// A token produced by the tokenizer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token<'source> {
    /// The region of the source text that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}

impl Token<'_> {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }
}
