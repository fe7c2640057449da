//! Symbolic expansion and simplification of products in the geometric algebra of three
//! dimensions.
//!
//! Terms are written in a compact notation: an optional `-`, single-character multiplier names,
//! then the basis symbols `x`, `y` and `z`. For example, a quaternion with components `s`, `i`,
//! `j` and `k` is the sum of the terms `s izy jxz kyx`. Multiplying such sums with an
//! [`Algebra`] expands every product, reduces its basis symbols to a canonical [`Dimension`] and
//! combines like terms. The result renders either as an equation (through [`Display`]) or as code
//! (through [`TermSet::to_code`]).
//!
//! ```
//! use ga_algebra::{Algebra, CodeFormat, Lexical};
//!
//! let algebra = Algebra::new(Lexical);
//! let v = algebra.parse_many("ax").unwrap();
//! let square = algebra.multiply_sets(&v, &v);
//! assert_eq!(square.to_string(), "a^2");
//!
//! let code = square.to_code(&[("a", "v.x")], &CodeFormat::default()).unwrap();
//! assert_eq!(code, "scalar = (v.x * v.x)\n");
//! ```
//!
//! [`Display`]: std::fmt::Display

pub mod algebra;
pub mod basis;
pub mod canonical;
pub mod codegen;
pub mod monomial;
pub mod multiplier;
pub mod order;
pub mod parser;
pub mod term_set;
pub mod tokenizer;

pub use algebra::Algebra;
pub use basis::{Basis, Dimension};
pub use canonical::canonicalize;
pub use codegen::{to_code, CodeFormat, CodeFormatBuilder, CodeMapping, MissingMapping};
pub use monomial::Monomial;
pub use multiplier::Multiplier;
pub use order::{Lexical, MultiplierOrder, Ranked};
pub use term_set::TermSet;
