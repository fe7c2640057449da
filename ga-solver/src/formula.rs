//! Built-in formulas.
//!
//! Quaternions are written in the bivector basis, where `zy`, `xz` and `yx` take the place of
//! `i`, `j` and `k`.

use crate::error::Error;
use ga_algebra::{Algebra, CodeFormat, MultiplierOrder, Ranked, TermSet};
use tracing::info;

/// A product of term lists, together with the code mapping for its multipliers.
#[derive(Debug, Clone, Copy)]
pub struct Formula {
    /// The name of the formula on the command line.
    pub name: &'static str,

    /// What the formula computes.
    pub description: &'static str,

    /// The multiplier names, in the order they should be sorted within each monomial.
    pub order: &'static str,

    /// The term lists to multiply, from left to right.
    pub factors: &'static [&'static str],

    /// The code to substitute for each multiplier.
    pub mapping: &'static [(&'static str, &'static str)],
}

/// Rotates the vector `v` by the quaternion `q`, as `q v q⁻¹`.
pub const ROTATE: Formula = Formula {
    name: "rotate",
    description: "rotation of vector v by quaternion q",
    order: "sijkabc",
    factors: &["s izy jxz kyx", "ax by cz", "s -izy -jxz -kyx"],
    mapping: &[
        ("s", "q.scalar"),
        ("i", "q.zy"),
        ("j", "q.xz"),
        ("k", "q.yx"),
        ("a", "v.x"),
        ("b", "v.y"),
        ("c", "v.z"),
    ],
};

/// Multiplies the quaternions `a` and `b`.
pub const QUAT_MUL: Formula = Formula {
    name: "quat-mul",
    description: "product of quaternions a and b",
    order: "abcdefgh",
    factors: &["a bzy cxz dyx", "e fzy gxz hyx"],
    mapping: &[
        ("a", "a.scalar"),
        ("b", "a.zy"),
        ("c", "a.xz"),
        ("d", "a.yx"),
        ("e", "b.scalar"),
        ("f", "b.zy"),
        ("g", "b.xz"),
        ("h", "b.yx"),
    ],
};

/// Every built-in formula.
pub const BUILTIN: [&Formula; 2] = [&ROTATE, &QUAT_MUL];

/// Parses each term list and multiplies them from left to right.
///
/// Each term list is named in error reports as `name[i]`, where `i` is its position.
pub fn evaluate<O: MultiplierOrder>(
    algebra: &Algebra<O>,
    name: &str,
    factors: &[&str],
) -> Result<TermSet, Error> {
    let sets = factors.iter()
        .enumerate()
        .map(|(i, source)| {
            algebra.parse_many(source).map_err(|errors| Error::Parse {
                src_id: format!("{}[{}]", name, i),
                source: source.to_string(),
                errors,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let result = algebra.product(&sets).unwrap_or_default();
    info!(formula = name, factors = sets.len(), terms = result.len(), "expanded product");
    Ok(result)
}

impl Formula {
    /// The algebra that sorts multipliers in this formula's order.
    pub fn algebra(&self) -> Algebra<Ranked> {
        Algebra::new(Ranked::from_chars(self.order))
    }

    /// Expands and simplifies the formula.
    pub fn evaluate(&self) -> Result<TermSet, Error> {
        evaluate(&self.algebra(), self.name, self.factors)
    }

    /// Expands the formula and renders it as code.
    pub fn to_code(&self, format: &CodeFormat) -> Result<String, Error> {
        Ok(self.evaluate()?.to_code(self.mapping, format)?)
    }
}
