//! Renders a [`TermSet`] as source code, one assignment per dimension.
//!
//! Each multiplier is replaced by a caller-supplied expression, for example `a` by `v.x`, and
//! the monomials of each dimension are summed:
//!
//! ```text
//! x = (q.scalar * q.scalar * v.x) + (-2.0f * q.scalar * q.yx * v.y)
//! ```
//!
//! Powers are written out as repeated factors, since the target language is not assumed to have
//! an exponent operator.

use crate::{basis::Dimension, monomial::Monomial, term_set::TermSet};
use std::{
    borrow::Borrow,
    collections::{hash_map::Entry, BTreeMap, HashMap},
    error::Error,
    fmt::{self, Display, Formatter},
    hash::{BuildHasher, Hash},
};

/// A mapping from multiplier names to the expression text that replaces them in generated code.
pub trait CodeMapping {
    /// Returns the expression for the multiplier with the given name.
    fn lookup(&self, name: &str) -> Option<&str>;
}

impl<K, V, S> CodeMapping for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name).map(|value| value.as_ref())
    }
}

impl<K, V> CodeMapping for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name).map(|value| value.as_ref())
    }
}

impl<K, V> CodeMapping for [(K, V)]
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn lookup(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(key, _)| key.as_ref() == name)
            .map(|(_, value)| value.as_ref())
    }
}

impl<K, V, const N: usize> CodeMapping for [(K, V); N]
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn lookup(&self, name: &str) -> Option<&str> {
        self.as_slice().lookup(name)
    }
}

impl<K, V> CodeMapping for Vec<(K, V)>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn lookup(&self, name: &str) -> Option<&str> {
        self.as_slice().lookup(name)
    }
}

/// Error returned if a multiplier has no entry in the [`CodeMapping`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingMapping {
    /// The name of the unmapped multiplier.
    pub name: String,
}

impl Display for MissingMapping {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "no code mapping for multiplier `{}`", self.name)
    }
}

impl Error for MissingMapping {}

/// Options controlling the generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeFormat {
    /// Appended to every integer coefficient to make it a floating-point literal of the target
    /// language, such as `.0f` to turn `2` into `2.0f`.
    pub literal_suffix: String,

    /// The left-hand side used for the scalar dimension, which has no basis symbols of its own.
    pub scalar_name: String,
}

impl Default for CodeFormat {
    fn default() -> Self {
        Self {
            literal_suffix: String::from(".0f"),
            scalar_name: String::from("scalar"),
        }
    }
}

impl CodeFormat {
    /// Wraps the given [`CodeFormat`] into a builder for further customization.
    pub fn into_builder(self) -> CodeFormatBuilder {
        CodeFormatBuilder(self)
    }
}

/// A builder for [`CodeFormat`].
#[derive(Debug, Default, Clone)]
pub struct CodeFormatBuilder(CodeFormat);

impl CodeFormatBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the suffix of numeric literals. See [`CodeFormat::literal_suffix`].
    pub fn literal_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.0.literal_suffix = suffix.into();
        self
    }

    /// Sets the name of the scalar dimension. See [`CodeFormat::scalar_name`].
    pub fn scalar_name(mut self, name: impl Into<String>) -> Self {
        self.0.scalar_name = name.into();
        self
    }

    /// Builds the [`CodeFormat`].
    pub fn build(self) -> CodeFormat {
        self.0
    }
}

/// Renders a single monomial as a parenthesized product, such as `(-2.0f * q.scalar * v.x)`.
fn render_product<M>(term: &Monomial, mapping: &M, format: &CodeFormat) -> Result<String, MissingMapping>
where
    M: CodeMapping + ?Sized,
{
    let mut factors = Vec::new();

    let count = term.count().unsigned_abs();
    if count != 1 || term.multipliers().is_empty() {
        factors.push(format!("{}{}", count, format.literal_suffix));
    }

    for multiplier in term.multipliers() {
        let expr = mapping.lookup(&multiplier.name)
            .ok_or_else(|| MissingMapping { name: multiplier.name.clone() })?;
        factors.extend((0..multiplier.power).map(|_| expr.to_owned()));
    }

    let sign = if term.is_negative() { "-" } else { "" };
    Ok(format!("({}{})", sign, factors.join(" * ")))
}

/// Renders the term set as one `dimension = expression` line per distinct dimension.
///
/// Lines appear in the order each dimension first occurs in the term set, and so do the products
/// within each line.
pub fn to_code<M>(terms: &TermSet, mapping: &M, format: &CodeFormat) -> Result<String, MissingMapping>
where
    M: CodeMapping + ?Sized,
{
    let mut index: HashMap<Dimension, usize> = HashMap::new();
    let mut lines: Vec<(Dimension, Vec<String>)> = Vec::new();

    for term in terms {
        let product = render_product(term, mapping, format)?;
        match index.entry(term.dimension()) {
            Entry::Occupied(entry) => lines[*entry.get()].1.push(product),
            Entry::Vacant(entry) => {
                entry.insert(lines.len());
                lines.push((term.dimension(), vec![product]));
            },
        }
    }

    let mut code = String::new();
    for (dimension, products) in lines {
        let lhs = if dimension.is_scalar() {
            format.scalar_name.clone()
        } else {
            dimension.to_string()
        };
        code.push_str(&format!("{} = {}\n", lhs, products.join(" + ")));
    }

    Ok(code)
}

impl TermSet {
    /// Renders the term set as code. See [`to_code`].
    pub fn to_code<M>(&self, mapping: &M, format: &CodeFormat) -> Result<String, MissingMapping>
    where
        M: CodeMapping + ?Sized,
    {
        to_code(self, mapping, format)
    }
}

#[cfg(test)]
mod tests {
    use crate::{basis::Basis, multiplier::Multiplier, order::Lexical};
    use pretty_assertions::assert_eq;
    use super::*;

    fn mono(count: i64, names: &str, basis: &[Basis]) -> Monomial {
        Monomial::new(count, names.chars().map(|c| Multiplier::new(c)), basis, &Lexical)
    }

    #[test]
    fn single_line() {
        let set = TermSet::combine([mono(1, "a", &[Basis::X])]);
        let code = set.to_code(&[("a", "v.x")], &CodeFormat::default()).unwrap();
        assert_eq!(code, "x = (v.x)\n");
    }

    #[test]
    fn powers_repeat_factors() {
        let set = TermSet::combine([mono(1, "aa", &[])]);
        let code = set.to_code(&[("a", "v.x")], &CodeFormat::default()).unwrap();
        assert_eq!(code, "scalar = (v.x * v.x)\n");
        assert!(!code.contains('^'));
    }

    #[test]
    fn coefficients_and_signs() {
        let set = TermSet::combine([
            mono(-2, "ab", &[Basis::Z, Basis::Y]),
            mono(-1, "b", &[Basis::Z, Basis::Y]),
            mono(3, "", &[Basis::Z, Basis::Y]),
            mono(-1, "", &[Basis::Z, Basis::Y]),
        ]);
        let mapping = [("a", "p"), ("b", "q")];
        let code = set.to_code(&mapping, &CodeFormat::default()).unwrap();
        // `3zy` and `-zy` combine into `2zy`
        assert_eq!(code, "zy = (-2.0f * p * q) + (-q) + (2.0f)\n");
    }

    #[test]
    fn grouped_by_first_occurrence() {
        let set = TermSet::combine([
            mono(1, "a", &[Basis::Y]),
            mono(1, "b", &[]),
            mono(1, "c", &[Basis::Y]),
            mono(1, "a", &[Basis::X]),
        ]);
        let mapping: HashMap<&str, &str> = [("a", "A"), ("b", "B"), ("c", "C")].into_iter().collect();
        let code = set.to_code(&mapping, &CodeFormat::default()).unwrap();
        assert_eq!(code, "y = (A) + (C)\nscalar = (B)\nx = (A)\n");
    }

    #[test]
    fn custom_format() {
        let set = TermSet::combine([mono(4, "s", &[]), mono(1, "s", &[Basis::X, Basis::Y, Basis::Z])]);
        let format = CodeFormatBuilder::new()
            .literal_suffix(".0")
            .scalar_name("w")
            .build();
        let mapping: BTreeMap<String, String> = [("s".to_string(), "self.s".to_string())].into_iter().collect();
        let code = set.to_code(&mapping, &format).unwrap();
        assert_eq!(code, "w = (4.0 * self.s)\nxyz = (self.s)\n");
    }

    #[test]
    fn missing_mapping() {
        let set = TermSet::combine([mono(1, "a", &[]), mono(1, "q", &[Basis::X])]);
        let err = set.to_code(&[("a", "v.x")], &CodeFormat::default()).unwrap_err();
        assert_eq!(err, MissingMapping { name: String::from("q") });
        assert_eq!(err.to_string(), "no code mapping for multiplier `q`");
    }

    #[test]
    fn empty_set() {
        let code = TermSet::default().to_code(&[("a", "v.x")], &CodeFormat::default()).unwrap();
        assert_eq!(code, "");
    }
}
