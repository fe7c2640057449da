use crate::{
    basis::{Basis, Dimension},
    canonical::canonicalize,
    multiplier::{merge, Multiplier},
    order::MultiplierOrder,
};
use std::fmt::{self, Display, Formatter};

/// A signed product of [`Multiplier`]s and basis symbols, such as `-2abzy`.
///
/// A monomial is always stored in canonical form: its multipliers have unique names and are
/// sorted by the [`MultiplierOrder`] used to build it, and its basis symbols are reduced to a
/// canonical [`Dimension`]. Monomials are never mutated; every operation builds a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Monomial {
    count: i64,
    multipliers: Vec<Multiplier>,
    dimension: Dimension,
}

impl Monomial {
    /// Builds a monomial from its parts, merging multipliers with the same name, sorting them with
    /// the given order, and canonicalizing the product of the given basis symbols.
    pub fn new<O>(
        count: i64,
        multipliers: impl IntoIterator<Item = Multiplier>,
        basis: &[Basis],
        order: &O,
    ) -> Self
    where
        O: MultiplierOrder + ?Sized,
    {
        let mut merged = Vec::new();
        merge(&mut merged, multipliers);
        merged.sort_by(|a, b| order.cmp(&a.name, &b.name));

        let (count, dimension) = canonicalize(count, basis);
        Self { count, multipliers: merged, dimension }
    }

    /// The signed integer coefficient.
    pub fn count(&self) -> i64 {
        self.count
    }

    /// The multipliers, in order.
    pub fn multipliers(&self) -> &[Multiplier] {
        &self.multipliers
    }

    /// The canonical basis-symbol product.
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Returns true if the coefficient is negative.
    pub fn is_negative(&self) -> bool {
        self.count < 0
    }

    /// Multiplies two monomials.
    ///
    /// The coefficients multiply, multipliers with the same name add their powers, and the basis
    /// symbols of `rhs` are appended to those of `self` before being canonicalized again. The
    /// product is not commutative: `x * y = -(y * x)`.
    pub fn multiply<O>(&self, rhs: &Self, order: &O) -> Self
    where
        O: MultiplierOrder + ?Sized,
    {
        let basis = self.dimension.symbols().iter()
            .chain(rhs.dimension.symbols())
            .copied()
            .collect::<Vec<_>>();
        Self::new(
            self.count * rhs.count,
            self.multipliers.iter().chain(&rhs.multipliers).cloned(),
            &basis,
            order,
        )
    }

    /// Returns true if the two monomials differ only in their coefficient, and can be added into
    /// a single monomial.
    pub fn can_combine(&self, other: &Self) -> bool {
        self.dimension == other.dimension && self.multipliers == other.multipliers
    }

    /// The part of the monomial that must match for two monomials to combine.
    pub(crate) fn signature(&self) -> (Dimension, Vec<Multiplier>) {
        (self.dimension, self.multipliers.clone())
    }

    /// Returns the same monomial with a different coefficient.
    pub(crate) fn with_count(self, count: i64) -> Self {
        Self { count, ..self }
    }

    /// Returns a value that formats the monomial without its sign.
    pub fn magnitude(&self) -> Magnitude<'_> {
        Magnitude(self)
    }
}

/// Formats a [`Monomial`] without its sign, as in `2s^2ax`. The coefficient is only written if
/// its absolute value is not 1, unless nothing else would be written.
#[derive(Debug, Clone, Copy)]
pub struct Magnitude<'a>(&'a Monomial);

impl Display for Magnitude<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Monomial { count, multipliers, dimension } = self.0;
        let count = count.unsigned_abs();
        if count != 1 || (multipliers.is_empty() && dimension.is_scalar()) {
            write!(f, "{}", count)?;
        }
        for multiplier in multipliers {
            write!(f, "{}", multiplier)?;
        }
        write!(f, "{}", dimension)
    }
}

impl Display for Monomial {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-")?;
        }
        write!(f, "{}", self.magnitude())
    }
}
