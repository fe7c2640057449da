use crate::{
    basis::Basis,
    monomial::Monomial,
    multiplier::Multiplier,
    order::{Lexical, MultiplierOrder},
    parser::{Error, Parser, RawTerm},
    term_set::TermSet,
};

/// The entry point for building and multiplying monomials.
///
/// An [`Algebra`] carries the [`MultiplierOrder`] policy that every monomial it builds uses to
/// sort its multipliers. Monomials built by algebras with different policies should not be mixed,
/// since like terms would no longer be recognized.
///
/// ```
/// use ga_algebra::{Algebra, Ranked};
///
/// let algebra = Algebra::new(Ranked::from_chars("sijkabc"));
/// let quat = algebra.parse_many("s izy jxz kyx").unwrap();
/// let vec = algebra.parse_many("ax by cz").unwrap();
/// let product = algebra.multiply_sets(&quat, &vec);
/// assert_eq!(product.len(), 12);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Algebra<O = Lexical> {
    order: O,
}

impl<O: MultiplierOrder> Algebra<O> {
    /// Creates an algebra that sorts multipliers with the given policy.
    pub fn new(order: O) -> Self {
        Self { order }
    }

    /// The multiplier ordering policy.
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Builds a canonical monomial from its parts.
    pub fn monomial(
        &self,
        count: i64,
        multipliers: impl IntoIterator<Item = Multiplier>,
        basis: &[Basis],
    ) -> Monomial {
        Monomial::new(count, multipliers, basis, &self.order)
    }

    /// Canonicalizes a parsed term.
    pub fn from_raw(&self, raw: RawTerm) -> Monomial {
        let count = raw.count();
        self.monomial(count, raw.multipliers.into_iter().map(Multiplier::new), &raw.basis)
    }

    /// Parses a single term, such as `-izy`.
    pub fn parse(&self, source: &str) -> Result<Monomial, Error> {
        let raw = Parser::new(source).try_parse_term()?;
        Ok(self.from_raw(raw))
    }

    /// Parses a whitespace-separated list of terms, such as `s izy jxz kyx`, and adds them up into
    /// a [`TermSet`].
    pub fn parse_many(&self, source: &str) -> Result<TermSet, Vec<Error>> {
        let raw = Parser::new(source).try_parse_term_list()?;
        Ok(self.combine(raw.into_iter().map(|raw| self.from_raw(raw))))
    }

    /// Multiplies two monomials.
    pub fn multiply(&self, lhs: &Monomial, rhs: &Monomial) -> Monomial {
        lhs.multiply(rhs, &self.order)
    }

    /// Multiplies two term sets, combining like terms in the result.
    pub fn multiply_sets(&self, lhs: &TermSet, rhs: &TermSet) -> TermSet {
        lhs.multiply(rhs, &self.order)
    }

    /// Multiplies any number of term sets from left to right. Returns [`None`] if there are none.
    pub fn product<'a>(&self, sets: impl IntoIterator<Item = &'a TermSet>) -> Option<TermSet> {
        let mut sets = sets.into_iter();
        let first = sets.next()?.clone();
        Some(sets.fold(first, |acc, set| self.multiply_sets(&acc, set)))
    }

    /// Adds up the given monomials into a [`TermSet`].
    pub fn combine(&self, monomials: impl IntoIterator<Item = Monomial>) -> TermSet {
        TermSet::combine(monomials)
    }
}
