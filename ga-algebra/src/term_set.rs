use crate::{
    basis::Dimension,
    monomial::Monomial,
    multiplier::Multiplier,
    order::MultiplierOrder,
};
use std::{collections::{hash_map::Entry, HashMap}, fmt::{self, Display, Formatter}};
use tracing::debug;

/// A simplified sum of [`Monomial`]s.
///
/// No two monomials in a term set can be combined, and none of them has a zero coefficient. The
/// monomials keep the order in which their combination was first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermSet {
    terms: Vec<Monomial>,
}

impl TermSet {
    /// Adds up the given monomials, combining like terms and dropping any that cancel out.
    ///
    /// Each combined monomial takes the position of the first monomial that contributed to it.
    pub fn combine(monomials: impl IntoIterator<Item = Monomial>) -> Self {
        let mut index: HashMap<(Dimension, Vec<Multiplier>), usize> = HashMap::new();
        let mut sums: Vec<(Monomial, i64)> = Vec::new();

        for monomial in monomials {
            match index.entry(monomial.signature()) {
                Entry::Occupied(entry) => sums[*entry.get()].1 += monomial.count(),
                Entry::Vacant(entry) => {
                    entry.insert(sums.len());
                    let count = monomial.count();
                    sums.push((monomial, count));
                },
            }
        }

        let terms = sums.into_iter()
            .filter(|(_, count)| *count != 0)
            .map(|(monomial, count)| monomial.with_count(count))
            .collect();
        Self { terms }
    }

    /// Multiplies two term sets, expanding every pairwise product and combining like terms.
    ///
    /// Products are formed in row-major order: the first monomial of `self` with every monomial
    /// of `rhs`, then the second, and so on.
    pub fn multiply<O>(&self, rhs: &Self, order: &O) -> Self
    where
        O: MultiplierOrder + ?Sized,
    {
        let products = self.terms.iter()
            .flat_map(|lhs| rhs.terms.iter().map(move |other| lhs.multiply(other, order)))
            .collect::<Vec<_>>();
        let expanded = products.len();

        let result = Self::combine(products);
        debug!(expanded, retained = result.len(), "multiplied term sets");
        result
    }

    /// The monomials of this term set.
    pub fn terms(&self) -> &[Monomial] {
        &self.terms
    }

    /// Returns an iterator over the monomials of this term set.
    pub fn iter(&self) -> std::slice::Iter<'_, Monomial> {
        self.terms.iter()
    }

    /// The number of monomials.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if every monomial cancelled out, or there were none to begin with.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl FromIterator<Monomial> for TermSet {
    fn from_iter<I: IntoIterator<Item = Monomial>>(iter: I) -> Self {
        Self::combine(iter)
    }
}

impl<'a> IntoIterator for &'a TermSet {
    type Item = &'a Monomial;
    type IntoIter = std::slice::Iter<'a, Monomial>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl IntoIterator for TermSet {
    type Item = Monomial;
    type IntoIter = std::vec::IntoIter<Monomial>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

/// Formats the term set as an equation, such as `s^2ax - 2sjaz + i^2ax`. An empty term set
/// formats as the empty string.
impl Display for TermSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Some((first, rest)) = self.terms.split_first() else {
            return Ok(());
        };

        // the first term has no operator before it, only its sign
        write!(f, "{}", first)?;

        for term in rest {
            let op = if term.is_negative() { '-' } else { '+' };
            write!(f, " {} {}", op, term.magnitude())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{basis::Basis, order::{Lexical, Ranked}};
    use pretty_assertions::assert_eq;
    use super::*;

    fn mono(count: i64, names: &str, basis: &[Basis]) -> Monomial {
        Monomial::new(count, names.chars().map(|c| Multiplier::new(c)), basis, &Lexical)
    }

    #[test]
    fn combine_like_terms() {
        let set = TermSet::combine([
            mono(1, "a", &[Basis::X]),
            mono(2, "b", &[]),
            mono(3, "a", &[Basis::X]),
            mono(1, "a", &[Basis::Y]),
        ]);
        assert_eq!(set.terms(), &[
            mono(4, "a", &[Basis::X]),
            mono(2, "b", &[]),
            mono(1, "a", &[Basis::Y]),
        ]);
    }

    #[test]
    fn combine_drops_cancelled() {
        let set = TermSet::combine([
            mono(1, "a", &[Basis::X]),
            mono(1, "b", &[]),
            mono(-1, "a", &[Basis::X]),
        ]);
        assert_eq!(set.terms(), &[mono(1, "b", &[])]);
    }

    #[test]
    fn combine_cancel_then_reappear() {
        // a - a + a = a, and it keeps the position of the first `a`
        let set = TermSet::combine([
            mono(1, "a", &[]),
            mono(-1, "a", &[]),
            mono(1, "c", &[]),
            mono(1, "a", &[]),
        ]);
        assert_eq!(set.terms(), &[mono(1, "a", &[]), mono(1, "c", &[])]);
    }

    #[test]
    fn combine_drops_zero_input() {
        let set: TermSet = [mono(0, "a", &[])].into_iter().collect();
        assert!(set.is_empty());
        assert_eq!(set.to_string(), "");
    }

    #[test]
    fn multiply_row_major() {
        let order = Ranked::from_chars("ab");
        let lhs = TermSet::combine([mono(1, "a", &[]), mono(1, "b", &[])]);
        let rhs = TermSet::combine([mono(1, "", &[Basis::X]), mono(1, "", &[Basis::Y])]);
        let product = lhs.multiply(&rhs, &order);
        assert_eq!(product.to_string(), "ax + ay + bx + by");
    }

    #[test]
    fn multiply_closure() {
        // (a + bx)(a - bx) = a^2 - b^2, the cross terms cancel
        let lhs = TermSet::combine([mono(1, "a", &[]), mono(1, "b", &[Basis::X])]);
        let rhs = TermSet::combine([mono(1, "a", &[]), mono(-1, "b", &[Basis::X])]);
        let product = lhs.multiply(&rhs, &Lexical);
        assert_eq!(product.to_string(), "a^2 - b^2");

        for (i, a) in product.iter().enumerate() {
            assert_ne!(a.count(), 0);
            for b in &product.terms()[i + 1..] {
                assert!(!a.can_combine(b));
            }
        }
    }

    #[test]
    fn multiply_with_empty() {
        let lhs = TermSet::combine([mono(1, "a", &[])]);
        let product = lhs.multiply(&TermSet::default(), &Lexical);
        assert!(product.is_empty());
    }

    #[test]
    fn display_signs() {
        let set = TermSet::combine([
            mono(-2, "a", &[Basis::Z, Basis::Y]),
            mono(1, "b", &[]),
            mono(-1, "c", &[Basis::X, Basis::Y, Basis::Z]),
        ]);
        assert_eq!(set.to_string(), "-2azy + b - cxyz");
    }
}
