//! Ordering policies for the multipliers of a monomial.
//!
//! Two monomials are only combined if their multipliers appear in the same order, so every
//! monomial sorts its multipliers with the policy of the [`Algebra`](crate::Algebra) that built
//! it.

use std::{cmp::Ordering, collections::HashMap};

/// A total order over multiplier names.
pub trait MultiplierOrder {
    /// Compares two multiplier names.
    fn cmp(&self, a: &str, b: &str) -> Ordering;
}

/// Orders multiplier names lexically. This is the default policy.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Lexical;

impl MultiplierOrder for Lexical {
    fn cmp(&self, a: &str, b: &str) -> Ordering {
        a.cmp(b)
    }
}

/// Orders multiplier names by their position in an explicit list.
///
/// Names missing from the list sort after every listed name, and lexically among themselves.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Ranked {
    ranks: HashMap<String, usize>,
}

impl Ranked {
    /// Creates a ranking from the given names, earliest first. Repeated names keep their first
    /// position.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ranks = HashMap::new();
        for name in names {
            let next = ranks.len();
            ranks.entry(name.into()).or_insert(next);
        }
        Self { ranks }
    }

    /// Creates a ranking of single-character names, such as `"sijkabc"`.
    pub fn from_chars(names: &str) -> Self {
        Self::new(names.chars().map(String::from))
    }

    /// Returns the rank of the given name, if it was listed.
    pub fn rank(&self, name: &str) -> Option<usize> {
        self.ranks.get(name).copied()
    }
}

impl MultiplierOrder for Ranked {
    fn cmp(&self, a: &str, b: &str) -> Ordering {
        match (self.rank(a), self.rank(b)) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.cmp(b),
        }
    }
}

impl<F> MultiplierOrder for F
where
    F: Fn(&str, &str) -> Ordering,
{
    fn cmp(&self, a: &str, b: &str) -> Ordering {
        self(a, b)
    }
}
