//! Reduction of arbitrary basis-symbol products to their canonical [`Dimension`].
//!
//! The basis symbols anticommute (`xy = -yx`) and square to one (`xx = 1`). Any product of them
//! therefore reduces to one of the eight dimensions in [`Dimension`], up to a sign. The reduction
//! happens in three stages:
//!
//! 1. Directly adjacent equal symbols cancel without changing the sign.
//! 2. The first symbol with a later duplicate is paired with that duplicate. Moving the duplicate
//!    next to it takes one transposition per symbol in between, so the pair is removed and the
//!    sign flips if an odd number of symbols separated them. This repeats until every symbol is
//!    distinct.
//! 3. What is left is at most three distinct symbols, which are rotated into the canonical
//!    orientation, flipping the sign for odd permutations.

use crate::basis::{Basis, Dimension};
use tracing::trace;

/// Cancels directly adjacent pairs of equal symbols until none are left.
///
/// Reducing against a stack gives the same result as repeatedly deleting adjacent pairs from the
/// string, since a deletion can only ever make the neighbours of the deleted pair adjacent.
fn cancel_adjacent(raw: &[Basis]) -> Vec<Basis> {
    let mut reduced = Vec::with_capacity(raw.len());
    for &basis in raw {
        if reduced.last() == Some(&basis) {
            reduced.pop();
        } else {
            reduced.push(basis);
        }
    }
    reduced
}

/// Finds the first symbol that has a later duplicate, returning the indices of both.
fn first_duplicate_pair(symbols: &[Basis]) -> Option<(usize, usize)> {
    symbols.iter()
        .enumerate()
        .find_map(|(i, basis)| {
            symbols[i + 1..].iter()
                .position(|other| other == basis)
                .map(|offset| (i, i + 1 + offset))
        })
}

/// Removes duplicate pairs until every remaining symbol is distinct. Returns true if the removals
/// flipped the sign an odd number of times.
fn cancel_pairs(symbols: &mut Vec<Basis>) -> bool {
    let mut negate = false;
    while let Some((first, second)) = first_duplicate_pair(symbols) {
        let between = second - first - 1;
        if between % 2 == 1 {
            negate = !negate;
        }

        // remove the later index first so `first` still points at the right symbol
        symbols.remove(second);
        symbols.remove(first);
    }
    negate
}

/// Maps a product of distinct symbols to its canonical dimension. Returns true along with it if
/// the given ordering is an odd permutation of the canonical one.
fn orient(symbols: &[Basis]) -> (bool, Dimension) {
    use Basis::*;
    match symbols {
        [] => (false, Dimension::Scalar),
        [basis] => (false, Dimension::from(*basis)),

        [Z, Y] => (false, Dimension::ZY),
        [Y, Z] => (true, Dimension::ZY),
        [X, Z] => (false, Dimension::XZ),
        [Z, X] => (true, Dimension::XZ),
        [Y, X] => (false, Dimension::YX),
        [X, Y] => (true, Dimension::YX),

        [X, Y, Z] | [Y, Z, X] | [Z, X, Y] => (false, Dimension::XYZ),
        [X, Z, Y] | [Y, X, Z] | [Z, Y, X] => (true, Dimension::XYZ),

        _ => unreachable!("product of distinct basis symbols has more than three symbols: {:?}", symbols),
    }
}

/// Reduces the product of the given basis symbols, scaled by `count`, to a canonical dimension and
/// the correspondingly signed count.
pub fn canonicalize(count: i64, raw: &[Basis]) -> (i64, Dimension) {
    let mut symbols = cancel_adjacent(raw);
    let mut negate = cancel_pairs(&mut symbols);

    let (odd, dimension) = orient(&symbols);
    negate ^= odd;

    let count = if negate { -count } else { count };
    trace!(?raw, %dimension, count, "canonicalized basis product");
    (count, dimension)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Converts a string of basis characters into symbols.
    fn basis(s: &str) -> Vec<Basis> {
        s.chars().map(|c| Basis::from_char(c).unwrap()).collect()
    }

    fn canon(count: i64, s: &str) -> (i64, Dimension) {
        canonicalize(count, &basis(s))
    }

    #[test]
    fn empty_and_single() {
        assert_eq!(canon(3, ""), (3, Dimension::Scalar));
        assert_eq!(canon(-1, "y"), (-1, Dimension::Y));
    }

    #[test]
    fn idempotent_on_canonical() {
        for dimension in [
            Dimension::Scalar,
            Dimension::X,
            Dimension::Y,
            Dimension::Z,
            Dimension::ZY,
            Dimension::XZ,
            Dimension::YX,
            Dimension::XYZ,
        ] {
            for count in [1, -1, 4] {
                assert_eq!(canonicalize(count, dimension.symbols()), (count, dimension));
            }
        }
    }

    #[test]
    fn bivector_orientation() {
        assert_eq!(canon(1, "yz"), (-1, Dimension::ZY));
        assert_eq!(canon(1, "zx"), (-1, Dimension::XZ));
        assert_eq!(canon(1, "xy"), (-1, Dimension::YX));
        assert_eq!(canon(2, "zy"), (2, Dimension::ZY));
    }

    #[test]
    fn trivector_orientation() {
        assert_eq!(canon(1, "xyz"), (1, Dimension::XYZ));
        assert_eq!(canon(1, "yzx"), (1, Dimension::XYZ));
        assert_eq!(canon(1, "zxy"), (1, Dimension::XYZ));
        assert_eq!(canon(1, "xzy"), (-1, Dimension::XYZ));
        assert_eq!(canon(1, "yxz"), (-1, Dimension::XYZ));
        assert_eq!(canon(1, "zyx"), (-1, Dimension::XYZ));
    }

    #[test]
    fn adjacent_squares_vanish() {
        assert_eq!(canon(1, "xx"), (1, Dimension::Scalar));
        assert_eq!(canon(-1, "zz"), (-1, Dimension::Scalar));
        assert_eq!(canon(1, "xyyx"), (1, Dimension::Scalar));
        assert_eq!(canon(1, "zxxzy"), (1, Dimension::Y));
    }

    #[test]
    fn parity_of_separated_pairs() {
        // zero symbols between the pair
        assert_eq!(canon(1, "yy"), (1, Dimension::Scalar));
        // one symbol between: flips
        assert_eq!(canon(1, "xzx"), (-1, Dimension::Z));
        assert_eq!(canon(1, "yxy"), (-1, Dimension::X));
        // two symbols between: no flip, remainder `zy` is already canonical
        assert_eq!(canon(1, "xzyx"), (1, Dimension::ZY));
        assert_eq!(canon(-1, "yxzy"), (-1, Dimension::XZ));
    }

    #[test]
    fn repeated_pairs() {
        // xyxy = -xxyy = -1
        assert_eq!(canon(1, "xyxy"), (-1, Dimension::Scalar));
        // zy * zy = -1, the square of a rotation bivector
        assert_eq!(canon(1, "zyzy"), (-1, Dimension::Scalar));
        // xyz * xyz = -1
        assert_eq!(canon(1, "xyzxyz"), (-1, Dimension::Scalar));
        // yx * xz = yz = -zy
        assert_eq!(canon(1, "yxxz"), (-1, Dimension::ZY));
    }

    #[test]
    fn bivector_products_follow_quaternion_rules() {
        // with i = zy, j = xz, k = yx: ij = k, jk = i, ki = j
        assert_eq!(canon(1, "zyxz"), (1, Dimension::YX));
        assert_eq!(canon(1, "xzyx"), (1, Dimension::ZY));
        assert_eq!(canon(1, "yxzy"), (1, Dimension::XZ));
        // and ji = -k
        assert_eq!(canon(1, "xzzy"), (-1, Dimension::YX));
    }
}
