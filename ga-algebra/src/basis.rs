//! The basis symbols and the canonical dimensions built from them.

use std::fmt::{self, Display, Formatter};

/// One of the three anticommuting basis symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Basis {
    X,
    Y,
    Z,
}

impl Basis {
    /// Returns the basis symbol written as the given character, if there is one.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'x' => Some(Self::X),
            'y' => Some(Self::Y),
            'z' => Some(Self::Z),
            _ => None,
        }
    }

    /// The character used to write this basis symbol.
    pub fn as_char(self) -> char {
        match self {
            Self::X => 'x',
            Self::Y => 'y',
            Self::Z => 'z',
        }
    }
}

impl Display for Basis {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The canonical basis-symbol product of a monomial.
///
/// Every product of basis symbols reduces to exactly one of these eight values, up to sign. The
/// bivectors are oriented as `zy`, `xz` and `yx`, matching the rotation planes of a quaternion
/// `(scalar, zy, xz, yx)`. The trivector is always written `xyz`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dimension {
    /// No basis symbols; the monomial is a plain scalar.
    #[default]
    Scalar,
    X,
    Y,
    Z,
    ZY,
    XZ,
    YX,
    XYZ,
}

impl Dimension {
    /// The basis symbols making up this dimension, in canonical order.
    pub fn symbols(self) -> &'static [Basis] {
        use Basis::*;
        match self {
            Self::Scalar => &[],
            Self::X => &[X],
            Self::Y => &[Y],
            Self::Z => &[Z],
            Self::ZY => &[Z, Y],
            Self::XZ => &[X, Z],
            Self::YX => &[Y, X],
            Self::XYZ => &[X, Y, Z],
        }
    }

    /// Returns true if this is the scalar dimension.
    pub fn is_scalar(self) -> bool {
        self == Self::Scalar
    }

    /// Number of basis symbols in this dimension.
    pub fn grade(self) -> usize {
        self.symbols().len()
    }
}

impl From<Basis> for Dimension {
    fn from(basis: Basis) -> Self {
        match basis {
            Basis::X => Self::X,
            Basis::Y => Self::Y,
            Basis::Z => Self::Z,
        }
    }
}

/// Formats the dimension as its basis symbols. The scalar dimension is the empty string.
impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.symbols().iter().try_for_each(|basis| write!(f, "{}", basis))
    }
}
