use std::fmt::{self, Display, Formatter};

/// A named scalar factor raised to a positive integer power, such as `a` or `s^2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Multiplier {
    /// The name of the factor.
    pub name: String,

    /// The power the factor is raised to. Always at least 1.
    pub power: u32,
}

impl Multiplier {
    /// Creates a new multiplier with the given name, with power 1.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), power: 1 }
    }

    /// Creates a new multiplier with the given name and power.
    pub fn with_power(name: impl Into<String>, power: u32) -> Self {
        debug_assert!(power >= 1, "multiplier powers start at 1");
        Self { name: name.into(), power }
    }
}

impl Display for Multiplier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if self.power > 1 {
            write!(f, "^{}", self.power)?;
        }
        Ok(())
    }
}

/// Folds the given multipliers into `into`, adding the powers of factors that share a name and
/// appending the rest.
pub(crate) fn merge(into: &mut Vec<Multiplier>, from: impl IntoIterator<Item = Multiplier>) {
    for multiplier in from {
        match into.iter_mut().find(|existing| existing.name == multiplier.name) {
            Some(existing) => existing.power += multiplier.power,
            None => into.push(multiplier),
        }
    }
}
