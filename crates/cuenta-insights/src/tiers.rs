//! Ordered threshold tables.

/// The condition a value must meet to fall into a tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// Value is at or above the bound.
    AtLeast(f64),
    /// Value is strictly above the bound.
    Above(f64),
    /// Value is strictly below the bound.
    Below(f64),
}

impl Bound {
    /// Whether `value` satisfies this bound.
    #[must_use]
    pub fn admits(self, value: f64) -> bool {
        match self {
            Self::AtLeast(bound) => value >= bound,
            Self::Above(bound) => value > bound,
            Self::Below(bound) => value < bound,
        }
    }
}

/// A threshold table: tiers are tried in order, the first match wins, and
/// `otherwise` applies when none matches.
#[derive(Debug, Clone, Copy)]
pub struct Tiers {
    /// `(bound, message)` pairs, most extreme bound first.
    pub tiers: &'static [(Bound, &'static str)],
    /// Message when no tier matches.
    pub otherwise: &'static str,
}

impl Tiers {
    /// The message for `value`.
    #[must_use]
    pub fn classify(&self, value: f64) -> &'static str {
        self.tiers
            .iter()
            .find(|(bound, _)| bound.admits(value))
            .map_or(self.otherwise, |&(_, message)| message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RISING: Tiers = Tiers {
        tiers: &[
            (Bound::AtLeast(2.0), "high"),
            (Bound::AtLeast(1.0), "mid"),
            (Bound::Above(0.0), "low"),
        ],
        otherwise: "negative",
    };

    const FALLING: Tiers = Tiers {
        tiers: &[(Bound::Below(1.0), "cheap"), (Bound::Below(2.0), "fair")],
        otherwise: "rich",
    };

    #[test]
    fn test_at_least_includes_bound() {
        assert_eq!(RISING.classify(2.5), "high");
        assert_eq!(RISING.classify(2.0), "high");
        assert_eq!(RISING.classify(1.99), "mid");
        assert_eq!(RISING.classify(0.99), "low");
    }

    #[test]
    fn test_above_excludes_bound() {
        assert_eq!(RISING.classify(0.001), "low");
        assert_eq!(RISING.classify(0.0), "negative");
        assert_eq!(RISING.classify(-0.0), "negative");
        assert_eq!(RISING.classify(f64::NEG_INFINITY), "negative");
    }

    #[test]
    fn test_below_excludes_bound() {
        assert_eq!(FALLING.classify(0.5), "cheap");
        assert_eq!(FALLING.classify(1.0), "fair");
        assert_eq!(FALLING.classify(2.0), "rich");
    }
}
