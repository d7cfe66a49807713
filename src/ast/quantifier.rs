use std::fmt;

/// A repetition applied to exactly one node.
///
/// Each variant corresponds to one builder call, so a quantifier always
/// renders back to the syntax it was created with (`between(0, 1)` stays
/// `{0,1}` rather than collapsing to `?`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    Optional,                  // ?
    ZeroOrMore,                // *
    ZeroOrMoreLazy,            // *?
    OneOrMore,                 // +
    OneOrMoreLazy,             // +?
    Exactly(usize),            // {n}
    AtLeast(usize),            // {n,}
    Between(usize, usize),     // {x,y}
    BetweenLazy(usize, usize), // {x,y}?
}

impl Quantifier {
    /// Picks the quantifier for parsed `{min, max?, lazy}` bounds.
    ///
    /// Returns `None` for bounds that no builder call can express: a zero
    /// `{0}` count, an upper bound below the lower bound, or a lazy open-ended
    /// repetition other than `*?` and `+?`.
    #[must_use]
    pub const fn from_bounds(min: usize, max: Option<usize>, lazy: bool) -> Option<Self> {
        Some(match (min, max, lazy) {
            (0, Some(1), false) => Quantifier::Optional,
            (0, None, false) => Quantifier::ZeroOrMore,
            (0, None, true) => Quantifier::ZeroOrMoreLazy,
            (1, None, false) => Quantifier::OneOrMore,
            (1, None, true) => Quantifier::OneOrMoreLazy,
            (n, None, false) => Quantifier::AtLeast(n),
            (n, Some(m), _) if n == m && n > 0 => Quantifier::Exactly(n),
            (x, Some(y), false) if x < y => Quantifier::Between(x, y),
            (x, Some(y), true) if x < y => Quantifier::BetweenLazy(x, y),
            _ => return None,
        })
    }

    #[must_use]
    pub const fn min(self) -> usize {
        match self {
            Quantifier::Optional | Quantifier::ZeroOrMore | Quantifier::ZeroOrMoreLazy => 0,
            Quantifier::OneOrMore | Quantifier::OneOrMoreLazy => 1,
            Quantifier::Exactly(n) | Quantifier::AtLeast(n) => n,
            Quantifier::Between(x, _) | Quantifier::BetweenLazy(x, _) => x,
        }
    }

    /// The upper bound, or `None` when the repetition is unbounded.
    #[must_use]
    pub const fn max(self) -> Option<usize> {
        match self {
            Quantifier::Optional => Some(1),
            Quantifier::ZeroOrMore
            | Quantifier::ZeroOrMoreLazy
            | Quantifier::OneOrMore
            | Quantifier::OneOrMoreLazy
            | Quantifier::AtLeast(_) => None,
            Quantifier::Exactly(n) => Some(n),
            Quantifier::Between(_, y) | Quantifier::BetweenLazy(_, y) => Some(y),
        }
    }

    #[must_use]
    pub const fn is_lazy(self) -> bool {
        matches!(
            self,
            Quantifier::ZeroOrMoreLazy | Quantifier::OneOrMoreLazy | Quantifier::BetweenLazy(..)
        )
    }

    /// Returns the pattern suffix for this quantifier.
    #[must_use]
    pub fn suffix(self) -> String {
        match self {
            Quantifier::Optional => "?".into(),
            Quantifier::ZeroOrMore => "*".into(),
            Quantifier::ZeroOrMoreLazy => "*?".into(),
            Quantifier::OneOrMore => "+".into(),
            Quantifier::OneOrMoreLazy => "+?".into(),
            Quantifier::Exactly(n) => format!("{{{n}}}"),
            Quantifier::AtLeast(n) => format!("{{{n},}}"),
            Quantifier::Between(x, y) => format!("{{{x},{y}}}"),
            Quantifier::BetweenLazy(x, y) => format!("{{{x},{y}}}?"),
        }
    }

    /// The name of the builder method producing this quantifier.
    #[must_use]
    pub const fn method(self) -> &'static str {
        match self {
            Quantifier::Optional => "optional",
            Quantifier::ZeroOrMore => "zero_or_more",
            Quantifier::ZeroOrMoreLazy => "zero_or_more_lazy",
            Quantifier::OneOrMore => "one_or_more",
            Quantifier::OneOrMoreLazy => "one_or_more_lazy",
            Quantifier::Exactly(_) => "exactly",
            Quantifier::AtLeast(_) => "at_least",
            Quantifier::Between(..) => "between",
            Quantifier::BetweenLazy(..) => "between_lazy",
        }
    }
}

/// Formats the quantifier as the builder call that creates it, e.g.
/// `between(3, 5)`.
impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let method = self.method();
        match *self {
            Quantifier::Exactly(n) | Quantifier::AtLeast(n) => write!(f, "{method}({n})"),
            Quantifier::Between(x, y) | Quantifier::BetweenLazy(x, y) => {
                write!(f, "{method}({x}, {y})")
            }
            _ => write!(f, "{method}()"),
        }
    }
}
