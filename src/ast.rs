pub mod class;
pub mod literal;
pub mod node;
pub mod quantifier;

pub use self::{
    class::ClassKind,
    literal::Literal,
    node::{Anchor, AssertionKind, AstNode},
    quantifier::Quantifier,
};
use super::{eval, flags::Flags};

/// A parsed regex literal.
#[derive(Debug, Default)]
pub struct AstRoot {
    tree: Vec<AstNode>,
    flags: Flags,
    capture_count: usize,
}

impl AstRoot {
    #[must_use]
    pub(crate) fn new(tree: Vec<AstNode>, flags: Flags, capture_count: usize) -> Self {
        Self {
            tree,
            flags,
            capture_count,
        }
    }

    #[must_use]
    pub fn flags(&self) -> Flags {
        self.flags
    }

    #[must_use]
    pub fn capture_count(&self) -> usize {
        self.capture_count
    }

    /// Renders the tree back to a `/pattern/flags` literal.
    #[must_use]
    pub fn to_regex_string(&self) -> String {
        eval::regex_string(&eval::pattern(&self.tree), self.flags)
    }
}

impl std::ops::Deref for AstRoot {
    type Target = [AstNode];

    fn deref(&self) -> &Self::Target {
        &self.tree
    }
}

impl PartialEq<&[AstNode]> for AstRoot {
    fn eq(&self, other: &&[AstNode]) -> bool {
        self.tree == *other
    }
}
