use super::{RegexBuilder, State};
use crate::{
    AnchorConflict, Error, Result,
    ast::{Anchor, AstNode},
};

/// Controls how [`RegexBuilder::subexpression_with`] merges another builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubexpressionOptions {
    /// Prefix added to every group name and named backreference.
    pub namespace: String,
    /// Leave the parent's flags alone instead of adding the merged ones.
    pub ignore_flags: bool,
    /// Drop the merged expression's start and end anchors.
    pub ignore_start_and_end: bool,
}

impl Default for SubexpressionOptions {
    fn default() -> Self {
        Self {
            namespace: String::new(),
            ignore_flags: true,
            ignore_start_and_end: true,
        }
    }
}

impl SubexpressionOptions {
    #[must_use]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    #[must_use]
    pub fn ignore_flags(mut self, ignore: bool) -> Self {
        self.ignore_flags = ignore;
        self
    }

    #[must_use]
    pub fn ignore_start_and_end(mut self, ignore: bool) -> Self {
        self.ignore_start_and_end = ignore;
        self
    }
}

impl RegexBuilder {
    /// Appends a finished expression as a single element, with the default
    /// [`SubexpressionOptions`].
    pub fn subexpression(self, expr: &RegexBuilder) -> Result<Self> {
        self.subexpression_with(expr, &SubexpressionOptions::default())
    }

    /// Appends a finished expression as a single element.
    ///
    /// Backreferences in `expr` are shifted past the capture groups already
    /// defined here, group names get the namespace prefix, and anchors and
    /// flags are handled as `options` says. The merged element takes any
    /// pending quantifier as a whole.
    ///
    /// # Errors
    ///
    /// * [`Error::NotFullyClosed`] if `expr` has an open container.
    /// * [`Error::DuplicateName`] or [`Error::InvalidName`] if a namespaced
    ///   group name clashes or is invalid.
    /// * [`Error::DuplicateAnchor`] if kept anchors clash with this builder's.
    pub fn subexpression_with(
        mut self,
        expr: &RegexBuilder,
        options: &SubexpressionOptions,
    ) -> Result<Self> {
        if !expr.stack.is_closed() {
            return Err(Error::NotFullyClosed(expr.stack.current().kind().clone()));
        }

        let mut merge = Merge {
            parent: &mut self.state,
            options,
            shift: 0,
            captures_seen: 0,
        };
        merge.shift = merge.parent.total_capture_groups;

        let children = expr
            .stack
            .root()
            .iter()
            .cloned()
            .map(|node| merge.node(node))
            .collect::<Result<Vec<_>>>()?;

        let added = merge.captures_seen;
        self.state.total_capture_groups += added;

        if !options.ignore_flags {
            self.state.flags.union(expr.state.flags);
        }

        Ok(self.push(AstNode::Subexpression(children)))
    }
}

/// Rewrites the nodes of a merged expression for their new parent.
struct Merge<'a> {
    parent: &'a mut State,
    options: &'a SubexpressionOptions,
    shift: usize,
    captures_seen: usize,
}

impl Merge<'_> {
    fn name(&self, name: &str) -> String {
        format!("{}{name}", self.options.namespace)
    }

    fn children(&mut self, children: Vec<AstNode>) -> Result<Vec<AstNode>> {
        children.into_iter().map(|child| self.node(child)).collect()
    }

    fn node(&mut self, node: AstNode) -> Result<AstNode> {
        Ok(match node {
            AstNode::Backreference(index) => AstNode::Backreference(index + self.shift),
            AstNode::NamedBackreference(name) => AstNode::NamedBackreference(self.name(&name)),
            AstNode::Group {
                capturing,
                children,
            } => {
                if capturing {
                    self.captures_seen += 1;
                }
                AstNode::Group {
                    capturing,
                    children: self.children(children)?,
                }
            }
            AstNode::NamedGroup { name, children } => {
                self.captures_seen += 1;
                let name = self.name(&name);
                self.parent.track_named_group(&name)?;
                AstNode::NamedGroup {
                    name,
                    children: self.children(children)?,
                }
            }
            AstNode::Assertion { kind, children } => AstNode::Assertion {
                kind,
                children: self.children(children)?,
            },
            AstNode::AnyOf(children) => AstNode::AnyOf(self.children(children)?),
            AstNode::Subexpression(children) => AstNode::Subexpression(self.children(children)?),
            AstNode::Quantified { inner, quantifier } => AstNode::Quantified {
                inner: Box::new(self.node(*inner)?),
                quantifier,
            },
            AstNode::Anchor(_) if self.options.ignore_start_and_end => AstNode::Noop,
            AstNode::Anchor(Anchor::Start) => {
                if self.parent.has_defined_start {
                    return Err(Error::DuplicateAnchor(AnchorConflict::Start));
                }
                if self.parent.has_defined_end {
                    return Err(Error::DuplicateAnchor(AnchorConflict::StartAfterEnd));
                }
                // Marks the end as well; a later end_of_input() on the parent
                // is rejected.
                self.parent.has_defined_start = true;
                self.parent.has_defined_end = true;
                AstNode::Anchor(Anchor::Start)
            }
            AstNode::Anchor(Anchor::End) => {
                if self.parent.has_defined_end {
                    return Err(Error::DuplicateAnchor(AnchorConflict::End));
                }
                self.parent.has_defined_end = true;
                AstNode::Anchor(Anchor::End)
            }
            other => other,
        })
    }
}
