//! Lowering of a parsed AST to the sequence of builder calls that rebuilds it.
//!
//! A [`Program`] can be printed as Rust source, or replayed against a fresh
//! [`RegexBuilder`] to check that the calls really produce the literal.

use super::{
    Error, Result,
    ast::{Anchor, AssertionKind, AstNode, AstRoot, ClassKind, Quantifier},
    builder::RegexBuilder,
    charset::{CharSet, SetItem},
    flags::Flag,
};
use std::fmt;

/// One builder method call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Flag(Flag),
    Class(ClassKind),
    StartOfInput,
    EndOfInput,
    Char(char),
    String(String),
    Range(char, char),
    AnythingButRange(char, char),
    AnyOfChars(String),
    AnythingButChars(String),
    AnythingButString(String),
    Backreference(usize),
    NamedBackreference(String),
    Group,
    Capture,
    NamedCapture(String),
    AnyOf,
    Assert(AssertionKind),
    End,
}

impl Call {
    /// Whether the builder method returns a `Result`.
    #[must_use]
    pub fn is_fallible(&self) -> bool {
        !matches!(
            self,
            Call::Flag(_)
                | Call::Class(_)
                | Call::Group
                | Call::Capture
                | Call::AnyOf
                | Call::Assert(_)
        )
    }

    /// Whether the call opens a container that a later [`Call::End`] closes.
    #[must_use]
    pub fn opens(&self) -> bool {
        matches!(
            self,
            Call::Group | Call::Capture | Call::NamedCapture(_) | Call::AnyOf | Call::Assert(_)
        )
    }

    fn apply(&self, builder: RegexBuilder) -> Result<RegexBuilder> {
        Ok(match self {
            Call::Flag(flag) => match flag {
                Flag::Global => builder.allow_multiple_matches(),
                Flag::Sticky => builder.sticky(),
                Flag::Multiline => builder.line_by_line(),
                Flag::CaseInsensitive => builder.case_insensitive(),
                Flag::Unicode => builder.unicode(),
                Flag::DotAll => builder.single_line(),
            },
            Call::Class(kind) => builder.class(*kind),
            Call::StartOfInput => builder.start_of_input()?,
            Call::EndOfInput => builder.end_of_input()?,
            Call::Char(c) => builder.char(c.encode_utf8(&mut [0; 4]))?,
            Call::String(s) => builder.string(s)?,
            Call::Range(from, to) => {
                builder.range(from.encode_utf8(&mut [0; 4]), to.encode_utf8(&mut [0; 4]))?
            }
            Call::AnythingButRange(from, to) => builder
                .anything_but_range(from.encode_utf8(&mut [0; 4]), to.encode_utf8(&mut [0; 4]))?,
            Call::AnyOfChars(chars) => builder.any_of_chars(chars)?,
            Call::AnythingButChars(chars) => builder.anything_but_chars(chars)?,
            Call::AnythingButString(s) => builder.anything_but_string(s)?,
            Call::Backreference(index) => builder.backreference(*index)?,
            Call::NamedBackreference(name) => builder.named_backreference(name)?,
            Call::Group => builder.group(),
            Call::Capture => builder.capture(),
            Call::NamedCapture(name) => builder.named_capture(name)?,
            Call::AnyOf => builder.any_of(),
            Call::Assert(kind) => match kind {
                AssertionKind::Ahead => builder.assert_ahead(),
                AssertionKind::NotAhead => builder.assert_not_ahead(),
                AssertionKind::Behind => builder.assert_behind(),
                AssertionKind::NotBehind => builder.assert_not_behind(),
            },
            Call::End => builder.end()?,
        })
    }
}

/// Formats the call as Rust source, without the leading `.`.
impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Call::Flag(flag) => write!(f, "{}()", flag.method()),
            Call::Class(kind) => write!(f, "{}()", kind.method()),
            Call::StartOfInput => f.write_str("start_of_input()"),
            Call::EndOfInput => f.write_str("end_of_input()"),
            Call::Char(c) => write!(f, "char({:?})", c.encode_utf8(&mut [0; 4])),
            Call::String(s) => write!(f, "string({s:?})"),
            Call::Range(from, to) => write!(
                f,
                "range({:?}, {:?})",
                from.encode_utf8(&mut [0; 4]),
                to.encode_utf8(&mut [0; 4])
            ),
            Call::AnythingButRange(from, to) => write!(
                f,
                "anything_but_range({:?}, {:?})",
                from.encode_utf8(&mut [0; 4]),
                to.encode_utf8(&mut [0; 4])
            ),
            Call::AnyOfChars(chars) => write!(f, "any_of_chars({chars:?})"),
            Call::AnythingButChars(chars) => write!(f, "anything_but_chars({chars:?})"),
            Call::AnythingButString(s) => write!(f, "anything_but_string({s:?})"),
            Call::Backreference(index) => write!(f, "backreference({index})"),
            Call::NamedBackreference(name) => write!(f, "named_backreference({name:?})"),
            Call::Group => f.write_str("group()"),
            Call::Capture => f.write_str("capture()"),
            Call::NamedCapture(name) => write!(f, "named_capture({name:?})"),
            Call::AnyOf => f.write_str("any_of()"),
            Call::Assert(kind) => write!(f, "{}()", kind.method()),
            Call::End => f.write_str("end()"),
        }
    }
}

/// A call together with the container depth it is made at and the quantifier
/// chained in front of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub depth: usize,
    pub quantifier: Option<Quantifier>,
    pub call: Call,
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:width$}", "", width = (self.depth + 1) * 4)?;
        if let Some(quantifier) = self.quantifier {
            write!(f, ".{quantifier}?")?;
        }
        write!(f, ".{}", self.call)?;
        if self.call.is_fallible() {
            f.write_str("?")?;
        }
        Ok(())
    }
}

/// The builder calls that reproduce a parsed regex literal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    lines: Vec<Line>,
}

impl Program {
    /// Lowers `root` to builder calls: flags first, then one line per element.
    ///
    /// # Errors
    ///
    /// [`Error::Internal`] if the AST holds a shape no builder call can
    /// express, such as a negated set mixing characters and ranges.
    pub fn from_ast(root: &AstRoot) -> Result<Self> {
        let mut lowering = Lowering::default();
        for flag in root.flags().iter() {
            lowering.line(0, None, Call::Flag(flag));
        }
        lowering.nodes(0, root)?;
        Ok(Program {
            lines: lowering.lines,
        })
    }

    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Issues every call, in order, on a new builder.
    ///
    /// # Errors
    ///
    /// Any error a builder call reports is returned as is.
    pub fn replay(&self) -> Result<RegexBuilder> {
        self.lines
            .iter()
            .try_fold(RegexBuilder::new(), |mut builder, line| {
                if let Some(quantifier) = line.quantifier {
                    builder = builder.quantifier(quantifier)?;
                }
                line.call.apply(builder)
            })
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RegexBuilder::new()")?;
        for line in &self.lines {
            write!(f, "\n{line}")?;
        }
        Ok(())
    }
}

#[derive(Default)]
struct Lowering {
    lines: Vec<Line>,
}

impl Lowering {
    fn line(&mut self, depth: usize, quantifier: Option<Quantifier>, call: Call) {
        self.lines.push(Line {
            depth,
            quantifier,
            call,
        });
    }

    fn nodes(&mut self, depth: usize, nodes: &[AstNode]) -> Result<()> {
        for node in nodes {
            self.node(depth, None, node)?;
        }
        Ok(())
    }

    fn container(
        &mut self,
        depth: usize,
        quantifier: Option<Quantifier>,
        open: Call,
        children: &[AstNode],
    ) -> Result<()> {
        self.line(depth, quantifier, open);
        self.nodes(depth + 1, children)?;
        self.line(depth + 1, None, Call::End);
        Ok(())
    }

    fn node(&mut self, depth: usize, quantifier: Option<Quantifier>, node: &AstNode) -> Result<()> {
        let call = match node {
            AstNode::Noop => return Ok(()),
            AstNode::Quantified {
                inner,
                quantifier: q,
            } => {
                if quantifier.is_some() {
                    return Err(Error::Internal("quantifier applied to a quantified node"));
                }
                return self.node(depth, Some(*q), inner);
            }
            AstNode::Anchor(Anchor::Start) => Call::StartOfInput,
            AstNode::Anchor(Anchor::End) => Call::EndOfInput,
            AstNode::Class(kind) => Call::Class(*kind),
            AstNode::Char(lit) => match single(lit.raw()) {
                Some(c) => Call::Char(c),
                None => Call::String(lit.raw().to_owned()),
            },
            AstNode::String(lit) => Call::String(lit.raw().to_owned()),
            AstNode::Set(set) => return self.set(depth, quantifier, set),
            AstNode::Range(from, to) => Call::Range(*from, *to),
            AstNode::AnythingButRange(from, to) => Call::AnythingButRange(*from, *to),
            AstNode::AnyOfChars(lit) => Call::AnyOfChars(lit.raw().to_owned()),
            AstNode::AnythingButChars(lit) => Call::AnythingButChars(lit.raw().to_owned()),
            AstNode::AnythingButString(chars) => {
                Call::AnythingButString(chars.iter().map(|lit| lit.raw()).collect())
            }
            AstNode::Backreference(index) => Call::Backreference(*index),
            AstNode::NamedBackreference(name) => Call::NamedBackreference(name.clone()),
            AstNode::Group {
                capturing,
                children,
            } => {
                let open = if *capturing { Call::Capture } else { Call::Group };
                return self.container(depth, quantifier, open, children);
            }
            AstNode::NamedGroup { name, children } => {
                return self.container(depth, quantifier, Call::NamedCapture(name.clone()), children);
            }
            AstNode::Assertion { kind, children } => {
                return self.container(depth, quantifier, Call::Assert(*kind), children);
            }
            AstNode::AnyOf(children) => {
                return self.container(depth, quantifier, Call::AnyOf, children);
            }
            // A merged expression renders inline, or inside `(?:...)` when
            // quantified; a group reproduces both.
            AstNode::Subexpression(children) if quantifier.is_some() => {
                return self.container(depth, quantifier, Call::Group, children);
            }
            AstNode::Subexpression(children) => return self.nodes(depth, children),
        };
        self.line(depth, quantifier, call);
        Ok(())
    }

    /// Picks the narrowest call for a bracketed set: a character list, a
    /// single range, or an `any_of` block listing each member.
    fn set(&mut self, depth: usize, quantifier: Option<Quantifier>, set: &CharSet) -> Result<()> {
        let negated = set.is_negated();

        if let Some(chars) = set.chars_only() {
            let call = if negated {
                Call::AnythingButChars(chars)
            } else {
                Call::AnyOfChars(chars)
            };
            self.line(depth, quantifier, call);
            return Ok(());
        }

        if let Some((from, to)) = set.single_range() {
            let call = if negated {
                Call::AnythingButRange(from, to)
            } else {
                Call::Range(from, to)
            };
            self.line(depth, quantifier, call);
            return Ok(());
        }

        if negated {
            return Err(Error::Internal("negated set mixing ranges and characters"));
        }

        self.line(depth, quantifier, Call::AnyOf);
        for item in set.items() {
            let call = match item {
                SetItem::Char(lit) => match single(lit.raw()) {
                    Some(c) => Call::Char(c),
                    None => return Err(Error::Internal("multi-character set member")),
                },
                SetItem::Range(from, to) => Call::Range(*from, *to),
            };
            self.line(depth + 1, None, call);
        }
        self.line(depth + 1, None, Call::End);
        Ok(())
    }
}

fn single(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_layout() {
        let line = Line {
            depth: 1,
            quantifier: Some(Quantifier::Between(3, 5)),
            call: Call::Char('"'),
        };
        assert_eq!(line.to_string(), r#"        .between(3, 5)?.char("\"")?"#);
    }

    #[test]
    fn infallible_calls_have_no_question_mark() {
        let line = Line {
            depth: 0,
            quantifier: None,
            call: Call::Class(ClassKind::Digit),
        };
        assert_eq!(line.to_string(), "    .digit()");
        assert!(!Call::Group.is_fallible());
        assert!(Call::End.is_fallible());
        assert!(Call::NamedCapture("x".into()).opens());
    }
}
