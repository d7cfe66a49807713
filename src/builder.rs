//! The fluent, stack-based regex builder.
//!
//! Container calls (`group`, `capture`, `any_of`, ...) open a frame that
//! collects the following elements until the matching [`RegexBuilder::end`].
//! Quantifier calls attach to whatever element comes next in the current
//! frame.
//!
//! ```
//! use expressive::RegexBuilder;
//!
//! let regex = RegexBuilder::new()
//!     .start_of_input()?
//!     .optional()?.string("0x")?
//!     .capture()
//!         .exactly(4)?.any_of()
//!             .range("A", "F")?
//!             .range("0", "9")?
//!         .end()?
//!     .end()?
//!     .end_of_input()?
//!     .to_regex_string()?;
//!
//! assert_eq!(regex, "/^(?:0x)?([A-F0-9]{4})$/");
//! # Ok::<(), expressive::Error>(())
//! ```

pub mod frame;
pub mod state;
mod subexpr;

pub use self::{
    frame::{Frame, FrameKind, FrameStack},
    state::State,
    subexpr::SubexpressionOptions,
};
use crate::{
    ArgumentError, Error, Result,
    ast::{Anchor, AssertionKind, AstNode, ClassKind, Literal, Quantifier},
    charset,
    eval,
    flags::{Flag, Flags},
};

/// Builds a regular expression one element at a time.
///
/// Every call consumes the builder and hands it back, so calls chain. Calls
/// that validate their input return a [`Result`]; after an error the builder
/// is gone and a new one must be started.
#[derive(Debug, Clone, Default)]
pub struct RegexBuilder {
    stack: FrameStack,
    state: State,
}

impl RegexBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The flags set so far.
    #[must_use]
    pub fn flags(&self) -> Flags {
        self.state.flags
    }

    /// The number of capture groups opened so far, named ones included.
    #[must_use]
    pub fn capture_count(&self) -> usize {
        self.state.total_capture_groups
    }

    #[must_use]
    pub fn frames(&self) -> &FrameStack {
        &self.stack
    }

    #[must_use]
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Renders the pattern text and the flag set.
    ///
    /// # Errors
    ///
    /// If a container is still open, [`Error::IncompleteExpression`] names
    /// it.
    pub fn pattern_and_flags(&self) -> Result<(String, Flags)> {
        if !self.stack.is_closed() {
            return Err(Error::IncompleteExpression(
                self.stack.current().kind().clone(),
            ));
        }
        Ok((eval::pattern(self.stack.root()), self.state.flags))
    }

    /// Renders the expression as a `/pattern/flags` literal.
    ///
    /// # Errors
    ///
    /// If a container is still open, [`Error::IncompleteExpression`] names
    /// it.
    pub fn to_regex_string(&self) -> Result<String> {
        let (pattern, flags) = self.pattern_and_flags()?;
        Ok(eval::regex_string(&pattern, flags))
    }

    fn push(mut self, node: AstNode) -> Self {
        self.stack.current_mut().push(node);
        self
    }

    fn open(mut self, kind: FrameKind) -> Self {
        self.stack.open(kind);
        self
    }

    fn quantify(mut self, quantifier: Quantifier) -> Result<Self> {
        let frame = self.stack.current_mut();
        if let Some(pending) = frame.pending_quantifier() {
            return Err(Error::QuantifierConflict {
                pending,
                requested: quantifier,
            });
        }
        frame.set_quantifier(quantifier);
        Ok(self)
    }

    fn flag(mut self, flag: Flag) -> Self {
        self.state.flags.insert(flag);
        self
    }

    // Flags

    /// `g`
    #[must_use]
    pub fn allow_multiple_matches(self) -> Self {
        self.flag(Flag::Global)
    }

    /// `y`
    #[must_use]
    pub fn sticky(self) -> Self {
        self.flag(Flag::Sticky)
    }

    /// `m`
    #[must_use]
    pub fn line_by_line(self) -> Self {
        self.flag(Flag::Multiline)
    }

    /// `i`
    #[must_use]
    pub fn case_insensitive(self) -> Self {
        self.flag(Flag::CaseInsensitive)
    }

    /// `u`
    #[must_use]
    pub fn unicode(self) -> Self {
        self.flag(Flag::Unicode)
    }

    /// `s`
    #[must_use]
    pub fn single_line(self) -> Self {
        self.flag(Flag::DotAll)
    }

    // Character classes

    /// Appends a class escape such as `\d`.
    #[must_use]
    pub fn class(self, kind: ClassKind) -> Self {
        self.push(AstNode::Class(kind))
    }

    #[must_use]
    pub fn any_char(self) -> Self {
        self.class(ClassKind::AnyChar)
    }

    #[must_use]
    pub fn whitespace_char(self) -> Self {
        self.class(ClassKind::Whitespace)
    }

    #[must_use]
    pub fn non_whitespace_char(self) -> Self {
        self.class(ClassKind::NonWhitespace)
    }

    #[must_use]
    pub fn digit(self) -> Self {
        self.class(ClassKind::Digit)
    }

    #[must_use]
    pub fn non_digit(self) -> Self {
        self.class(ClassKind::NonDigit)
    }

    #[must_use]
    pub fn word(self) -> Self {
        self.class(ClassKind::Word)
    }

    #[must_use]
    pub fn non_word(self) -> Self {
        self.class(ClassKind::NonWord)
    }

    #[must_use]
    pub fn word_boundary(self) -> Self {
        self.class(ClassKind::WordBoundary)
    }

    #[must_use]
    pub fn non_word_boundary(self) -> Self {
        self.class(ClassKind::NonWordBoundary)
    }

    #[must_use]
    pub fn newline(self) -> Self {
        self.class(ClassKind::Newline)
    }

    #[must_use]
    pub fn carriage_return(self) -> Self {
        self.class(ClassKind::CarriageReturn)
    }

    #[must_use]
    pub fn tab(self) -> Self {
        self.class(ClassKind::Tab)
    }

    #[must_use]
    pub fn null_byte(self) -> Self {
        self.class(ClassKind::NullByte)
    }

    // Anchors

    pub fn start_of_input(mut self) -> Result<Self> {
        self.state.define_start()?;
        Ok(self.push(AstNode::Anchor(Anchor::Start)))
    }

    pub fn end_of_input(mut self) -> Result<Self> {
        self.state.define_end()?;
        Ok(self.push(AstNode::Anchor(Anchor::End)))
    }

    // Literals and sets

    /// Matches exactly one character, which is escaped if it is special.
    pub fn char(self, c: &str) -> Result<Self> {
        if single_char(c).is_none() {
            return Err(ArgumentError::NotAChar(c.to_owned()).into());
        }
        Ok(self.push(AstNode::Char(Literal::new(c))))
    }

    /// Matches `s` literally. Special characters are escaped.
    pub fn string(self, s: &str) -> Result<Self> {
        let lit = non_empty("string", s)?;
        Ok(self.push(AstNode::String(lit)))
    }

    /// Matches one character from `a` to `b` inclusive.
    pub fn range(self, a: &str, b: &str) -> Result<Self> {
        let (from, to) = range_bounds(a, b)?;
        Ok(self.push(AstNode::Range(from, to)))
    }

    /// Matches one character outside `a` to `b` inclusive.
    pub fn anything_but_range(self, a: &str, b: &str) -> Result<Self> {
        let (from, to) = range_bounds(a, b)?;
        Ok(self.push(AstNode::AnythingButRange(from, to)))
    }

    /// Matches any one of the characters in `chars`.
    pub fn any_of_chars(self, chars: &str) -> Result<Self> {
        let lit = non_empty("chars", chars)?;
        Ok(self.push(AstNode::AnyOfChars(lit)))
    }

    /// Matches one character not in `chars`.
    pub fn anything_but_chars(self, chars: &str) -> Result<Self> {
        let lit = non_empty("chars", chars)?;
        Ok(self.push(AstNode::AnythingButChars(lit)))
    }

    /// Matches `s.len()` characters, each of which differs from the character
    /// of `s` at the same position.
    pub fn anything_but_string(self, s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(ArgumentError::Empty("str").into());
        }
        let chars = s
            .chars()
            .map(|c| Literal::new(c.encode_utf8(&mut [0; 4])))
            .collect();
        Ok(self.push(AstNode::AnythingButString(chars)))
    }

    // Backreferences

    /// Matches the text of capture group `index` (1-based).
    pub fn backreference(self, index: usize) -> Result<Self> {
        let groups = self.state.total_capture_groups;
        if index == 0 || index > groups {
            return Err(ArgumentError::Backreference { index, groups }.into());
        }
        Ok(self.push(AstNode::Backreference(index)))
    }

    /// Matches the text of the capture group called `name`.
    pub fn named_backreference(self, name: &str) -> Result<Self> {
        if !self.state.has_named_group(name) {
            return Err(Error::UnknownGroup(name.to_owned()));
        }
        Ok(self.push(AstNode::NamedBackreference(name.to_owned())))
    }

    // Containers

    /// Opens a non-capturing group.
    #[must_use]
    pub fn group(self) -> Self {
        self.open(FrameKind::Group)
    }

    /// Opens a numbered capture group. Groups are numbered in the order they
    /// are opened.
    #[must_use]
    pub fn capture(mut self) -> Self {
        self.state.total_capture_groups += 1;
        self.open(FrameKind::Capture)
    }

    /// Opens a capture group called `name`.
    pub fn named_capture(mut self, name: &str) -> Result<Self> {
        self.state.track_named_group(name)?;
        self.state.total_capture_groups += 1;
        Ok(self.open(FrameKind::NamedCapture(name.to_owned())))
    }

    /// Opens an alternation. Characters, ranges and `any_of_chars` inside it
    /// are merged into a single bracket class.
    #[must_use]
    pub fn any_of(self) -> Self {
        self.open(FrameKind::AnyOf)
    }

    #[must_use]
    pub fn assert_ahead(self) -> Self {
        self.open(FrameKind::Assertion(AssertionKind::Ahead))
    }

    #[must_use]
    pub fn assert_not_ahead(self) -> Self {
        self.open(FrameKind::Assertion(AssertionKind::NotAhead))
    }

    #[must_use]
    pub fn assert_behind(self) -> Self {
        self.open(FrameKind::Assertion(AssertionKind::Behind))
    }

    #[must_use]
    pub fn assert_not_behind(self) -> Self {
        self.open(FrameKind::Assertion(AssertionKind::NotBehind))
    }

    /// Closes the most recently opened container.
    ///
    /// # Errors
    ///
    /// [`Error::UnbalancedEnd`] if no container is open.
    pub fn end(mut self) -> Result<Self> {
        if self.stack.close() {
            Ok(self)
        } else {
            Err(Error::UnbalancedEnd)
        }
    }

    // Quantifiers

    pub fn optional(self) -> Result<Self> {
        self.quantify(Quantifier::Optional)
    }

    pub fn zero_or_more(self) -> Result<Self> {
        self.quantify(Quantifier::ZeroOrMore)
    }

    pub fn zero_or_more_lazy(self) -> Result<Self> {
        self.quantify(Quantifier::ZeroOrMoreLazy)
    }

    pub fn one_or_more(self) -> Result<Self> {
        self.quantify(Quantifier::OneOrMore)
    }

    pub fn one_or_more_lazy(self) -> Result<Self> {
        self.quantify(Quantifier::OneOrMoreLazy)
    }

    pub fn exactly(self, n: usize) -> Result<Self> {
        positive("n", n)?;
        self.quantify(Quantifier::Exactly(n))
    }

    pub fn at_least(self, n: usize) -> Result<Self> {
        positive("n", n)?;
        self.quantify(Quantifier::AtLeast(n))
    }

    pub fn between(self, x: usize, y: usize) -> Result<Self> {
        between_bounds(x, y)?;
        self.quantify(Quantifier::Between(x, y))
    }

    pub fn between_lazy(self, x: usize, y: usize) -> Result<Self> {
        between_bounds(x, y)?;
        self.quantify(Quantifier::BetweenLazy(x, y))
    }

    /// Applies a quantifier given as a value rather than by name.
    pub fn quantifier(self, quantifier: Quantifier) -> Result<Self> {
        match quantifier {
            Quantifier::Exactly(n) => self.exactly(n),
            Quantifier::AtLeast(n) => self.at_least(n),
            Quantifier::Between(x, y) => self.between(x, y),
            Quantifier::BetweenLazy(x, y) => self.between_lazy(x, y),
            _ => self.quantify(quantifier),
        }
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn non_empty(name: &'static str, s: &str) -> Result<Literal> {
    if s.is_empty() {
        Err(ArgumentError::Empty(name).into())
    } else {
        Ok(Literal::new(s))
    }
}

fn range_bounds(a: &str, b: &str) -> Result<(char, char)> {
    let from = single_char(a).ok_or_else(|| ArgumentError::RangeBound(a.to_owned()))?;
    let to = single_char(b).ok_or_else(|| ArgumentError::RangeBound(b.to_owned()))?;
    charset::check_range(from, to).map_err(ArgumentError::from)?;
    Ok((from, to))
}

fn positive(name: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(ArgumentError::NotPositive { name, value }.into());
    }
    Ok(())
}

fn between_bounds(x: usize, y: usize) -> Result<()> {
    positive("y", y)?;
    if x >= y {
        return Err(ArgumentError::BetweenOrder { x, y }.into());
    }
    Ok(())
}
