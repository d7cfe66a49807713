//! Bracketed character set types.

use super::ast::Literal;

/// The error type used by [`CharSet`] and range validation.
#[derive(Debug, Eq, thiserror::Error, PartialEq)]
pub enum Error {
    /// A range whose start does not come before its end. Holds both code
    /// points.
    #[error("a must have a smaller character value than b (a = {0}, b = {1})")]
    Range(u32, u32),
}

/// Checks that `from..=to` is a valid range for a character set.
///
/// # Errors
///
/// If `from` is not strictly before `to`, an [`Error`] naming both code points
/// is returned.
pub fn check_range(from: char, to: char) -> Result<(), Error> {
    if from < to {
        Ok(())
    } else {
        Err(Error::Range(u32::from(from), u32::from(to)))
    }
}

/// One member of a character set.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SetItem {
    Char(Literal),
    Range(char, char),
}

/// A bracketed character set, `[...]` or `[^...]`.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct CharSet {
    items: Vec<SetItem>,
    negated: bool,
}

impl CharSet {
    /// Creates a new empty character set.
    #[must_use]
    pub const fn new() -> Self {
        CharSet {
            items: Vec::new(),
            negated: false,
        }
    }

    /// Adds the given character to the set.
    #[inline]
    pub fn add_char(&mut self, c: char) {
        self.items.push(SetItem::Char(Literal::new(c.encode_utf8(&mut [0; 4]))));
    }

    /// Adds a range of characters to the set.
    ///
    /// # Errors
    ///
    /// If the start of the range is not before its end, an [`Error`] is
    /// returned.
    pub fn add_range(&mut self, from: char, to: char) -> Result<(), Error> {
        check_range(from, to)?;
        self.items.push(SetItem::Range(from, to));
        Ok(())
    }

    /// Inverts the character set.
    #[inline]
    pub fn invert(&mut self) {
        self.negated = !self.negated;
    }

    #[inline]
    #[must_use]
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn items(&self) -> &[SetItem] {
        &self.items
    }

    /// Returns the set's characters as one string when it holds nothing but
    /// single characters.
    #[must_use]
    pub fn chars_only(&self) -> Option<String> {
        self.items
            .iter()
            .map(|item| match item {
                SetItem::Char(lit) => Some(lit.raw()),
                SetItem::Range(..) => None,
            })
            .collect()
    }

    /// Returns the range when the set holds exactly one range and nothing else.
    #[must_use]
    pub fn single_range(&self) -> Option<(char, char)> {
        match self.items.as_slice() {
            [SetItem::Range(from, to)] => Some((*from, *to)),
            _ => None,
        }
    }
}
