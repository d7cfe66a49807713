//! Regex flag set.

use std::fmt;

/// A single regex flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    Global,          // g
    Sticky,          // y
    Multiline,       // m
    CaseInsensitive, // i
    Unicode,         // u
    DotAll,          // s
}

impl Flag {
    /// All flags in canonical rendering order.
    pub const ALL: [Flag; 6] = [
        Flag::Global,
        Flag::Sticky,
        Flag::Multiline,
        Flag::CaseInsensitive,
        Flag::Unicode,
        Flag::DotAll,
    ];

    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'g' => Flag::Global,
            'y' => Flag::Sticky,
            'm' => Flag::Multiline,
            'i' => Flag::CaseInsensitive,
            'u' => Flag::Unicode,
            's' => Flag::DotAll,
            _ => return None,
        })
    }

    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Flag::Global => 'g',
            Flag::Sticky => 'y',
            Flag::Multiline => 'm',
            Flag::CaseInsensitive => 'i',
            Flag::Unicode => 'u',
            Flag::DotAll => 's',
        }
    }

    /// The name of the builder method that sets this flag.
    #[must_use]
    pub const fn method(self) -> &'static str {
        match self {
            Flag::Global => "allow_multiple_matches",
            Flag::Sticky => "sticky",
            Flag::Multiline => "line_by_line",
            Flag::CaseInsensitive => "case_insensitive",
            Flag::Unicode => "unicode",
            Flag::DotAll => "single_line",
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// A set of [`Flag`]s. Membership only; rendering always uses the order of
/// [`Flag::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags(u8);

impl Flags {
    #[must_use]
    pub const fn new() -> Self {
        Flags(0)
    }

    #[inline]
    pub fn insert(&mut self, flag: Flag) {
        self.0 |= flag.bit();
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, flag: Flag) -> bool {
        self.0 & flag.bit() != 0
    }

    /// Adds every flag set in `other`. Never clears a flag.
    #[inline]
    pub fn union(&mut self, other: Flags) {
        self.0 |= other.0;
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates over the set flags in canonical order.
    pub fn iter(self) -> impl Iterator<Item = Flag> {
        Flag::ALL.into_iter().filter(move |&flag| self.contains(flag))
    }
}

impl FromIterator<Flag> for Flags {
    fn from_iter<I: IntoIterator<Item = Flag>>(iter: I) -> Self {
        let mut flags = Flags::new();
        for flag in iter {
            flags.insert(flag);
        }
        flags
    }
}

/// Renders the set as flag characters, e.g. `gmi`.
impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write as _;
        for flag in self.iter() {
            f.write_char(flag.to_char())?;
        }
        Ok(())
    }
}
