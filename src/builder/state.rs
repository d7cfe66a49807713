use crate::{AnchorConflict, Error, Result, flags::Flags};

/// Builder-wide bookkeeping that lives alongside the frame stack.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub flags: Flags,
    pub has_defined_start: bool,
    pub has_defined_end: bool,
    pub total_capture_groups: usize,
    pub named_groups: Vec<String>,
}

impl State {
    /// Records the start-of-input anchor.
    pub fn define_start(&mut self) -> Result<()> {
        if self.has_defined_start {
            return Err(Error::DuplicateAnchor(AnchorConflict::Start));
        }
        if self.has_defined_end {
            return Err(Error::DuplicateAnchor(AnchorConflict::StartAfterEnd));
        }
        self.has_defined_start = true;
        Ok(())
    }

    /// Records the end-of-input anchor.
    pub fn define_end(&mut self) -> Result<()> {
        if self.has_defined_end {
            return Err(Error::DuplicateAnchor(AnchorConflict::End));
        }
        self.has_defined_end = true;
        Ok(())
    }

    /// Validates and registers a capture group name.
    pub fn track_named_group(&mut self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidName(name.to_owned()));
        }
        if self.has_named_group(name) {
            return Err(Error::DuplicateName(name.to_owned()));
        }
        if !is_valid_group_name(name) {
            return Err(Error::InvalidName(name.to_owned()));
        }
        self.named_groups.push(name.to_owned());
        Ok(())
    }

    #[must_use]
    pub fn has_named_group(&self, name: &str) -> bool {
        self.named_groups.iter().any(|known| known == name)
    }
}

/// One or more ASCII letters followed by any run of ASCII word characters.
fn is_valid_group_name(name: &str) -> bool {
    let rest = name.trim_start_matches(|c: char| c.is_ascii_alphabetic());
    rest.len() < name.len() && rest.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
