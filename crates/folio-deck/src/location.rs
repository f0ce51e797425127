//! URL fragment contract.

use crate::error::LocationError;

/// Reads and replaces the page's URL fragment.
///
/// `replace_fragment` must not push a history entry.
pub trait Location {
    /// Current fragment without the leading `#`, empty when absent.
    fn fragment(&self) -> String;

    /// Replaces the fragment; `fragment` includes the leading `#`.
    fn replace_fragment(&mut self, fragment: &str) -> Result<(), LocationError>;
}

/// In-memory location for headless hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryLocation {
    fragment: String,
    replacements: Vec<String>,
    refuse_writes: bool,
}

impl MemoryLocation {
    pub fn new(fragment: impl Into<String>) -> Self {
        Self {
            fragment: fragment.into().trim_start_matches('#').to_owned(),
            ..Self::default()
        }
    }

    /// Makes every subsequent write fail, like a sandboxed iframe.
    pub fn refusing_writes(mut self) -> Self {
        self.refuse_writes = true;
        self
    }

    /// Every fragment written so far, oldest first.
    pub fn replacements(&self) -> &[String] {
        &self.replacements
    }
}

impl Location for MemoryLocation {
    fn fragment(&self) -> String {
        self.fragment.clone()
    }

    fn replace_fragment(&mut self, fragment: &str) -> Result<(), LocationError> {
        if self.refuse_writes {
            return Err(LocationError::Refused(fragment.to_owned()));
        }
        self.fragment = fragment.trim_start_matches('#').to_owned();
        self.replacements.push(fragment.to_owned());
        Ok(())
    }
}
