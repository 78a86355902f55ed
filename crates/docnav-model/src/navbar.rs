//! Top navigation bar.

use crate::NavEntry;

/// Ordered top-level destinations, rendered left to right.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavbarModel {
    entries: Vec<NavEntry>,
}

impl NavbarModel {
    pub(crate) fn new(entries: Vec<NavEntry>) -> Self {
        Self { entries }
    }

    /// Entries in author-specified order.
    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }
}
