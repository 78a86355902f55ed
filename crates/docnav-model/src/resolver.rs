//! Active-route resolution.
//!
//! Pure functions of `(path, model)`: nothing is cached between calls, so
//! any number of threads may resolve against the same model at once.

use crate::{NavEntry, NavigationModel, SidebarSection};

/// Navbar entry to highlight for `current_path`.
///
/// Entries are tried in declaration order and the first match wins, so
/// overlapping entries resolve deterministically. `None` means no entry is
/// highlighted.
pub fn resolve_active_nav_entry<'a>(
    current_path: &str,
    entries: &'a [NavEntry],
) -> Option<&'a NavEntry> {
    entries.iter().find(|entry| entry.matches(current_path))
}

/// Sidebar sections to force open for `current_path`.
///
/// A section is included when one of its item targets equals the path or
/// is a segment prefix of it. Results keep declaration order. Sections not
/// returned keep their configured default.
pub fn resolve_expanded_sections<'a>(
    current_path: &str,
    sections: &'a [SidebarSection],
) -> Vec<&'a SidebarSection> {
    sections
        .iter()
        .filter(|section| section.contains_path(current_path))
        .collect()
}

/// Resolution result for a single path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedNavigation<'a> {
    /// Highlighted navbar entry.
    pub active_entry: Option<&'a NavEntry>,
    /// Sections forced open, in declaration order.
    pub expanded_sections: Vec<&'a SidebarSection>,
}

impl ResolvedNavigation<'_> {
    /// Whether `section` is forced open.
    ///
    /// Compares by identity, so two sections with identical content are
    /// told apart.
    pub fn is_expanded(&self, section: &SidebarSection) -> bool {
        self.expanded_sections
            .iter()
            .any(|expanded| std::ptr::eq(*expanded, section))
    }
}

/// Resolver bound to one [`NavigationModel`].
#[derive(Clone, Copy, Debug)]
pub struct NavigationResolver<'a> {
    model: &'a NavigationModel,
}

impl<'a> NavigationResolver<'a> {
    pub(crate) fn new(model: &'a NavigationModel) -> Self {
        Self { model }
    }

    /// See [`resolve_active_nav_entry`].
    pub fn active_nav_entry(&self, current_path: &str) -> Option<&'a NavEntry> {
        resolve_active_nav_entry(current_path, self.model.navbar().entries())
    }

    /// See [`resolve_expanded_sections`].
    pub fn expanded_sections(&self, current_path: &str) -> Vec<&'a SidebarSection> {
        resolve_expanded_sections(current_path, self.model.sidebar().sections())
    }

    /// Both resolutions at once.
    pub fn resolve(&self, current_path: &str) -> ResolvedNavigation<'a> {
        ResolvedNavigation {
            active_entry: self.active_nav_entry(current_path),
            expanded_sections: self.expanded_sections(current_path),
        }
    }
}
