//! Sidebar sections.

use crate::NavEntry;

/// A named, collapsible group of links in the side panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarSection {
    label: String,
    collapsed_by_default: bool,
    items: Vec<NavEntry>,
}

impl SidebarSection {
    /// Create a section from validated parts. `items` is never empty.
    pub(crate) fn new(label: String, collapsed_by_default: bool, items: Vec<NavEntry>) -> Self {
        debug_assert!(!items.is_empty(), "sidebar section without items");
        Self {
            label,
            collapsed_by_default,
            items,
        }
    }

    /// Section heading.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the items are hidden until the section is expanded.
    pub fn collapsed_by_default(&self) -> bool {
        self.collapsed_by_default
    }

    /// Leaf links in author-specified order.
    pub fn items(&self) -> &[NavEntry] {
        &self.items
    }

    /// Whether any item covers `current_path`.
    ///
    /// Items carry no `active_match`, so this is the equality/prefix rule
    /// applied to each item target.
    pub fn contains_path(&self, current_path: &str) -> bool {
        self.items.iter().any(|item| item.matches(current_path))
    }
}

/// Ordered sidebar sections, rendered top to bottom.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SidebarModel {
    sections: Vec<SidebarSection>,
}

impl SidebarModel {
    pub(crate) fn new(sections: Vec<SidebarSection>) -> Self {
        Self { sections }
    }

    /// Sections in author-specified order.
    pub fn sections(&self) -> &[SidebarSection] {
        &self.sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(target: &str) -> NavEntry {
        NavEntry::new("Link".to_owned(), target.to_owned(), None)
    }

    #[test]
    fn test_contains_path_matches_item_or_descendant() {
        let golang = SidebarSection::new(
            "Golang".to_owned(),
            true,
            vec![
                link("/guias/programacion/introduction"),
                link("/guias/programacion/threads"),
            ],
        );

        assert!(golang.contains_path("/guias/programacion/threads"));
        assert!(golang.contains_path("/guias/programacion/threads/"));
        assert!(golang.contains_path("/guias/programacion/threads#canales"));
        assert!(!golang.contains_path("/guias/programacion"));
        assert!(!golang.contains_path("/guias/herramientas/sockets"));
    }

    #[test]
    fn test_contains_path_ignores_external_items() {
        let recursos = SidebarSection::new(
            "Recursos".to_owned(),
            false,
            vec![link("https://go.dev/tour"), link("https://pkg.go.dev")],
        );

        assert!(!recursos.contains_path("https://go.dev/tour"));
        assert!(!recursos.contains_path("/tour"));
    }
}
