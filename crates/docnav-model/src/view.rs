//! Resolved navigation in the shape navigation widgets consume.

use serde::Serialize;

use crate::{NavEntry, NavigationModel, SidebarSection};

/// Navbar and sidebar resolved for one page path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationView {
    /// Path the view was resolved for.
    pub current_path: String,
    /// Navbar items, left to right.
    pub navbar: Vec<LinkView>,
    /// Sidebar sections, top to bottom.
    pub sidebar: Vec<SectionView>,
}

/// One link with its resolved state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkView {
    /// Display text.
    pub label: String,
    /// Link target.
    pub target: String,
    /// Whether the link leaves the site.
    pub external: bool,
    /// Whether the link is highlighted as current.
    pub active: bool,
}

/// One sidebar section with its resolved state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionView {
    /// Section heading.
    pub label: String,
    /// Configured default state.
    pub collapsed_by_default: bool,
    /// Effective state: the default, unless the current page is inside.
    pub collapsed: bool,
    /// Leaf links.
    pub items: Vec<LinkView>,
}

impl NavigationView {
    pub(crate) fn build(model: &NavigationModel, current_path: &str) -> Self {
        let resolved = model.resolver().resolve(current_path);

        let navbar = model
            .navbar()
            .entries()
            .iter()
            .map(|entry| {
                let active = resolved
                    .active_entry
                    .is_some_and(|active| std::ptr::eq(active, entry));
                LinkView::new(entry, active)
            })
            .collect();

        let sidebar = model
            .sidebar()
            .sections()
            .iter()
            .map(|section| SectionView::new(section, resolved.is_expanded(section), current_path))
            .collect();

        Self {
            current_path: current_path.to_owned(),
            navbar,
            sidebar,
        }
    }
}

impl LinkView {
    fn new(entry: &NavEntry, active: bool) -> Self {
        Self {
            label: entry.label().to_owned(),
            target: entry.target().to_owned(),
            external: entry.is_external(),
            active,
        }
    }
}

impl SectionView {
    fn new(section: &SidebarSection, expanded: bool, current_path: &str) -> Self {
        let items = section
            .items()
            .iter()
            .map(|item| LinkView::new(item, item.matches(current_path)))
            .collect();

        Self {
            label: section.label().to_owned(),
            collapsed_by_default: section.collapsed_by_default(),
            collapsed: section.collapsed_by_default() && !expanded,
            items,
        }
    }
}
