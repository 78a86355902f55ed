//! Navigation model aggregate and its construction from configuration.

use docnav_config::{Config, NavEntryConfig, SidebarItemConfig, SidebarSectionConfig};
use regex::Regex;

use crate::error::{NavigationError, locate};
use crate::resolver::NavigationResolver;
use crate::view::NavigationView;
use crate::{NavEntry, NavbarModel, SidebarModel, SidebarSection};

/// Navbar and sidebar built once from configuration.
///
/// The model is immutable after construction. Share it by reference or
/// `Arc`; concurrent readers need no locking.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationModel {
    navbar: NavbarModel,
    sidebar: SidebarModel,
}

impl NavigationModel {
    /// Build and validate the model from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns the first [`NavigationError`] found, in declaration order.
    pub fn from_config(config: &Config) -> Result<Self, NavigationError> {
        Self::new(&config.navbar, &config.sidebar)
    }

    /// Build and validate the model from navbar and sidebar definitions.
    ///
    /// Fails on the first empty label or target, empty section, or invalid
    /// `active_match` pattern. No partial model is returned.
    ///
    /// # Errors
    ///
    /// Returns the first [`NavigationError`] found, in declaration order.
    pub fn new(
        navbar: &[NavEntryConfig],
        sidebar: &[SidebarSectionConfig],
    ) -> Result<Self, NavigationError> {
        let entries = navbar
            .iter()
            .enumerate()
            .map(|(i, entry)| build_navbar_entry(i, entry))
            .collect::<Result<Vec<_>, _>>()?;

        let sections = sidebar
            .iter()
            .enumerate()
            .map(|(i, section)| build_section(i, section))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            navbar = entries.len(),
            sidebar = sections.len(),
            "Built navigation model"
        );

        Ok(Self {
            navbar: NavbarModel::new(entries),
            sidebar: SidebarModel::new(sections),
        })
    }

    /// Top navigation bar.
    pub fn navbar(&self) -> &NavbarModel {
        &self.navbar
    }

    /// Sidebar sections.
    pub fn sidebar(&self) -> &SidebarModel {
        &self.sidebar
    }

    /// Resolver bound to this model.
    pub fn resolver(&self) -> NavigationResolver<'_> {
        NavigationResolver::new(self)
    }

    /// Resolved navigation for `current_path`, ready for serialization.
    pub fn view(&self, current_path: &str) -> NavigationView {
        NavigationView::build(self, current_path)
    }
}

fn build_navbar_entry(index: usize, config: &NavEntryConfig) -> Result<NavEntry, NavigationError> {
    let location = locate("navbar", index, &config.label);
    require_non_empty(&config.label, "label", &location)?;
    require_non_empty(&config.target, "target", &location)?;

    let active_match = config
        .active_match
        .as_deref()
        .map(|pattern| {
            Regex::new(pattern).map_err(|source| NavigationError::InvalidPattern {
                location: location.clone(),
                pattern: pattern.to_owned(),
                source,
            })
        })
        .transpose()?;

    let entry = NavEntry::new(config.label.clone(), config.target.clone(), active_match);
    if entry.is_external() && entry.active_match().is_some() {
        tracing::warn!(
            entry = %location,
            link = entry.target(),
            "active_match on external entry is ignored"
        );
    }

    Ok(entry)
}

fn build_section(
    index: usize,
    config: &SidebarSectionConfig,
) -> Result<SidebarSection, NavigationError> {
    let location = locate("sidebar", index, &config.label);
    require_non_empty(&config.label, "label", &location)?;

    if config.items.is_empty() {
        return Err(NavigationError::EmptySection { location });
    }

    let items = config
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| build_sidebar_item(&location, i, item))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SidebarSection::new(
        config.label.clone(),
        config.collapsed,
        items,
    ))
}

fn build_sidebar_item(
    section: &str,
    index: usize,
    config: &SidebarItemConfig,
) -> Result<NavEntry, NavigationError> {
    let location = format!("{section} {}", locate("items", index, &config.label));
    require_non_empty(&config.label, "label", &location)?;
    require_non_empty(&config.target, "target", &location)?;
    Ok(NavEntry::new(
        config.label.clone(),
        config.target.clone(),
        None,
    ))
}

fn require_non_empty(
    value: &str,
    field: &'static str,
    location: &str,
) -> Result<(), NavigationError> {
    if value.trim().is_empty() {
        return Err(NavigationError::InvalidEntry {
            location: location.to_owned(),
            field,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn nav(label: &str, target: &str, active_match: Option<&str>) -> NavEntryConfig {
        NavEntryConfig {
            label: label.to_owned(),
            target: target.to_owned(),
            active_match: active_match.map(str::to_owned),
        }
    }

    fn section(label: &str, collapsed: bool, targets: &[&str]) -> SidebarSectionConfig {
        SidebarSectionConfig {
            label: label.to_owned(),
            collapsed,
            items: targets
                .iter()
                .map(|target| SidebarItemConfig {
                    label: format!("Item {target}"),
                    target: (*target).to_owned(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_entries_returned_in_configured_order() {
        let navbar = vec![
            nav("Blog", "https://faq.utnso.com.ar/blog", None),
            nav("Guías", "/guias/", Some("/(primeros-pasos|guias)/")),
            nav("Consultas", "/consultas", None),
        ];

        let model = NavigationModel::new(&navbar, &[]).unwrap();

        let labels: Vec<_> = model.navbar().entries().iter().map(NavEntry::label).collect();
        assert_eq!(labels, vec!["Blog", "Guías", "Consultas"]);
        assert_eq!(
            model.navbar().entries()[1]
                .active_match()
                .map(Regex::as_str),
            Some("/(primeros-pasos|guias)/")
        );
    }

    #[test]
    fn test_sections_returned_in_configured_order() {
        let sidebar = vec![
            section("Recursos", false, &["https://pkg.go.dev"]),
            section("Golang", true, &["/guias/programacion/introduction", "/guias/programacion/threads"]),
        ];

        let model = NavigationModel::new(&[], &sidebar).unwrap();

        let sections = model.sidebar().sections();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].label(), "Recursos");
        assert!(!sections[0].collapsed_by_default());
        assert_eq!(sections[1].label(), "Golang");
        assert!(sections[1].collapsed_by_default());
        let targets: Vec<_> = sections[1].items().iter().map(NavEntry::target).collect();
        assert_eq!(
            targets,
            vec!["/guias/programacion/introduction", "/guias/programacion/threads"]
        );
    }

    #[test]
    fn test_empty_navbar_label_rejected() {
        let navbar = vec![nav("Blog", "/blog", None), nav("", "/consultas", None)];

        let err = NavigationModel::new(&navbar, &[]).unwrap_err();

        assert!(
            matches!(err, NavigationError::InvalidEntry { field: "label", .. }),
            "got {err:?}"
        );
        assert_eq!(err.location(), "navbar[1]");
    }

    #[test]
    fn test_empty_navbar_target_rejected() {
        let navbar = vec![nav("Consultas", "", None)];

        let err = NavigationModel::new(&navbar, &[]).unwrap_err();

        assert!(matches!(err, NavigationError::InvalidEntry { field: "target", .. }));
        assert_eq!(err.location(), "navbar[0] \"Consultas\"");
    }

    #[test]
    fn test_whitespace_label_rejected() {
        let navbar = vec![nav("   ", "/consultas", None)];

        let err = NavigationModel::new(&navbar, &[]).unwrap_err();

        assert!(matches!(err, NavigationError::InvalidEntry { field: "label", .. }));
    }

    #[test]
    fn test_empty_section_rejected() {
        let sidebar = vec![
            section("Recursos", false, &["https://pkg.go.dev"]),
            section("Herramientas útiles", true, &[]),
        ];

        let err = NavigationModel::new(&[], &sidebar).unwrap_err();

        assert!(matches!(err, NavigationError::EmptySection { .. }), "got {err:?}");
        assert_eq!(err.location(), "sidebar[1] \"Herramientas útiles\"");
    }

    #[test]
    fn test_empty_sidebar_item_target_names_section_and_item() {
        let mut golang = section("Golang", true, &["/guias/programacion/introduction"]);
        golang.items.push(SidebarItemConfig {
            label: "Operadores".to_owned(),
            target: String::new(),
        });

        let err = NavigationModel::new(&[], &[golang]).unwrap_err();

        assert!(matches!(err, NavigationError::InvalidEntry { field: "target", .. }));
        assert_eq!(err.location(), "sidebar[0] \"Golang\" items[1] \"Operadores\"");
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let navbar = vec![nav("Guías", "/guias/", Some("/(primeros-pasos|guias/"))];

        let err = NavigationModel::new(&navbar, &[]).unwrap_err();

        match err {
            NavigationError::InvalidPattern {
                location, pattern, ..
            } => {
                assert_eq!(location, "navbar[0] \"Guías\"");
                assert_eq!(pattern, "/(primeros-pasos|guias/");
            }
            other => panic!("Expected InvalidPattern, got {other:?}"),
        }
    }

    #[test]
    fn test_first_defect_wins() {
        let navbar = vec![nav("", "", Some("("))];

        let err = NavigationModel::new(&navbar, &[]).unwrap_err();

        assert!(matches!(err, NavigationError::InvalidEntry { field: "label", .. }));
    }

    #[test]
    fn test_external_entry_with_pattern_is_accepted_but_inert() {
        let navbar = vec![nav("Blog", "https://faq.utnso.com.ar/blog", Some("blog"))];

        let model = NavigationModel::new(&navbar, &[]).unwrap();

        let blog = &model.navbar().entries()[0];
        assert!(blog.is_external());
        assert!(!blog.matches("/blog"));
    }

    #[test]
    fn test_from_config_uses_both_lists() {
        let config = Config {
            navbar: vec![nav("Consultas", "/consultas", None)],
            sidebar: vec![section("Golang", true, &["/guias/programacion/threads"])],
            config_path: None,
        };

        let model = NavigationModel::from_config(&config).unwrap();

        assert_eq!(model.navbar().entries().len(), 1);
        assert_eq!(model.sidebar().sections().len(), 1);
    }
}
