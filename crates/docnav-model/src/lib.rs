//! Navbar and sidebar model with active-route resolution.
//!
//! This crate provides:
//! - [`NavigationModel`]: validated navbar and sidebar built once from
//!   [`docnav_config::Config`]
//! - [`resolve_active_nav_entry`] / [`resolve_expanded_sections`]: which
//!   navbar entry is current and which sidebar sections are forced open
//! - [`NavigationView`]: both results merged into a serializable view for
//!   navigation widgets
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use docnav_config::Config;
//! use docnav_model::NavigationModel;
//!
//! let config = Config::parse(r#"
//! [[navbar]]
//! label = "Guías"
//! target = "/guias/"
//! active_match = "/(primeros-pasos|guias)/"
//!
//! [[sidebar]]
//! label = "Golang"
//! collapsed = true
//!
//! [[sidebar.items]]
//! label = "Rutinas o ¿Hilos?"
//! target = "/guias/programacion/threads"
//! "#)?;
//! let model = NavigationModel::from_config(&config)?;
//!
//! let resolved = model.resolver().resolve("/guias/programacion/threads");
//! assert_eq!(resolved.active_entry.map(|e| e.label()), Some("Guías"));
//! assert_eq!(resolved.expanded_sections.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! # External links
//!
//! Targets with a URL scheme or a `//` prefix point outside the site and are
//! never marked active.

mod entry;
mod error;
mod model;
mod navbar;
mod path;
mod resolver;
mod sidebar;
mod view;

pub use entry::NavEntry;
pub use error::NavigationError;
pub use model::NavigationModel;
pub use navbar::NavbarModel;
pub use resolver::{
    NavigationResolver, ResolvedNavigation, resolve_active_nav_entry, resolve_expanded_sections,
};
pub use sidebar::{SidebarModel, SidebarSection};
pub use view::{LinkView, NavigationView, SectionView};
