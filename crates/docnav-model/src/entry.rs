//! Navigation link shared by the navbar and the sidebar.

use regex::Regex;

use crate::path;

/// One clickable navigation link.
///
/// Entries are built by [`NavigationModel`](crate::NavigationModel) from
/// validated configuration and cannot be changed afterwards.
#[derive(Clone, Debug)]
pub struct NavEntry {
    label: String,
    target: String,
    active_match: Option<Regex>,
    external: bool,
}

impl NavEntry {
    /// Create an entry from validated parts.
    pub(crate) fn new(label: String, target: String, active_match: Option<Regex>) -> Self {
        let external = path::is_external(&target);
        Self {
            label,
            target,
            active_match,
            external,
        }
    }

    /// Display text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Link target as configured.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Pattern overriding the prefix rule, if configured.
    pub fn active_match(&self) -> Option<&Regex> {
        self.active_match.as_ref()
    }

    /// Whether the target points outside the site.
    pub fn is_external(&self) -> bool {
        self.external
    }

    /// Whether this entry should be marked current for `current_path`.
    ///
    /// With an `active_match` pattern the pattern alone decides; it runs
    /// on the path without its query string and fragment, but keeps any
    /// trailing slash or `.html` suffix. Without a pattern, the path must
    /// equal the target or lie below it. External entries and empty paths
    /// never match.
    pub fn matches(&self, current_path: &str) -> bool {
        let page = path::strip_query(current_path);
        if self.external || page.is_empty() {
            return false;
        }
        match &self.active_match {
            Some(pattern) => pattern.is_match(page),
            None => path::is_path_prefix(&self.target, current_path),
        }
    }
}

impl PartialEq for NavEntry {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
            && self.target == other.target
            && self.active_match.as_ref().map(Regex::as_str)
                == other.active_match.as_ref().map(Regex::as_str)
    }
}

impl Eq for NavEntry {}
