//! Navigation model construction errors.

/// Error returned when configuration cannot be turned into a model.
///
/// Every variant carries the location of the offending entry, formatted as
/// `navbar[2] "Consultas"` or `sidebar[3] "Golang" items[4] "Operadores"`.
#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    /// An entry or section has an empty required field.
    #[error("Invalid entry at {location}: {field} cannot be empty")]
    InvalidEntry {
        /// Location of the entry.
        location: String,
        /// Name of the empty field (`label` or `target`).
        field: &'static str,
    },
    /// A sidebar section has no items.
    #[error("Empty section at {location}: at least one item is required")]
    EmptySection {
        /// Location of the section.
        location: String,
    },
    /// An `active_match` value is not a valid regular expression.
    #[error("Invalid active_match at {location}: {source}")]
    InvalidPattern {
        /// Location of the entry.
        location: String,
        /// Pattern as written in the configuration.
        pattern: String,
        /// Regex compilation error.
        #[source]
        source: regex::Error,
    },
}

impl NavigationError {
    /// Location of the offending entry or section.
    pub fn location(&self) -> &str {
        match self {
            Self::InvalidEntry { location, .. }
            | Self::EmptySection { location }
            | Self::InvalidPattern { location, .. } => location,
        }
    }
}

/// Format an indexed location, appending the label when there is one.
pub(crate) fn locate(kind: &str, index: usize, label: &str) -> String {
    if label.is_empty() {
        format!("{kind}[{index}]")
    } else {
        format!("{kind}[{index}] \"{label}\"")
    }
}
