//! `docnav resolve` command implementation.

use std::path::Path;

use clap::Args;

use crate::commands::load_model;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the resolve command.
#[derive(Args)]
pub(crate) struct ResolveArgs {
    /// Current page path (e.g. /guias/programacion/threads).
    path: String,
}

impl ResolveArgs {
    /// Execute the resolve command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or is invalid.
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let output = Output::new();
        let (_config, model) = load_model(config_path)?;
        let resolved = model.resolver().resolve(&self.path);

        output.heading(&format!("Path: {}", self.path));

        match resolved.active_entry {
            Some(entry) => output.success(&format!(
                "Navbar: {} ({})",
                entry.label(),
                entry.target()
            )),
            None => output.warning("Navbar: no active entry"),
        }

        if resolved.expanded_sections.is_empty() {
            output.info("Sidebar: all sections keep their default state");
        } else {
            output.info("Sidebar: expanded sections");
            for section in &resolved.expanded_sections {
                let note = if section.collapsed_by_default() {
                    " (collapsed by default)"
                } else {
                    ""
                };
                output.info(&format!("  - {}{note}", section.label()));
            }
        }

        for section in model.sidebar().sections() {
            if !resolved.is_expanded(section) {
                let state = if section.collapsed_by_default() {
                    "collapsed"
                } else {
                    "expanded"
                };
                output.detail(&format!("  {} [{state}]", section.label()));
            }
        }

        Ok(())
    }
}
