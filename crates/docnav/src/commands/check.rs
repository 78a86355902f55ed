//! `docnav check` command implementation.

use std::path::Path;

use clap::Args;

use crate::commands::load_model;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Treat warnings (e.g. `active_match` on an external entry) as errors.
    #[arg(long)]
    strict: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or is invalid.
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let output = Output::new();
        let (config, model) = load_model(config_path)?;

        if let Some(path) = &config.config_path {
            output.info(&format!("Config: {}", path.display()));
        }

        let sections = model.sidebar().sections();
        let links: usize = sections.iter().map(|s| s.items().len()).sum();
        output.success(&format!(
            "Navigation OK: {} navbar entries, {} sidebar sections, {links} sidebar links",
            model.navbar().entries().len(),
            sections.len(),
        ));

        let inert: Vec<_> = model
            .navbar()
            .entries()
            .iter()
            .filter(|entry| entry.is_external() && entry.active_match().is_some())
            .collect();
        for entry in &inert {
            output.warning(&format!(
                "active_match on external entry \"{}\" is ignored",
                entry.label()
            ));
        }

        if self.strict && !inert.is_empty() {
            return Err(CliError::Validation(format!(
                "{} warning(s) in strict mode",
                inert.len()
            )));
        }

        Ok(())
    }
}
