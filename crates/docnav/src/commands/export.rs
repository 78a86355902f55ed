//! `docnav export` command implementation.

use std::path::Path;

use clap::Args;
use docnav_model::NavigationModel;

use crate::commands::load_model;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    /// Resolve active state for this page path (default: no active page).
    #[arg(short, long, default_value = "")]
    path: String,

    /// Print compact JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,
}

impl ExportArgs {
    /// Execute the export command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or stdout fails.
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let output = Output::new();
        let (_config, model) = load_model(config_path)?;
        let json = self.render(&model)?;
        output.data(&json)?;
        Ok(())
    }

    /// Serialize the view for `self.path`.
    fn render(&self, model: &NavigationModel) -> Result<String, CliError> {
        let view = model.view(&self.path);
        tracing::debug!(path = %self.path, "Exporting navigation view");
        let json = if self.compact {
            serde_json::to_string(&view)?
        } else {
            serde_json::to_string_pretty(&view)?
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{NAVIGATION, write_config};
    use pretty_assertions::assert_eq;

    fn export(path: &str, compact: bool) -> serde_json::Value {
        let (_dir, config_path) = write_config(NAVIGATION);
        let (_config, model) = load_model(Some(&config_path)).unwrap();
        let args = ExportArgs {
            path: path.to_owned(),
            compact,
        };
        serde_json::from_str(&args.render(&model).unwrap()).unwrap()
    }

    #[test]
    fn test_export_marks_active_state() {
        let json = export("/primeros-pasos/tp0", false);

        assert_eq!(json["currentPath"], "/primeros-pasos/tp0");
        assert_eq!(json["navbar"][0]["active"], true);
        assert_eq!(json["navbar"][1]["active"], false);
        assert_eq!(json["sidebar"][0]["collapsed"], true);
    }

    #[test]
    fn test_export_opens_section_for_item() {
        let json = export("/guias/programacion/threads", true);

        assert_eq!(json["sidebar"][0]["collapsedByDefault"], true);
        assert_eq!(json["sidebar"][0]["collapsed"], false);
        assert_eq!(json["sidebar"][0]["items"][0]["active"], true);
    }

    #[test]
    fn test_export_compact_is_single_line() {
        let (_dir, config_path) = write_config(NAVIGATION);
        let (_config, model) = load_model(Some(&config_path)).unwrap();
        let args = ExportArgs {
            path: String::new(),
            compact: true,
        };

        let rendered = args.render(&model).unwrap();

        assert!(!rendered.contains('\n'));
    }
}
