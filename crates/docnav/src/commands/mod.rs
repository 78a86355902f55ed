//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod export;
pub(crate) mod resolve;

use std::path::Path;

use docnav_config::Config;
use docnav_model::NavigationModel;

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use export::ExportArgs;
pub(crate) use resolve::ResolveArgs;

/// Load configuration and build the navigation model.
///
/// Any configuration defect aborts here, before a command produces output.
pub(crate) fn load_model(config_path: Option<&Path>) -> Result<(Config, NavigationModel), CliError> {
    let config = Config::load(config_path)?;
    let model = NavigationModel::from_config(&config)?;
    Ok((config, model))
}
