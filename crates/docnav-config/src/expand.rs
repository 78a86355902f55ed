//! `${VAR}` expansion for navigation labels and targets.
//!
//! - `${VAR}` expands to the value of VAR, errors if unset
//! - `${VAR:-default}` falls back to `default` when VAR is unset
//!
//! Strings without `${` are returned untouched, so bare `$segments` in
//! targets survive.

use crate::ConfigError;

/// Marker returned by the lookup closure for unset variables.
struct MissingVar;

/// Expand environment references in `value` in place.
///
/// `field` is only built when expansion fails, so callers can pass a
/// closure that formats the indexed location (`navbar[3].target`).
pub(crate) fn expand_in_place(
    value: &mut String,
    field: impl FnOnce() -> String,
) -> Result<(), ConfigError> {
    if !value.contains("${") {
        return Ok(());
    }

    let expanded = shellexpand::env_with_context(value.as_str(), |var| {
        std::env::var(var)
            .map(Some)
            .map_err(|_| MissingVar)
    })
    .map_err(|e| ConfigError::EnvVar {
        field: field(),
        message: format!("${{{}}} not set", e.var_name),
    })?
    .into_owned();

    *value = expanded;
    Ok(())
}
