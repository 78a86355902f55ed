//! Path comparison helpers for the prefix match rule.

/// Whether a target points outside the site.
///
/// A target is external when it starts with a URL scheme (`https:`,
/// `mailto:`) or is protocol-relative (`//host/path`).
pub(crate) fn is_external(target: &str) -> bool {
    if target.starts_with("//") {
        return true;
    }
    let Some((scheme, _)) = target.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Drop the query string and fragment from a path.
pub(crate) fn strip_query(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

/// Normalize a site path for comparison.
///
/// Drops the query string and fragment, a trailing `.html`, and a trailing
/// slash. The root path `/` is kept as is.
pub(crate) fn normalize(path: &str) -> &str {
    let path = strip_query(path);
    let path = path.strip_suffix(".html").unwrap_or(path);
    match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => path,
    }
}

/// Whether `current` equals `target` or lies below it.
///
/// Matching respects segment boundaries: `/consultas` covers
/// `/consultas/extra` but not `/consultas-viejas`.
pub(crate) fn is_path_prefix(target: &str, current: &str) -> bool {
    let target = normalize(target);
    let current = normalize(current);
    if target.is_empty() || current.is_empty() {
        return false;
    }
    current == target
        || current
            .strip_prefix(target)
            .is_some_and(|rest| rest.starts_with('/'))
}
