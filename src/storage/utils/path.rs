// Key helpers for emulating directories over a flat namespace
use crate::storage::constants::PATH_SEPARATOR;

/// Normalize a directory prefix so it ends with exactly one separator.
///
/// Returns an empty string for the container root (`""`, `"/"`, `"//"`).
pub fn normalize_directory_prefix(path: &str) -> String {
    let trimmed = path.trim_matches(PATH_SEPARATOR);
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{trimmed}{PATH_SEPARATOR}")
    }
}

/// Key under which a directory marker for `path` is stored.
pub fn marker_key(path: &str) -> &str {
    path.trim_matches(PATH_SEPARATOR)
}

/// Raw prefix used when removing a directory tree. No separator is appended.
pub fn removal_prefix(path: &str) -> &str {
    path.trim_start_matches(PATH_SEPARATOR)
}

/// Name of `key` relative to `prefix` if it is an immediate child.
///
/// `None` when the key lies outside the prefix, names the prefix itself, or
/// sits deeper than one level below it.
pub fn immediate_child<'a>(key: &'a str, prefix: &str) -> Option<&'a str> {
    let name = key.strip_prefix(prefix)?;
    if name.is_empty() || name.contains(PATH_SEPARATOR) {
        None
    } else {
        Some(name)
    }
}
