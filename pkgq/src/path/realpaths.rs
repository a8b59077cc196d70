//! Symlink-aware extension of ordered path sets.
//!
//! The file-ownership query takes a list of paths from the user and must
//! match them against paths recorded by the package manager, which stores
//! real paths. If the user passes a symlink, the recorded owner is keyed by
//! the symlink's target, so the query list is extended with the resolved
//! form of every symlink whose target is not already in the list.
//!
//! The extension preserves the original list as a prefix, appends resolved
//! paths in encounter order, and never appends two entries for the same
//! canonical location. Running it again on its own output is a no-op.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::canonicalize::{realpath, MAX_SYMLINK_DEPTH};

/// Extend an ordered list of paths with the real paths of its symlinks.
///
/// For each input path, in order, the path is resolved to its canonical form
/// (symlinks followed to their ultimate target, best-effort for targets that
/// do not exist). If the resolved form is not already present - as a
/// verbatim input or as an earlier append - it is appended to the result.
///
/// The input is never modified; a new list is returned whose prefix is the
/// input in its original order.
///
/// # Errors
///
/// Returns an error only for unexpected I/O failures during resolution,
/// such as permission being denied while reading a link. Paths that do not
/// exist, including dangling symlinks, resolve best-effort and are never an
/// error.
///
/// # Examples
///
/// ```
/// use pkgq::path::extend_realpaths;
/// use std::path::PathBuf;
///
/// // Plain files resolve to themselves, so nothing is appended
/// let paths = [PathBuf::from("/no/such/f1"), PathBuf::from("/no/such/f2")];
/// let extended = extend_realpaths(&paths).unwrap();
/// assert_eq!(extended, paths);
/// ```
pub fn extend_realpaths<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<PathBuf>> {
    let mut result: Vec<PathBuf> = paths.iter().map(|p| p.as_ref().to_path_buf()).collect();

    // Known identities: every input verbatim, plus every append so far.
    let mut known: HashSet<PathBuf> = result.iter().cloned().collect();

    for path in paths {
        let real = realpath(path.as_ref(), MAX_SYMLINK_DEPTH)?;
        if known.insert(real.clone()) {
            result.push(real);
        }
    }

    Ok(result)
}

/// Extend a path list arriving over an untyped boundary.
///
/// Well-typed callers should use [`extend_realpaths`], where the "ordered
/// sequence of path strings" contract is enforced at compile time. This
/// variant accepts a deserialized JSON value and enforces the contract at
/// runtime: the value must be an array of strings.
///
/// # Errors
///
/// Returns `InvalidArgument` if the value is not an array (a bare string or
/// an object is rejected, not iterated), or if any element is not a string.
/// Resolution failures propagate as in [`extend_realpaths`].
///
/// # Examples
///
/// ```
/// use pkgq::path::extend_realpaths_value;
/// use serde_json::json;
///
/// let extended = extend_realpaths_value(&json!(["/no/such/f1"])).unwrap();
/// assert_eq!(extended.len(), 1);
///
/// // A bare string is a contract violation, not a one-element list
/// assert!(extend_realpaths_value(&json!("/no/such/f1")).is_err());
/// ```
pub fn extend_realpaths_value(value: &serde_json::Value) -> Result<Vec<PathBuf>> {
    let items = value.as_array().ok_or_else(|| Error::InvalidArgument {
        reason: format!(
            "expected an ordered sequence of path strings, got {}",
            value_type_name(value)
        ),
    })?;

    let mut paths = Vec::with_capacity(items.len());
    for item in items {
        let s = item.as_str().ok_or_else(|| Error::InvalidArgument {
            reason: format!("path entries must be strings, got {}", value_type_name(item)),
        })?;
        paths.push(PathBuf::from(s));
    }

    extend_realpaths(&paths)
}

fn value_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_empty_input() {
        let paths: Vec<PathBuf> = vec![];
        let extended = extend_realpaths(&paths).unwrap();
        assert!(extended.is_empty());
    }

    #[test]
    fn test_regular_files_append_nothing() {
        let dir = tempdir().unwrap();
        let dir_path = fs::canonicalize(dir.path()).unwrap();
        let f1 = dir_path.join("f1");
        let f2 = dir_path.join("f2");
        fs::write(&f1, "a").unwrap();
        fs::write(&f2, "b").unwrap();

        let paths = [f1.clone(), f2.clone()];
        let extended = extend_realpaths(&paths).unwrap();
        assert_eq!(extended, vec![f1, f2]);
    }

    #[test]
    fn test_nonexistent_paths_append_nothing() {
        let paths = [PathBuf::from("/no/such/f1"), PathBuf::from("/no/such/f2")];
        let extended = extend_realpaths(&paths).unwrap();
        assert_eq!(extended, paths);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_target_appended_once() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let dir_path = fs::canonicalize(dir.path()).unwrap();
        let target = dir_path.join("target");
        let link_a = dir_path.join("link_a");
        let link_b = dir_path.join("link_b");
        fs::write(&target, "x").unwrap();
        symlink(&target, &link_a).unwrap();
        symlink(&target, &link_b).unwrap();

        // Two symlinks to the same target: one append only
        let paths = [link_a.clone(), link_b.clone()];
        let extended = extend_realpaths(&paths).unwrap();
        assert_eq!(extended, vec![link_a, link_b, target]);
    }

    #[cfg(unix)]
    #[test]
    fn test_target_already_in_input_not_appended() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let dir_path = fs::canonicalize(dir.path()).unwrap();
        let target = dir_path.join("target");
        let link = dir_path.join("link");
        fs::write(&target, "x").unwrap();
        symlink(&target, &link).unwrap();

        let paths = [target.clone(), link.clone()];
        let extended = extend_realpaths(&paths).unwrap();
        assert_eq!(extended, vec![target, link]);
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_target_appended() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let dir_path = fs::canonicalize(dir.path()).unwrap();
        let missing = dir_path.join("missing");
        let link = dir_path.join("dangling");
        symlink(&missing, &link).unwrap();

        let paths = [link.clone()];
        let extended = extend_realpaths(&paths).unwrap();
        assert_eq!(extended, vec![link, missing]);
    }

    #[test]
    fn test_value_accepts_array_of_strings() {
        let extended = extend_realpaths_value(&json!(["/no/such/f1", "/no/such/f2"])).unwrap();
        assert_eq!(
            extended,
            vec![PathBuf::from("/no/such/f1"), PathBuf::from("/no/such/f2")]
        );
    }

    #[test]
    fn test_value_rejects_bare_string() {
        let err = extend_realpaths_value(&json!("/no/such/f1")).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_value_rejects_object() {
        let err = extend_realpaths_value(&json!({"path": "/no/such/f1"})).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_value_rejects_non_string_element() {
        let err = extend_realpaths_value(&json!(["/no/such/f1", 42])).unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
