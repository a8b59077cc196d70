//! Path canonicalization functions.
//!
//! Two flavors of symlink resolution are provided:
//!
//! - [`canonicalize`]: strict resolution through the standard library, which
//!   requires the path to exist.
//! - [`realpath`]: total, best-effort resolution in the spirit of
//!   `realpath(3)`: dangling symlinks and non-existent paths resolve to a
//!   normalized form of wherever the chain leads, and symlink loops degrade
//!   to the last path reached instead of failing.

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::normalize;

/// Default bound on how many symlinks [`realpath`] will follow.
///
/// Matches the traditional kernel limit for nested symlinks.
pub const MAX_SYMLINK_DEPTH: usize = 40;

/// Attempt to canonicalize a path by following symlinks.
///
/// This function uses the standard library's `canonicalize` to resolve all
/// symlinks in the path. The path must exist for canonicalization to succeed.
///
/// # Errors
///
/// Returns an error if:
/// - The path does not exist (`PathNotFound`)
/// - Permission is denied (`PermissionDenied`)
/// - An I/O error occurs
///
/// # Examples
///
/// ```no_run
/// use pkgq::path::canonicalize::canonicalize;
/// use std::path::Path;
///
/// let canonical = canonicalize(Path::new("/tmp")).unwrap();
/// assert!(canonical.is_absolute());
/// ```
pub fn canonicalize(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::PathNotFound {
            path: path.to_path_buf(),
        },
        ErrorKind::PermissionDenied => Error::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    })
}

/// Resolve a path to its canonical form, best-effort.
///
/// Symlinks are followed to their ultimate target. Unlike [`canonicalize`],
/// the target does not have to exist: a dangling symlink resolves to a
/// normalized form of its target, and a path with no symlink component
/// resolves to itself (canonicalized when it exists, normalized otherwise).
/// Symlink loops and chains longer than `max_depth` stop resolving and
/// return the last path reached.
///
/// # Errors
///
/// Returns an error only for unexpected I/O failures, such as permission
/// being denied while reading a link. "Does not exist" is never an error.
///
/// # Examples
///
/// ```
/// use pkgq::path::canonicalize::{realpath, MAX_SYMLINK_DEPTH};
/// use std::path::Path;
///
/// // Non-existent paths resolve to themselves
/// let resolved = realpath(Path::new("/no/such/file"), MAX_SYMLINK_DEPTH).unwrap();
/// assert_eq!(resolved, Path::new("/no/such/file"));
/// ```
pub fn realpath(path: &Path, max_depth: usize) -> Result<PathBuf> {
    let mut visited = HashSet::new();
    let mut current = path.to_path_buf();
    let mut depth = 0;

    loop {
        if !visited.insert(current.clone()) || depth >= max_depth {
            // Loop or over-deep chain. realpath(3) semantics would error
            // here, but resolution must stay total for query helpers, so
            // stop following and hand back what we have.
            log::debug!(
                "symlink chain at {} not fully resolved (depth {depth})",
                current.display()
            );
            return Ok(best_effort(&current));
        }

        match fs::read_link(&current) {
            Ok(target) => {
                current = if target.is_absolute() {
                    target
                } else {
                    // Relative symlink - resolve relative to parent
                    match current.parent() {
                        Some(parent) => parent.join(target),
                        None => target,
                    }
                };
                depth += 1;
            }
            Err(e) if e.kind() == ErrorKind::InvalidInput => {
                // Not a symlink. Canonicalize so symlinks in parent
                // components are still resolved.
                return match fs::canonicalize(&current) {
                    Ok(canonical) => Ok(canonical),
                    Err(e) if e.kind() == ErrorKind::NotFound => Ok(best_effort(&current)),
                    Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                        Err(Error::PermissionDenied { path: current })
                    }
                    Err(e) => Err(Error::Io(e)),
                };
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                // Chain ended at a path that does not exist.
                return Ok(best_effort(&current));
            }
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                return Err(Error::PermissionDenied { path: current });
            }
            Err(e) => {
                return Err(Error::Io(e));
            }
        }
    }
}

/// Normalize a path that cannot be resolved through the filesystem.
///
/// Relative paths are absolutized against the current directory first. If
/// even lexical normalization fails (`..` escaping the root), the path is
/// returned untouched.
fn best_effort(path: &Path) -> PathBuf {
    let normalized = if path.is_absolute() {
        normalize::resolve_components(path)
    } else {
        normalize::normalize(path)
    };
    normalized.unwrap_or_else(|_| path.to_path_buf())
}
