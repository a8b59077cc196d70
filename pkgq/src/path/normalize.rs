//! Path normalization functions.
//!
//! Query paths arrive from users in whatever shape the shell left them:
//! tilde-prefixed, relative, or littered with `.` and `..` components. This
//! module normalizes them lexically, without consulting the filesystem:
//! - Expanding tilde (~) to the home directory
//! - Converting relative paths to absolute paths
//! - Resolving `.` and `..` components

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Expand tilde (~) to the home directory.
///
/// Handles `~` and `~/path`; the `~user` form is rejected.
///
/// # Errors
///
/// Returns an error if:
/// - The path contains invalid UTF-8
/// - The home directory cannot be determined
/// - The path uses `~user` syntax (not supported)
///
/// # Examples
///
/// ```
/// use pkgq::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/distfiles")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("distfiles"));
///
/// // Paths without a tilde pass through unchanged
/// let expanded = expand_tilde(Path::new("/usr/bin")).unwrap();
/// assert_eq!(expanded, Path::new("/usr/bin"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let Some(path_str) = path.to_str() else {
        return Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "Path contains invalid UTF-8".to_string(),
        });
    };
    let Some(rest) = path_str.strip_prefix('~') else {
        return Ok(path.to_path_buf());
    };

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Cannot determine home directory".to_string(),
    })?;

    if rest.is_empty() {
        Ok(home)
    } else if let Some(tail) = rest.strip_prefix('/').or_else(|| rest.strip_prefix('\\')) {
        Ok(home.join(tail))
    } else {
        Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Resolve `.` and `..` components in a path.
///
/// This is a purely lexical operation; symlinks are not consulted.
///
/// # Errors
///
/// Returns an error if the path contains enough `..` components to escape
/// the root directory.
///
/// # Examples
///
/// ```
/// use pkgq::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// let resolved = resolve_components(Path::new("/a/./b/../c")).unwrap();
/// assert_eq!(resolved, PathBuf::from("/a/c"));
/// ```
pub fn resolve_components(path: &Path) -> Result<PathBuf> {
    let mut stack: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::RootDir | Component::Prefix(_) | Component::Normal(_) => {
                stack.push(component);
            }
            Component::CurDir => {}
            Component::ParentDir => match stack.last() {
                Some(Component::Normal(_)) => {
                    stack.pop();
                }
                _ => {
                    return Err(Error::InvalidPath {
                        path: path.to_path_buf(),
                        reason: "Path contains too many '..' components (escapes root)"
                            .to_string(),
                    });
                }
            },
        }
    }

    Ok(stack.iter().map(|c| c.as_os_str()).collect())
}

/// Normalize a path to absolute form.
///
/// Tilde is expanded first, then relative paths are joined onto the current
/// directory, and finally `.` and `..` components are resolved.
///
/// # Errors
///
/// Returns an error if:
/// - Tilde expansion fails
/// - Current directory cannot be determined
/// - Path contains too many `..` components
///
/// # Examples
///
/// ```no_run
/// use pkgq::path::normalize::normalize;
/// use std::path::Path;
///
/// let normalized = normalize(Path::new("./etc/portage")).unwrap();
/// assert!(normalized.is_absolute());
/// ```
pub fn normalize(path: &Path) -> Result<PathBuf> {
    let expanded = expand_tilde(path)?;

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Cannot get current directory: {e}"),
        })?;
        cwd.join(expanded)
    };

    resolve_components(&absolute)
}
