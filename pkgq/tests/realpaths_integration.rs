//! Integration tests for symlink-aware path list extension.
//!
//! This test suite verifies, against a real filesystem:
//! - The original input list is always preserved as a prefix, in order
//! - Symlink targets already present in the list are not appended
//! - Missing targets are appended once, in encounter order
//! - Extension is idempotent
//! - The untyped (JSON) boundary rejects anything that is not an array of
//!   strings

use std::fs;
use std::path::PathBuf;

use pkgq::path::{extend_realpaths, extend_realpaths_value};
use serde_json::json;
use tempfile::TempDir;

/// A scratch directory whose path is already canonical, so regular files
/// inside it resolve to themselves.
fn canonical_tempdir() -> (TempDir, PathBuf) {
    let dir = TempDir::with_prefix("pkgq-test").unwrap();
    let canonical = fs::canonicalize(dir.path()).unwrap();
    (dir, canonical)
}

#[cfg(unix)]
#[test]
fn test_symlink_realpaths_are_extended() {
    // Three regular files and two symlinks: sym1 -> f1, sym2 -> f3.
    // Passing [f1, f2, sym1, sym2]: sym1's target is already in the list,
    // so nothing is appended for it; sym2's target f3 is absent, so it is
    // appended once, at the end.
    use std::os::unix::fs::symlink;

    let (_dir, root) = canonical_tempdir();
    let f1 = root.join("f1");
    let f2 = root.join("f2");
    let f3 = root.join("f3");
    for f in [&f1, &f2, &f3] {
        fs::write(f, "contents").unwrap();
    }
    let sym1 = root.join("sym1");
    let sym2 = root.join("sym2");
    symlink(&f1, &sym1).unwrap();
    symlink(&f3, &sym2).unwrap();

    let paths = [f1.clone(), f2.clone(), sym1.clone(), sym2.clone()];
    let extended = extend_realpaths(&paths).unwrap();

    assert_eq!(extended.len(), 5);
    assert_eq!(extended[0], f1);
    assert_eq!(extended[1], f2);
    assert_eq!(extended[2], sym1);
    assert_eq!(extended[3], sym2);
    assert_eq!(extended[4], f3);
}

#[cfg(unix)]
#[test]
fn test_extension_is_idempotent() {
    use std::os::unix::fs::symlink;

    let (_dir, root) = canonical_tempdir();
    let f1 = root.join("f1");
    let f3 = root.join("f3");
    fs::write(&f1, "a").unwrap();
    fs::write(&f3, "b").unwrap();
    let sym1 = root.join("sym1");
    let sym2 = root.join("sym2");
    symlink(&f1, &sym1).unwrap();
    symlink(&f3, &sym2).unwrap();

    let paths = [f1, sym1, sym2];
    let once = extend_realpaths(&paths).unwrap();
    let twice = extend_realpaths(&once).unwrap();

    // Every canonical target is already present after the first pass
    assert_eq!(once, twice);
}

#[cfg(unix)]
#[test]
fn test_chained_symlinks_resolve_to_final_target() {
    use std::os::unix::fs::symlink;

    let (_dir, root) = canonical_tempdir();
    let target = root.join("target");
    fs::write(&target, "x").unwrap();
    let inner = root.join("inner");
    let outer = root.join("outer");
    symlink(&target, &inner).unwrap();
    symlink(&inner, &outer).unwrap();

    let extended = extend_realpaths(&[outer.clone()]).unwrap();
    assert_eq!(extended, vec![outer, target]);
}

#[cfg(unix)]
#[test]
fn test_appends_follow_encounter_order() {
    use std::os::unix::fs::symlink;

    let (_dir, root) = canonical_tempdir();
    let t1 = root.join("t1");
    let t2 = root.join("t2");
    fs::write(&t1, "1").unwrap();
    fs::write(&t2, "2").unwrap();
    let sym_b = root.join("sym_b");
    let sym_a = root.join("sym_a");
    symlink(&t2, &sym_b).unwrap();
    symlink(&t1, &sym_a).unwrap();

    // sym_b comes first in the input, so t2 is appended before t1
    let extended = extend_realpaths(&[sym_b.clone(), sym_a.clone()]).unwrap();
    assert_eq!(extended, vec![sym_b, sym_a, t2, t1]);
}

#[cfg(unix)]
#[test]
fn test_input_untouched_by_extension() {
    use std::os::unix::fs::symlink;

    let (_dir, root) = canonical_tempdir();
    let target = root.join("target");
    fs::write(&target, "x").unwrap();
    let link = root.join("link");
    symlink(&target, &link).unwrap();

    let paths = [link.clone()];
    let _ = extend_realpaths(&paths).unwrap();
    assert_eq!(paths, [link]);
}

#[test]
fn test_value_boundary_accepts_array() {
    let (_dir, root) = canonical_tempdir();
    let f1 = root.join("f1");
    fs::write(&f1, "a").unwrap();

    let value = json!([f1.to_str().unwrap()]);
    let extended = extend_realpaths_value(&value).unwrap();
    assert_eq!(extended, vec![f1]);
}

#[test]
fn test_value_boundary_rejects_bare_string() {
    let err = extend_realpaths_value(&json!("str")).unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(format!("{err}").contains("invalid argument"));
}

#[test]
fn test_value_boundary_rejects_unordered_collection() {
    // A JSON object is the closest analogue of an unordered set; it must
    // be rejected rather than iterated.
    let err = extend_realpaths_value(&json!({})).unwrap_err();
    assert!(err.is_invalid_argument());
}
