//! Variant path resolution over the on-disk layout.
//!
//! A variant is found by listing the object directory and matching file
//! stems exactly: the name `small` matches `small.jpg` but never
//! `smallish.jpg`, and the lookup name `smal` matches nothing. Matching is
//! case-sensitive. Absence (of the object directory or of a matching file)
//! is reported as [`StoreError::NotFound`]; every other listing failure is
//! an [`StoreError::Io`].

use crate::error::{StoreError, StoreResult};
use darkroom_core::layout;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Resolve the root-relative path of a named variant.
///
/// Returns the first non-directory entry of the object directory whose
/// file stem equals `name`. Checksum strings shorter than two characters
/// cannot address any directory and resolve to `NotFound`.
pub fn resolve_variant_path(root: &Path, checksum: &str, name: &str) -> StoreResult<PathBuf> {
    if checksum.len() < 2 {
        return Err(StoreError::NotFound(checksum.to_string()));
    }
    let rel_dir = layout::structured_path(checksum);
    let entries = match fs::read_dir(root.join(&rel_dir)) {
        Ok(entries) => entries,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(StoreError::NotFound(checksum.to_string()));
        }
        Err(err) => return Err(StoreError::Io(err)),
    };

    for entry in entries {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            continue;
        }
        let file_name = entry.file_name();
        if stem_matches(&file_name, name) {
            return Ok(rel_dir.join(file_name));
        }
    }
    Err(StoreError::NotFound(format!("{checksum}/{name}")))
}

/// Check that every named variant exists for the checksum.
///
/// Total over arbitrary checksum strings: a missing object directory is
/// `Ok(false)`, never an error. Short-circuits on the first missing name.
pub fn has_variants<S: AsRef<str>>(
    root: &Path,
    checksum: &str,
    names: &[S],
) -> StoreResult<bool> {
    if checksum.len() < 2 {
        return Ok(false);
    }
    let dir = layout::absolute_dir(root, checksum);
    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(false),
        Err(err) => return Err(StoreError::Io(err)),
    };

    let mut stems = Vec::new();
    for entry in entries {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            continue;
        }
        if let Some(stem) = Path::new(&entry.file_name()).file_stem() {
            stems.push(stem.to_os_string());
        }
    }

    for name in names {
        if !stems.iter().any(|stem| stem == name.as_ref()) {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Exact match of a file name with its extension stripped.
fn stem_matches(file_name: &std::ffi::OsStr, name: &str) -> bool {
    Path::new(file_name)
        .file_stem()
        .map(|stem| stem == name)
        .unwrap_or(false)
}
