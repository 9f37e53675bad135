//! On-disk directory layout derived from a checksum.
//!
//! A stored object lives in a two-level directory: the last two characters
//! of its checksum form the first level, the full checksum the second.
//! Given the checksum `08446744073709551615` and a configured root:
//!
//! ```text
//! <root>/15/08446744073709551615/original.jpg
//! <root>/15/08446744073709551615/small.jpg
//! ```

use std::path::{Path, PathBuf};

/// Relative directory for a checksum: `<last-two-chars>/<checksum>`.
///
/// The checksum must be at least two characters long. The fixed-width
/// [`Checksum`](crate::Checksum) rendering upholds this; callers handing in
/// arbitrary strings check the length first.
pub fn structured_path(checksum: &str) -> PathBuf {
    debug_assert!(checksum.len() >= 2, "checksum shorter than two characters");
    let lvl1 = &checksum[checksum.len() - 2..];
    Path::new(lvl1).join(checksum)
}

/// Absolute directory for a checksum under the given root.
pub fn absolute_dir(root: &Path, checksum: &str) -> PathBuf {
    root.join(structured_path(checksum))
}
