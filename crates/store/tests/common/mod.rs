#![allow(dead_code)]

pub mod mocks;

use darkroom_core::{Config, SizeSpec};
use std::path::{Path, PathBuf};

/// Payload used by the mock-capability tests.
pub const DATA: &[u8] = b"somedata";

/// CRC-64/ISO checksum of [`DATA`], rendered to 20 digits.
pub const CHECKSUM: &str = "06343430109577305132";

/// Root-relative object directory for [`CHECKSUM`].
pub fn object_dir(root: &Path) -> PathBuf {
    root.join("32").join(CHECKSUM)
}

/// The standard two-size configuration used across tests.
pub fn standard_sizes() -> Vec<SizeSpec> {
    vec![
        SizeSpec::new("small", 30, 30),
        SizeSpec::new("large", 300, 300),
    ]
}

pub fn config(root: &Path) -> Config {
    Config::new(root, standard_sizes())
}
