//! Core domain types for the darkroom image store.
//!
//! This crate defines the data model shared by the other crates:
//! - Content checksums and their fixed-width decimal rendering
//! - The two-level on-disk directory layout derived from a checksum
//! - Size specifications for stored variants
//! - Store configuration and its validation

pub mod checksum;
pub mod config;
pub mod error;
pub mod layout;
pub mod size;

pub use checksum::Checksum;
pub use config::Config;
pub use error::{Error, Result};
pub use size::SizeSpec;

/// Reserved variant name under which the unmodified image is stored.
pub const ORIGINAL_NAME: &str = "original";

/// Width of a rendered checksum string, in decimal digits.
pub const CHECKSUM_WIDTH: usize = 20;
