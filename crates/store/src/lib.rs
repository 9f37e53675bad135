//! Content-addressed image storage for darkroom.
//!
//! The [`ImageStore`] engine stores an image together with a configured set
//! of resized copies, in a directory structure derived from the CRC-64
//! checksum of the original bytes. The last two characters of the checksum
//! form the first directory level. Given the checksum
//! `08446744073709551615` and sizes named `small` and `large`:
//!
//! ```text
//! <root>/15/08446744073709551615/original.jpg
//! <root>/15/08446744073709551615/small.jpg
//! <root>/15/08446744073709551615/large.jpg
//! ```
//!
//! Stores are idempotent and additive: re-storing the same bytes succeeds
//! and only writes variant files that do not exist yet, so growing the
//! configured size list and storing again fills in the new variants while
//! leaving existing files untouched. There is no rollback: a failure
//! partway through a store leaves the files written so far on disk.

pub mod engine;
pub mod error;
pub mod resolver;

pub use engine::ImageStore;
pub use error::{StoreError, StoreResult};
