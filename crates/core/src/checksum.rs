//! Content checksums and their fixed-width rendering.

use crc::{Crc, CRC_64_GO_ISO};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::CHECKSUM_WIDTH;

const CRC64: Crc<u64> = Crc::<u64>::new(&CRC_64_GO_ISO);

/// A content checksum: the CRC-64/ISO digest of an object's raw bytes,
/// rendered as a zero-padded 20-digit decimal string.
///
/// Identical content always yields the identical checksum. Distinct content
/// may collide, in which case the two payloads are treated as the same
/// stored object; the store does not special-case collisions.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Checksum(String);

impl Checksum {
    /// Compute the checksum of raw content.
    ///
    /// Pure and total: no I/O, no error conditions, empty input included.
    pub fn compute(data: &[u8]) -> Self {
        let crc = CRC64.checksum(data);
        Self(format!("{crc:020}"))
    }

    /// Create from an already-rendered checksum string, validating its shape.
    pub fn new(checksum: impl Into<String>) -> crate::Result<Self> {
        let checksum = checksum.into();
        if checksum.len() != CHECKSUM_WIDTH {
            return Err(crate::Error::InvalidChecksum(format!(
                "checksum must be {CHECKSUM_WIDTH} digits, got {}",
                checksum.len()
            )));
        }
        if !checksum.bytes().all(|b| b.is_ascii_digit()) {
            return Err(crate::Error::InvalidChecksum(format!(
                "checksum must be decimal digits: {checksum}"
            )));
        }
        Ok(Self(checksum))
    }

    /// Get the checksum string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The last two characters, used as the first directory level.
    pub fn dir_prefix(&self) -> &str {
        &self.0[CHECKSUM_WIDTH - 2..]
    }
}

impl fmt::Debug for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Checksum({self})")
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
