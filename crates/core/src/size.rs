//! Size specifications for stored variants.

use serde::{Deserialize, Serialize};

/// A named bounding box that one variant of an image is rendered into.
///
/// Names must be unique within a configuration and must not collide with
/// the reserved [`ORIGINAL_NAME`](crate::ORIGINAL_NAME). A width or height
/// of 0 means "derive from the aspect ratio" for exact resizing, and acts
/// as a bound-only dimension for thumbnailing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeSpec {
    /// Variant name; becomes the file stem on disk.
    pub name: String,
    /// Maximum width in pixels.
    pub width: u32,
    /// Maximum height in pixels.
    pub height: u32,
}

impl SizeSpec {
    /// Create a new size specification.
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }
}
