//! Capability trait definitions.

use crate::error::FormatResult;
use image::DynamicImage;
use std::io::Write;

/// A decode/encode capability for one media type and file extension pairing.
///
/// A format declares the media type it can decode and the extension it
/// produces on encode; the two need not describe the same encoding (see
/// [`PngToJpeg`](crate::PngToJpeg), which decodes PNG and encodes JPEG).
/// Implementations hold no state and are invoked as pure functions.
pub trait Format: Send + Sync {
    /// The media type this format can decode, e.g. `image/jpeg`.
    fn decodable_media_type(&self) -> &str;

    /// Decode raw bytes into an in-memory image.
    fn decode(&self, data: &[u8]) -> FormatResult<DynamicImage>;

    /// Encode an in-memory image into the writer.
    fn encode(&self, image: &DynamicImage, out: &mut dyn Write) -> FormatResult<()>;

    /// File extension produced by [`encode`](Format::encode), without the dot.
    fn encoded_extension(&self) -> &str;
}

/// A capability producing resized renditions of an image.
pub trait Resizer: Send + Sync {
    /// Scale an image to the exact given dimensions. A width or height of 0
    /// is derived from the source aspect ratio.
    fn resize(&self, width: u32, height: u32, image: &DynamicImage) -> DynamicImage;

    /// Downscale an image to fit within the given bounds, preserving the
    /// aspect ratio. Returns the input unchanged when it already fits.
    fn thumbnail(&self, max_width: u32, max_height: u32, image: &DynamicImage) -> DynamicImage;
}
