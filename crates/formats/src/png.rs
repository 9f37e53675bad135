//! PNG-to-JPEG transcoding format.

use crate::error::{FormatError, FormatResult};
use crate::jpeg::encode_jpeg;
use crate::traits::Format;
use image::{DynamicImage, ImageFormat};
use std::io::Write;

/// Decodes `image/png` and encodes JPEG, producing `.jpg` files.
///
/// An asymmetric format: PNG uploads are transcoded so an object directory
/// holds JPEG renditions regardless of the upload encoding.
#[derive(Clone, Copy, Debug, Default)]
pub struct PngToJpeg;

impl Format for PngToJpeg {
    fn decodable_media_type(&self) -> &str {
        "image/png"
    }

    fn decode(&self, data: &[u8]) -> FormatResult<DynamicImage> {
        image::load_from_memory_with_format(data, ImageFormat::Png).map_err(FormatError::Decode)
    }

    fn encode(&self, image: &DynamicImage, out: &mut dyn Write) -> FormatResult<()> {
        encode_jpeg(image, out)
    }

    fn encoded_extension(&self) -> &str {
        "jpg"
    }
}
