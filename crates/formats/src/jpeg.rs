//! JPEG codec.

use crate::error::{FormatError, FormatResult};
use crate::traits::Format;
use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, DynamicImage, ImageFormat};
use std::io::Write;

/// Encoding quality used for all JPEG output (the `image` crate default).
const JPEG_QUALITY: u8 = 75;

/// Decodes and encodes `image/jpeg`, producing `.jpg` files.
#[derive(Clone, Copy, Debug, Default)]
pub struct JpegFormat;

impl Format for JpegFormat {
    fn decodable_media_type(&self) -> &str {
        "image/jpeg"
    }

    fn decode(&self, data: &[u8]) -> FormatResult<DynamicImage> {
        image::load_from_memory_with_format(data, ImageFormat::Jpeg).map_err(FormatError::Decode)
    }

    fn encode(&self, image: &DynamicImage, out: &mut dyn Write) -> FormatResult<()> {
        encode_jpeg(image, out)
    }

    fn encoded_extension(&self) -> &str {
        "jpg"
    }
}

/// Encode an image as JPEG.
///
/// JPEG has no alpha channel and the encoder only accepts 8-bit luma and
/// RGB buffers, so anything else is converted to RGB8 first.
pub(crate) fn encode_jpeg(image: &DynamicImage, out: &mut dyn Write) -> FormatResult<()> {
    let encoder = JpegEncoder::new_with_quality(out, JPEG_QUALITY);
    match image.color() {
        ColorType::L8 | ColorType::Rgb8 => {
            image.write_with_encoder(encoder).map_err(FormatError::Encode)
        }
        _ => {
            let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
            rgb.write_with_encoder(encoder).map_err(FormatError::Encode)
        }
    }
}
