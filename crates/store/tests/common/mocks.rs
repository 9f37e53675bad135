//! Mock capabilities for exercising engine semantics without real codecs.

use darkroom_formats::{Format, FormatError, FormatResult, Resizer};
use image::DynamicImage;
use std::io::Write;

/// A format that accepts any payload for one media type and writes a fixed
/// byte sequence on encode, so tests can tell which engine wrote a file.
pub struct MockFormat {
    pub media_type: &'static str,
    pub payload: Vec<u8>,
}

impl MockFormat {
    pub fn new(media_type: &'static str, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            media_type,
            payload: payload.into(),
        }
    }
}

impl Format for MockFormat {
    fn decodable_media_type(&self) -> &str {
        self.media_type
    }

    fn decode(&self, _data: &[u8]) -> FormatResult<DynamicImage> {
        Ok(DynamicImage::ImageLuma8(image::GrayImage::new(3, 3)))
    }

    fn encode(&self, _image: &DynamicImage, out: &mut dyn Write) -> FormatResult<()> {
        out.write_all(&self.payload)
            .map_err(|err| FormatError::Encode(image::ImageError::IoError(err)))
    }

    fn encoded_extension(&self) -> &str {
        "jpg"
    }
}

/// A format whose decode always rejects the payload.
pub struct RejectingFormat {
    pub media_type: &'static str,
}

impl Format for RejectingFormat {
    fn decodable_media_type(&self) -> &str {
        self.media_type
    }

    fn decode(&self, data: &[u8]) -> FormatResult<DynamicImage> {
        image::load_from_memory(data).map_err(FormatError::Decode)
    }

    fn encode(&self, _image: &DynamicImage, _out: &mut dyn Write) -> FormatResult<()> {
        unreachable!("decode never succeeds")
    }

    fn encoded_extension(&self) -> &str {
        "jpg"
    }
}

/// A format whose encode always fails, for partial-write tests.
pub struct FailingEncodeFormat {
    pub media_type: &'static str,
}

impl Format for FailingEncodeFormat {
    fn decodable_media_type(&self) -> &str {
        self.media_type
    }

    fn decode(&self, _data: &[u8]) -> FormatResult<DynamicImage> {
        Ok(DynamicImage::ImageLuma8(image::GrayImage::new(3, 3)))
    }

    fn encode(&self, _image: &DynamicImage, _out: &mut dyn Write) -> FormatResult<()> {
        Err(FormatError::Encode(image::ImageError::IoError(
            std::io::Error::other("encoder broke"),
        )))
    }

    fn encoded_extension(&self) -> &str {
        "jpg"
    }
}

/// A resizer that hands back the input for every request.
pub struct PassthroughResizer;

impl Resizer for PassthroughResizer {
    fn resize(&self, _width: u32, _height: u32, image: &DynamicImage) -> DynamicImage {
        image.clone()
    }

    fn thumbnail(&self, _max_width: u32, _max_height: u32, image: &DynamicImage) -> DynamicImage {
        image.clone()
    }
}
