//! Image codec and resizing capabilities for the darkroom store.
//!
//! This crate provides:
//! - The [`Format`] capability: decode bytes of one media type into an
//!   in-memory image, encode an in-memory image back to bytes
//! - The [`Resizer`] capability: bounded and exact-dimension renditions
//! - Concrete implementations backed by the pure-Rust `image` crate:
//!   JPEG, PNG-to-JPEG transcoding, and a Lanczos3 resizer
//!
//! The store holds an ordered set of formats; the first one whose media
//! type matches a request wins.

pub mod error;
pub mod jpeg;
pub mod png;
pub mod resizer;
pub mod traits;

pub use error::{FormatError, FormatResult};
pub use jpeg::JpegFormat;
pub use png::PngToJpeg;
pub use resizer::LanczosResizer;
pub use traits::{Format, Resizer};

/// The default format set, ordered: PNG-to-JPEG transcode, then plain JPEG.
pub fn default_formats() -> Vec<Box<dyn Format>> {
    vec![Box::new(PngToJpeg), Box::new(JpegFormat)]
}
