//! Default Lanczos3 resizer.

use crate::traits::Resizer;
use image::imageops::FilterType;
use image::DynamicImage;

/// The default [`Resizer`], resampling with a Lanczos filter with radius 3.
#[derive(Clone, Copy, Debug, Default)]
pub struct LanczosResizer;

impl Resizer for LanczosResizer {
    fn resize(&self, width: u32, height: u32, image: &DynamicImage) -> DynamicImage {
        let (width, height) = match (width, height) {
            (0, 0) => return image.clone(),
            (0, h) => (derive_dimension(h, image.width(), image.height()), h),
            (w, 0) => (w, derive_dimension(w, image.height(), image.width())),
            (w, h) => (w, h),
        };
        image.resize_exact(width, height, FilterType::Lanczos3)
    }

    fn thumbnail(&self, max_width: u32, max_height: u32, image: &DynamicImage) -> DynamicImage {
        if max_width == 0 || max_height == 0 {
            return image.clone();
        }
        if image.width() <= max_width && image.height() <= max_height {
            return image.clone();
        }
        // resize() preserves the aspect ratio and fits within the bounds
        image.resize(max_width, max_height, FilterType::Lanczos3)
    }
}

/// Scale `fixed` by the source aspect ratio to fill in a zero dimension.
fn derive_dimension(fixed: u32, numerator: u32, denominator: u32) -> u32 {
    if denominator == 0 {
        return fixed;
    }
    let derived = (u64::from(fixed) * u64::from(numerator)) / u64::from(denominator);
    (derived as u32).max(1)
}
