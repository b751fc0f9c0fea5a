use image::DynamicImage;
use tracing::debug;

use crate::core::geometry::center_square;
use crate::core::processing::slice::crop_region;

/// Cut the largest centered square out of `image`.
pub fn center_crop(image: &DynamicImage) -> DynamicImage {
    let (width, height) = (image.width(), image.height());
    let square = center_square(width, height);
    debug!("Center crop of {}x{}: {}", width, height, square);
    crop_region(image, square)
}
