use fast_image_resize::{FilterType, ResizeAlg, ResizeOptions, Resizer};
use image::DynamicImage;
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::ResizeFilter;

fn resize_alg(filter: ResizeFilter) -> ResizeAlg {
    match filter {
        ResizeFilter::Nearest => ResizeAlg::Nearest,
        ResizeFilter::Bilinear => ResizeAlg::Convolution(FilterType::Bilinear),
        ResizeFilter::Bicubic => ResizeAlg::Convolution(FilterType::CatmullRom),
        ResizeFilter::Lanczos3 => ResizeAlg::Convolution(FilterType::Lanczos3),
    }
}

/// Stretch `src` to exactly `target_cols` x `target_rows`, ignoring aspect ratio.
///
/// The result has the same color type and bit depth as `src`.
pub fn resize_image(
    src: &DynamicImage,
    target_cols: u32,
    target_rows: u32,
    filter: ResizeFilter,
) -> Result<DynamicImage> {
    let (original_cols, original_rows) = (src.width(), src.height());
    if original_cols == 0 || original_rows == 0 {
        return Err(Error::EmptyRegion {
            width: original_cols,
            height: original_rows,
        });
    }
    if target_cols == 0 || target_rows == 0 {
        return Err(Error::EmptyRegion {
            width: target_cols,
            height: target_rows,
        });
    }

    debug!(
        "Resizing {}x{} -> {}x{} ({}, {:?})",
        original_cols,
        original_rows,
        target_cols,
        target_rows,
        filter,
        src.color()
    );

    let resize_options = ResizeOptions::new().resize_alg(resize_alg(filter));
    let mut resizer = Resizer::new();

    let mut dst_image = DynamicImage::new(target_cols, target_rows, src.color());
    resizer.resize(src, &mut dst_image, &resize_options)?;

    Ok(dst_image)
}
