use image::DynamicImage;
use tracing::debug;

use crate::core::geometry::grid_cells;
use crate::types::{Rect, SHEET_GRID};

/// Copy `region` out of `image` into a new buffer of the same color type.
pub fn crop_region(image: &DynamicImage, region: Rect) -> DynamicImage {
    image.crop_imm(region.x, region.y, region.width, region.height)
}

/// Cut `sheet` into its 3x3 tiles in row-major order.
pub fn slice_sheet(sheet: &DynamicImage) -> Vec<DynamicImage> {
    let (cols, rows) = SHEET_GRID;

    grid_cells(sheet.width(), sheet.height(), cols, rows)
        .into_iter()
        .enumerate()
        .map(|(index, cell)| {
            debug!("Tile {}: {}", index, cell);
            crop_region(sheet, cell)
        })
        .collect()
}
