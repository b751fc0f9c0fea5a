use crate::types::Rect;

/// Partition a `width` x `height` image into `cols` x `rows` equal cells,
/// returned in row-major order.
///
/// Cell size is the floor of each dimension divided by the cell count, so
/// any remainder on the right and bottom edges is left out of every cell.
///
/// # Panics
///
/// Panics if `cols` or `rows` is zero.
pub fn grid_cells(width: u32, height: u32, cols: u32, rows: u32) -> Vec<Rect> {
    let cell_w = width / cols;
    let cell_h = height / rows;

    let mut cells = Vec::with_capacity((cols * rows) as usize);
    for row in 0..rows {
        for col in 0..cols {
            cells.push(Rect::new(col * cell_w, row * cell_h, cell_w, cell_h));
        }
    }
    cells
}

/// Largest square centered within a `width` x `height` image. Odd remainders
/// round the offsets down, biasing the square toward the top-left.
pub fn center_square(width: u32, height: u32) -> Rect {
    let side = width.min(height);
    let left = (width - side) / 2;
    let top = (height - side) / 2;
    Rect::new(left, top, side, side)
}
