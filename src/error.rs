//! Crate-level error type and `Result` alias.
//! Converts underlying I/O, image codec, resize and parameter-file errors, and
//! provides semantic variants for tile lookup and degenerate crop regions.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to open image {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Image codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Resize error: {0}")]
    Resize(#[from] fast_image_resize::ResizeError),

    #[error("Parameter file error: {0}")]
    Params(#[from] serde_json::Error),

    #[error("Tile index {index} out of range, only {available} tiles available")]
    TileIndexOutOfRange { index: usize, available: usize },

    #[error("Cannot resize an empty region: {width}x{height}")]
    EmptyRegion { width: u32, height: u32 },
}
