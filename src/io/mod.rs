//! I/O layer: decoding source rasters and writing PNG outputs.
pub mod png;
pub use png::{load_image, write_png};
