use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{DynamicImage, ImageError, ImageFormat};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Decode `path`, keeping its color type and bit depth.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let decoded = image::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "Loaded {:?}: {}x{} ({:?})",
        path,
        decoded.width(),
        decoded.height(),
        decoded.color()
    );
    Ok(decoded)
}

/// Write `image` as PNG, replacing any existing file at `output`.
pub fn write_png(output: &Path, image: &DynamicImage) -> Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    image
        .write_to(&mut writer, ImageFormat::Png)
        .map_err(|e| match e {
            ImageError::IoError(io) => Error::Io(io),
            other => Error::Image(other),
        })?;
    writer.flush()?;
    debug!("Wrote {:?} ({:?})", output, image.color());
    Ok(())
}
