//! High-level library API: slice the sheet into named tiles, export the
//! center-cropped `J` symbol, or run the whole procedure with `run`.
//! Prefer these entrypoints over the low-level processing modules.
use std::fs;
use std::path::PathBuf;

use image::DynamicImage;
use tracing::info;

use crate::core::params::SliceParams;
use crate::core::processing::crop::center_crop;
use crate::core::processing::resize::resize_image;
use crate::core::processing::slice::slice_sheet;
use crate::error::{Error, Result};
use crate::io::{load_image, write_png};
use crate::types::{J_SYMBOL, OUTPUT_SIDE, SHEET_GRID, SYMBOL_MAPPING, SymbolMapping};

/// One PNG written to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub name: String,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Everything a run wrote, in write order.
#[derive(Debug, Clone, Default)]
pub struct ExportReport {
    pub outputs: Vec<ExportedFile>,
}

impl ExportReport {
    pub fn names(&self) -> Vec<&str> {
        self.outputs.iter().map(|o| o.name.as_str()).collect()
    }
}

fn export_image(image: &DynamicImage, name: &str, params: &SliceParams) -> Result<ExportedFile> {
    let resized = resize_image(image, OUTPUT_SIDE, OUTPUT_SIDE, params.filter)?;
    let path = params.output_path(name);
    let (width, height) = (resized.width(), resized.height());
    write_png(&path, &resized)?;
    info!("Saved {} -> {:?}", name, path);
    Ok(ExportedFile {
        name: name.to_string(),
        path,
        width,
        height,
    })
}

/// Resize each mapped tile to the output size and write it as `<name>.png`,
/// in table order. Tiles not named in `mapping` are skipped.
///
/// Stops at the first failure; files already written stay on disk.
pub fn export_tiles(
    tiles: &[DynamicImage],
    mapping: SymbolMapping,
    params: &SliceParams,
) -> Result<Vec<ExportedFile>> {
    fs::create_dir_all(&params.output_dir)?;

    let mut written = Vec::with_capacity(mapping.len());
    for &(index, name) in mapping {
        let tile = tiles.get(index).ok_or(Error::TileIndexOutOfRange {
            index,
            available: tiles.len(),
        })?;
        written.push(export_image(tile, name, params)?);
    }
    Ok(written)
}

/// Center-crop `image` to a square, resize it and write it as `<name>.png`.
pub fn export_center_crop(
    image: &DynamicImage,
    name: &str,
    params: &SliceParams,
) -> Result<ExportedFile> {
    fs::create_dir_all(&params.output_dir)?;
    let square = center_crop(image);
    export_image(&square, name, params)
}

/// Slice the sheet into the seven named tiles, then export the `J` symbol
/// from the secondary image.
pub fn run(params: &SliceParams) -> Result<ExportReport> {
    info!("Slicing sheet {:?}", params.sheet);
    let sheet = load_image(&params.sheet)?;
    let tiles = slice_sheet(&sheet);
    let (cols, rows) = SHEET_GRID;
    info!(
        "Cut {} tiles of {}x{}",
        tiles.len(),
        sheet.width() / cols,
        sheet.height() / rows
    );

    let mut outputs = export_tiles(&tiles, SYMBOL_MAPPING, params)?;

    info!("Cropping secondary image {:?}", params.secondary);
    let secondary = load_image(&params.secondary)?;
    outputs.push(export_center_crop(&secondary, J_SYMBOL, params)?);

    info!("Wrote {} files to {:?}", outputs.len(), params.output_dir);
    Ok(ExportReport { outputs })
}
