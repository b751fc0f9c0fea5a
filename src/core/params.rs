use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::ResizeFilter;

/// Run parameters suitable for config files and CLI overrides.
///
/// The grid, the symbol table and the output size are fixed; only the file
/// locations and the resampling filter can be changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliceParams {
    /// 3x3 sprite sheet to slice
    pub sheet: PathBuf,
    /// Image center-cropped into the `J` symbol
    pub secondary: PathBuf,
    /// Directory receiving every output PNG; created if missing
    pub output_dir: PathBuf,
    pub filter: ResizeFilter,
}

impl Default for SliceParams {
    fn default() -> Self {
        Self {
            sheet: PathBuf::from("all_symbols.png"),
            secondary: PathBuf::from("j_symbol.png"),
            output_dir: PathBuf::from("./"),
            filter: ResizeFilter::Bicubic,
        }
    }
}

impl SliceParams {
    /// Load parameters from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Path of the PNG written for `name`.
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(format!("{name}.png"))
    }
}
