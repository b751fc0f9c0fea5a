use clap::Parser;
use std::path::PathBuf;

use symslice::ResizeFilter;

#[derive(Parser, Debug)]
#[command(name = "symslice", version, about = "Slice the symbol sheet into named tiles")]
pub struct CliArgs {
    /// 3x3 sprite sheet to slice
    #[arg(long, default_value = "all_symbols.png")]
    pub sheet: PathBuf,

    /// Image center-cropped into J.png
    #[arg(long, default_value = "j_symbol.png")]
    pub secondary: PathBuf,

    /// Directory receiving the output PNGs
    #[arg(short, long, default_value = "./")]
    pub output_dir: PathBuf,

    /// Resampling filter (nearest, bilinear, bicubic, lanczos3)
    #[arg(long, value_enum, default_value_t = ResizeFilter::Bicubic)]
    pub filter: ResizeFilter,

    /// JSON parameter file; replaces the location and filter flags
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
