//! Shared types used across symslice.
//! Includes the pixel-space `Rect`, the `ResizeFilter` choice and the fixed
//! index-to-symbol table that names the exported tiles.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Grid used to partition the sheet, as (columns, rows).
pub const SHEET_GRID: (u32, u32) = (3, 3);

/// Side length in pixels of every exported image.
pub const OUTPUT_SIDE: u32 = 150;

/// Ordered `(tile index, symbol name)` pairs.
pub type SymbolMapping = &'static [(usize, &'static str)];

/// Row-major tile index to symbol name. Tiles 6 and 8 have no symbol.
pub const SYMBOL_MAPPING: SymbolMapping = &[
    (0, "8"),
    (1, "9"),
    (2, "10"),
    (3, "Q"),
    (4, "K"),
    (5, "A"),
    (7, "Star"),
];

/// Name of the symbol cut from the secondary image.
pub const J_SYMBOL: &str = "J";

/// Axis-aligned pixel rectangle covering `[x, x + width) x [y, y + height)`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{},{},{},{})",
            self.x,
            self.y,
            self.right(),
            self.bottom()
        )
    }
}

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ResizeFilter {
    Nearest,
    Bilinear,
    #[default]
    Bicubic,
    Lanczos3,
}

impl std::fmt::Display for ResizeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResizeFilter::Nearest => write!(f, "Nearest"),
            ResizeFilter::Bilinear => write!(f, "Bilinear"),
            ResizeFilter::Bicubic => write!(f, "Bicubic"),
            ResizeFilter::Lanczos3 => write!(f, "Lanczos3"),
        }
    }
}
