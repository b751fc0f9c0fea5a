#![doc = r#"
symslice — cut a 3x3 symbol sprite sheet into named PNG tiles.

The sheet is split into nine equal cells (remainder pixels on the right and
bottom edges are dropped). Seven of them are stretched to 150x150 and saved
under their symbol names: `8`, `9`, `10`, `Q`, `K`, `A` and `Star`. Cells 6
and 8 are cut but never written. A second image is center-cropped to a
square, stretched to 150x150 and saved as `J`.

Quick start
-----------
```rust,no_run
use symslice::{SliceParams, run};

fn main() -> symslice::Result<()> {
    // all_symbols.png + j_symbol.png in the working directory -> ./*.png
    let report = run(&SliceParams::default())?;
    for file in &report.outputs {
        println!("{} -> {:?}", file.name, file.path);
    }
    Ok(())
}
```

Custom locations
----------------
```rust,no_run
use std::path::PathBuf;
use symslice::{ResizeFilter, SliceParams, run};

fn main() -> symslice::Result<()> {
    let params = SliceParams {
        sheet: PathBuf::from("assets/all_symbols.png"),
        secondary: PathBuf::from("assets/j_symbol.png"),
        output_dir: PathBuf::from("assets/symbols"),
        filter: ResizeFilter::Lanczos3,
    };
    run(&params)?;
    Ok(())
}
```

Error handling
--------------
All public functions return `symslice::Result<T>`. A failure stops the run
immediately; files written before it stay on disk.

```rust,no_run
use symslice::{Error, SliceParams, run};

fn main() {
    match run(&SliceParams::default()) {
        Ok(report) => println!("wrote {:?}", report.names()),
        Err(Error::Open { path, source }) => eprintln!("cannot read {path:?}: {source}"),
        Err(other) => eprintln!("error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — grid geometry, slicing, cropping and resizing primitives.
- [`io`] — image decoding and PNG output.
- [`types`] — `Rect`, `ResizeFilter` and the symbol table.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

pub use crate::core::params::SliceParams;
pub use error::{Error, Result};
pub use types::{J_SYMBOL, OUTPUT_SIDE, Rect, ResizeFilter, SYMBOL_MAPPING, SymbolMapping};

pub use api::{ExportReport, ExportedFile, export_center_crop, export_tiles, run};
