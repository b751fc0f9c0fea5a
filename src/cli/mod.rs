//! Command Line Interface (CLI) layer for symslice.
//!
//! Defines argument parsing (`args`) and the orchestration logic (`runner`).
//! With no flags the binary reads `all_symbols.png` and `j_symbol.png` from
//! the working directory and writes the eight symbol PNGs next to them.
//!
//! If you are embedding symslice into another application, call
//! `symslice::run` instead of the CLI code.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
