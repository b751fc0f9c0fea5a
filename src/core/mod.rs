//! Core building blocks: grid and center-square geometry, pixel slicing,
//! cropping and fixed-size resizing, plus run parameters. These are internal
//! primitives consumed by the high-level `api` module.
pub mod geometry;
pub mod params;
pub mod processing;
