use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use image::{ColorType, GrayImage, ImageBuffer, Luma, Rgba, RgbaImage};
use symslice::{Error, SliceParams, run};

/// Each 3x3 cell of the sheet gets its own flat color, keyed by its index.
fn cell_color(index: u32) -> Rgba<u8> {
    Rgba([(index * 25) as u8, 255 - (index * 25) as u8, 128, 255])
}

/// Flat regions may pick up one unit of rounding from the resize kernel.
fn is_close(p: &Rgba<u8>, q: Rgba<u8>) -> bool {
    p.0.iter().zip(q.0).all(|(&a, b)| a.abs_diff(b) <= 1)
}

fn write_sheet(path: &Path, width: u32, height: u32) {
    let (cw, ch) = (width / 3, height / 3);
    let sheet = RgbaImage::from_fn(width, height, |x, y| {
        let col = (x / cw).min(2);
        let row = (y / ch).min(2);
        cell_color(row * 3 + col)
    });
    sheet.save(path).unwrap();
}

fn write_secondary(path: &Path, width: u32, height: u32, side_margin: u32) {
    let image = RgbaImage::from_fn(width, height, |x, _| {
        if x < side_margin || x >= width - side_margin {
            Rgba([255, 0, 0, 255])
        } else {
            Rgba([0, 0, 255, 255])
        }
    });
    image.save(path).unwrap();
}

fn setup(dir: &Path) -> SliceParams {
    let params = SliceParams {
        sheet: dir.join("all_symbols.png"),
        secondary: dir.join("j_symbol.png"),
        output_dir: dir.join("out"),
        ..SliceParams::default()
    };
    write_sheet(&params.sheet, 300, 300);
    write_secondary(&params.secondary, 400, 300, 50);
    params
}

fn output_names(dir: &Path) -> BTreeSet<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn writes_exactly_the_eight_symbols() {
    let tmp = tempfile::tempdir().unwrap();
    let params = setup(tmp.path());

    let report = run(&params).unwrap();
    assert_eq!(
        report.names(),
        vec!["8", "9", "10", "Q", "K", "A", "Star", "J"]
    );

    let expected: BTreeSet<String> = ["8", "9", "10", "Q", "K", "A", "Star", "J"]
        .iter()
        .map(|n| format!("{n}.png"))
        .collect();
    assert_eq!(output_names(&params.output_dir), expected);

    for file in &report.outputs {
        let img = image::open(&file.path).unwrap();
        assert_eq!((img.width(), img.height()), (150, 150), "{}", file.name);
    }
}

#[test]
fn center_tile_becomes_k() {
    let tmp = tempfile::tempdir().unwrap();
    let params = setup(tmp.path());
    run(&params).unwrap();

    let k = image::open(params.output_dir.join("K.png")).unwrap().to_rgba8();
    assert!(k.pixels().all(|p| is_close(p, cell_color(4))));

    let star = image::open(params.output_dir.join("Star.png")).unwrap().to_rgba8();
    assert!(star.pixels().all(|p| is_close(p, cell_color(7))));
}

#[test]
fn j_is_cut_from_the_center() {
    let tmp = tempfile::tempdir().unwrap();
    let params = setup(tmp.path());
    run(&params).unwrap();

    // the 50px red margins of the 400x300 source fall outside [50,0,350,300)
    let j = image::open(params.output_dir.join("J.png")).unwrap().to_rgba8();
    assert!(j.pixels().all(|p| is_close(p, Rgba([0, 0, 255, 255]))));
}

#[test]
fn rerun_is_byte_stable() {
    let tmp = tempfile::tempdir().unwrap();
    let params = setup(tmp.path());

    run(&params).unwrap();
    let first = fs::read(params.output_dir.join("Q.png")).unwrap();
    let first_j = fs::read(params.output_dir.join("J.png")).unwrap();

    run(&params).unwrap();
    assert_eq!(fs::read(params.output_dir.join("Q.png")).unwrap(), first);
    assert_eq!(fs::read(params.output_dir.join("J.png")).unwrap(), first_j);
    assert_eq!(output_names(&params.output_dir).len(), 8);
}

#[test]
fn uneven_sheet_still_yields_square_outputs() {
    let tmp = tempfile::tempdir().unwrap();
    let params = setup(tmp.path());
    write_sheet(&params.sheet, 301, 257);
    write_secondary(&params.secondary, 99, 99, 0);

    let report = run(&params).unwrap();
    assert!(
        report
            .outputs
            .iter()
            .all(|f| (f.width, f.height) == (150, 150))
    );
}

#[test]
fn missing_sheet_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let params = SliceParams {
        sheet: tmp.path().join("nope.png"),
        output_dir: tmp.path().join("out"),
        ..SliceParams::default()
    };

    let err = run(&params).unwrap_err();
    assert!(matches!(err, Error::Open { .. }));
    assert!(!params.output_dir.exists());
}

#[test]
fn missing_secondary_keeps_written_tiles() {
    let tmp = tempfile::tempdir().unwrap();
    let params = setup(tmp.path());
    fs::remove_file(&params.secondary).unwrap();

    let err = run(&params).unwrap_err();
    assert!(matches!(err, Error::Open { .. }));

    let names = output_names(&params.output_dir);
    assert_eq!(names.len(), 7);
    assert!(!names.contains("J.png"));
}

#[test]
fn sheet_smaller_than_grid_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let params = setup(tmp.path());
    RgbaImage::new(2, 2).save(&params.sheet).unwrap();

    let err = run(&params).unwrap_err();
    assert!(matches!(err, Error::EmptyRegion { .. }));
}

#[test]
fn unwritable_output_is_an_io_error() {
    let tmp = tempfile::tempdir().unwrap();
    let params = setup(tmp.path());
    // a directory squatting on K.png cannot be replaced by a file
    fs::create_dir_all(params.output_dir.join("K.png")).unwrap();

    let err = run(&params).unwrap_err();
    assert!(matches!(err, Error::Io(_)), "{err:?}");

    let names = output_names(&params.output_dir);
    for written in ["8.png", "9.png", "10.png", "Q.png"] {
        assert!(names.contains(written), "{written} missing");
    }
    assert!(!names.contains("A.png"));
    assert!(!names.contains("J.png"));
}

#[test]
fn grayscale_and_deep_sources_keep_their_format() {
    let tmp = tempfile::tempdir().unwrap();
    let params = setup(tmp.path());
    GrayImage::from_fn(90, 90, |x, y| Luma([((y / 30) * 3 + x / 30) as u8 * 20]))
        .save(&params.sheet)
        .unwrap();
    let deep: ImageBuffer<Luma<u16>, Vec<u16>> = ImageBuffer::from_pixel(80, 60, Luma([50_000]));
    deep.save(&params.secondary).unwrap();

    run(&params).unwrap();

    let k = image::open(params.output_dir.join("K.png")).unwrap();
    assert_eq!(k.color(), ColorType::L8);
    assert!(k.into_luma8().pixels().all(|p| p[0].abs_diff(80) <= 1));

    let j = image::open(params.output_dir.join("J.png")).unwrap();
    assert_eq!(j.color(), ColorType::L16);
    assert_eq!((j.width(), j.height()), (150, 150));
    assert!(j.into_luma16().pixels().all(|p| p[0].abs_diff(50_000) <= 1));
}
