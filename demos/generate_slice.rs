//! Demo: cut a sagittal slice through a synthetic phantom and save it as PNG.
//!
//! Usage: `cargo run --example generate_slice -- [options.json] [output.png]`
//!
//! Without an options file it cuts the sagittal slice at index 133 and resizes it
//! to 100x100.
//! Set `RUST_LOG=debug` to follow the pipeline.

use std::error::Error;

use volslice::*;

/// Nested-shell phantom: bright outer shell, dimmer core, dark background.
fn phantom() -> Result<ImageVolume<u8>> {
    let extent = Extent::from_dimensions(256, 192, 160)?;
    let centre = DVec3::new(127.5, 95.5, 79.5);
    ImageVolume::from_fn(extent, DVec3::ZERO, DVec3::new(0.8, 0.8, 1.2), |i, j, k| {
        let p = DVec3::new(f64::from(i), f64::from(j), f64::from(k));
        let r = ((p - centre) / DVec3::new(120.0, 90.0, 75.0)).length();
        match r {
            r if r < 0.5 => 120,
            r if r < 0.9 => 60,
            r if r < 1.0 => 230,
            _ => 0,
        }
    })
}

fn main() -> std::result::Result<(), Box<dyn Error>> {
    init_logging();

    let mut args = std::env::args().skip(1);
    let options = match args.next() {
        Some(path) => SliceOptions::load(path)?,
        None => SliceOptions::new(0, 133).with_size(100, 100),
    };

    let volume = phantom()?;
    let slice = generate_slice(&volume, &options)?;

    let output = args
        .next()
        .unwrap_or_else(|| default_output_name(slice.axis(), slice.index()));
    save_slice(&slice, &output, &ImageWriterOptions::default())?;

    println!(
        "{} slice {} ({}x{}) written to {}",
        slice.axis().view_name(),
        slice.index(),
        slice.width(),
        slice.height(),
        output
    );
    Ok(())
}
