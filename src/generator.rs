//! Icon generation: render each variant, encode it and write it to disk.

use std::fs;
use std::path::PathBuf;

use log::{debug, info};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::rendering::glyph::draw_scan_glyph;
use crate::rendering::{Canvas, Rgb};
use crate::{Error, IconConfig, Result};

/// A file written by [`generate_icons`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedIcon {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub color: Rgb,
    /// Hex SHA-256 of the encoded PNG bytes
    pub sha256: String,
}

/// Render the scan glyph into a fresh transparent canvas.
pub fn render_icon(size: u32, color: Rgb, line_width: u32) -> Canvas {
    let mut canvas = Canvas::new(size);
    draw_scan_glyph(&mut canvas, color, line_width);
    canvas
}

/// Whether this build can encode PNG.
pub fn png_encoder_available() -> bool {
    cfg!(feature = "png")
}

fn missing_png_encoder() -> Error {
    Error::MissingCapability {
        capability: "PNG encoder".to_string(),
        hint: "Please rebuild with: cargo build --features png".to_string(),
    }
}

/// Fail with [`Error::MissingCapability`] when PNG encoding is compiled out.
pub fn ensure_png_encoder() -> Result<()> {
    if png_encoder_available() {
        Ok(())
    } else {
        Err(missing_png_encoder())
    }
}

/// Encode `canvas` as an RGBA PNG.
#[cfg(feature = "png")]
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>> {
    use image::codecs::png::PngEncoder;
    use image::{ExtendedColorType, ImageEncoder};

    let img = canvas.as_image();
    let mut buf = Vec::new();
    PngEncoder::new(&mut buf).write_image(
        img.as_raw(),
        img.width(),
        img.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(buf)
}

#[cfg(not(feature = "png"))]
pub fn encode_png(_canvas: &Canvas) -> Result<Vec<u8>> {
    Err(missing_png_encoder())
}

/// Generate every variant in `config`.
///
/// The configuration and encoder are checked before anything touches the
/// filesystem, so a failed precondition leaves the output directory as it was.
pub fn generate_icons(config: &IconConfig) -> Result<Vec<GeneratedIcon>> {
    config.validate()?;
    ensure_png_encoder()?;

    fs::create_dir_all(&config.output_dir)?;

    let mut written = Vec::with_capacity(config.variants.len());
    for variant in &config.variants {
        let canvas = render_icon(config.size, variant.color, config.line_width);
        debug!(
            "{}: {} pixels painted",
            variant.file_name,
            canvas.painted().len()
        );
        let png = encode_png(&canvas)?;

        let path = config.output_dir.join(&variant.file_name);
        fs::write(&path, &png)?;
        let sha256 = hex::encode(Sha256::digest(&png));
        info!(
            "wrote {} ({}x{}, {}, {} bytes)",
            path.display(),
            config.size,
            config.size,
            variant.color,
            png.len()
        );

        written.push(GeneratedIcon {
            path,
            width: config.size,
            height: config.size,
            color: variant.color,
            sha256,
        });
    }
    Ok(written)
}
