//! Pure Rust image processing backend — zero external dependencies.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP) | `image` crate (pure Rust decoders) |
//! | EXIF orientation | `ImageDecoder::orientation` + `DynamicImage::apply_orientation` |
//! | Resize | `image::imageops::resize` with `Lanczos3` filter |
//! | Shadow paste | `image::imageops::replace` |
//! | Alpha compositing | `image::imageops::overlay` (over-operator) |
//! | Encode → PNG | `image::codecs::png::PngEncoder`, best compression |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::{ComposeParams, ShadowStyle};
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::{self, FilterType};
use image::metadata::Orientation;
use image::{DynamicImage, ImageDecoder, ImageEncoder, ImageReader, RgbImage, Rgba, RgbaImage};
use std::path::Path;

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_error(path: &Path, e: image::ImageError) -> BackendError {
    BackendError::Decode(format!("Failed to decode {}: {}", path.display(), e))
}

/// Load and decode an image from disk, applying any EXIF orientation so the
/// pixels come out upright.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    let reader = ImageReader::open(path)
        .map_err(BackendError::Io)?
        .with_guessed_format()
        .map_err(BackendError::Io)?;
    let mut decoder = reader.into_decoder().map_err(|e| decode_error(path, e))?;
    let orientation = decoder.orientation().unwrap_or(Orientation::NoTransforms);
    let mut img = DynamicImage::from_decoder(decoder).map_err(|e| decode_error(path, e))?;
    img.apply_orientation(orientation);
    Ok(img)
}

/// Map stored dimensions to displayed dimensions under an EXIF orientation.
fn oriented_dimensions(orientation: Orientation, width: u32, height: u32) -> (u32, u32) {
    match orientation {
        Orientation::Rotate90
        | Orientation::Rotate270
        | Orientation::Rotate90FlipH
        | Orientation::Rotate270FlipH => (height, width),
        _ => (width, height),
    }
}

/// Build the drop-shadow layer for a cover of the given size.
///
/// A transparent buffer `2 × margin` larger than the cover, with a
/// semi-transparent black box of cover-size + `inset` pasted at
/// (`inset`, `inset`).
fn build_shadow(cover: (u32, u32), style: ShadowStyle) -> RgbaImage {
    let (cover_w, cover_h) = cover;
    let mut buffer = RgbaImage::new(cover_w + 2 * style.margin, cover_h + 2 * style.margin);
    let shadow_box = RgbaImage::from_pixel(
        cover_w + style.inset,
        cover_h + style.inset,
        Rgba([0, 0, 0, style.alpha]),
    );
    imageops::replace(&mut buffer, &shadow_box, style.inset as i64, style.inset as i64);
    buffer
}

/// Encode and save as PNG with the strongest compression settings.
fn save_png(img: &RgbImage, path: &Path) -> Result<(), BackendError> {
    let file = std::fs::File::create(path).map_err(BackendError::Io)?;
    let writer = std::io::BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(writer, CompressionType::Best, PngFilter::Adaptive);
    encoder
        .write_image(
            img.as_raw(),
            img.width(),
            img.height(),
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| BackendError::Encode(format!("PNG encode failed: {}", e)))
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let reader = ImageReader::open(path)
            .map_err(BackendError::Io)?
            .with_guessed_format()
            .map_err(BackendError::Io)?;
        let mut decoder = reader.into_decoder().map_err(|e| decode_error(path, e))?;
        let orientation = decoder.orientation().unwrap_or(Orientation::NoTransforms);
        let (stored_w, stored_h) = decoder.dimensions();
        let (width, height) = oriented_dimensions(orientation, stored_w, stored_h);
        Ok(Dimensions { width, height })
    }

    fn compose(&self, params: &ComposeParams) -> Result<(), BackendError> {
        let layout = params.layout;

        // Normalize to RGBA so every source blends the same way
        let cover = load_image(&params.source)?.into_rgba8();
        let cover = imageops::resize(
            &cover,
            layout.cover_width,
            layout.cover_height,
            FilterType::Lanczos3,
        );

        let (canvas_w, canvas_h) = params.canvas.dimensions();
        let bg = params.background;
        let mut canvas = RgbaImage::from_pixel(canvas_w, canvas_h, Rgba([bg.r, bg.g, bg.b, 255]));

        let shadow = build_shadow((layout.cover_width, layout.cover_height), params.shadow);
        imageops::overlay(&mut canvas, &shadow, layout.shadow_x, layout.shadow_y);
        imageops::overlay(&mut canvas, &cover, layout.cover_x as i64, layout.cover_y as i64);

        // Flatten: the canvas is opaque everywhere, so dropping alpha loses nothing
        let flattened = DynamicImage::ImageRgba8(canvas).into_rgb8();
        save_png(&flattened, &params.output)
    }
}
