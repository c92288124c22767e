//! QR request handler: encode, render and save

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use image::{Rgb, RgbImage};
use qrcode::QrCode;
use tracing::{debug, error, info};

use super::error::GeneratorError;
use super::request::QrRequest;
use crate::color::HexColor;
use crate::constants::{output, render};

/// A rendered QR code waiting to be shown or saved
#[derive(Debug, Clone)]
pub struct QrOutput {
    pub request: QrRequest,
    pub image: RgbImage,
    /// Small copy for display, one color block per module
    pub preview: RgbImage,
    /// Symbol width in modules, excluding the quiet zone
    pub modules: u32,
    pub default_filename: String,
}

/// Encode the request and render it to an RGB raster
///
/// Dark modules use the fill color, light modules and the quiet zone are white.
pub fn generate(request: &QrRequest) -> Result<QrOutput, GeneratorError> {
    let params = request.encode_params();
    debug!(
        ec_level = ?params.ec_level,
        module_pixels = params.module_pixels,
        quiet_zone = params.quiet_zone,
        "Encoding QR request"
    );

    let code = QrCode::with_error_correction_level(request.content.as_bytes(), params.ec_level)
        .inspect_err(|e| error!(error = %e, chars = request.content.chars().count(), "Encoder rejected content"))?;

    let fill = request.fill_color.color();
    let image = render_rgb(&code, params.quiet_zone, params.module_pixels, fill);

    // The full raster can be over 10k pixels wide; the preview is rendered
    // directly at a bounded size instead of being resampled from it.
    let modules = code.width() as u32;
    let preview_pixels = (render::PREVIEW_MAX_SIDE / (modules + 2 * render::BORDER_MODULES)).max(1);
    let preview = render_rgb(&code, params.quiet_zone, preview_pixels, fill);

    info!(
        modules,
        width = image.width(),
        height = image.height(),
        ec = %request.error_correction,
        fill = %request.fill_color,
        "Generated QR code"
    );

    Ok(QrOutput {
        request: request.clone(),
        image,
        preview,
        modules,
        default_filename: default_filename(),
    })
}

fn render_rgb(code: &QrCode, quiet_zone: bool, module_pixels: u32, fill: HexColor) -> RgbImage {
    code.render::<Rgb<u8>>()
        .quiet_zone(quiet_zone)
        .module_dimensions(module_pixels, module_pixels)
        .dark_color(fill.to_rgb())
        .light_color(HexColor::WHITE.to_rgb())
        .build()
}

/// Write the image to `destination`; the extension picks the format
///
/// A destination without an extension is saved as PNG. Returns the path written.
pub fn save(output: &QrOutput, destination: &Path) -> Result<PathBuf, GeneratorError> {
    let mut path = destination.to_path_buf();
    if path.extension().is_none() {
        path.set_extension(output::DEFAULT_EXTENSION);
    }

    match output.image.save(&path) {
        Ok(()) => {
            info!(path = %path.display(), "Saved QR code");
            Ok(path)
        }
        Err(source) => {
            error!(path = %path.display(), error = %source, "Failed to save QR code");
            Err(GeneratorError::Save { path, source })
        }
    }
}

/// `QRCode_YYYYMMDD_HHMMSS.png` for the current local time
pub fn default_filename() -> String {
    default_filename_at(Local::now().naive_local())
}

pub fn default_filename_at(at: NaiveDateTime) -> String {
    format!(
        "{}{}.{}",
        output::FILENAME_PREFIX,
        at.format(output::TIMESTAMP_FORMAT),
        output::DEFAULT_EXTENSION
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::FillColor;
    use crate::generator::request::ErrorCorrection;
    use chrono::NaiveDate;

    fn request(content: &str, scale: u8, ec: ErrorCorrection, fill: FillColor) -> QrRequest {
        QrRequest::new(content, scale, ec, fill).unwrap()
    }

    fn decode(path: &Path) -> String {
        let gray = image::open(path).unwrap().to_luma8();
        let mut prepared = rqrr::PreparedImage::prepare(gray);
        let grids = prepared.detect_grids();
        assert_eq!(grids.len(), 1, "expected exactly one QR code in {}", path.display());
        let (_meta, content) = grids[0].decode().unwrap();
        content
    }

    #[test]
    fn test_image_size_includes_border() {
        for scale in [1u8, 3, 5] {
            let output = generate(&request("HELLO WORLD", scale, ErrorCorrection::M, FillColor::Black)).unwrap();
            let side = (output.modules + 2 * 4) * u32::from(scale) * 10;
            assert_eq!(output.image.dimensions(), (side, side));
        }
    }

    #[test]
    fn test_colors_fill_and_background() {
        let output = generate(&request("colors", 1, ErrorCorrection::L, FillColor::NavyBlue)).unwrap();

        // Corner pixel sits in the quiet zone
        assert_eq!(*output.image.get_pixel(0, 0), Rgb([0xFF, 0xFF, 0xFF]));

        // Top-left module of the finder pattern is always dark
        let first_module = 4 * 10;
        assert_eq!(*output.image.get_pixel(first_module, first_module), Rgb([0x00, 0x00, 0x80]));

        assert!(output.image.pixels().all(|p| *p == Rgb([0xFF, 0xFF, 0xFF]) || *p == Rgb([0x00, 0x00, 0x80])));
    }

    #[test]
    fn test_too_long_content_is_encoding_error() {
        let huge = "x".repeat(8000);
        let result = generate(&request(&huge, 1, ErrorCorrection::H, FillColor::Black));
        match result {
            Err(GeneratorError::Encoding(reason)) => assert!(!reason.is_empty()),
            other => panic!("expected encoding error, got {other:?}"),
        }
    }

    #[test]
    fn test_round_trip_every_level() {
        let dir = tempfile::tempdir().unwrap();
        let content = "Round trip: https://example.com/?q=1";

        for ec in ErrorCorrection::ALL {
            let output = generate(&request(content, 1, ec, FillColor::DarkGreen)).unwrap();
            let written = save(&output, &dir.path().join(format!("qr_{ec}.png"))).unwrap();
            assert_eq!(decode(&written), content, "level {ec}");
        }
    }

    #[test]
    fn test_example_url_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let output = generate(&request("https://example.com", 5, ErrorCorrection::M, FillColor::Black)).unwrap();
        let written = save(&output, &dir.path().join(&output.default_filename)).unwrap();

        let bytes = std::fs::read(&written).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), image::ImageFormat::Png);
        assert_eq!(decode(&written), "https://example.com");
    }

    #[test]
    fn test_save_without_extension_defaults_to_png() {
        let dir = tempfile::tempdir().unwrap();
        let output = generate(&request("no extension", 1, ErrorCorrection::M, FillColor::Black)).unwrap();

        let written = save(&output, &dir.path().join("my_code")).unwrap();
        assert_eq!(written, dir.path().join("my_code.png"));
        assert!(written.exists());
    }

    #[test]
    fn test_save_uses_extension_format() {
        let dir = tempfile::tempdir().unwrap();
        let output = generate(&request("bitmap", 1, ErrorCorrection::M, FillColor::Black)).unwrap();

        let written = save(&output, &dir.path().join("code.bmp")).unwrap();
        let bytes = std::fs::read(&written).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), image::ImageFormat::Bmp);
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let output = generate(&request("nowhere", 1, ErrorCorrection::M, FillColor::Black)).unwrap();

        let target = dir.path().join("does").join("not").join("exist.png");
        match save(&output, &target) {
            Err(GeneratorError::Save { path, source }) => {
                assert_eq!(path, target);
                assert!(matches!(source, image::ImageError::IoError(_)));
            }
            other => panic!("expected save error, got {other:?}"),
        }
    }

    #[test]
    fn test_default_filename_format() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(7, 8, 9)
            .unwrap();
        assert_eq!(default_filename_at(at), "QRCode_20240305_070809.png");

        let name = default_filename();
        assert!(name.starts_with("QRCode_"));
        assert!(name.ends_with(".png"));
        assert_eq!(name.len(), "QRCode_YYYYMMDD_HHMMSS.png".len());
    }

    #[test]
    fn test_preview_is_bounded_and_module_aligned() {
        let small = generate(&request("preview", 2, ErrorCorrection::Q, FillColor::Purple)).unwrap();
        let total = small.modules + 2 * 4;
        let (w, h) = small.preview.dimensions();
        assert_eq!(w, h);
        assert_eq!(w % total, 0);
        assert!(w <= 1024 && w > 1024 - total, "{w}");

        // 1200 chars at the largest scale: the full raster is ~14k pixels wide
        let long = "a".repeat(1200);
        let big = generate(&request(&long, 10, ErrorCorrection::M, FillColor::Black)).unwrap();
        assert!(big.image.width() > 10_000);
        let (w, h) = big.preview.dimensions();
        assert_eq!(w, h);
        assert!(w <= 1024, "{w}");
        assert_eq!(w % (big.modules + 2 * 4), 0);
    }

    #[test]
    fn test_preview_matches_full_image() {
        let output = generate(&request("same pixels", 3, ErrorCorrection::H, FillColor::DarkRed)).unwrap();
        let total = output.modules + 2 * 4;
        let full_px = output.image.width() / total;
        let preview_px = output.preview.width() / total;

        for my in 0..total {
            for mx in 0..total {
                assert_eq!(
                    output.image.get_pixel(mx * full_px, my * full_px),
                    output.preview.get_pixel(mx * preview_px, my * preview_px),
                    "module ({mx}, {my})"
                );
            }
        }
    }
}
