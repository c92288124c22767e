//! On-screen preview of the held QR code

use eframe::egui;
use tracing::debug;

use super::constants::{PREVIEW_FALLBACK_SIDE, PREVIEW_MARGIN, PREVIEW_MIN_SIDE};
use crate::generator::QrOutput;

/// Side length of the preview square for the given panel size
///
/// Panels that have not been laid out yet report tiny sizes; those fall back
/// to a fixed side.
pub fn preview_side(available: egui::Vec2) -> u32 {
    let side = available.x.min(available.y) - PREVIEW_MARGIN;
    if !side.is_finite() || side < PREVIEW_MIN_SIDE as f32 {
        PREVIEW_FALLBACK_SIDE
    } else {
        side as u32
    }
}

/// GPU texture for the preview, uploaded once per generated code
///
/// Panel size changes only change the size egui draws it at.
#[derive(Default)]
pub struct PreviewTexture {
    texture: Option<egui::TextureHandle>,
}

impl PreviewTexture {
    pub fn clear(&mut self) {
        self.texture = None;
    }

    /// Texture for `output` drawn at `side` points
    pub fn get_or_build(
        &mut self,
        ctx: &egui::Context,
        output: &QrOutput,
        side: u32,
    ) -> egui::load::SizedTexture {
        let texture = self.texture.get_or_insert_with(|| {
            let preview = &output.preview;
            debug!(width = preview.width(), "Uploading QR preview texture");
            let image = egui::ColorImage::from_rgb(
                [preview.width() as usize, preview.height() as usize],
                preview.as_raw(),
            );
            ctx.load_texture("qr_preview", image, egui::TextureOptions::LINEAR)
        });

        egui::load::SizedTexture::new(texture.id(), [side as f32, side as f32])
    }
}
