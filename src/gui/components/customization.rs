//! Size, error correction and fill color controls

use eframe::egui;

use crate::color::FillColor;
use crate::constants::generator::{MAX_MODULE_SCALE, MIN_MODULE_SCALE};
use crate::constants::render::PIXELS_PER_SCALE_STEP;
use crate::generator::{ErrorCorrection, GeneratorForm};
use crate::gui::constants::ITEM_SPACING;

/// Renders the customization controls, editing `form` in place
pub fn ui(ui: &mut egui::Ui, form: &mut GeneratorForm) {
    ui.label(egui::RichText::new("Customization").heading().strong());
    ui.add_space(ITEM_SPACING);

    // Size
    ui.horizontal(|ui| {
        ui.label("Size:");
        ui.add_space(5.0);
        ui.add(egui::Slider::new(&mut form.module_scale, MIN_MODULE_SCALE..=MAX_MODULE_SCALE).step_by(1.0))
            .on_hover_text(scale_hint(form.module_scale));
    });

    ui.add_space(ITEM_SPACING);

    // Error correction
    ui.horizontal(|ui| {
        ui.label("Error Correction:");
        ui.add_space(5.0);
        egui::ComboBox::from_id_salt("error_correction")
            .selected_text(form.error_correction.label())
            .show_ui(ui, |ui| {
                for level in ErrorCorrection::ALL {
                    let text = format!("{}  (~{}%)", level.label(), level.recovery_percent());
                    ui.selectable_value(&mut form.error_correction, level, text);
                }
            });
    });

    ui.add_space(ITEM_SPACING);

    // Fill color
    ui.horizontal(|ui| {
        ui.label("Fill Color:");
        ui.add_space(5.0);
        swatch(ui, form.fill_color);
        egui::ComboBox::from_id_salt("fill_color")
            .selected_text(form.fill_color.name())
            .show_ui(ui, |ui| {
                for fill in FillColor::ALL {
                    ui.horizontal(|ui| {
                        swatch(ui, fill);
                        ui.selectable_value(&mut form.fill_color, fill, fill.name());
                    });
                }
            });
    });
}

fn scale_hint(module_scale: u8) -> String {
    format!("{} px per module", u32::from(module_scale) * PIXELS_PER_SCALE_STEP)
}

fn swatch(ui: &mut egui::Ui, fill: FillColor) {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 3.0, fill.color().to_color32());
    response.on_hover_text(fill.hex());
}
