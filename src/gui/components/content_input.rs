//! Content text box

use eframe::egui;

use crate::constants::input::PLACEHOLDER;
use crate::gui::constants::{INPUT_ROWS, ITEM_SPACING};

/// Renders the content box, editing `text` in place
pub fn ui(ui: &mut egui::Ui, text: &mut String) {
    ui.label(egui::RichText::new("Content").heading().strong());
    ui.label(egui::RichText::new("Enter your text or URL here").small());
    ui.add_space(ITEM_SPACING);

    ui.add(
        egui::TextEdit::multiline(text)
            .hint_text(PLACEHOLDER)
            .desired_rows(INPUT_ROWS)
            .desired_width(f32::INFINITY),
    );
}
