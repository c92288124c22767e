//! Editable generator inputs backing the left-hand panel

use super::error::GeneratorError;
use super::request::{ErrorCorrection, QrRequest, clamp_module_scale};
use crate::color::FillColor;
use crate::config::GeneratorDefaults;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorForm {
    pub text: String,
    pub module_scale: u8,
    pub error_correction: ErrorCorrection,
    pub fill_color: FillColor,
}

impl GeneratorForm {
    pub fn new(defaults: &GeneratorDefaults) -> Self {
        Self {
            text: String::new(),
            module_scale: clamp_module_scale(defaults.module_scale),
            error_correction: defaults.error_correction,
            fill_color: defaults.fill_color,
        }
    }

    pub fn to_request(&self) -> Result<QrRequest, GeneratorError> {
        QrRequest::new(&self.text, self.module_scale, self.error_correction, self.fill_color)
    }

    /// Empty the text and restore the settings to `defaults`
    pub fn reset(&mut self, defaults: &GeneratorDefaults) {
        *self = Self::new(defaults);
    }
}

impl Default for GeneratorForm {
    fn default() -> Self {
        Self::new(&GeneratorDefaults::default())
    }
}
