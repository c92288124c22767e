//! Request value objects and input validation

use std::fmt;

use qrcode::EcLevel;
use serde::{Deserialize, Serialize};

use super::error::GeneratorError;
use crate::color::FillColor;
use crate::constants::{generator, input, render};

/// Redundancy tier passed to the encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ErrorCorrection {
    L,
    #[default]
    M,
    Q,
    H,
}

impl ErrorCorrection {
    pub const ALL: [ErrorCorrection; 4] = [
        ErrorCorrection::L,
        ErrorCorrection::M,
        ErrorCorrection::Q,
        ErrorCorrection::H,
    ];

    pub fn ec_level(self) -> EcLevel {
        match self {
            ErrorCorrection::L => EcLevel::L,
            ErrorCorrection::M => EcLevel::M,
            ErrorCorrection::Q => EcLevel::Q,
            ErrorCorrection::H => EcLevel::H,
        }
    }

    /// Approximate share of the symbol that may be damaged and still decode
    pub fn recovery_percent(self) -> u8 {
        match self {
            ErrorCorrection::L => 7,
            ErrorCorrection::M => 15,
            ErrorCorrection::Q => 25,
            ErrorCorrection::H => 30,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ErrorCorrection::L => "L",
            ErrorCorrection::M => "M",
            ErrorCorrection::Q => "Q",
            ErrorCorrection::H => "H",
        }
    }
}

impl fmt::Display for ErrorCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parameters handed to the encoder/renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeParams {
    pub ec_level: EcLevel,
    pub module_pixels: u32,
    /// Draw the encoder's quiet zone, which is always `BORDER_MODULES` wide
    pub quiet_zone: bool,
}

/// A validated generate request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrRequest {
    pub content: String,
    pub module_scale: u8,
    pub error_correction: ErrorCorrection,
    pub fill_color: FillColor,
}

impl QrRequest {
    /// Build a request from raw UI input
    ///
    /// The module scale is clamped to the slider range.
    pub fn new(
        raw_text: &str,
        module_scale: u8,
        error_correction: ErrorCorrection,
        fill_color: FillColor,
    ) -> Result<Self, GeneratorError> {
        Ok(Self {
            content: validate(raw_text)?,
            module_scale: clamp_module_scale(module_scale),
            error_correction,
            fill_color,
        })
    }

    pub fn module_pixels(&self) -> u32 {
        u32::from(self.module_scale) * render::PIXELS_PER_SCALE_STEP
    }

    pub fn encode_params(&self) -> EncodeParams {
        EncodeParams {
            ec_level: self.error_correction.ec_level(),
            module_pixels: self.module_pixels(),
            quiet_zone: true,
        }
    }
}

pub fn clamp_module_scale(scale: u8) -> u8 {
    scale.clamp(generator::MIN_MODULE_SCALE, generator::MAX_MODULE_SCALE)
}

/// Trim the raw input and reject empty or placeholder text
pub fn validate(raw_text: &str) -> Result<String, GeneratorError> {
    let content = raw_text.trim();
    if content.is_empty() || content == input::PLACEHOLDER {
        return Err(GeneratorError::EmptyInput);
    }
    Ok(content.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty_and_placeholder() {
        for raw in ["", "   ", "\n\t ", input::PLACEHOLDER, "  Write your QR code content here...\n"] {
            assert!(
                matches!(validate(raw), Err(GeneratorError::EmptyInput)),
                "expected empty-input for {raw:?}"
            );
        }
    }

    #[test]
    fn test_validate_accepts_trimmed_text() {
        assert_eq!(validate("https://example.com").unwrap(), "https://example.com");
        assert_eq!(validate("  hello world \n").unwrap(), "hello world");
        assert_eq!(validate("line one\nline two").unwrap(), "line one\nline two");
        assert_eq!(
            validate("Write your QR code content here... and more").unwrap(),
            "Write your QR code content here... and more"
        );
    }

    #[test]
    fn test_module_pixels_is_ten_times_scale() {
        for scale in 1..=10u8 {
            let request = QrRequest::new("x", scale, ErrorCorrection::M, FillColor::Black).unwrap();
            assert_eq!(request.module_pixels(), u32::from(scale) * 10);
            assert_eq!(request.encode_params().module_pixels, u32::from(scale) * 10);
            assert!(request.encode_params().quiet_zone);
        }
    }

    #[test]
    fn test_module_scale_clamped() {
        let low = QrRequest::new("x", 0, ErrorCorrection::M, FillColor::Black).unwrap();
        assert_eq!(low.module_scale, 1);
        let high = QrRequest::new("x", 42, ErrorCorrection::M, FillColor::Black).unwrap();
        assert_eq!(high.module_scale, 10);
    }

    #[test]
    fn test_error_correction_mapping() {
        let levels: Vec<EcLevel> = ErrorCorrection::ALL.iter().map(|e| e.ec_level()).collect();
        assert_eq!(levels, vec![EcLevel::L, EcLevel::M, EcLevel::Q, EcLevel::H]);
        let percents: Vec<u8> = ErrorCorrection::ALL.iter().map(|e| e.recovery_percent()).collect();
        assert_eq!(percents, vec![7, 15, 25, 30]);
    }

    #[test]
    fn test_new_propagates_empty_input() {
        let result = QrRequest::new("   ", 5, ErrorCorrection::H, FillColor::Purple);
        assert!(matches!(result, Err(GeneratorError::EmptyInput)));
    }
}
