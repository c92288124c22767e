//! RGB colors and the fixed fill-color palette

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque RGB color, displayed as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const WHITE: HexColor = HexColor::from_rgb(0xFF, 0xFF, 0xFF);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_rgb(self) -> image::Rgb<u8> {
        image::Rgb([self.r, self.g, self.b])
    }

    pub fn to_color32(self) -> egui::Color32 {
        egui::Color32::from_rgb(self.r, self.g, self.b)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Named fill colors offered in the UI
///
/// Serialized by display name so the config file reads `fill_color = "Navy Blue"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FillColor {
    #[default]
    Black,
    #[serde(rename = "Navy Blue")]
    NavyBlue,
    #[serde(rename = "Dark Green")]
    DarkGreen,
    #[serde(rename = "Dark Red")]
    DarkRed,
    Purple,
}

impl FillColor {
    pub const ALL: [FillColor; 5] = [
        FillColor::Black,
        FillColor::NavyBlue,
        FillColor::DarkGreen,
        FillColor::DarkRed,
        FillColor::Purple,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FillColor::Black => "Black",
            FillColor::NavyBlue => "Navy Blue",
            FillColor::DarkGreen => "Dark Green",
            FillColor::DarkRed => "Dark Red",
            FillColor::Purple => "Purple",
        }
    }

    pub fn color(self) -> HexColor {
        match self {
            FillColor::Black => HexColor::from_rgb(0x00, 0x00, 0x00),
            FillColor::NavyBlue => HexColor::from_rgb(0x00, 0x00, 0x80),
            FillColor::DarkGreen => HexColor::from_rgb(0x00, 0x64, 0x00),
            FillColor::DarkRed => HexColor::from_rgb(0x8B, 0x00, 0x00),
            FillColor::Purple => HexColor::from_rgb(0x80, 0x00, 0x80),
        }
    }

    /// `#rrggbb` form of [`FillColor::color`]
    pub fn hex(self) -> String {
        self.color().to_string()
    }
}

impl fmt::Display for FillColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
