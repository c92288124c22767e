//! GUI-specific constants for layout, notification colors and timings

use egui;

/// Main window
pub const WINDOW_TITLE: &str = "QR Generator";
pub const APP_ID: &str = "qrgenerator";

/// Layout spacing
pub const PADDING: f32 = 20.0;
pub const SECTION_SPACING: f32 = 15.0;
pub const ITEM_SPACING: f32 = 8.0;
pub const LEFT_PANEL_FRACTION: f32 = 3.0 / 7.0;
pub const INPUT_ROWS: usize = 6;
pub const FOOTER_HEIGHT: f32 = 40.0;

/// Preview sizing
pub const PREVIEW_MARGIN: f32 = 80.0;
pub const PREVIEW_MIN_SIDE: u32 = 100;
pub const PREVIEW_FALLBACK_SIDE: u32 = 300;
pub const PREVIEW_EMPTY_TEXT: &str = "Your QR code will be displayed here";

/// Notification colors
pub const INFO_COLOR: egui::Color32 = egui::Color32::from_rgb(0x3b, 0x82, 0xf6);
pub const SUCCESS_COLOR: egui::Color32 = egui::Color32::from_rgb(0x10, 0xb9, 0x81);
pub const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(0xef, 0x44, 0x44);
pub const WARNING_COLOR: egui::Color32 = egui::Color32::from_rgb(0xf5, 0x9e, 0x0b);
pub const ACCENT_COLOR: egui::Color32 = egui::Color32::from_rgb(0x00, 0x70, 0xf3);

/// Toasts
pub const TOAST_DURATION_MS: u64 = 3000;
pub const TOAST_MAX_WIDTH: f32 = 400.0;
pub const TOAST_MARGIN: f32 = 30.0;

pub const CREDIT_TEXT: &str = "Created by Shend";
