//! Application-wide constants
//!
//! This module contains the magic numbers and string literals used throughout
//! the application, providing a single source of truth for constant values.

/// QR rendering constants
pub mod render {
    /// Pixels per module for each step of the size slider
    pub const PIXELS_PER_SCALE_STEP: u32 = 10;

    /// Quiet zone width in modules (the encoder's standard border)
    pub const BORDER_MODULES: u32 = 4;

    /// Upper bound on the side of the on-screen preview raster
    pub const PREVIEW_MAX_SIDE: u32 = 1024;
}

/// Input handling constants
pub mod input {
    /// Hint text shown in the empty content box; never encoded
    pub const PLACEHOLDER: &str = "Write your QR code content here...";
}

/// Generator defaults and limits
pub mod generator {
    pub const MIN_MODULE_SCALE: u8 = 1;
    pub const MAX_MODULE_SCALE: u8 = 10;
    pub const DEFAULT_MODULE_SCALE: u8 = 5;
}

/// Output file constants
pub mod output {
    /// Default output folder, relative to the home directory
    pub const DEFAULT_DIR_NAME: &str = "QRCodes";

    /// Prefix of the timestamped default filename
    pub const FILENAME_PREFIX: &str = "QRCode_";

    /// chrono format for the filename timestamp
    pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

    /// Extension used when the destination path has none
    pub const DEFAULT_EXTENSION: &str = "png";
}

/// Config file location
pub mod config {
    pub const APP_DIR: &str = "qrgenerator";
    pub const FILENAME: &str = "config.toml";
}

/// Config validation limits
pub mod validation {
    pub const MIN_WINDOW_WIDTH: u16 = 900;
    pub const MIN_WINDOW_HEIGHT: u16 = 650;
    pub const MAX_WINDOW_DIMENSION: u16 = 8192;
}

/// Platform folder openers
pub mod platform {
    #[cfg(target_os = "windows")]
    pub const FOLDER_OPENER: &str = "explorer";

    #[cfg(target_os = "macos")]
    pub const FOLDER_OPENER: &str = "open";

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    pub const FOLDER_OPENER: &str = "xdg-open";
}
