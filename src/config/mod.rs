//! Configuration management for the QR generator
//!
//! A single TOML file under the user's config directory holds window state,
//! generator defaults and the output folder.

pub mod settings;

pub use settings::{Config, GeneratorDefaults, Theme};
