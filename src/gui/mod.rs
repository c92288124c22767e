//! egui front end: window, panels, preview and notifications

pub mod app;
pub mod components;
pub mod constants;
pub mod notifications;
pub mod preview;

pub use app::run_gui;
