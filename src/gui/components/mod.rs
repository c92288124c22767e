pub mod content_input;
pub mod customization;
