//! QR generation: request validation, encoding, saving and session state

pub mod error;
pub mod form;
pub mod handler;
pub mod request;
pub mod session;

pub use error::GeneratorError;
pub use form::GeneratorForm;
pub use handler::QrOutput;
pub use request::ErrorCorrection;
pub use session::Session;
