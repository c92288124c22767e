use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::error::GeneratorError;
use super::handler::{self, QrOutput};
use super::request::QrRequest;

/// Runtime state for the generate/save flow
/// Holds at most one rendered code; nothing here is persisted
#[derive(Debug, Default)]
pub struct Session {
    current: Option<QrOutput>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&QrOutput> {
        self.current.as_ref()
    }

    pub fn has_image(&self) -> bool {
        self.current.is_some()
    }

    /// Generate and hold a new code
    /// On failure the previously held code stays in place
    pub fn generate(&mut self, request: &QrRequest) -> Result<&QrOutput, GeneratorError> {
        let output = handler::generate(request)?;
        Ok(&*self.current.insert(output))
    }

    /// Drop the held code
    pub fn clear(&mut self) {
        if self.current.take().is_some() {
            info!("Discarded held QR code");
        }
    }

    pub fn save(&self, destination: &Path) -> Result<PathBuf, GeneratorError> {
        let Some(output) = self.current.as_ref() else {
            warn!(path = %destination.display(), "Save requested with no QR code held");
            return Err(GeneratorError::NoImage);
        };
        handler::save(output, destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::FillColor;
    use crate::generator::request::ErrorCorrection;

    fn request(content: &str) -> QrRequest {
        QrRequest::new(content, 1, ErrorCorrection::M, FillColor::Black).unwrap()
    }

    #[test]
    fn test_new_session_has_no_image() {
        let session = Session::new();
        assert!(!session.has_image());
        assert!(session.current().is_none());
    }

    #[test]
    fn test_save_without_image_is_no_image_error() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::new();
        let target = dir.path().join("nothing.png");
        assert!(matches!(session.save(&target), Err(GeneratorError::NoImage)));
        assert!(!target.exists());
    }

    #[test]
    fn test_clear_after_generate_discards_image() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::new();
        session.generate(&request("https://example.com")).unwrap();
        assert!(session.has_image());

        session.clear();
        assert!(!session.has_image());
        assert!(matches!(
            session.save(&dir.path().join("after_clear.png")),
            Err(GeneratorError::NoImage)
        ));
    }

    #[test]
    fn test_generate_replaces_held_image() {
        let mut session = Session::new();
        session.generate(&request("first")).unwrap();
        session.generate(&request("second")).unwrap();
        assert_eq!(session.current().unwrap().request.content, "second");
    }

    #[test]
    fn test_failed_generate_keeps_previous_image() {
        let mut session = Session::new();
        session.generate(&request("kept")).unwrap();

        let too_long = QrRequest::new(&"z".repeat(8000), 1, ErrorCorrection::H, FillColor::Black).unwrap();
        assert!(matches!(session.generate(&too_long), Err(GeneratorError::Encoding(_))));
        assert_eq!(session.current().unwrap().request.content, "kept");
    }

    #[test]
    fn test_save_writes_held_image() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::new();
        session.generate(&request("saved")).unwrap();

        let written = session.save(&dir.path().join("saved.png")).unwrap();
        let decoded = image::open(&written).unwrap();
        assert_eq!(decoded.width(), session.current().unwrap().image.width());
    }
}
