//! Local fixtures served in place of the network when a session's source is `local`

use chrono::{DateTime, Utc};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::data_fetcher::models::{FrameType, TextFormat};
use crate::error::FrcError;

/// Canned response body for one frame type.
#[derive(Debug, Clone, PartialEq)]
pub struct Fixture {
    pub body: String,
    pub text_format: TextFormat,
    pub loaded_at: DateTime<Utc>,
}

/// Resolves fixtures by frame type and text format only. Filters never reach a store.
pub trait FixtureStore {
    fn load_fixture(
        &self,
        frame_type: FrameType,
        text_format: TextFormat,
    ) -> Result<Fixture, FrcError>;
}

/// Reads `{root}/{frame_type}.{json|xml}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryFixtures {
    root: PathBuf,
}

impl DirectoryFixtures {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirectoryFixtures { root: root.into() }
    }

    /// Fixtures bundled with the crate.
    pub fn bundled() -> Self {
        Self::new(crate::config::paths::bundled_fixture_dir())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn fixture_path(&self, frame_type: FrameType, text_format: TextFormat) -> PathBuf {
        self.root
            .join(format!("{}.{}", frame_type.as_str(), text_format.extension()))
    }
}

impl FixtureStore for DirectoryFixtures {
    fn load_fixture(
        &self,
        frame_type: FrameType,
        text_format: TextFormat,
    ) -> Result<Fixture, FrcError> {
        let path = self.fixture_path(frame_type, text_format);
        debug!("Loading local fixture from {}", path.display());

        let body = match fs::read_to_string(&path) {
            Ok(body) => body,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(FrcError::fixture_not_found(
                    frame_type.as_str(),
                    path.to_string_lossy(),
                ));
            }
            Err(e) => return Err(FrcError::Io(e)),
        };

        Ok(Fixture {
            body,
            text_format,
            loaded_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_bundled_fixtures_cover_every_frame_type() {
        let store = DirectoryFixtures::bundled();
        for frame_type in FrameType::ALL {
            let fixture = store.load_fixture(frame_type, TextFormat::Json).unwrap();
            assert!(!fixture.body.trim().is_empty(), "{frame_type} fixture is empty");
            assert_eq!(fixture.text_format, TextFormat::Json);
        }
    }

    #[test]
    fn test_bundled_xml_fixtures() {
        let store = DirectoryFixtures::bundled();
        for frame_type in [
            FrameType::Season,
            FrameType::Status,
            FrameType::Districts,
            FrameType::Events,
            FrameType::Teams,
        ] {
            let fixture = store.load_fixture(frame_type, TextFormat::Xml).unwrap();
            assert!(fixture.body.trim_start().starts_with('<'));
        }
    }

    #[test]
    fn test_missing_fixture_is_fixture_not_found() {
        let dir = tempdir().unwrap();
        let store = DirectoryFixtures::new(dir.path());
        let err = store
            .load_fixture(FrameType::Rankings, TextFormat::Xml)
            .unwrap_err();
        assert!(matches!(err, FrcError::FixtureNotFound { .. }));
        assert!(err.is_not_found());
        assert!(!err.is_transport());
    }

    #[test]
    fn test_reads_from_configured_directory() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("districts.json"), r#"{"districts":[]}"#).unwrap();
        let store = DirectoryFixtures::new(dir.path());

        let before = Utc::now();
        let fixture = store
            .load_fixture(FrameType::Districts, TextFormat::Json)
            .unwrap();
        assert_eq!(fixture.body, r#"{"districts":[]}"#);
        assert!(fixture.loaded_at >= before);
        assert_eq!(
            store.fixture_path(FrameType::Districts, TextFormat::Json),
            dir.path().join("districts.json")
        );
    }
}
