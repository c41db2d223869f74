//! User profile and its file-backed persistence.
//!
//! The persisted form is a single JSON document:
//!
//! ```json
//! {"profile": {"name": "Ana", "age": 31}, "stress_info": {"stress_level": "high", ...}}
//! ```
//!
//! A missing file is not an error; it means no profile has been saved yet.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::stress::StressInfo;

/// Default location of the persisted profile.
pub const DEFAULT_PROFILE_PATH: &str = "user_profile.json";

pub const PROFILE_UPDATED: &str = "Profile updated successfully!";
pub const PROFILE_SAVED: &str = "User profile saved successfully!";
pub const PROFILE_LOADED: &str = "User profile loaded successfully!";
pub const PROFILE_NOT_FOUND: &str = "No profile found. Let's create a new one!";

/// Errors from reading or writing the profile file.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Profile I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Profile JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Basic user information. Fields are only ever overwritten, never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
}

/// Partial update for [`UserProfile`]. Empty strings and a zero age are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub occupation: Option<String>,
}

impl UserProfile {
    /// Apply a partial update and return the confirmation message.
    pub fn update(&mut self, update: ProfileUpdate) -> &'static str {
        if let Some(name) = update.name.filter(|v| !v.is_empty()) {
            self.name = Some(name);
        }
        if let Some(age) = update.age.filter(|v| *v > 0) {
            self.age = Some(age);
        }
        if let Some(occupation) = update.occupation.filter(|v| !v.is_empty()) {
            self.occupation = Some(occupation);
        }
        PROFILE_UPDATED
    }
}

/// On-disk document holding the profile and the stress record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedProfile {
    pub profile: UserProfile,
    pub stress_info: StressInfo,
}

/// Result of [`ProfileStore::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(PersistedProfile),
    NotFound,
}

impl LoadOutcome {
    /// User-facing status message.
    pub fn message(&self) -> &'static str {
        match self {
            LoadOutcome::Loaded(_) => PROFILE_LOADED,
            LoadOutcome::NotFound => PROFILE_NOT_FOUND,
        }
    }
}

/// JSON file store for a single [`PersistedProfile`].
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the document, replacing any previous file.
    pub fn save(&self, data: &PersistedProfile) -> Result<(), ProfileError> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, data)?;
        writer.flush()?;
        debug!(path = %self.path.display(), "profile saved");
        Ok(())
    }

    /// Read the document. A missing file yields [`LoadOutcome::NotFound`].
    pub fn load(&self) -> Result<LoadOutcome, ProfileError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no profile file");
                return Ok(LoadOutcome::NotFound);
            }
            Err(e) => return Err(e.into()),
        };
        let data: PersistedProfile = serde_json::from_reader(BufReader::new(file))?;
        debug!(path = %self.path.display(), "profile loaded");
        Ok(LoadOutcome::Loaded(data))
    }
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new(DEFAULT_PROFILE_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stress::{StressInfoUpdate, StressLevel};

    fn sample() -> PersistedProfile {
        let mut data = PersistedProfile::default();
        data.profile.update(ProfileUpdate {
            name: Some("Ana".into()),
            age: Some(31),
            occupation: Some("nurse".into()),
        });
        data.stress_info.update(StressInfoUpdate {
            stress_level: Some("high".into()),
            triggers: Some(vec!["night shifts", "commute"].into()),
            sleep_quality: Some("poor".into()),
            ..Default::default()
        });
        data
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("profile.json"));

        let data = sample();
        store.save(&data).unwrap();

        match store.load().unwrap() {
            LoadOutcome::Loaded(loaded) => {
                assert_eq!(loaded, data);
                assert_eq!(loaded.stress_info.stress_level, Some(StressLevel::High));
            }
            LoadOutcome::NotFound => panic!("expected saved profile"),
        }
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("absent.json"));

        let outcome = store.load().unwrap();
        assert_eq!(outcome, LoadOutcome::NotFound);
        assert_eq!(outcome.message(), PROFILE_NOT_FOUND);
    }

    #[test]
    fn load_invalid_json_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = ProfileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, ProfileError::Json(_)));
    }

    #[test]
    fn load_from_directory_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ProfileStore::new(dir.path()).load().is_err());
    }

    #[test]
    fn save_into_missing_directory_propagates_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("no-such-dir").join("p.json"));
        let err = store.save(&PersistedProfile::default()).unwrap_err();
        assert!(matches!(err, ProfileError::Io(_)));
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.json");
        std::fs::write(&path, r#"{"profile": {"name": "Sam"}}"#).unwrap();

        let LoadOutcome::Loaded(data) = ProfileStore::new(&path).load().unwrap() else {
            panic!("expected loaded profile");
        };
        assert_eq!(data.profile.name.as_deref(), Some("Sam"));
        assert_eq!(data.stress_info, StressInfo::default());
    }

    #[test]
    fn saved_document_uses_expected_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        ProfileStore::new(&path).save(&sample()).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["profile"]["age"], 31);
        assert_eq!(json["stress_info"]["stress_level"], "high");
        assert_eq!(json["stress_info"]["stress_triggers"][1], "commute");
    }

    #[test]
    fn profile_update_ignores_falsy_values() {
        let mut profile = UserProfile {
            name: Some("Ana".into()),
            age: Some(31),
            occupation: None,
        };
        let msg = profile.update(ProfileUpdate {
            name: Some(String::new()),
            age: Some(0),
            occupation: Some("teacher".into()),
        });
        assert_eq!(msg, PROFILE_UPDATED);
        assert_eq!(profile.name.as_deref(), Some("Ana"));
        assert_eq!(profile.age, Some(31));
        assert_eq!(profile.occupation.as_deref(), Some("teacher"));
    }

}
