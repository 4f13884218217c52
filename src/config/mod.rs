//! Disk-backed management of [`TripSettings`] for deployments where the
//! host platform does not supply them itself.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    errors::TripError,
    trip::TripSettings,
    utils::{ensure_dir, settings_file},
};

/// Loads and saves the trip settings file with atomic writes.
pub struct SettingsManager {
    path: PathBuf,
}

impl SettingsManager {
    /// Manager over the default settings path under the app data directory.
    pub fn new() -> Result<Self, TripError> {
        Ok(Self::with_path(settings_file()))
    }

    /// Manager over an explicit settings file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the settings, falling back to defaults when no file exists.
    pub fn load(&self) -> Result<TripSettings, TripError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(TripSettings::default())
        }
    }

    /// Persists the settings, staging to a temporary file first.
    pub fn save(&self, settings: &TripSettings) -> Result<(), TripError> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(settings)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trip::{ModeDefaults, ModeOfTransport};

    #[test]
    fn load_returns_defaults_when_file_is_absent() {
        let dir = tempfile::tempdir().expect("temp dir");
        let manager = SettingsManager::with_path(dir.path().join("settings.json"));

        let settings = manager.load().expect("load succeeds");
        assert_eq!(settings.mileage_allowance, 0.0);
        assert!(settings.mode_defaults.is_empty());
    }

    #[test]
    fn settings_round_trip_through_disk() {
        let dir = tempfile::tempdir().expect("temp dir");
        let manager = SettingsManager::with_path(dir.path().join("nested").join("settings.json"));

        let mut settings = TripSettings::default();
        settings.mileage_allowance = 0.3;
        settings.expense_claim_type = "Travel Allowance".into();
        settings.set_mode_defaults(
            ModeOfTransport::Train,
            ModeDefaults::new("DB", "Train Ticket", "6800 - Travel"),
        );
        manager.save(&settings).expect("save succeeds");

        let reloaded = manager.load().expect("load succeeds");
        assert_eq!(reloaded.mileage_allowance, 0.3);
        assert_eq!(
            reloaded.defaults_for_mode(&ModeOfTransport::Train).supplier,
            "DB"
        );
    }
}
