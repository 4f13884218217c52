pub mod build_info;
pub mod persistence;

use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::Once,
};

use dirs::home_dir;

use crate::errors::TripError;

const DEFAULT_DIR_NAME: &str = ".trip_core";
const SETTINGS_FILE: &str = "settings.json";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("trip_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

/// Returns the application-specific data directory, defaulting to `~/.trip_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("TRIP_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Path to the persisted trip settings file.
pub fn settings_file() -> PathBuf {
    app_data_dir().join(SETTINGS_FILE)
}

/// Creates the directory (and parents) when it does not exist yet.
pub fn ensure_dir(path: &Path) -> Result<(), TripError> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
