use std::{fs, path::Path};

use crate::{errors::TripError, host::MemoryHost, trip::BusinessTrip};

/// Writes the provided trip to disk atomically by staging to a temporary file.
pub fn save_trip_to_file(trip: &BusinessTrip, path: &Path) -> Result<(), TripError> {
    let tmp = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(trip)?;
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)?;
    Ok(())
}

/// Loads a trip snapshot from disk, returning structured errors on failure.
pub fn load_trip_from_file(path: &Path) -> Result<BusinessTrip, TripError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Writes a host snapshot (settings, regions, derived documents, files).
pub fn save_host_to_file(host: &MemoryHost, path: &Path) -> Result<(), TripError> {
    let tmp = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(host)?;
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)?;
    Ok(())
}

/// Loads a host snapshot from disk.
pub fn load_host_from_file(path: &Path) -> Result<MemoryHost, TripError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
