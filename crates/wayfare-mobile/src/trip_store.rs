//! Locally persisted active-trip identifier.
//!
//! The only value this app stores on the device: which trip to resume on
//! the next launch. Written once after a trip is created, read once at
//! startup. The remote service remains the source of truth for the trip
//! itself.
#![cfg_attr(not(target_os = "android"), allow(dead_code))]

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wayfare_core::{Error, Result, TripId};

const ACTIVE_TRIP_FILE: &str = "active-trip.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredTrip {
    trip_id: String,
}

pub fn default_store_path() -> PathBuf {
    dirs::data_local_dir()
        .or_else(dirs::data_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wayfare")
        .join(ACTIVE_TRIP_FILE)
}

pub fn save_active_trip(trip_id: TripId) -> Result<()> {
    save_active_trip_to_path(trip_id, &default_store_path())
}

pub fn save_active_trip_to_path(trip_id: TripId, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let stored = StoredTrip {
        trip_id: trip_id.as_str(),
    };
    let content = serde_json::to_string_pretty(&stored)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_active_trip() -> Result<Option<TripId>> {
    load_active_trip_from_path(&default_store_path())
}

pub fn load_active_trip_from_path(path: &Path) -> Result<Option<TripId>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)?;
    let stored: StoredTrip = serde_json::from_str(&content)
        .map_err(|error| Error::Storage(format!("The stored trip record is not valid: {error}")))?;
    let trip_id = stored
        .trip_id
        .parse::<TripId>()
        .map_err(|error| Error::Storage(format!("The stored trip id is not valid: {error}")))?;
    Ok(Some(trip_id))
}

pub fn clear_active_trip() -> Result<()> {
    clear_active_trip_at_path(&default_store_path())
}

pub fn clear_active_trip_at_path(path: &Path) -> Result<()> {
    if path.exists() {
        std::fs::remove_file(path)?;
    }
    Ok(())
}
