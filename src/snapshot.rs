//! Season snapshot loading.
//!
//! A snapshot is the engine's entire input for one season: the event
//! calendar, the driver roster, and the raw result rows. It arrives as
//! JSON from whatever produced it (league admin export, import job) and
//! is read-only here.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::debug;

use crate::models::{Driver, DriverResult, RaceEvent};
use crate::normalize::{normalize_row, RawResultRow};

/// Snapshot loading errors.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to read snapshot file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse snapshot: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Everything the engine reads for one season.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeasonSnapshot {
    /// The season's event calendar, in season order
    #[serde(default)]
    pub events: Vec<RaceEvent>,

    /// The season's driver roster
    #[serde(default)]
    pub drivers: Vec<Driver>,

    /// Raw result rows as the importer emitted them
    #[serde(default)]
    pub results: Vec<RawResultRow>,
}

impl SeasonSnapshot {
    /// Parse a snapshot from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: SeasonSnapshot = serde_json::from_str(json)?;
        Ok(snapshot)
    }

    /// Load a snapshot from a JSON file.
    pub fn from_json_file(path: &PathBuf) -> Result<Self, SnapshotError> {
        let contents = std::fs::read_to_string(path)?;
        let snapshot = Self::from_json_str(&contents)?;
        debug!(
            "Loaded snapshot from {}: {} events, {} drivers, {} result rows",
            path.display(),
            snapshot.events.len(),
            snapshot.drivers.len(),
            snapshot.results.len()
        );
        Ok(snapshot)
    }

    /// Normalize every raw result row into its canonical form.
    ///
    /// No structural filtering happens here; rows for unknown events or
    /// drivers pass through and are excluded during analysis instead.
    pub fn normalized_results(&self) -> Vec<DriverResult> {
        self.results.iter().map(normalize_row).collect()
    }

    /// A 16-hex-char digest of the snapshot's content, usable as a
    /// memoization key for derived analyses.
    ///
    /// Drivers and result rows are digested in a canonical order, so
    /// shuffling those arrays does not change the fingerprint. Event order
    /// stays significant: it determines round numbers and labels.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();

        hasher.update(b"events\n");
        for event in &self.events {
            hasher.update(serde_json::to_string(event).unwrap_or_default());
            hasher.update(b"\n");
        }

        hasher.update(b"drivers\n");
        let mut drivers: Vec<String> = self
            .drivers
            .iter()
            .map(|d| serde_json::to_string(d).unwrap_or_default())
            .collect();
        drivers.sort();
        for line in &drivers {
            hasher.update(line);
            hasher.update(b"\n");
        }

        hasher.update(b"results\n");
        let mut rows: Vec<String> = self
            .results
            .iter()
            .map(|r| serde_json::to_string(r).unwrap_or_default())
            .collect();
        rows.sort();
        for line in &rows {
            hasher.update(line);
            hasher.update(b"\n");
        }

        let hash = hasher.finalize();
        hex::encode(hash)[..16].to_string()
    }
}
