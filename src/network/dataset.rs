//! Dataset loading for the dashboard.
//!
//! Provides the built-in sample data or reads a JSON dataset file.

use crate::network::models::{ChargingSession, Station};
use crate::network::sample::{sample_sessions, sample_stations};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a dataset file.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse dataset {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("dataset contains no stations")]
    NoStations,
    #[error("duplicate station id {0}")]
    DuplicateStationId(u32),
}

/// Stations and sessions shown by the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub stations: Vec<Station>,
    #[serde(default)]
    pub sessions: Vec<ChargingSession>,
}

impl Dataset {
    /// Built-in sample dataset.
    pub fn builtin() -> Self {
        Self {
            stations: sample_stations(),
            sessions: sample_sessions(),
        }
    }

    /// Load a dataset from a JSON file.
    ///
    /// # Arguments
    /// * `path` - Path to dataset JSON file
    ///
    /// # Returns
    /// * `Result<Dataset, DatasetError>` - Validated dataset or error
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let content = fs::read_to_string(path).map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset: Dataset =
            serde_json::from_str(&content).map_err(|source| DatasetError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        dataset.validate()?;
        Ok(dataset)
    }

    /// Check that the dataset has at least one station and unique station IDs.
    ///
    /// The detail view falls back to the first station, so an empty list is rejected here.
    pub fn validate(&self) -> Result<(), DatasetError> {
        if self.stations.is_empty() {
            return Err(DatasetError::NoStations);
        }

        let mut seen = HashSet::new();
        for station in &self.stations {
            if !seen.insert(station.id) {
                return Err(DatasetError::DuplicateStationId(station.id));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_dataset_is_valid() {
        let dataset = Dataset::builtin();
        assert!(dataset.validate().is_ok());
        assert_eq!(dataset.stations.len(), 3);
        assert_eq!(dataset.sessions.len(), 3);
    }

    #[test]
    fn test_load_written_dataset() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dataset.json");

        let dataset = Dataset::builtin();
        fs::write(&path, serde_json::to_string_pretty(&dataset).unwrap()).unwrap();

        let loaded = Dataset::load(&path).unwrap();
        assert_eq!(loaded.stations[2].city, "СПб");
        assert_eq!(loaded.sessions[0].duration_minutes(), 75);
    }

    #[test]
    fn test_load_rejects_empty_stations() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dataset.json");
        fs::write(&path, r#"{ "stations": [] }"#).unwrap();

        let err = Dataset::load(&path).unwrap_err();
        assert!(matches!(err, DatasetError::NoStations));
    }

    #[test]
    fn test_load_rejects_duplicate_ids() {
        let mut dataset = Dataset::builtin();
        dataset.stations[1].id = 1;
        let err = dataset.validate().unwrap_err();
        assert_eq!(err.to_string(), "duplicate station id 1");
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = Dataset::load(&temp_dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, DatasetError::Read { .. }));
    }

    #[test]
    fn test_load_station_without_map_block() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dataset.json");
        let json = r#"{
            "stations": [{
                "id": 7, "name": "ЗС Тест-7", "ip": "10.0.0.7", "ssh": "admin@10.0.0.7:22",
                "serial": "EV009999", "city": "Казань", "address": "ул. Баумана, 7",
                "status": "offline", "lat": 55.79, "lng": 49.12
            }]
        }"#;
        fs::write(&path, json).unwrap();

        let loaded = Dataset::load(&path).unwrap();
        assert!(loaded.stations[0].map.is_none());
        assert!(loaded.sessions.is_empty());
    }
}
