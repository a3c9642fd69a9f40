//! Charging network data module.
//!
//! Provides station and session models plus the dataset they are loaded from.

pub mod dataset;
pub mod models;
pub mod sample;

pub use dataset::Dataset;
pub use models::{ChargingSession, ConnectorStatus, Station};
