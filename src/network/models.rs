//! Charging network models and data structures.
//!
//! Contains structures for representing stations, connectors and charging sessions.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp format used by session records (`2024-07-22 08:30:00`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Network connectivity of a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StationStatus {
    /// Station is reachable
    Online,
    /// Station is not reachable
    Offline,
}

impl StationStatus {
    /// Badge label for lists and the detail header.
    pub fn label(self) -> &'static str {
        match self {
            StationStatus::Online => "Online",
            StationStatus::Offline => "Offline",
        }
    }
}

/// Availability of a connector, or the aggregate availability of a station.
///
/// Parsing is case-insensitive; statuses that are not recognized become `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ConnectorStatus {
    Available,
    Occupied,
    Charging,
    Unavailable,
    Unknown,
}

impl From<String> for ConnectorStatus {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<&str> for ConnectorStatus {
    fn from(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "available" => ConnectorStatus::Available,
            "occupied" => ConnectorStatus::Occupied,
            "charging" => ConnectorStatus::Charging,
            "unavailable" => ConnectorStatus::Unavailable,
            _ => ConnectorStatus::Unknown,
        }
    }
}

/// Current type delivered by a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurrentType {
    AC,
    DC,
}

/// Physical plug of a connector.
///
/// The compact uppercase spellings (`GBTDC`, `CHADEMO`) are accepted as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlugType {
    #[serde(rename = "CCS2")]
    Ccs2,
    #[serde(rename = "GBT DC", alias = "GBTDC")]
    GbtDc,
    #[serde(rename = "CHAdeMO", alias = "CHADEMO")]
    Chademo,
    #[serde(rename = "Type2")]
    Type2,
}

impl fmt::Display for PlugType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlugType::Ccs2 => "CCS2",
            PlugType::GbtDc => "GBT DC",
            PlugType::Chademo => "CHAdeMO",
            PlugType::Type2 => "Type2",
        };
        f.write_str(name)
    }
}

/// A charging port of a station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connector {
    /// Plug type
    pub plug: PlugType,
    /// Rated power in kW
    pub power_kw: u32,
    /// Cable identifier printed on the station
    pub cable_id: u32,
    /// Current availability
    pub status: ConnectorStatus,
}

/// Map-specific information for a station.
///
/// Stations without this block are still drawn on the map, with a gray
/// border and no connector dots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapInfo {
    /// Aggregate availability, drives the marker border
    pub availability: ConnectorStatus,
    /// Rated power in kW
    pub rated_power_kw: u32,
    /// AC or DC
    pub current: CurrentType,
    /// Connectors in cable order
    pub connectors: Vec<Connector>,
}

/// Represents a charging station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Unique station ID
    pub id: u32,
    /// Display name
    pub name: String,
    /// Network address
    pub ip: String,
    /// Administrative access string (`user@host:port`)
    pub ssh: String,
    /// Serial number
    pub serial: String,
    /// City
    pub city: String,
    /// Street address
    pub address: String,
    /// Connectivity status
    pub status: StationStatus,
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lng: f64,
    /// Map marker information
    #[serde(default)]
    pub map: Option<MapInfo>,
}

impl Station {
    /// Format coordinates as `55.7558, 37.6176`.
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.lat, self.lng)
    }
}

/// Connector type recorded for a charging session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectorType {
    #[serde(rename = "CCS")]
    Ccs,
    #[serde(rename = "Type2")]
    Type2,
    #[serde(rename = "CHAdeMO")]
    Chademo,
}

impl fmt::Display for ConnectorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConnectorType::Ccs => "CCS",
            ConnectorType::Type2 => "Type2",
            ConnectorType::Chademo => "CHAdeMO",
        };
        f.write_str(name)
    }
}

/// Who ended a charging session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminationReason {
    Remote,
    Local,
}

impl TerminationReason {
    pub fn label(self) -> &'static str {
        match self {
            TerminationReason::Remote => "Remote",
            TerminationReason::Local => "Local",
        }
    }
}

/// Represents a completed charging session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargingSession {
    /// Session ID
    pub id: u32,
    /// Name of the station the session ran on
    pub station: String,
    /// Session start
    #[serde(with = "timestamp")]
    pub start_time: NaiveDateTime,
    /// Session end
    #[serde(with = "timestamp")]
    pub end_time: NaiveDateTime,
    /// Connector used
    pub connector: ConnectorType,
    /// Energy delivered in kWh
    pub energy_kwh: f64,
    /// Peak power in kW
    pub peak_power_kw: u32,
    /// Termination reason
    pub reason: TerminationReason,
}

impl ChargingSession {
    /// Session duration in whole minutes, rounded down.
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time)
            .num_seconds()
            .div_euclid(60)
    }

    /// Format start timestamp as `2024-07-22 08:30:00`.
    pub fn format_start(&self) -> String {
        self.start_time.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Format end timestamp as `2024-07-22 09:45:00`.
    pub fn format_end(&self) -> String {
        self.end_time.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Parse a session timestamp.
pub fn parse_timestamp(value: &str) -> chrono::ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
}

/// Serde adapter for session timestamps in [`TIMESTAMP_FORMAT`].
mod timestamp {
    use super::{TIMESTAMP_FORMAT, parse_timestamp};
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(start: &str, end: &str) -> ChargingSession {
        ChargingSession {
            id: 1,
            station: "ЗС Центр-1".to_string(),
            start_time: parse_timestamp(start).unwrap(),
            end_time: parse_timestamp(end).unwrap(),
            connector: ConnectorType::Ccs,
            energy_kwh: 45.2,
            peak_power_kw: 50,
            reason: TerminationReason::Remote,
        }
    }

    #[test]
    fn test_duration_minutes() {
        let s = session("2024-07-22 08:30:00", "2024-07-22 09:45:00");
        assert_eq!(s.duration_minutes(), 75);
    }

    #[test]
    fn test_duration_rounds_down() {
        let s = session("2024-07-22 08:30:00", "2024-07-22 08:31:59");
        assert_eq!(s.duration_minutes(), 1);
    }

    #[test]
    fn test_session_timestamps_format() {
        let s = session("2024-07-22 12:00:00", "2024-07-22 13:30:00");
        assert_eq!(s.format_start(), "2024-07-22 12:00:00");
        assert_eq!(s.format_end(), "2024-07-22 13:30:00");
    }

    #[test]
    fn test_session_json_uses_plain_timestamps() {
        let json = r#"{
            "id": 2,
            "station": "ЗС Парк-2",
            "start_time": "2024-07-22 10:15:00",
            "end_time": "2024-07-22 11:20:00",
            "connector": "Type2",
            "energy_kwh": 32.8,
            "peak_power_kw": 22,
            "reason": "Local"
        }"#;
        let s: ChargingSession = serde_json::from_str(json).unwrap();
        assert_eq!(s.connector, ConnectorType::Type2);
        assert_eq!(s.reason, TerminationReason::Local);
        assert_eq!(s.duration_minutes(), 65);
    }

    #[test]
    fn test_unrecognized_connector_status_is_unknown() {
        let status: ConnectorStatus = serde_json::from_str("\"faulted\"").unwrap();
        assert_eq!(status, ConnectorStatus::Unknown);
        let status: ConnectorStatus = serde_json::from_str("\"Occupied\"").unwrap();
        assert_eq!(status, ConnectorStatus::Occupied);
        assert_eq!(ConnectorStatus::from("Charging"), ConnectorStatus::Charging);
        assert_eq!(ConnectorStatus::from("reserved"), ConnectorStatus::Unknown);
    }

    #[test]
    fn test_plug_type_spellings() {
        let cases = [
            ("\"CCS2\"", PlugType::Ccs2),
            ("\"GBT DC\"", PlugType::GbtDc),
            ("\"GBTDC\"", PlugType::GbtDc),
            ("\"CHAdeMO\"", PlugType::Chademo),
            ("\"CHADEMO\"", PlugType::Chademo),
            ("\"Type2\"", PlugType::Type2),
        ];
        for (json, expected) in cases {
            let plug: PlugType = serde_json::from_str(json).unwrap();
            assert_eq!(plug, expected, "{}", json);
        }
        assert_eq!(serde_json::to_string(&PlugType::GbtDc).unwrap(), "\"GBT DC\"");
        assert_eq!(PlugType::Chademo.to_string(), "CHAdeMO");
    }

    #[test]
    fn test_connector_with_spaced_plug_name() {
        let json = r#"{"plug": "GBT DC", "power_kw": 150, "cable_id": 2, "status": "charging"}"#;
        let connector: Connector = serde_json::from_str(json).unwrap();
        assert_eq!(connector.plug, PlugType::GbtDc);
        assert_eq!(connector.status, ConnectorStatus::Charging);
    }
}
