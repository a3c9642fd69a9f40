//! Built-in sample data for the charging network.

use crate::network::models::{
    ChargingSession, Connector, ConnectorStatus, ConnectorType, CurrentType, MapInfo, PlugType,
    Station, StationStatus, TerminationReason,
};
use chrono::{NaiveDate, NaiveDateTime};

/// Build the three standard connectors of a station.
fn connectors(statuses: [ConnectorStatus; 3]) -> Vec<Connector> {
    let plugs = [
        (PlugType::Ccs2, 150),
        (PlugType::GbtDc, 150),
        (PlugType::Chademo, 50),
    ];
    plugs
        .into_iter()
        .zip(statuses)
        .enumerate()
        .map(|(i, ((plug, power_kw), status))| Connector {
            plug,
            power_kw,
            cable_id: i as u32 + 1,
            status,
        })
        .collect()
}

#[allow(clippy::too_many_arguments)] // Mirrors the station record layout
fn station(
    id: u32,
    name: &str,
    host: &str,
    serial: &str,
    city: &str,
    address: &str,
    status: StationStatus,
    (lat, lng): (f64, f64),
    map: MapInfo,
) -> Station {
    Station {
        id,
        name: name.to_string(),
        ip: host.to_string(),
        ssh: format!("admin@{}:22", host),
        serial: serial.to_string(),
        city: city.to_string(),
        address: address.to_string(),
        status,
        lat,
        lng,
        map: Some(map),
    }
}

/// Sample stations, ordered by ID.
pub fn sample_stations() -> Vec<Station> {
    use ConnectorStatus::{Available, Occupied, Unavailable};

    vec![
        station(
            1,
            "ЗС Центр-1",
            "192.168.1.101",
            "EV001234",
            "Москва",
            "ул. Тверская, 1",
            StationStatus::Online,
            (55.7558, 37.6176),
            MapInfo {
                availability: Available,
                rated_power_kw: 150,
                current: CurrentType::DC,
                connectors: connectors([Available, Occupied, Unavailable]),
            },
        ),
        station(
            2,
            "ЗС Парк-2",
            "192.168.1.102",
            "EV001235",
            "Москва",
            "Парк Горького",
            StationStatus::Offline,
            (55.7272, 37.6033),
            MapInfo {
                availability: Unavailable,
                rated_power_kw: 150,
                current: CurrentType::DC,
                connectors: connectors([Unavailable, Unavailable, Unavailable]),
            },
        ),
        station(
            3,
            "ЗС Офис-3",
            "192.168.1.103",
            "EV001236",
            "СПб",
            "Невский пр., 28",
            StationStatus::Online,
            (59.9311, 30.3609),
            MapInfo {
                availability: Available,
                rated_power_kw: 150,
                current: CurrentType::DC,
                connectors: connectors([Available, Available, Occupied]),
            },
        ),
    ]
}

fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 7, 22)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .unwrap_or_default()
}

/// Sample charging sessions, ordered by start time.
pub fn sample_sessions() -> Vec<ChargingSession> {
    vec![
        ChargingSession {
            id: 1,
            station: "ЗС Центр-1".to_string(),
            start_time: at(8, 30),
            end_time: at(9, 45),
            connector: ConnectorType::Ccs,
            energy_kwh: 45.2,
            peak_power_kw: 50,
            reason: TerminationReason::Remote,
        },
        ChargingSession {
            id: 2,
            station: "ЗС Парк-2".to_string(),
            start_time: at(10, 15),
            end_time: at(11, 20),
            connector: ConnectorType::Type2,
            energy_kwh: 32.8,
            peak_power_kw: 22,
            reason: TerminationReason::Local,
        },
        ChargingSession {
            id: 3,
            station: "ЗС Офис-3".to_string(),
            start_time: at(12, 0),
            end_time: at(13, 30),
            connector: ConnectorType::Chademo,
            energy_kwh: 67.5,
            peak_power_kw: 100,
            reason: TerminationReason::Remote,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_stations_have_unique_ids() {
        let stations = sample_stations();
        assert!(!stations.is_empty());
        let ids: HashSet<u32> = stations.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), stations.len());
    }

    #[test]
    fn test_sample_stations_have_three_connectors() {
        for station in sample_stations() {
            let map = station.map.expect("sample stations are mapped");
            assert_eq!(map.connectors.len(), 3);
            assert_eq!(map.connectors[2].cable_id, 3);
        }
    }

    #[test]
    fn test_sample_sessions_reference_sample_stations() {
        let names: HashSet<String> = sample_stations().into_iter().map(|s| s.name).collect();
        for session in sample_sessions() {
            assert!(names.contains(&session.station));
        }
    }

    #[test]
    fn test_sample_session_durations() {
        let minutes: Vec<i64> = sample_sessions().iter().map(|s| s.duration_minutes()).collect();
        assert_eq!(minutes, vec![75, 65, 90]);
    }
}
