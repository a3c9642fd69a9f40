//! Free-text filtering for station and session lists.
//!
//! A record matches when any of its searchable fields contains the query
//! as a case-insensitive substring.

use crate::network::{ChargingSession, Station};

/// Records that can be matched against a search query.
pub trait Searchable {
    /// Text fields the query is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// Check whether the record matches an already lowercased query.
    fn matches(&self, query_lower: &str) -> bool {
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(query_lower))
    }
}

impl Searchable for Station {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.city.as_str()]
    }
}

impl Searchable for ChargingSession {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.station.as_str()]
    }
}

/// Filter a list by query, preserving order.
///
/// # Arguments
/// * `items` - Records to filter
/// * `query` - Free-text query
///
/// # Returns
/// * `Vec<T>` - Matching records in their original order
///
/// # Details
/// An empty query returns the full list.
pub fn filter<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    if query.is_empty() {
        return items.to_vec();
    }
    let query_lower = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.matches(&query_lower))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::sample::{sample_sessions, sample_stations};

    fn ids(stations: &[Station]) -> Vec<u32> {
        stations.iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_filter_empty_query_returns_all() {
        let stations = sample_stations();
        assert_eq!(filter(&stations, ""), stations);
    }

    #[test]
    fn test_filter_by_city_lowercase() {
        let stations = sample_stations();
        let result = filter(&stations, "спб");
        assert_eq!(ids(&result), vec![3]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let stations = sample_stations();
        for query in ["москва", "зс", "офис", "ПАРК"] {
            assert_eq!(
                filter(&stations, &query.to_uppercase()),
                filter(&stations, &query.to_lowercase()),
                "query {query}"
            );
        }
    }

    #[test]
    fn test_filter_preserves_order_and_subset() {
        let stations = sample_stations();
        let result = filter(&stations, "москва");
        assert_eq!(ids(&result), vec![1, 2]);

        let result = filter(&stations, "-");
        assert_eq!(ids(&result), vec![1, 2, 3]);
    }

    #[test]
    fn test_filter_by_station_name() {
        let stations = sample_stations();
        assert_eq!(ids(&filter(&stations, "Центр")), vec![1]);
    }

    #[test]
    fn test_filter_no_match_is_empty() {
        let stations = sample_stations();
        assert!(filter(&stations, "Новосибирск").is_empty());
    }

    #[test]
    fn test_session_filter_matches_station_only() {
        let sessions = sample_sessions();
        let result = filter(&sessions, "парк");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 2);

        // Connector type is not a searchable field
        assert!(filter(&sessions, "chademo").is_empty());
    }

    #[test]
    fn test_session_filter_does_not_match_city() {
        let sessions = sample_sessions();
        assert!(filter(&sessions, "москва").is_empty());
    }
}
