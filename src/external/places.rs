//! Stand-in for a places lookup: a short list of known cities matched by
//! substring.

use crate::entities::{Coordinates, Location};

pub const SOURCE_FALLBACK: Coordinates = Coordinates::new(37.7749, -122.4194);
pub const DESTINATION_FALLBACK: Coordinates = Coordinates::new(37.8044, -122.2711);

pub fn known_places() -> Vec<Location> {
    vec![
        Location::new("San Francisco, CA", 37.7749, -122.4194),
        Location::new("Los Angeles, CA", 34.0522, -118.2437),
        Location::new("New York, NY", 40.7128, -74.0060),
        Location::new("Chicago, IL", 41.8781, -87.6298),
    ]
}

/// First case-insensitive substring match in list order, otherwise a point
/// named after the query at the fallback coordinates. An empty query is a
/// substring of every name, so it resolves to the first place.
#[tracing::instrument(skip(places))]
pub fn resolve(places: &[Location], query: &str, fallback_lat: f64, fallback_lng: f64) -> Location {
    let needle = query.to_lowercase();

    match places
        .iter()
        .find(|place| place.name.to_lowercase().contains(&needle))
    {
        Some(place) => place.clone(),
        None => {
            tracing::debug!("no known place matches {:?}, using fallback", query);
            Location::new(query, fallback_lat, fallback_lng)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_partial_name() {
        let location = resolve(&known_places(), "san fran", 0.0, 0.0);

        assert_eq!(location, Location::new("San Francisco, CA", 37.7749, -122.4194));
    }

    #[test]
    fn falls_back_to_query() {
        let location = resolve(&known_places(), "Nowhereville", 1.0, 2.0);

        assert_eq!(location, Location::new("Nowhereville", 1.0, 2.0));
    }

    #[test]
    fn first_match_wins() {
        // ", ca" matches both California entries
        let location = resolve(&known_places(), ", CA", 0.0, 0.0);
        assert_eq!(location.name, "San Francisco, CA");

        let location = resolve(&known_places(), "an", 0.0, 0.0);
        assert_eq!(location.name, "San Francisco, CA");
    }

    #[test]
    fn empty_query_matches_first_place() {
        let location = resolve(&known_places(), "", 1.0, 2.0);

        assert_eq!(location.name, "San Francisco, CA");
    }

    #[test]
    fn query_is_not_trimmed() {
        let location = resolve(&known_places(), " chicago ", 1.0, 2.0);

        assert_eq!(location, Location::new(" chicago ", 1.0, 2.0));
    }
}
