use std::str::FromStr;

use geo_types::Point;
use serde::{Deserialize, Serialize};

use crate::error::{config_error, Error};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub fn new(name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lng,
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            lat: self.lat,
            lng: self.lng,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn midpoint(&self, other: &Coordinates) -> Coordinates {
        let mid = (Point::from(*self) + Point::from(*other)) / 2.0;
        mid.into()
    }
}

impl From<Coordinates> for Point<f64> {
    fn from(coordinates: Coordinates) -> Self {
        Point::new(coordinates.lng, coordinates.lat)
    }
}

impl From<Point<f64>> for Coordinates {
    fn from(point: Point<f64>) -> Self {
        Coordinates {
            lat: point.y(),
            lng: point.x(),
        }
    }
}

/// Parses `"lat,lng"`, as used by the fallback settings.
impl FromStr for Coordinates {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| config_error(format!("expected lat,lng, got {:?}", s)))?;

        Ok(Coordinates {
            lat: lat.trim().parse()?,
            lng: lng.trim().parse()?,
        })
    }
}

#[test]
fn midpoint_test() {
    let sf = Coordinates::new(37.7749, -122.4194);
    let oakland = Coordinates::new(37.8044, -122.2711);

    let mid = sf.midpoint(&oakland);
    assert!((mid.lat - 37.78965).abs() < 1e-9);
    assert!((mid.lng - -122.34525).abs() < 1e-9);
}

#[test]
fn parse_coordinates_test() {
    let parsed: Coordinates = " 1.5, -2.25 ".parse().unwrap();
    assert_eq!(parsed, Coordinates::new(1.5, -2.25));

    assert!("1.5".parse::<Coordinates>().is_err());
    assert!("north,south".parse::<Coordinates>().is_err());
}
