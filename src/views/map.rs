//! Mock map read model. The projection is linear and purely decorative.

use serde::{Deserialize, Serialize};

use crate::entities::{Attraction, Category, Coordinates, Location};
use crate::state::AppState;

pub const DEFAULT_CENTER: Coordinates = Coordinates::new(37.7749, -122.4194);

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 600.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

pub fn project(coordinates: Coordinates, canvas: Canvas) -> ScreenPoint {
    ScreenPoint {
        x: ((coordinates.lng + 180.0) * canvas.width) / 360.0,
        y: ((90.0 - coordinates.lat) * canvas.height) / 180.0,
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EndpointMarker {
    pub location: Location,
    pub top_pct: f64,
    pub left_pct: f64,
    pub position: ScreenPoint,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttractionMarker {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub rating: f64,
    pub top_pct: f64,
    pub left_pct: f64,
    pub position: ScreenPoint,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub canvas: Canvas,
    pub center: Coordinates,
    pub source: Option<EndpointMarker>,
    pub destination: Option<EndpointMarker>,
    pub attractions: Vec<AttractionMarker>,
}

impl MapView {
    /// Every catalog entry gets a marker; the sidebar filter does not apply
    /// to the map.
    pub fn build(state: &AppState, catalog: &[Attraction], canvas: Canvas) -> Self {
        let endpoint = |location: &Location, top_pct: f64, left_pct: f64| EndpointMarker {
            location: location.clone(),
            top_pct,
            left_pct,
            position: project(location.coordinates(), canvas),
        };

        let (center, source, destination) = match &state.route {
            Some(route) => (
                route.center(),
                Some(endpoint(&route.source, 30.0, 20.0)),
                Some(endpoint(&route.destination, 70.0, 80.0)),
            ),
            None => (DEFAULT_CENTER, None, None),
        };

        let attractions = catalog
            .iter()
            .enumerate()
            .map(|(index, attraction)| AttractionMarker {
                id: attraction.id.clone(),
                name: attraction.name.clone(),
                category: attraction.category,
                rating: attraction.rating,
                top_pct: 40.0 + index as f64 * 8.0,
                left_pct: 30.0 + index as f64 * 12.0,
                position: project(Coordinates::new(attraction.lat, attraction.lng), canvas),
                selected: state.selection.is_selected(&attraction.id),
            })
            .collect();

        Self {
            canvas,
            center,
            source,
            destination,
            attractions,
        }
    }
}
