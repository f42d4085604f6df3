use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Coordinates, Location};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: Uuid,
    pub source: Location,
    pub destination: Location,
}

impl Route {
    pub fn new(source: Location, destination: Location) -> Self {
        Route {
            id: Uuid::new_v4(),
            source,
            destination,
        }
    }

    pub fn center(&self) -> Coordinates {
        self.source
            .coordinates()
            .midpoint(&self.destination.coordinates())
    }
}
