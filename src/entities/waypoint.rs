use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::Coordinates;

/// A geocoded stop. `label` keeps the address exactly as the user typed it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub id: Uuid,
    pub label: String,
    pub coordinates: Coordinates,
}

impl Waypoint {
    pub fn new(label: String, coordinates: Coordinates) -> Self {
        Self {
            id: Uuid::new_v4(),
            label,
            coordinates,
        }
    }
}

/// A consecutive pair of waypoints; `index` is the leg's position in the plan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    pub index: usize,
    pub origin: Waypoint,
    pub destination: Waypoint,
}
