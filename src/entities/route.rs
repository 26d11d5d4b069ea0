use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    Walking,
}

impl TravelMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Walking => "walking",
        }
    }
}

/// One candidate path returned by the directions service for a single leg.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub polyline: Vec<Coordinates>,
    pub distance_meters: f64,
    #[serde(default)]
    pub summary: String,
}

impl Route {
    pub fn new(polyline: Vec<Coordinates>, distance_meters: f64) -> Self {
        Self {
            polyline,
            distance_meters,
            summary: String::new(),
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }
}
