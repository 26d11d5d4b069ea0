use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{Controls, Coordinates, Plan, PlanState, Route, TravelMode, Waypoint};
use crate::error::{Error, GeocodeError, PlanError, RouteError};

/// Address lookup. Candidates come back in the order the service ranked them.
#[async_trait]
pub trait GeocodingService {
    async fn geocode(&self, address: &str) -> Result<Vec<Coordinates>, GeocodeError>;
}

/// Directions lookup. An empty list means the service reported that no route exists.
#[async_trait]
pub trait DirectionsService {
    async fn directions(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        mode: TravelMode,
    ) -> Result<Vec<Route>, RouteError>;
}

/// Receives rendering snapshots from the engine. Never read back by the core.
pub trait MapPresenter {
    fn show_waypoints(&self, waypoints: &[Waypoint]);
    fn show_overlay(&self, polyline: &[Coordinates]);
    fn clear(&self);
}

#[async_trait]
pub trait WaypointAPI {
    async fn add_address(&self, address: String) -> Result<Waypoint, Error>;
    async fn list_waypoints(&self) -> Vec<Waypoint>;
    async fn controls(&self) -> Controls;
    async fn reset(&self);
}

#[async_trait]
pub trait RouteAPI {
    async fn compute_route(&self) -> Result<Plan, PlanError>;
    async fn plan_state(&self) -> PlanState;
}

pub trait API: WaypointAPI + RouteAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
pub type DynGeocodingService = Arc<dyn GeocodingService + Send + Sync>;
pub type DynDirectionsService = Arc<dyn DirectionsService + Send + Sync>;
pub type DynMapPresenter = Arc<dyn MapPresenter + Send + Sync>;
