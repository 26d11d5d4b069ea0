use chrono::{DateTime, Utc};
use geo_types::LineString;
use serde::{Deserialize, Serialize};

use crate::entities::{Coordinates, Route};
use crate::error::PlanError;

/// The chosen route for every leg of one planning run, in leg order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub run: u64,
    pub routes: Vec<Route>,
    pub computed_at: DateTime<Utc>,
}

impl Plan {
    pub fn new(run: u64, routes: Vec<Route>) -> Self {
        Self {
            run,
            routes,
            computed_at: Utc::now(),
        }
    }

    pub fn leg_count(&self) -> usize {
        self.routes.len()
    }

    pub fn distance_meters(&self) -> f64 {
        self.routes.iter().map(|route| route.distance_meters).sum()
    }

    /// All leg polylines joined end to end.
    pub fn polyline(&self) -> Vec<Coordinates> {
        self.routes
            .iter()
            .flat_map(|route| route.polyline.iter().copied())
            .collect()
    }

    pub fn overlays(&self) -> impl Iterator<Item = &[Coordinates]> {
        self.routes.iter().map(|route| route.polyline.as_slice())
    }

    pub fn line_string(&self) -> LineString<f64> {
        LineString::new(self.polyline().into_iter().map(Into::into).collect())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum PlanState {
    #[default]
    Idle,
    Requesting { run: u64, legs: usize },
    Succeeded { plan: Plan },
    Failed { run: u64, error: PlanError },
}

impl PlanState {
    pub fn name(&self) -> String {
        match self {
            Self::Idle => "idle".into(),
            Self::Requesting { .. } => "requesting".into(),
            Self::Succeeded { .. } => "succeeded".into(),
            Self::Failed { .. } => "failed".into(),
        }
    }

    pub fn is_requesting(&self) -> bool {
        matches!(self, Self::Requesting { .. })
    }
}

/// Visibility of the route and reset actions, derived from the waypoint count alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub route_visible: bool,
    pub reset_visible: bool,
}

impl Controls {
    pub const ROUTE_THRESHOLD: usize = 2;
    pub const RESET_THRESHOLD: usize = 3;

    pub fn for_count(count: usize) -> Self {
        Self {
            route_visible: count >= Self::ROUTE_THRESHOLD,
            reset_visible: count >= Self::RESET_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(points: &[(f64, f64)], distance_meters: f64) -> Route {
        Route::new(
            points
                .iter()
                .map(|&(lat, lng)| Coordinates::new(lat, lng))
                .collect(),
            distance_meters,
        )
    }

    #[test]
    fn polyline_concatenates_legs_in_order() {
        let plan = Plan::new(
            1,
            vec![
                route(&[(0.0, 0.0), (0.0, 1.0)], 100.0),
                route(&[(0.0, 1.0), (1.0, 1.0)], 150.0),
            ],
        );

        let polyline = plan.polyline();
        assert_eq!(polyline.len(), 4);
        assert_eq!(polyline[0], Coordinates::new(0.0, 0.0));
        assert_eq!(polyline[3], Coordinates::new(1.0, 1.0));
        assert_eq!(plan.distance_meters(), 250.0);
        assert_eq!(plan.overlays().count(), 2);
        assert_eq!(plan.line_string().0.len(), 4);
    }

    #[test]
    fn controls_follow_waypoint_count() {
        let none = Controls::for_count(0);
        assert!(!none.route_visible && !none.reset_visible);

        let one = Controls::for_count(1);
        assert!(!one.route_visible && !one.reset_visible);

        let two = Controls::for_count(2);
        assert!(two.route_visible && !two.reset_visible);

        let three = Controls::for_count(3);
        assert!(three.route_visible && three.reset_visible);

        let many = Controls::for_count(12);
        assert!(many.route_visible && many.reset_visible);
    }
}
