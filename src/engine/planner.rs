use futures::future::join_all;

use super::route_requester::RouteRequester;
use crate::{
    entities::{Leg, Plan, Route, TravelMode},
    error::{PlanError, RouteError},
};

/// Shortest candidate by distance. On equal distances the earlier candidate is kept,
/// and a NaN distance never displaces a comparable one.
pub fn select_best(candidates: &[Route]) -> Option<&Route> {
    let mut best: Option<&Route> = None;

    for candidate in candidates {
        best = match best {
            None => Some(candidate),
            Some(current) if is_shorter(candidate, current) => Some(candidate),
            keep => keep,
        };
    }

    best
}

fn is_shorter(candidate: &Route, current: &Route) -> bool {
    if current.distance_meters.is_nan() {
        return !candidate.distance_meters.is_nan();
    }

    candidate.distance_meters < current.distance_meters
}

pub struct RoutePlanner {
    requester: RouteRequester,
    mode: TravelMode,
}

impl RoutePlanner {
    pub fn new(requester: RouteRequester) -> Self {
        Self {
            requester,
            mode: TravelMode::Walking,
        }
    }

    /// Requests every leg concurrently and assembles the plan in leg order.
    ///
    /// The first failing leg (by index, not by completion time) fails the whole plan.
    #[tracing::instrument(skip(self, legs), fields(legs = legs.len()))]
    pub async fn plan(&self, run: u64, legs: Vec<Leg>) -> Result<Plan, PlanError> {
        if legs.is_empty() {
            return Err(PlanError::InsufficientWaypoints);
        }

        let requests = legs.iter().map(|leg| {
            self.requester.request(
                leg.origin.coordinates,
                leg.destination.coordinates,
                self.mode,
            )
        });

        // join_all yields results in input order, whatever order they complete in
        let results = join_all(requests).await;

        let mut routes = Vec::with_capacity(legs.len());

        for (leg, result) in legs.iter().zip(results) {
            let candidates = result.map_err(|cause| PlanError::LegFailed {
                leg_index: leg.index,
                cause,
            })?;

            let best = select_best(&candidates).ok_or(PlanError::LegFailed {
                leg_index: leg.index,
                cause: RouteError::NoPathFound,
            })?;

            tracing::debug!(
                "leg {} ({} -> {}): picked {:.0} m out of {} candidates",
                leg.index,
                leg.origin.label,
                leg.destination.label,
                best.distance_meters,
                candidates.len()
            );

            routes.push(best.clone());
        }

        Ok(Plan::new(run, routes))
    }
}
