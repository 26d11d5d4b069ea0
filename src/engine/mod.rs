mod geocode_resolver;
mod planner;
mod route_api;
mod route_requester;
mod waypoint_api;
mod waypoint_store;

pub use geocode_resolver::GeocodeResolver;
pub use planner::{select_best, RoutePlanner};
pub use route_requester::RouteRequester;
pub use waypoint_store::WaypointStore;

use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;

use crate::{
    api::{DynDirectionsService, DynGeocodingService, DynMapPresenter, API},
    entities::{Plan, PlanState},
};

/// One user session: the waypoint store, the current plan state and the presenter
/// they are rendered to.
///
/// Lock order is `submission`, then `store`, then `state`. Every planning run gets a
/// generation number; only the run matching the current generation may publish.
pub struct Engine {
    resolver: GeocodeResolver,
    planner: RoutePlanner,
    presenter: DynMapPresenter,
    submission: Mutex<()>,
    store: Mutex<WaypointStore>,
    state: Mutex<PlanState>,
    generation: AtomicU64,
    epoch: AtomicU64,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub fn new(
        geocoder: DynGeocodingService,
        directions: DynDirectionsService,
        presenter: DynMapPresenter,
    ) -> Self {
        Self {
            resolver: GeocodeResolver::new(geocoder),
            planner: RoutePlanner::new(RouteRequester::new(directions)),
            presenter,
            submission: Mutex::new(()),
            store: Mutex::new(WaypointStore::new()),
            state: Mutex::new(PlanState::Idle),
            generation: AtomicU64::new(0),
            epoch: AtomicU64::new(0),
        }
    }

    fn is_current(&self, run: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == run
    }

    /// Bumps the generation so any in-flight run can no longer publish.
    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Replaces whatever the presenter shows with the current pins and, if given,
    /// one overlay per leg.
    fn render(&self, store: &WaypointStore, plan: Option<&Plan>) {
        self.presenter.clear();

        if !store.is_empty() {
            self.presenter.show_waypoints(store.waypoints());
        }

        if let Some(plan) = plan {
            for overlay in plan.overlays() {
                self.presenter.show_overlay(overlay);
            }
        }
    }
}

impl API for Engine {}
