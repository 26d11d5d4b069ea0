use super::Engine;

use async_trait::async_trait;
use std::sync::atomic::Ordering;

use crate::{
    api::WaypointAPI,
    entities::{Controls, PlanState, Waypoint},
    error::{discarded_error, Error},
};

#[async_trait]
impl WaypointAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn add_address(&self, address: String) -> Result<Waypoint, Error> {
        // submissions are appended in arrival order
        let _submission = self.submission.lock().await;
        let epoch = self.epoch.load(Ordering::SeqCst);

        let coordinates = self.resolver.resolve(&address).await?;

        let mut store = self.store.lock().await;

        if self.epoch.load(Ordering::SeqCst) != epoch {
            tracing::info!("reset happened while resolving, dropping {:?}", address);
            return Err(discarded_error());
        }

        let waypoint = store.append(address, coordinates).clone();
        self.presenter.show_waypoints(store.waypoints());

        tracing::info!(
            "added waypoint #{} at {},{}",
            store.count(),
            coordinates.lat,
            coordinates.lng
        );

        Ok(waypoint)
    }

    async fn list_waypoints(&self) -> Vec<Waypoint> {
        self.store.lock().await.snapshot()
    }

    async fn controls(&self) -> Controls {
        Controls::for_count(self.store.lock().await.count())
    }

    #[tracing::instrument(skip(self))]
    async fn reset(&self) {
        let mut store = self.store.lock().await;
        let mut state = self.state.lock().await;

        store.clear();
        self.epoch.fetch_add(1, Ordering::SeqCst);
        let generation = self.next_generation();
        *state = PlanState::Idle;
        self.presenter.clear();

        tracing::info!("reset, generation is now {}", generation);
    }
}
