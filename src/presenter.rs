use serde::{Deserialize, Serialize};
use std::sync::RwLock;

use crate::api::MapPresenter;
use crate::entities::{Coordinates, Waypoint};

/// What the map currently shows: pins in insertion order and one overlay per leg.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MapSnapshot {
    pub waypoints: Vec<Waypoint>,
    pub overlays: Vec<Vec<Coordinates>>,
}

/// Keeps the last rendered state in memory so a front end can poll it.
#[derive(Debug, Default)]
pub struct SnapshotPresenter {
    inner: RwLock<MapSnapshot>,
}

impl SnapshotPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> MapSnapshot {
        match self.inner.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn update(&self, f: impl FnOnce(&mut MapSnapshot)) {
        match self.inner.write() {
            Ok(mut guard) => f(&mut guard),
            Err(poisoned) => f(&mut poisoned.into_inner()),
        }
    }
}

impl MapPresenter for SnapshotPresenter {
    fn show_waypoints(&self, waypoints: &[Waypoint]) {
        self.update(|map| map.waypoints = waypoints.to_vec());
    }

    fn show_overlay(&self, polyline: &[Coordinates]) {
        self.update(|map| map.overlays.push(polyline.to_vec()));
    }

    fn clear(&self) {
        self.update(|map| *map = MapSnapshot::default());
    }
}

#[test]
fn snapshot_presenter_test() {
    let presenter = SnapshotPresenter::new();
    let waypoint = Waypoint::new("Lenina 1".into(), Coordinates::new(53.9, 27.5));

    presenter.show_waypoints(&[waypoint.clone()]);
    presenter.show_overlay(&[Coordinates::new(53.9, 27.5), Coordinates::new(53.91, 27.52)]);

    let snapshot = presenter.snapshot();
    assert_eq!(snapshot.waypoints, vec![waypoint]);
    assert_eq!(snapshot.overlays.len(), 1);

    presenter.clear();
    assert_eq!(presenter.snapshot(), MapSnapshot::default());
}
