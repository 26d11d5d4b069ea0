use crate::entities::{Coordinates, Leg, Waypoint};

/// Ordered, append-only collection of resolved waypoints.
///
/// Insertion order is the leg order of every plan computed from the store.
/// Entries are never removed individually; `clear` drops all of them.
#[derive(Debug, Default)]
pub struct WaypointStore {
    waypoints: Vec<Waypoint>,
}

impl WaypointStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, label: String, coordinates: Coordinates) -> &Waypoint {
        self.waypoints.push(Waypoint::new(label, coordinates));
        &self.waypoints[self.waypoints.len() - 1]
    }

    pub fn count(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn snapshot(&self) -> Vec<Waypoint> {
        self.waypoints.clone()
    }

    /// Consecutive `(w[i], w[i + 1])` pairs; empty with fewer than two waypoints.
    pub fn ordered_pairs(&self) -> Vec<Leg> {
        self.waypoints
            .windows(2)
            .enumerate()
            .map(|(index, pair)| Leg {
                index,
                origin: pair[0].clone(),
                destination: pair[1].clone(),
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.waypoints.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(labels: &[&str]) -> WaypointStore {
        let mut store = WaypointStore::new();
        for (i, label) in labels.iter().enumerate() {
            store.append(label.to_string(), Coordinates::new(i as f64, i as f64));
        }
        store
    }

    #[test]
    fn ordered_pairs_follow_append_order() {
        for n in 0usize..6 {
            let labels: Vec<String> = (0..n).map(|i| format!("stop {}", i)).collect();
            let refs: Vec<&str> = labels.iter().map(String::as_str).collect();
            let store = store_with(&refs);

            let pairs = store.ordered_pairs();
            assert_eq!(pairs.len(), n.saturating_sub(1));

            for (i, leg) in pairs.iter().enumerate() {
                assert_eq!(leg.index, i);
                assert_eq!(leg.origin.label, labels[i]);
                assert_eq!(leg.destination.label, labels[i + 1]);
            }
        }
    }

    #[test]
    fn append_keeps_duplicates() {
        let store = store_with(&["Main St 1", "Main St 1"]);

        assert_eq!(store.count(), 2);
        assert_eq!(store.ordered_pairs().len(), 1);
        assert_ne!(store.waypoints()[0].id, store.waypoints()[1].id);
    }

    #[test]
    fn clear_returns_to_empty_state() {
        let mut store = store_with(&["a", "b", "c"]);

        store.clear();
        assert_eq!(store.count(), 0);
        assert!(store.is_empty());
        assert!(store.ordered_pairs().is_empty());
        assert!(store.snapshot().is_empty());

        store.clear();
        assert_eq!(store.count(), 0);
    }
}
