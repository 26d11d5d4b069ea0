#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

use walkroute::api::{DirectionsService, GeocodingService};
use walkroute::engine::Engine;
use walkroute::entities::{Coordinates, Route, TravelMode};
use walkroute::error::{GeocodeError, RouteError};
use walkroute::presenter::SnapshotPresenter;

pub fn a() -> Coordinates {
    Coordinates::new(53.9000, 27.5600)
}

pub fn b() -> Coordinates {
    Coordinates::new(53.9050, 27.5650)
}

pub fn c() -> Coordinates {
    Coordinates::new(53.9100, 27.5700)
}

pub fn route(from: Coordinates, to: Coordinates, distance_meters: f64) -> Route {
    Route::new(vec![from, to], distance_meters)
}

struct Lookup {
    result: Result<Vec<Coordinates>, GeocodeError>,
    delay: Option<Duration>,
}

#[derive(Default)]
pub struct FakeGeocoder {
    addresses: Mutex<HashMap<String, Lookup>>,
    calls: Mutex<Vec<String>>,
}

impl FakeGeocoder {
    pub fn set(&self, address: &str, result: Result<Vec<Coordinates>, GeocodeError>) {
        self.set_delayed(address, result, None);
    }

    pub fn set_delayed(
        &self,
        address: &str,
        result: Result<Vec<Coordinates>, GeocodeError>,
        delay: Option<Duration>,
    ) {
        self.addresses
            .lock()
            .unwrap()
            .insert(address.to_string(), Lookup { result, delay });
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GeocodingService for FakeGeocoder {
    async fn geocode(&self, address: &str) -> Result<Vec<Coordinates>, GeocodeError> {
        self.calls.lock().unwrap().push(address.to_string());

        let (result, delay) = match self.addresses.lock().unwrap().get(address) {
            Some(lookup) => (lookup.result.clone(), lookup.delay),
            None => (Ok(vec![]), None),
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        result
    }
}

struct Rule {
    origin: Coordinates,
    destination: Coordinates,
    result: Result<Vec<Route>, RouteError>,
    delay: Option<Duration>,
}

/// Directions keyed by (origin, destination). Unknown pairs answer "no route".
#[derive(Default)]
pub struct FakeDirections {
    rules: Mutex<Vec<Rule>>,
    hold: Mutex<Option<(Arc<Notify>, Arc<Notify>)>>,
    completed: Mutex<Vec<(Coordinates, Coordinates)>>,
    modes: Mutex<Vec<TravelMode>>,
}

impl FakeDirections {
    pub fn set(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        result: Result<Vec<Route>, RouteError>,
    ) {
        self.set_delayed(origin, destination, result, None);
    }

    pub fn set_delayed(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        result: Result<Vec<Route>, RouteError>,
        delay: Option<Duration>,
    ) {
        let mut rules = self.rules.lock().unwrap();
        rules.retain(|rule| !(rule.origin == origin && rule.destination == destination));
        rules.push(Rule {
            origin,
            destination,
            result,
            delay,
        });
    }

    /// The next call signals `entered` and then waits for `release`.
    pub fn hold_next_call(&self) -> (Arc<Notify>, Arc<Notify>) {
        let entered = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        *self.hold.lock().unwrap() = Some((entered.clone(), release.clone()));
        (entered, release)
    }

    pub fn completed(&self) -> Vec<(Coordinates, Coordinates)> {
        self.completed.lock().unwrap().clone()
    }

    pub fn modes(&self) -> Vec<TravelMode> {
        self.modes.lock().unwrap().clone()
    }
}

#[async_trait]
impl DirectionsService for FakeDirections {
    async fn directions(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        mode: TravelMode,
    ) -> Result<Vec<Route>, RouteError> {
        self.modes.lock().unwrap().push(mode);

        let hold = self.hold.lock().unwrap().take();
        if let Some((entered, release)) = hold {
            entered.notify_one();
            release.notified().await;
        }

        let (result, delay) = {
            let rules = self.rules.lock().unwrap();
            match rules
                .iter()
                .find(|rule| rule.origin == origin && rule.destination == destination)
            {
                Some(rule) => (rule.result.clone(), rule.delay),
                None => (Ok(vec![]), None),
            }
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.completed.lock().unwrap().push((origin, destination));

        result
    }
}

pub struct Fixture {
    pub engine: Arc<Engine>,
    pub geocoder: Arc<FakeGeocoder>,
    pub directions: Arc<FakeDirections>,
    pub presenter: Arc<SnapshotPresenter>,
}

impl Fixture {
    /// Engine wired to fakes that know the addresses "A", "B" and "C" and the
    /// legs A -> B (300 m) and B -> C (400 m).
    pub fn new() -> Self {
        let geocoder = Arc::new(FakeGeocoder::default());
        geocoder.set("A", Ok(vec![a()]));
        geocoder.set("B", Ok(vec![b()]));
        geocoder.set("C", Ok(vec![c()]));

        let directions = Arc::new(FakeDirections::default());
        directions.set(a(), b(), Ok(vec![route(a(), b(), 300.0)]));
        directions.set(b(), c(), Ok(vec![route(b(), c(), 400.0)]));

        let presenter = Arc::new(SnapshotPresenter::new());

        let engine = Arc::new(Engine::new(
            geocoder.clone(),
            directions.clone(),
            presenter.clone(),
        ));

        Self {
            engine,
            geocoder,
            directions,
            presenter,
        }
    }
}
