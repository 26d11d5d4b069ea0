use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    api::{DirectionsService, GeocodingService},
    config::Config,
    entities::{Coordinates, Route, TravelMode},
    error::{GeocodeError, RouteError},
    external::polyline,
};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Place {
    #[serde(default)]
    pub formatted_address: String,
    pub geometry: Geometry,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Geometry {
    pub location: Coordinates,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DirectionsRoute {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub legs: Vec<DirectionsLeg>,
    pub overview_polyline: EncodedPolyline,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DirectionsLeg {
    pub distance: Distance,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Distance {
    pub value: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EncodedPolyline {
    pub points: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response<T> {
    status: String,
    results: Option<T>,
    routes: Option<T>,
}

/// Client for the Google Maps Geocoding and Directions web services.
#[derive(Clone)]
pub struct GoogleMaps {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
}

impl GoogleMaps {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: config.google_maps_api_base.clone(),
            api_key: config.google_maps_api_key.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("https://{}/maps/api/{}/json", self.api_base, path)
    }
}

#[async_trait]
impl GeocodingService for GoogleMaps {
    #[tracing::instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<Vec<Coordinates>, GeocodeError> {
        let res = self
            .client
            .get(self.url("geocode"))
            .query(&[("key", self.api_key.as_str())])
            .query(&[("address", address)])
            .send()
            .await
            .map_err(|err| {
                tracing::warn!("geocode request failed: {}", err);
                GeocodeError::ServiceUnavailable
            })?;

        check_geocode_status(res.status().as_u16())?;

        let data: Response<Vec<Place>> = res
            .json()
            .await
            .map_err(|_| GeocodeError::ServiceUnavailable)?;

        places_to_candidates(data)
    }
}

#[async_trait]
impl DirectionsService for GoogleMaps {
    #[tracing::instrument(skip(self))]
    async fn directions(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        mode: TravelMode,
    ) -> Result<Vec<Route>, RouteError> {
        let origin: String = origin.into();
        let destination: String = destination.into();

        let res = self
            .client
            .get(self.url("directions"))
            .query(&[("key", self.api_key.as_str())])
            .query(&[("origin", origin)])
            .query(&[("destination", destination)])
            .query(&[("mode", mode.name())])
            .query(&[("alternatives", "true")])
            .send()
            .await
            .map_err(|err| {
                tracing::warn!("directions request failed: {}", err);
                RouteError::Unavailable
            })?;

        if res.status().as_u16() != 200 {
            return Err(RouteError::Unavailable);
        }

        let data: Response<Vec<DirectionsRoute>> =
            res.json().await.map_err(|_| RouteError::Unavailable)?;

        directions_to_routes(data)
    }
}

/// Anything but 200 is a transport failure (bad key, quota, outage). An address
/// that cannot be found still answers 200 with a `ZERO_RESULTS` body.
fn check_geocode_status(status_code: u16) -> Result<(), GeocodeError> {
    if status_code != 200 {
        tracing::warn!("geocoding service answered HTTP {}", status_code);
        return Err(GeocodeError::ServiceUnavailable);
    }

    Ok(())
}

fn places_to_candidates(data: Response<Vec<Place>>) -> Result<Vec<Coordinates>, GeocodeError> {
    match data.status.as_str() {
        "OK" => Ok(data
            .results
            .unwrap_or_default()
            .into_iter()
            .map(|place| place.geometry.location)
            .collect()),
        "ZERO_RESULTS" | "INVALID_REQUEST" => Err(GeocodeError::NotFound),
        status => {
            tracing::warn!("geocoding service answered {}", status);
            Err(GeocodeError::ServiceUnavailable)
        }
    }
}

fn directions_to_routes(
    data: Response<Vec<DirectionsRoute>>,
) -> Result<Vec<Route>, RouteError> {
    match data.status.as_str() {
        "OK" => data
            .routes
            .unwrap_or_default()
            .into_iter()
            .map(|route| {
                let polyline = polyline::decode(&route.overview_polyline.points).map_err(|err| {
                    tracing::warn!("undecodable polyline: {}", err);
                    RouteError::Unavailable
                })?;
                let distance: f64 = route.legs.iter().map(|leg| leg.distance.value).sum();

                Ok(Route::new(polyline, distance).with_summary(route.summary))
            })
            .collect(),
        "ZERO_RESULTS" | "NOT_FOUND" => Ok(vec![]),
        status => {
            tracing::warn!("directions service answered {}", status);
            Err(RouteError::Unavailable)
        }
    }
}
