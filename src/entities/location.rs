use geo_types::Coord;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<Coordinates> for String {
    fn from(coordinates: Coordinates) -> Self {
        format!("{},{}", coordinates.lat, coordinates.lng)
    }
}

impl From<Coordinates> for Coord<f64> {
    fn from(coordinates: Coordinates) -> Self {
        Coord {
            x: coordinates.lng,
            y: coordinates.lat,
        }
    }
}

#[test]
fn coordinates_query_string_test() {
    let coordinates = Coordinates::new(53.9045, 27.5615);
    let query: String = coordinates.into();

    assert_eq!(query, "53.9045,27.5615");
}

#[test]
fn coordinates_geo_axis_order_test() {
    let coord: Coord<f64> = Coordinates::new(10.0, 20.0).into();

    assert_eq!(coord.x, 20.0);
    assert_eq!(coord.y, 10.0);
}
