pub mod google_maps;
pub mod polyline;

pub use google_maps::GoogleMaps;
