pub mod map;
pub mod routes;
pub mod waypoints;
