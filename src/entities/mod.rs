mod location;
mod plan;
mod route;
mod waypoint;

pub use location::Coordinates;
pub use plan::{Controls, Plan, PlanState};
pub use route::{Route, TravelMode};
pub use waypoint::{Leg, Waypoint};
