use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::api::DynAPI;
use crate::entities::{Controls, Waypoint};
use crate::error::Error;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    pub address: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WaypointList {
    pub waypoints: Vec<Waypoint>,
    pub controls: Controls,
}

async fn waypoint_list(api: &DynAPI) -> WaypointList {
    WaypointList {
        waypoints: api.list_waypoints().await,
        controls: api.controls().await,
    }
}

pub async fn list(Extension(api): Extension<DynAPI>) -> Json<WaypointList> {
    waypoint_list(&api).await.into()
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<Json<Waypoint>, Error> {
    let waypoint = api.add_address(params.address).await?;

    Ok(waypoint.into())
}

pub async fn reset(Extension(api): Extension<DynAPI>) -> Json<WaypointList> {
    api.reset().await;

    waypoint_list(&api).await.into()
}
