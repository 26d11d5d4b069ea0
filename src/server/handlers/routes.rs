use axum::extract::{Extension, Json};

use crate::api::DynAPI;
use crate::entities::{Plan, PlanState};
use crate::error::Error;

pub async fn create(Extension(api): Extension<DynAPI>) -> Result<Json<Plan>, Error> {
    let plan = api.compute_route().await?;

    Ok(plan.into())
}

pub async fn find(Extension(api): Extension<DynAPI>) -> Json<PlanState> {
    api.plan_state().await.into()
}
