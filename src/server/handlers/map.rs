use axum::extract::{Extension, Json};
use std::sync::Arc;

use crate::presenter::{MapSnapshot, SnapshotPresenter};

pub async fn show(Extension(presenter): Extension<Arc<SnapshotPresenter>>) -> Json<MapSnapshot> {
    presenter.snapshot().into()
}
