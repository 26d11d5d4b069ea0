pub mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};

use crate::api::{DynAPI, API};
use crate::error::{server_error, Error};
use crate::presenter::SnapshotPresenter;
use crate::server::handlers::{map, routes, waypoints};

pub fn router(api: DynAPI, presenter: Arc<SnapshotPresenter>) -> Router {
    Router::new()
        .route(
            "/waypoints",
            get(waypoints::list)
                .post(waypoints::create)
                .delete(waypoints::reset),
        )
        .route("/route", post(routes::create).get(routes::find))
        .route("/map", get(map::show))
        .layer(Extension(api))
        .layer(Extension(presenter))
}

pub async fn serve<T: API + Sync + Send + 'static>(
    api: T,
    presenter: Arc<SnapshotPresenter>,
    addr: SocketAddr,
) -> Result<(), Error> {
    let api = Arc::new(api) as DynAPI;
    let app = router(api, presenter);

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .map_err(|err| {
            tracing::error!("server stopped: {}", err);
            server_error()
        })
}
