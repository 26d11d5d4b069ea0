use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use walkroute::config::Config;
use walkroute::engine::Engine;
use walkroute::error::Error;
use walkroute::external::GoogleMaps;
use walkroute::presenter::SnapshotPresenter;
use walkroute::server::serve;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("walkroute=info")),
        )
        .init();

    let config = Config::from_env()?;

    let google_maps = Arc::new(GoogleMaps::new(&config));
    let presenter = Arc::new(SnapshotPresenter::new());

    let engine = Engine::new(google_maps.clone(), google_maps, presenter.clone());

    serve(engine, presenter, config.listen_addr).await
}
