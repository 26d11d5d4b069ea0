use crate::{
    api::DynDirectionsService,
    entities::{Coordinates, Route, TravelMode},
    error::RouteError,
};

pub struct RouteRequester {
    service: DynDirectionsService,
}

impl RouteRequester {
    pub fn new(service: DynDirectionsService) -> Self {
        Self { service }
    }

    /// Candidate routes for one leg. Empty when the service reports that no route exists.
    #[tracing::instrument(skip(self))]
    pub async fn request(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        mode: TravelMode,
    ) -> Result<Vec<Route>, RouteError> {
        let routes = self
            .service
            .directions(origin, destination, mode)
            .await
            .map_err(|err| {
                tracing::warn!("directions request failed: {}", err);
                err
            })?;

        tracing::debug!("{} candidate routes", routes.len());

        Ok(routes)
    }
}
