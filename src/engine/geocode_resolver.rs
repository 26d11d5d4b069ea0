use crate::{
    api::DynGeocodingService,
    entities::Coordinates,
    error::GeocodeError,
};

/// Turns an address into a single coordinate.
///
/// When the service offers several candidates the first one is taken as is.
pub struct GeocodeResolver {
    service: DynGeocodingService,
}

impl GeocodeResolver {
    pub fn new(service: DynGeocodingService) -> Self {
        Self { service }
    }

    #[tracing::instrument(skip(self))]
    pub async fn resolve(&self, address: &str) -> Result<Coordinates, GeocodeError> {
        if address.trim().is_empty() {
            return Err(GeocodeError::NotFound);
        }

        let candidates = self.service.geocode(address).await.map_err(|err| {
            tracing::warn!("geocoding failed: {}", err);
            err
        })?;

        if candidates.len() > 1 {
            tracing::debug!(
                "{} candidates returned, taking the first one",
                candidates.len()
            );
        }

        candidates.into_iter().next().ok_or(GeocodeError::NotFound)
    }
}
