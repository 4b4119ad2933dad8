use crate::entities::{AddressQuery, GeoCodedAddress};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("No geocoding result for '{0}'")]
    NoResult(String),
    #[error("The geocoding service is unavailable: {0}")]
    Unavailable(#[source] anyhow::Error),
    #[error("No geocoding gateway configured")]
    NotConfigured,
}

pub trait GeoCodingGateway {
    fn resolve(&self, query: &AddressQuery) -> Result<GeoCodedAddress, ResolutionError>;
}
