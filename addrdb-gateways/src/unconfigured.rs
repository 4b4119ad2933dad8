use addrdb_core::{
    entities::{AddressQuery, GeoCodedAddress},
    gateways::geocode::{GeoCodingGateway, ResolutionError},
};

/// Used when no geocoding service has been configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotConfigured;

impl GeoCodingGateway for NotConfigured {
    fn resolve(&self, query: &AddressQuery) -> Result<GeoCodedAddress, ResolutionError> {
        log::debug!(
            "Cannot resolve '{}' because no geocoding gateway was configured",
            query.street
        );
        Err(ResolutionError::NotConfigured)
    }
}
