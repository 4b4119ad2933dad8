use super::prelude::*;
use crate::{
    proximity::ProximityQuery,
    util::validate::{AutoCorrect, Validate},
};

/// Addresses within a radius around a reference position.
#[derive(Debug, Clone)]
pub struct NearbyAddresses {
    pub reference: Coordinate,
    pub radius: Distance,
    /// Number of stored addresses that have been considered.
    pub candidates: usize,
    pub addresses: Vec<(AddressRecord, Distance)>,
    /// Addresses that have been skipped because their
    /// stored position is missing or invalid.
    pub excluded: Vec<(Id, CoordinateError)>,
}

/// Resolve the position of a free-text reference address.
pub fn resolve_reference<G>(geo_gw: &G, query: AddressQuery) -> Result<Coordinate>
where
    G: GeoCodingGateway + ?Sized,
{
    let query = query.auto_correct();
    query.validate()?;
    let geo_coded = geo_gw.resolve(&query)?;
    let reference = Coordinate::try_from_lat_lng_deg(geo_coded.lat, geo_coded.lng)
        .map_err(Error::InvalidReferenceCoordinate)?;
    log::debug!(
        "Resolved reference '{}, {}, {}' to {}",
        query.street,
        query.city,
        query.state,
        reference
    );
    Ok(reference)
}

pub fn validate_radius(radius: Distance) -> Result<Distance> {
    if radius.to_meters().is_finite() {
        Ok(radius)
    } else {
        Err(Error::Radius)
    }
}

/// Scan a snapshot of all stored addresses.
pub fn find_nearby_addresses<R>(
    repo: &R,
    query: ProximityQuery,
    sort_by_distance: bool,
) -> Result<NearbyAddresses>
where
    R: AddressRepo,
{
    let ProximityQuery { reference, radius } = query;
    let radius = validate_radius(radius)?;
    let snapshot = repo.all_addresses()?;
    let mut result = query.apply(&snapshot);
    if sort_by_distance {
        result.sort_by_distance();
    }
    let excluded: Vec<_> = result
        .excluded
        .iter()
        .map(|e| (e.candidate.id.clone(), e.reason.clone()))
        .collect();
    if !excluded.is_empty() {
        log::warn!(
            "Excluded {} of {} addresses with invalid positions",
            excluded.len(),
            snapshot.len()
        );
    }
    let addresses = result
        .matches
        .iter()
        .map(|m| (m.candidate.clone(), m.distance))
        .collect();
    Ok(NearbyAddresses {
        reference,
        radius,
        candidates: snapshot.len(),
        addresses,
        excluded,
    })
}
