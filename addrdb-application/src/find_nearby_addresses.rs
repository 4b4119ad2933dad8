use super::*;
use addrdb_core::proximity::ProximityQuery;

pub fn find_nearby_addresses(
    connections: &sqlite::Connections,
    geo_gw: &dyn GeoCodingGateway,
    notify: &dyn NotificationGateway,
    reference: AddressQuery,
    radius: Distance,
    sort_by_distance: bool,
) -> Result<usecases::NearbyAddresses> {
    let radius = usecases::validate_radius(radius)?;
    let reference = usecases::resolve_reference(geo_gw, reference)?;
    let query = ProximityQuery::new(reference, radius);
    // All candidates are read through a single shared
    // connection, i.e. from a consistent snapshot.
    let nearby = {
        let db = connections.shared()?;
        usecases::find_nearby_addresses(&db, query, sort_by_distance)?
    };
    notify.notify(NotificationEvent::ProximityQueryFinished {
        reference: nearby.reference,
        radius: nearby.radius,
        candidates: nearby.candidates,
        matches: nearby.addresses.len(),
        excluded: &nearby.excluded,
    });
    Ok(nearby)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn find(
        fixture: &BackendFixture,
        reference: AddressQuery,
        radius_km: f64,
    ) -> Result<usecases::NearbyAddresses, AppError> {
        flows::find_nearby_addresses(
            &fixture.db_connections,
            &fixture.geo_gw,
            &fixture.notify,
            reference,
            Distance::from_km(radius_km),
            false,
        )
    }

    #[test]
    fn find_addresses_around_reference() {
        let fixture = BackendFixture::new();
        let springfield = fixture
            .create_address(new_address("Main Street 1", "Springfield", "IL"))
            .unwrap();
        fixture
            .create_address(new_address("Broadway 1", "New York", "NY"))
            .unwrap();
        let nearby = find(&fixture, query("Main Street 1", "Springfield", "IL"), 100.0).unwrap();
        assert_eq!(2, nearby.candidates);
        assert_eq!(1, nearby.addresses.len());
        assert_eq!(springfield, nearby.addresses[0].0);
        assert_eq!(0.0, nearby.addresses[0].1.to_meters());
        assert_eq!(1, fixture.notify.proximity_queries());
    }

    #[test]
    fn zero_radius() {
        let fixture = BackendFixture::new();
        fixture
            .create_address(new_address("Main Street 1", "Springfield", "IL"))
            .unwrap();
        let nearby = find(&fixture, query("Main Street 1", "Springfield", "IL"), 0.0).unwrap();
        assert!(nearby.addresses.is_empty());
    }

    #[test]
    fn reject_invalid_reference() {
        let fixture = BackendFixture::new();
        let err = find(&fixture, query("Main Street 1", "", "IL"), 100.0).unwrap_err();
        assert!(matches!(err, AppError::Business(usecases::Error::City)));
        let err = find(&fixture, query("Main Street 1", "Springfield", "IL"), f64::NAN).unwrap_err();
        assert!(matches!(err, AppError::Business(usecases::Error::Radius)));
        let err = find(&fixture, query("North Pole 1", "Nowhere", "XX"), 100.0).unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(usecases::Error::InvalidReferenceCoordinate(_))
        ));
        assert_eq!(0, fixture.notify.proximity_queries());
    }
}
