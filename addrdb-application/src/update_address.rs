use super::*;

pub fn update_address(
    connections: &sqlite::Connections,
    geo_gw: &dyn GeoCodingGateway,
    notify: &dyn NotificationGateway,
    id: &Id,
    new_address: NewAddress,
) -> Result<AddressRecord> {
    let storable = usecases::prepare_address(geo_gw, new_address)?;
    let address = connections
        .exclusive()?
        .transaction(|conn| usecases::store_updated_address(conn, id, storable))?;
    notify.notify(NotificationEvent::AddressUpdated { address: &address });
    Ok(address)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn update_existing_address() {
        let fixture = BackendFixture::new();
        let created = fixture
            .create_address(new_address("Main Street 1", "Springfield", "IL"))
            .unwrap();
        let updated = flows::update_address(
            &fixture.db_connections,
            &fixture.geo_gw,
            &fixture.notify,
            &created.id,
            new_address("Broadway 1", "New York", "NY"),
        )
        .unwrap();
        assert_eq!(created.id, updated.id);
        assert_eq!("Broadway 1", updated.street);
        assert_eq!(Some(40.7), updated.lat);
        assert_eq!(
            updated,
            flows::load_address(&fixture.db_connections, &created.id).unwrap()
        );
        assert_eq!(1, fixture.notify.updated());
    }

    #[test]
    fn update_unknown_address() {
        let fixture = BackendFixture::new();
        let err = flows::update_address(
            &fixture.db_connections,
            &fixture.geo_gw,
            &fixture.notify,
            &"unknown".into(),
            new_address("Broadway 1", "New York", "NY"),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(usecases::Error::Repo(RepoError::NotFound))
        ));
        assert_eq!(0, fixture.notify.updated());
    }
}
