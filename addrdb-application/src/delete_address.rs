use super::*;

pub fn delete_address(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    id: &Id,
) -> Result<()> {
    connections
        .exclusive()?
        .transaction(|conn| usecases::delete_address(conn, id))?;
    notify.notify(NotificationEvent::AddressDeleted { id });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn delete_address_twice() {
        let fixture = BackendFixture::new();
        let created = fixture
            .create_address(new_address("Main Street 1", "Springfield", "IL"))
            .unwrap();
        flows::delete_address(&fixture.db_connections, &fixture.notify, &created.id).unwrap();
        let err = flows::delete_address(&fixture.db_connections, &fixture.notify, &created.id)
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(usecases::Error::Repo(RepoError::NotFound))
        ));
        assert_eq!(1, fixture.notify.deleted());
    }
}
