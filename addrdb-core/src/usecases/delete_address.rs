use super::prelude::*;

pub fn delete_address<R>(repo: &R, id: &Id) -> Result<()>
where
    R: AddressRepo,
{
    if !id.is_valid() {
        return Err(Error::Id(id.clone()));
    }
    repo.delete_address(id)?;
    log::info!("Deleted address {}", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::{tests::MockDb, *};
    use addrdb_entities::builders::*;

    #[test]
    fn delete_existing_and_unknown_address() {
        let db = MockDb::default();
        db.addresses
            .borrow_mut()
            .extend([AddressRecord::build().id("a").finish(), AddressRecord::build().id("b").finish()]);
        assert!(delete_address(&db, &"a".into()).is_ok());
        assert_eq!(1, db.addresses.borrow().len());
        assert_eq!("b", db.addresses.borrow()[0].id.as_str());
        let err = delete_address(&db, &"a".into()).unwrap_err();
        assert!(matches!(err, Error::Repo(RepoError::NotFound)));
    }
}
