use super::{prelude::*, Storable};

/// Overwrite the user-provided and the derived fields of an
/// existing address.
pub fn store_updated_address<R>(repo: &R, id: &Id, storable: Storable) -> Result<AddressRecord>
where
    R: AddressRepo,
{
    if !id.is_valid() {
        return Err(Error::Id(id.clone()));
    }
    let Storable { address, geo_coded } = storable;
    let record = repo.update_address(id, address, geo_coded)?;
    log::info!("Updated address {}", record.id);
    Ok(record)
}
