use super::{prelude::*, Storable};

pub fn store_new_address<R>(repo: &R, storable: Storable) -> Result<AddressRecord>
where
    R: AddressRepo,
{
    let Storable { address, geo_coded } = storable;
    let record = repo.create_address(address, geo_coded)?;
    log::info!("Created address {}", record.id);
    Ok(record)
}
