use super::prelude::*;

pub fn load_all_addresses<R: AddressRepo>(repo: &R) -> Result<Vec<AddressRecord>> {
    Ok(repo.all_addresses()?)
}

pub fn load_address<R: AddressRepo>(repo: &R, id: &Id) -> Result<AddressRecord> {
    if !id.is_valid() {
        return Err(Error::Id(id.clone()));
    }
    Ok(repo.get_address(id)?)
}
