use super::*;

pub fn load_all_addresses(connections: &sqlite::Connections) -> Result<Vec<AddressRecord>> {
    Ok(usecases::load_all_addresses(&connections.shared()?)?)
}

pub fn load_address(connections: &sqlite::Connections, id: &Id) -> Result<AddressRecord> {
    Ok(usecases::load_address(&connections.shared()?, id)?)
}
