use super::*;

pub fn create_address(
    connections: &sqlite::Connections,
    geo_gw: &dyn GeoCodingGateway,
    notify: &dyn NotificationGateway,
    new_address: NewAddress,
) -> Result<AddressRecord> {
    // The upstream lookup happens before any
    // database connection is acquired.
    let storable = usecases::prepare_address(geo_gw, new_address)?;
    let address = connections.exclusive()?.transaction(|conn| {
        usecases::store_new_address(conn, storable).map_err(|err| {
            warn!("Failed to store new address: {}", err);
            err
        })
    })?;
    notify.notify(NotificationEvent::AddressCreated { address: &address });
    Ok(address)
}
