mod create_address;
mod delete_address;
mod error;
mod find_nearby_addresses;
mod load_addresses;
mod update_address;


pub use self::{
    create_address::*, delete_address::*, error::Error, find_nearby_addresses::*,
    load_addresses::*, update_address::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, gateways::geocode::*, repositories::*};
    #[cfg(test)]
    pub use crate::repositories::Error as RepoError;
}
use self::prelude::*;

use crate::util::validate::{AutoCorrect, Validate};

/// A validated address that has been resolved by the geocoder
/// and is ready to be stored.
#[derive(Debug, Clone)]
pub struct Storable {
    address: NewAddress,
    geo_coded: GeoCodedAddress,
}

/// Validate the user input and resolve it with the geocoder.
///
/// No repository is involved, so the caller does not need to
/// hold a database connection during the (slow) upstream lookup.
pub fn prepare_address<G>(geo_gw: &G, address: NewAddress) -> Result<Storable>
where
    G: GeoCodingGateway + ?Sized,
{
    let address = address.auto_correct();
    address.validate()?;
    let geo_coded = geo_gw.resolve(&address.query)?;
    let pos = Coordinate::try_from_lat_lng_deg(geo_coded.lat, geo_coded.lng)
        .map_err(Error::InvalidCoordinate)?;
    log::debug!("Resolved '{}, {}' to {}", address.query.street, address.query.city, pos);
    Ok(Storable {
        address,
        geo_coded,
    })
}
