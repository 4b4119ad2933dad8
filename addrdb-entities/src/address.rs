use crate::{
    geo::{Coordinate, CoordinateError},
    id::Id,
};

/// The free-text part of an address that is sent to the geocoder.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressQuery {
    pub street : String,
    pub city   : String,
    pub state  : String,
}

/// Fields that are provided by a user when creating
/// or updating an address.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewAddress {
    pub query       : AddressQuery,
    pub name        : String,
    pub postal_code : String,
}

/// Fields that are derived from the geocoder response.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeoCodedAddress {
    pub lat     : f64,
    pub lng     : f64,
    pub country : Option<String>,
    pub map_url : Option<String>,
}

/// A stored address.
///
/// Latitude and longitude are nullable, because the storage
/// does not enforce their presence. Use [`AddressRecord::coordinate`]
/// to obtain a validated position.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AddressRecord {
    pub id          : Id,
    pub street      : String,
    pub name        : String,
    pub city        : String,
    pub state       : String,
    pub postal_code : String,
    pub country     : Option<String>,
    pub lat         : Option<f64>,
    pub lng         : Option<f64>,
    pub map_url     : Option<String>,
}

impl AddressRecord {
    pub fn new(id: Id, new_address: NewAddress, geo_coded: GeoCodedAddress) -> Self {
        let NewAddress {
            query: AddressQuery {
                street,
                city,
                state,
            },
            name,
            postal_code,
        } = new_address;
        let GeoCodedAddress {
            lat,
            lng,
            country,
            map_url,
        } = geo_coded;
        Self {
            id,
            street,
            name,
            city,
            state,
            postal_code,
            country,
            lat: Some(lat),
            lng: Some(lng),
            map_url,
        }
    }

    pub fn coordinate(&self) -> Result<Coordinate, CoordinateError> {
        Coordinate::try_from_optional_lat_lng_deg(self.lat, self.lng)
    }

    pub fn query(&self) -> AddressQuery {
        AddressQuery {
            street: self.street.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
        }
    }
}
