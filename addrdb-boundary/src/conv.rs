use super::*;
use addrdb_entities as e;

impl From<e::address::AddressRecord> for Address {
    fn from(from: e::address::AddressRecord) -> Self {
        let e::address::AddressRecord {
            id,
            street,
            name,
            city,
            state,
            postal_code,
            country,
            lat,
            lng,
            map_url,
        } = from;
        Self {
            id: id.into(),
            user_address: street,
            user_name: name,
            city,
            state,
            country,
            postal_code,
            latitude: lat,
            longitude: lng,
            map_url,
        }
    }
}

impl From<(e::address::AddressRecord, e::geo::Distance)> for NearbyAddress {
    fn from((address, distance): (e::address::AddressRecord, e::geo::Distance)) -> Self {
        Self {
            address: address.into(),
            distance_km: distance.to_km(),
        }
    }
}

impl From<NewAddress> for e::address::NewAddress {
    fn from(from: NewAddress) -> Self {
        let NewAddress {
            user_address,
            user_name,
            city,
            state,
            postal_code,
        } = from;
        Self {
            query: e::address::AddressQuery {
                street: user_address,
                city,
                state,
            },
            name: user_name,
            postal_code: postal_code.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_new_address() {
        let new_address = NewAddress {
            user_address: "Main Street 1".into(),
            user_name: "Jane".into(),
            city: "Springfield".into(),
            state: "IL".into(),
            postal_code: PostalCode::Number(62701),
        };
        let e::address::NewAddress {
            query,
            name,
            postal_code,
        } = new_address.into();
        assert_eq!("Main Street 1", query.street);
        assert_eq!("Jane", name);
        assert_eq!("62701", postal_code);
    }

    #[test]
    fn convert_nearby_address() {
        let record = e::address::AddressRecord {
            id: "a".into(),
            lat: Some(1.0),
            ..Default::default()
        };
        let nearby = NearbyAddress::from((record, e::geo::Distance::from_km(2.5)));
        assert_eq!("a", nearby.address.id);
        assert_eq!(Some(1.0), nearby.address.latitude);
        assert_eq!(2.5, nearby.distance_km);
    }
}
