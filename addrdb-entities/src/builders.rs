pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::address_builder::*;

pub mod address_builder {

    use super::*;
    use crate::{address::*, geo::*};

    #[derive(Debug)]
    pub struct AddressRecordBuild {
        record: AddressRecord,
    }

    impl AddressRecordBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.record.id = id.into();
            self
        }
        pub fn pos(mut self, pos: Coordinate) -> Self {
            let (lat, lng) = pos.to_lat_lng_deg();
            self.record.lat = Some(lat);
            self.record.lng = Some(lng);
            self
        }
        /// Raw, possibly invalid or missing position.
        pub fn raw_pos(mut self, lat: Option<f64>, lng: Option<f64>) -> Self {
            self.record.lat = lat;
            self.record.lng = lng;
            self
        }
        pub fn finish(self) -> AddressRecord {
            self.record
        }
    }

    impl Builder for AddressRecord {
        type Build = AddressRecordBuild;
        fn build() -> AddressRecordBuild {
            AddressRecordBuild {
                record: AddressRecord {
                    id: crate::id::Id::new(),
                    street: "Main Street 1".into(),
                    name: "John Doe".into(),
                    city: "Springfield".into(),
                    state: "IL".into(),
                    postal_code: "62701".into(),
                    country: Some("US".into()),
                    lat: None,
                    lng: None,
                    map_url: None,
                },
            }
        }
    }
}
