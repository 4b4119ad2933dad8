use std::sync::Arc;

use super::{prelude as flows, *};

pub type SharedGeoCodingGateway = Arc<dyn GeoCodingGateway + Send + Sync + 'static>;
pub type SharedNotificationGateway = Arc<dyn NotificationGateway + Send + Sync + 'static>;

/// Entry point for all address related requests.
///
/// Every call checks out its own pooled database
/// connection and releases it before returning.
#[derive(Clone)]
pub struct AddressService {
    connections: sqlite::Connections,
    geo_gw: SharedGeoCodingGateway,
    notify: SharedNotificationGateway,
    default_radius: Distance,
}

impl AddressService {
    pub fn new(
        connections: sqlite::Connections,
        geo_gw: SharedGeoCodingGateway,
        notify: SharedNotificationGateway,
        default_radius: Distance,
    ) -> Self {
        Self {
            connections,
            geo_gw,
            notify,
            default_radius,
        }
    }

    pub fn default_radius(&self) -> Distance {
        self.default_radius
    }

    pub fn create(&self, new_address: NewAddress) -> Result<AddressRecord> {
        flows::create_address(&self.connections, &*self.geo_gw, &*self.notify, new_address)
    }

    pub fn update(&self, id: &Id, new_address: NewAddress) -> Result<AddressRecord> {
        flows::update_address(
            &self.connections,
            &*self.geo_gw,
            &*self.notify,
            id,
            new_address,
        )
    }

    pub fn delete(&self, id: &Id) -> Result<()> {
        flows::delete_address(&self.connections, &*self.notify, id)
    }

    pub fn all(&self) -> Result<Vec<AddressRecord>> {
        flows::load_all_addresses(&self.connections)
    }

    /// Find all stored addresses within `radius`
    /// (or the default radius) around `reference`.
    pub fn find_within_radius(
        &self,
        reference: AddressQuery,
        radius: Option<Distance>,
        sort_by_distance: bool,
    ) -> Result<usecases::NearbyAddresses> {
        flows::find_nearby_addresses(
            &self.connections,
            &*self.geo_gw,
            &*self.notify,
            reference,
            radius.unwrap_or(self.default_radius),
            sort_by_distance,
        )
    }
}
