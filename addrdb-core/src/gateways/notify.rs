use crate::entities::{AddressRecord, Coordinate, CoordinateError, Distance, Id};

#[derive(Debug)]
pub enum NotificationEvent<'a> {
    AddressCreated {
        address: &'a AddressRecord,
    },
    AddressUpdated {
        address: &'a AddressRecord,
    },
    AddressDeleted {
        id: &'a Id,
    },
    ProximityQueryFinished {
        reference: Coordinate,
        radius: Distance,
        candidates: usize,
        matches: usize,
        excluded: &'a [(Id, CoordinateError)],
    },
}

pub trait NotificationGateway {
    fn notify(&self, event: NotificationEvent);
}
