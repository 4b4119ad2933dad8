// Low-level database access traits.
// The repository owns the authoritative copy of every
// address record. Use cases only ever receive snapshots.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait AddressRepo {
    /// Store a new address under a freshly assigned identifier.
    fn create_address(
        &self,
        address: NewAddress,
        geo_coded: GeoCodedAddress,
    ) -> Result<AddressRecord>;

    fn get_address(&self, id: &Id) -> Result<AddressRecord>;

    /// Snapshot of all stored addresses (may be empty).
    fn all_addresses(&self) -> Result<Vec<AddressRecord>>;
    fn count_addresses(&self) -> Result<usize>;

    /// Overwrite both the user-provided and the derived fields.
    fn update_address(
        &self,
        id: &Id,
        address: NewAddress,
        geo_coded: GeoCodedAddress,
    ) -> Result<AddressRecord>;

    fn delete_address(&self, id: &Id) -> Result<()>;
}
