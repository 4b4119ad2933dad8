use addrdb_core::{
    entities::*,
    repositories::{AddressRepo, Error as RepoError},
};

use super::*;

type Result<T> = std::result::Result<T, RepoError>;

macro_rules! delegate_address_repo {
    ($db:ty) => {
        impl AddressRepo for $db {
            fn create_address(
                &self,
                address: NewAddress,
                geo_coded: GeoCodedAddress,
            ) -> Result<AddressRecord> {
                self.with_conn(|conn| conn.create_address(address, geo_coded))
            }
            fn get_address(&self, id: &Id) -> Result<AddressRecord> {
                self.with_conn(|conn| conn.get_address(id))
            }
            fn all_addresses(&self) -> Result<Vec<AddressRecord>> {
                self.with_conn(|conn| conn.all_addresses())
            }
            fn count_addresses(&self) -> Result<usize> {
                self.with_conn(|conn| conn.count_addresses())
            }
            fn update_address(
                &self,
                id: &Id,
                address: NewAddress,
                geo_coded: GeoCodedAddress,
            ) -> Result<AddressRecord> {
                self.with_conn(|conn| conn.update_address(id, address, geo_coded))
            }
            fn delete_address(&self, id: &Id) -> Result<()> {
                self.with_conn(|conn| conn.delete_address(id))
            }
        }
    };
}

delegate_address_repo!(DbReadOnly<'_>);
delegate_address_repo!(DbReadWrite<'_>);
