use diesel::{
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use addrdb_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn load_address(address: models::Address) -> AddressRecord {
    let models::Address {
        rowid: _,
        id,
        user_address,
        user_name,
        city,
        state,
        country,
        postal_code,
        latitude,
        longitude,
        map_url,
    } = address;
    AddressRecord {
        id: id.into(),
        street: user_address,
        name: user_name,
        city,
        state,
        postal_code,
        country,
        lat: latitude,
        lng: longitude,
        map_url,
    }
}

fn get_address(conn: &mut SqliteConnection, id: &Id) -> Result<AddressRecord> {
    use schema::address::dsl;
    let address = schema::address::table
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::Address>(conn)
        .map_err(from_diesel_err)?;
    Ok(load_address(address))
}

impl AddressRepo for DbConnection<'_> {
    fn create_address(
        &self,
        address: NewAddress,
        geo_coded: GeoCodedAddress,
    ) -> Result<AddressRecord> {
        let record = AddressRecord::new(Id::new(), address, geo_coded);
        let new_address = models::NewAddress {
            id: record.id.as_str(),
            user_address: &record.street,
            user_name: &record.name,
            city: &record.city,
            state: &record.state,
            country: record.country.as_deref(),
            postal_code: &record.postal_code,
            latitude: record.lat,
            longitude: record.lng,
            map_url: record.map_url.as_deref(),
        };
        diesel::insert_into(schema::address::table)
            .values(&new_address)
            .execute(&mut **self.sqlite_conn())
            .map_err(from_diesel_err)?;
        Ok(record)
    }

    fn get_address(&self, id: &Id) -> Result<AddressRecord> {
        get_address(&mut self.sqlite_conn(), id)
    }

    fn all_addresses(&self) -> Result<Vec<AddressRecord>> {
        use schema::address::dsl;
        Ok(schema::address::table
            .order_by(dsl::rowid)
            .load::<models::Address>(&mut **self.sqlite_conn())
            .map_err(from_diesel_err)?
            .into_iter()
            .map(load_address)
            .collect())
    }

    fn count_addresses(&self) -> Result<usize> {
        use schema::address::dsl;
        Ok(schema::address::table
            .select(diesel::dsl::count(dsl::rowid))
            .first::<i64>(&mut **self.sqlite_conn())
            .map_err(from_diesel_err)? as usize)
    }

    fn update_address(
        &self,
        id: &Id,
        address: NewAddress,
        geo_coded: GeoCodedAddress,
    ) -> Result<AddressRecord> {
        use schema::address::dsl;
        let record = AddressRecord::new(id.clone(), address, geo_coded);
        let changeset = models::AddressChangeset {
            user_address: &record.street,
            user_name: &record.name,
            city: &record.city,
            state: &record.state,
            country: record.country.as_deref(),
            postal_code: &record.postal_code,
            latitude: record.lat,
            longitude: record.lng,
            map_url: record.map_url.as_deref(),
        };
        let count = diesel::update(schema::address::table.filter(dsl::id.eq(id.as_str())))
            .set(&changeset)
            .execute(&mut **self.sqlite_conn())
            .map_err(from_diesel_err)?;
        if count == 0 {
            return Err(repo::Error::NotFound);
        }
        debug_assert_eq!(1, count);
        Ok(record)
    }

    fn delete_address(&self, id: &Id) -> Result<()> {
        use schema::address::dsl;
        let count = diesel::delete(schema::address::table.filter(dsl::id.eq(id.as_str())))
            .execute(&mut **self.sqlite_conn())
            .map_err(from_diesel_err)?;
        if count == 0 {
            return Err(repo::Error::NotFound);
        }
        debug_assert_eq!(1, count);
        Ok(())
    }
}
