#[macro_use]
extern crate log;

mod create_address;
mod delete_address;
mod find_nearby_addresses;
mod load_addresses;
mod service;
mod update_address;

pub mod prelude {
    pub use super::{
        create_address::*, delete_address::*, find_nearby_addresses::*, load_addresses::*,
        update_address::*,
    };
}

pub mod error;

pub use self::service::{AddressService, SharedGeoCodingGateway, SharedNotificationGateway};

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use addrdb_core::{
    entities::*,
    gateways::{geocode::GeoCodingGateway, notify::*},
    usecases,
};


pub mod sqlite {
    pub use addrdb_db_sqlite::{run_embedded_database_migrations, Connections};
}
