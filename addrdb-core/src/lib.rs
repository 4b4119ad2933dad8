pub mod entities {
    pub use addrdb_entities::{address::*, geo::*, id::*};
}

pub mod gateways;
pub mod proximity;
pub mod repositories;
pub mod usecases;
pub mod util;
