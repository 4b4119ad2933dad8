use crate::{
    entities::{CoordinateError, Id},
    gateways::geocode::ResolutionError,
    repositories,
    util::validate::AddressInvalidation,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing street address")]
    Street,
    #[error("Missing city")]
    City,
    #[error("Missing state")]
    State,
    #[error("Missing name")]
    Name,
    #[error("Invalid postal code")]
    PostalCode,
    #[error("Invalid radius")]
    Radius,
    #[error("Invalid sort flag (expected 'true' or 'false')")]
    SortFlag,
    #[error("Invalid id '{0}'")]
    Id(Id),
    #[error("Invalid reference coordinate: {0}")]
    InvalidReferenceCoordinate(#[source] CoordinateError),
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(#[source] CoordinateError),
    #[error(transparent)]
    GeoCoding(#[from] ResolutionError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<AddressInvalidation> for Error {
    fn from(err: AddressInvalidation) -> Self {
        match err {
            AddressInvalidation::Street => Self::Street,
            AddressInvalidation::City => Self::City,
            AddressInvalidation::State => Self::State,
            AddressInvalidation::Name => Self::Name,
            AddressInvalidation::PostalCode => Self::PostalCode,
        }
    }
}
