use super::json_error_response;
use addrdb_application::error::AppError;
use addrdb_core::{
    entities::Id,
    gateways::geocode::ResolutionError,
    repositories::Error as RepoError,
    usecases::Error as ParameterError,
};
use anyhow::anyhow;
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("Address id {0} not found")]
    AddressNotFound(Id),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Replace a generic "not found" error by one
    /// that refers to the requested address.
    pub fn with_address_id(self, id: &Id) -> Self {
        match self {
            Self::App(AppError::Business(ParameterError::Repo(RepoError::NotFound))) => {
                Self::AddressNotFound(id.clone())
            }
            err => err,
        }
    }
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            // e.g. the body exceeds the size limit
            JsonError::Io(err) => Self::OtherWithStatus(anyhow!(err), Status::BadRequest),
            JsonError::Parse(_str, err) => {
                Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity)
            }
        }
    }
}

impl From<ParameterError> for Error {
    fn from(err: ParameterError) -> Self {
        Self::App(err.into())
    }
}

fn status_of(err: &ParameterError) -> Status {
    use ParameterError as E;
    match err {
        E::Street
        | E::City
        | E::State
        | E::Name
        | E::PostalCode
        | E::Radius
        | E::SortFlag
        | E::Id(_) => {
            Status::BadRequest
        }
        E::Repo(RepoError::NotFound) => Status::NotFound,
        E::GeoCoding(ResolutionError::NoResult(_)) | E::InvalidReferenceCoordinate(_) => {
            Status::UnprocessableEntity
        }
        E::GeoCoding(ResolutionError::Unavailable(_) | ResolutionError::NotConfigured)
        | E::InvalidCoordinate(_) => Status::BadGateway,
        E::Repo(_) => Status::InternalServerError,
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        let status = match &self {
            Error::App(AppError::Business(err)) => status_of(err),
            Error::App(AppError::Other(_)) | Error::Other(_) => Status::InternalServerError,
            Error::AddressNotFound(_) => Status::NotFound,
            Error::OtherWithStatus(_, status) => *status,
        };
        if status.class().is_server_error() {
            error!("Error: {self}");
        } else {
            debug!("Request failed with status {}: {self}", status.code);
        }
        json_error_response(req, &self, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_use_case_errors_to_status_codes() {
        assert_eq!(Status::BadRequest, status_of(&ParameterError::Street));
        assert_eq!(Status::BadRequest, status_of(&ParameterError::Radius));
        assert_eq!(Status::BadRequest, status_of(&ParameterError::SortFlag));
        assert_eq!(
            Status::NotFound,
            status_of(&ParameterError::Repo(RepoError::NotFound))
        );
        assert_eq!(
            Status::UnprocessableEntity,
            status_of(&ParameterError::GeoCoding(ResolutionError::NoResult(
                "x".into()
            )))
        );
        assert_eq!(
            Status::BadGateway,
            status_of(&ParameterError::GeoCoding(ResolutionError::NotConfigured))
        );
        assert_eq!(
            Status::BadGateway,
            status_of(&ParameterError::GeoCoding(ResolutionError::Unavailable(
                anyhow!("timeout")
            )))
        );
        assert_eq!(
            Status::InternalServerError,
            status_of(&ParameterError::Repo(RepoError::Other(anyhow!("disk full"))))
        );
    }

    #[test]
    fn map_json_errors_to_status_codes() {
        use rocket::serde::json::serde_json;
        use std::io;

        fn status(err: Error) -> Status {
            match err {
                Error::OtherWithStatus(_, status) => status,
                _ => panic!("unexpected error: {err}"),
            }
        }

        let io_err = JsonError::Io(io::Error::new(io::ErrorKind::UnexpectedEof, "data limit"));
        assert_eq!(Status::BadRequest, status(Error::from(io_err)));

        let parse_err = serde_json::from_str::<u8>("{").unwrap_err();
        assert_eq!(
            Status::UnprocessableEntity,
            status(Error::from(JsonError::Parse("{", parse_err)))
        );
    }

    #[test]
    fn address_not_found_message() {
        let err = Error::from(ParameterError::Repo(RepoError::NotFound)).with_address_id(&"42".into());
        assert_eq!("Address id 42 not found", err.to_string());
        let err = Error::from(ParameterError::City).with_address_id(&"42".into());
        assert!(matches!(err, Error::App(_)));
    }
}
