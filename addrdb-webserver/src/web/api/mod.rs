use std::{fmt::Display, result};

use addrdb_application::error::AppError;
use addrdb_boundary::{self as json, ResultResponse};
use rocket::{
    self, delete, get,
    http::Status,
    post, put,
    response::{self, Responder},
    routes,
    serde::json::{Error as JsonError, Json},
    tokio::task::spawn_blocking,
    Route,
};

use super::guards::*;

mod addresses;
mod error;
mod util;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<ResultResponse<T>>, ApiError>;
type StatusResult<T> = result::Result<(Status, Json<ResultResponse<T>>), ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   addresses   --- //
        addresses::post_address,
        addresses::get_all_addresses,
        addresses::get_nearest_addresses,
        addresses::put_address,
        addresses::delete_address,
        // ---   server   --- //
        util::get_version,
    ]
}

fn json_ok<T>(data: T) -> Json<ResultResponse<T>> {
    Json(ResultResponse::ok(data))
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let response = ResultResponse::<()>::failed(err.to_string());
    Json(response).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}

/// Run a blocking operation (database or upstream HTTP
/// access) on the thread pool reserved for blocking tasks.
async fn run_blocking<T, F>(f: F) -> result::Result<T, ApiError>
where
    F: FnOnce() -> result::Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    spawn_blocking(f)
        .await
        .map_err(|err| ApiError::Other(anyhow::anyhow!(err)))?
        .map_err(Into::into)
}
