use super::*;
use addrdb_core::{
    entities::{AddressQuery, Distance, Id, NewAddress},
    usecases::Error as ParameterError,
};
use rocket::FromForm;

#[post("/createAddress", data = "<body>")]
pub async fn post_address(
    addresses: Addresses,
    body: JsonResult<'_, json::NewAddress>,
) -> StatusResult<json::Address> {
    let new_address: NewAddress = body?.into_inner().into();
    let service = addresses.into_inner();
    let address = run_blocking(move || service.create(new_address)).await?;
    Ok((Status::Created, json_ok(address.into())))
}

#[get("/getAllAddress")]
pub async fn get_all_addresses(addresses: Addresses) -> Result<Vec<json::Address>> {
    let service = addresses.into_inner();
    let addresses = run_blocking(move || service.all()).await?;
    Ok(json_ok(addresses.into_iter().map(Into::into).collect()))
}

#[derive(Debug, FromForm)]
pub struct NearestAddressParams {
    #[field(name = "userAddress")]
    user_address: Option<String>,
    city: Option<String>,
    state: Option<String>,
    #[field(name = "radiusKm")]
    radius_km: Option<String>,
    sorted: Option<String>,
}

impl NearestAddressParams {
    fn reference(&self) -> AddressQuery {
        AddressQuery {
            street: self.user_address.clone().unwrap_or_default(),
            city: self.city.clone().unwrap_or_default(),
            state: self.state.clone().unwrap_or_default(),
        }
    }

    fn radius(&self) -> result::Result<Option<Distance>, ParameterError> {
        self.radius_km
            .as_deref()
            .map(|km| {
                km.trim()
                    .parse::<f64>()
                    .map(Distance::from_km)
                    .map_err(|_| ParameterError::Radius)
            })
            .transpose()
    }

    fn sorted(&self) -> result::Result<bool, ParameterError> {
        match self.sorted.as_deref().map(str::trim) {
            None => Ok(false),
            Some(flag) => flag.parse().map_err(|_| ParameterError::SortFlag),
        }
    }
}

#[get("/findNearestAddress?<params..>")]
pub async fn get_nearest_addresses(
    addresses: Addresses,
    params: NearestAddressParams,
) -> Result<Vec<json::NearbyAddress>> {
    let reference = params.reference();
    let radius = params.radius()?;
    let sorted = params.sorted()?;
    let service = addresses.into_inner();
    let nearby =
        run_blocking(move || service.find_within_radius(reference, radius, sorted)).await?;
    Ok(json_ok(nearby.addresses.into_iter().map(Into::into).collect()))
}

#[put("/updateAddress/<id>", data = "<body>")]
pub async fn put_address(
    addresses: Addresses,
    id: &str,
    body: JsonResult<'_, json::NewAddress>,
) -> StatusResult<json::Address> {
    let id = Id::from(id);
    let new_address: NewAddress = body?.into_inner().into();
    let service = addresses.into_inner();
    let updated_id = id.clone();
    let address = run_blocking(move || service.update(&updated_id, new_address))
        .await
        .map_err(|err| err.with_address_id(&id))?;
    Ok((Status::Accepted, json_ok(address.into())))
}

#[delete("/deleteAddress/<id>")]
pub async fn delete_address(addresses: Addresses, id: &str) -> StatusResult<String> {
    let id = Id::from(id);
    let service = addresses.into_inner();
    let deleted_id = id.clone();
    run_blocking(move || service.delete(&deleted_id))
        .await
        .map_err(|err| err.with_address_id(&id))?;
    Ok((Status::Accepted, json_ok(id.into())))
}
