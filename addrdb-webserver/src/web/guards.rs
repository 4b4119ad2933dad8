use std::ops::Deref;

use addrdb_application::AddressService;
use rocket::{
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
    State,
};

pub struct Version(pub &'static str);

// Wrapper to be able to implement `FromRequest`
#[derive(Clone)]
pub struct Addresses(AddressService);

impl From<AddressService> for Addresses {
    fn from(service: AddressService) -> Self {
        Self(service)
    }
}

impl Deref for Addresses {
    type Target = AddressService;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Addresses {
    pub fn into_inner(self) -> AddressService {
        self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Addresses {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let addresses = try_outcome!(request.guard::<&State<Addresses>>().await);
        Outcome::Success(addresses.inner().clone())
    }
}
