use addrdb_entities::address::{AddressQuery, NewAddress};
use thiserror::Error;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub trait AutoCorrect {
    fn auto_correct(self) -> Self;
}

const POSTAL_CODE_MAX_LEN: usize = 16;

fn is_valid_postal_code(s: &str) -> bool {
    !s.is_empty()
        && s.len() <= POSTAL_CODE_MAX_LEN
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '-')
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressInvalidation {
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
}

impl AutoCorrect for AddressQuery {
    fn auto_correct(self) -> Self {
        let Self {
            street,
            city,
            state,
        } = self;
        Self {
            street: street.trim().to_owned(),
            city: city.trim().to_owned(),
            state: state.trim().to_owned(),
        }
    }
}

impl Validate for AddressQuery {
    type Error = AddressInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.street.trim().is_empty() {
            return Err(AddressInvalidation::Street);
        }
        if self.city.trim().is_empty() {
            return Err(AddressInvalidation::City);
        }
        if self.state.trim().is_empty() {
            return Err(AddressInvalidation::State);
        }
        Ok(())
    }
}

impl AutoCorrect for NewAddress {
    fn auto_correct(self) -> Self {
        let Self {
            query,
            name,
            postal_code,
        } = self;
        Self {
            query: query.auto_correct(),
            name: name.trim().to_owned(),
            postal_code: postal_code.trim().to_owned(),
        }
    }
}

impl Validate for NewAddress {
    type Error = AddressInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        self.query.validate()?;
        if self.name.trim().is_empty() {
            return Err(AddressInvalidation::Name);
        }
        if !is_valid_postal_code(self.postal_code.trim()) {
            return Err(AddressInvalidation::PostalCode);
        }
        Ok(())
    }
}
