use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "entity-conversions")]
mod conv;

/// The request body for creating or updating an address.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct NewAddress {
    pub user_address : String,
    pub user_name    : String,
    pub city         : String,
    pub state        : String,
    pub postal_code  : PostalCode,
}

/// Postal codes are accepted both as JSON numbers
/// and as strings.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(untagged)]
pub enum PostalCode {
    Number(u64),
    Text(String),
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id           : String,
    pub user_address : String,
    pub user_name    : String,
    pub city         : String,
    pub state        : String,
    pub country      : Option<String>,
    pub postal_code  : String,
    pub latitude     : Option<f64>,
    pub longitude    : Option<f64>,
    pub map_url      : Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct NearbyAddress {
    #[serde(flatten)]
    pub address: Address,
    pub distance_km: f64,
}

/// The JSON envelope of all API responses.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ResultResponse<T> {
    Ok { data: T },
    Failed { msg: String },
}

impl<T> ResultResponse<T> {
    pub const fn ok(data: T) -> Self {
        Self::Ok { data }
    }

    pub fn failed(msg: impl Into<String>) -> Self {
        Self::Failed { msg: msg.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserialize_new_address_with_numeric_postal_code() {
        let new_address: NewAddress = serde_json::from_value(json!({
            "userAddress": "Main Street 1",
            "userName": "Jane",
            "city": "Springfield",
            "state": "IL",
            "postalCode": 62701
        }))
        .unwrap();
        assert_eq!("62701", new_address.postal_code.to_string());
        assert_eq!("Main Street 1", new_address.user_address);
    }

    #[test]
    fn deserialize_new_address_with_textual_postal_code() {
        let new_address: NewAddress = serde_json::from_value(json!({
            "userAddress": "Main Street 1",
            "userName": "Jane",
            "city": "Springfield",
            "state": "IL",
            "postalCode": "02134"
        }))
        .unwrap();
        assert_eq!("02134", new_address.postal_code.to_string());
    }

    #[test]
    fn serialize_envelope() {
        let ok = serde_json::to_value(ResultResponse::ok(vec![1, 2])).unwrap();
        assert_eq!(json!({"status": "ok", "data": [1, 2]}), ok);
        let failed = serde_json::to_value(ResultResponse::<()>::failed("Address id 7 not found"))
            .unwrap();
        assert_eq!(
            json!({"status": "failed", "msg": "Address id 7 not found"}),
            failed
        );
    }

    #[test]
    fn serialize_nearby_address() {
        let nearby = NearbyAddress {
            address: Address {
                id: "a".into(),
                user_address: "Main Street 1".into(),
                user_name: "Jane".into(),
                city: "Springfield".into(),
                state: "IL".into(),
                country: Some("US".into()),
                postal_code: "62701".into(),
                latitude: Some(39.8),
                longitude: None,
                map_url: None,
            },
            distance_km: 1.5,
        };
        let value = serde_json::to_value(nearby).unwrap();
        assert_eq!("Main Street 1", value["userAddress"]);
        assert_eq!(39.8, value["latitude"]);
        assert!(value["longitude"].is_null());
        assert_eq!(1.5, value["distanceKm"]);
    }
}
