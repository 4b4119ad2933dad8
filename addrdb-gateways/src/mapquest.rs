use std::time::Duration;

use addrdb_core::{
    entities::{AddressQuery, GeoCodedAddress},
    gateways::geocode::{GeoCodingGateway, ResolutionError},
};
use anyhow::{anyhow, Result};
use itertools::Itertools;
use reqwest::{blocking::Client, Url};
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://www.mapquestapi.com";

const GEOCODING_PATH: &str = "geocoding/v1/address";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// A geocoder based on the MapQuest geocoding API.
///
/// The blocking HTTP client keeps a connection pool and is shared
/// between all requests. It must not be created or dropped within
/// an async runtime.
#[derive(Debug, Clone)]
pub struct MapQuest {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl MapQuest {
    pub fn new(api_key: String, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(anyhow!("Invalid MapQuest base URL: {base_url}"));
        }
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_key,
            base_url,
        })
    }

    fn request_url(&self, location: &str) -> Result<Url> {
        let mut url = self.base_url.join(GEOCODING_PATH)?;
        url.query_pairs_mut()
            .append_pair("key", &self.api_key)
            .append_pair("location", location);
        Ok(url)
    }

    fn fetch(&self, location: &str) -> Result<Response> {
        let url = self.request_url(location)?;
        let response = self.client.get(url).send()?.error_for_status()?;
        Ok(response.json()?)
    }
}

impl GeoCodingGateway for MapQuest {
    fn resolve(&self, query: &AddressQuery) -> Result<GeoCodedAddress, ResolutionError> {
        let location = location_query_string(query);
        let response = self.fetch(&location).map_err(|err| {
            log::warn!("Failed to resolve address location '{location}': {err}");
            ResolutionError::Unavailable(err)
        })?;
        let resolved = response.first_location().ok_or_else(|| {
            log::warn!("No geocoding result for '{location}'");
            ResolutionError::NoResult(location.clone())
        })?;
        log::debug!("Resolved address location '{location}': {resolved:?}");
        Ok(resolved)
    }
}

fn location_query_string(query: &AddressQuery) -> String {
    let AddressQuery {
        street,
        city,
        state,
    } = query;
    [street, city, state]
        .into_iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .join(",")
}

#[derive(Debug, Deserialize)]
struct Response {
    #[serde(default)]
    results: Vec<ResultItem>,
}

#[derive(Debug, Deserialize)]
struct ResultItem {
    #[serde(default)]
    locations: Vec<Location>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Location {
    lat_lng: LatLng,
    #[serde(default)]
    admin_area1: Option<String>,
    #[serde(default)]
    map_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

impl Response {
    fn first_location(self) -> Option<GeoCodedAddress> {
        let location = self.results.into_iter().next()?.locations.into_iter().next()?;
        let Location {
            lat_lng: LatLng { lat, lng },
            admin_area1,
            map_url,
        } = location;
        Some(GeoCodedAddress {
            lat,
            lng,
            country: admin_area1.filter(|c| !c.is_empty()),
            map_url: map_url.filter(|u| !u.is_empty()),
        })
    }
}
