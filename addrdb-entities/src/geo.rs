use std::{cmp::Ordering, fmt, str::FromStr};

use itertools::Itertools;
use thiserror::Error;

const LAT_DEG_MIN: f64 = -90.0;
const LAT_DEG_MAX: f64 = 90.0;
const LNG_DEG_MIN: f64 = -180.0;
const LNG_DEG_MAX: f64 = 180.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    #[error("Missing latitude or longitude")]
    Missing,
    #[error("Invalid latitude degrees: {0}")]
    Latitude(f64),
    #[error("Invalid longitude degrees: {0}")]
    Longitude(f64),
    #[error("Failed to parse coordinate: {0}")]
    Parse(String),
}

/// A geographical position in decimal degrees.
///
/// Both components are always within their valid range,
/// i.e. latitude in [-90, 90] and longitude in [-180, 180].
/// The only way to obtain a value is through one of the
/// fallible constructors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

impl Coordinate {
    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Result<Self, CoordinateError> {
        let lat = lat.into();
        let lng = lng.into();
        // NaN fails both comparisons
        if !(LAT_DEG_MIN..=LAT_DEG_MAX).contains(&lat) {
            return Err(CoordinateError::Latitude(lat));
        }
        if !(LNG_DEG_MIN..=LNG_DEG_MAX).contains(&lng) {
            return Err(CoordinateError::Longitude(lng));
        }
        Ok(Self { lat, lng })
    }

    /// Same as [`Coordinate::try_from_lat_lng_deg`] for nullable inputs,
    /// e.g. columns of a database record.
    pub fn try_from_optional_lat_lng_deg(
        lat: Option<f64>,
        lng: Option<f64>,
    ) -> Result<Self, CoordinateError> {
        match (lat, lng) {
            (Some(lat), Some(lng)) => Self::try_from_lat_lng_deg(lat, lng),
            _ => Err(CoordinateError::Missing),
        }
    }

    pub const fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    pub fn to_lat_lng_rad(self) -> (f64, f64) {
        (self.lat.to_radians(), self.lng.to_radians())
    }

    /// Total order on the raw degrees, only used for
    /// normalizing the argument order of [`Coordinate::distance`].
    fn cmp_deg(self, other: Self) -> Ordering {
        self.lat
            .total_cmp(&other.lat)
            .then_with(|| self.lng.total_cmp(&other.lng))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((lat_str, lng_str)) = s.split(',').collect_tuple() else {
            return Err(CoordinateError::Parse(s.to_string()));
        };
        let lat = lat_str
            .trim()
            .parse::<f64>()
            .map_err(|err| CoordinateError::Parse(format!("latitude '{lat_str}': {err}")))?;
        let lng = lng_str
            .trim()
            .parse::<f64>()
            .map_err(|err| CoordinateError::Parse(format!("longitude '{lng_str}': {err}")))?;
        Self::try_from_lat_lng_deg(lat, lng)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const fn infinite() -> Self {
        Self(f64::INFINITY)
    }

    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub fn from_km(km: f64) -> Self {
        Self(km * 1_000.0)
    }

    pub const fn to_meters(self) -> f64 {
        self.0
    }

    pub fn to_km(self) -> f64 {
        self.0 / 1_000.0
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0.0
    }

    /// A distance that could be satisfied by at least one point,
    /// i.e. strictly positive and not NaN.
    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.3} km", self.to_km())
    }
}

/// Mean earth radius (IUGG).
const MEAN_EARTH_RADIUS: Distance = Distance::from_meters(6_371_008.8);

impl Coordinate {
    /// Calculate the great-circle distance on the surface
    /// of the earth using a special case of the Vincenty
    /// formula for numerical accuracy.
    ///
    /// The earth is modeled as a sphere with the mean earth radius.
    /// The `atan2` form neither divides nor takes the arc cosine,
    /// so coincident, antipodal and polar points yield finite,
    /// non-negative results.
    /// Reference: https://en.wikipedia.org/wiki/Great-circle_distance
    pub fn distance(p1: Coordinate, p2: Coordinate) -> Distance {
        // The floating point evaluation is not exactly symmetric
        let (p1, p2) = if p1.cmp_deg(p2) == Ordering::Greater {
            (p2, p1)
        } else {
            (p1, p2)
        };

        let (lat1_rad, lng1_rad) = p1.to_lat_lng_rad();
        let (lat2_rad, lng2_rad) = p2.to_lat_lng_rad();

        let (lat1_sin, lat1_cos) = (lat1_rad.sin(), lat1_rad.cos());
        let (lat2_sin, lat2_cos) = (lat2_rad.sin(), lat2_rad.cos());

        let dlng = (lng1_rad - lng2_rad).abs();
        let (dlng_sin, dlng_cos) = (dlng.sin(), dlng.cos());

        let nom1 = lat2_cos * dlng_sin;
        let nom2 = lat1_cos * lat2_sin - lat1_sin * lat2_cos * dlng_cos;

        let nom = (nom1 * nom1 + nom2 * nom2).sqrt();
        let denom = lat1_sin * lat2_sin + lat1_cos * lat2_cos * dlng_cos;

        let meters = MEAN_EARTH_RADIUS.to_meters() * nom.atan2(denom);
        debug_assert!(meters >= 0.0);
        Distance::from_meters(meters)
    }
}
