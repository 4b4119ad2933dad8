//! Proximity queries on a snapshot of candidates.
//!
//! The scan is linear and purely functional: no I/O, no shared
//! state, every call is independent.

use crate::entities::*;

pub const DEFAULT_RADIUS_KM: f64 = 100.0;

pub trait Positioned {
    fn position(&self) -> Result<Coordinate, CoordinateError>;
}

impl Positioned for AddressRecord {
    fn position(&self) -> Result<Coordinate, CoordinateError> {
        self.coordinate()
    }
}

impl Positioned for Coordinate {
    fn position(&self) -> Result<Coordinate, CoordinateError> {
        Ok(*self)
    }
}

/// Great-circle distance on a spherical earth.
pub fn distance(a: Coordinate, b: Coordinate) -> Distance {
    Coordinate::distance(a, b)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityQuery {
    pub reference: Coordinate,
    pub radius: Distance,
}

impl ProximityQuery {
    pub const fn new(reference: Coordinate, radius: Distance) -> Self {
        Self { reference, radius }
    }

    pub fn with_default_radius(reference: Coordinate) -> Self {
        Self::new(reference, Distance::from_km(DEFAULT_RADIUS_KM))
    }

    pub fn apply<'a, T, I>(&self, candidates: I) -> ProximityResult<'a, T>
    where
        T: Positioned + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        filter_within_radius(self.reference, candidates, self.radius)
    }
}

#[derive(Debug)]
pub struct Match<'a, T> {
    pub candidate: &'a T,
    pub distance: Distance,
}

#[derive(Debug)]
pub struct Excluded<'a, T> {
    pub candidate: &'a T,
    pub reason: CoordinateError,
}

#[derive(Debug)]
pub struct ProximityResult<'a, T> {
    /// Candidates within the radius in their original order.
    pub matches: Vec<Match<'a, T>>,
    /// Candidates without a valid position.
    pub excluded: Vec<Excluded<'a, T>>,
}

impl<'a, T> Default for ProximityResult<'a, T> {
    fn default() -> Self {
        Self {
            matches: Vec::new(),
            excluded: Vec::new(),
        }
    }
}

impl<'a, T> ProximityResult<'a, T> {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Order matches by ascending distance. Equidistant
    /// matches keep their original relative order.
    pub fn sort_by_distance(&mut self) {
        self.matches.sort_by(|lhs, rhs| {
            lhs.distance
                .to_meters()
                .total_cmp(&rhs.distance.to_meters())
        });
    }

    pub fn candidates(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.matches.iter().map(|m| m.candidate)
    }
}

/// Select all candidates within `radius` of `reference`.
///
/// The relative order of the candidates is preserved.
/// A non-positive (or NaN) radius yields an empty result, even for
/// candidates at the reference position itself.
///
/// Candidates with a missing or invalid position are excluded from
/// the matches and reported individually instead of failing the
/// whole query.
pub fn filter_within_radius<'a, T, I>(
    reference: Coordinate,
    candidates: I,
    radius: Distance,
) -> ProximityResult<'a, T>
where
    T: Positioned + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut result = ProximityResult::default();
    if !radius.is_positive() {
        return result;
    }
    for candidate in candidates {
        match candidate.position() {
            Ok(pos) => {
                let distance = distance(reference, pos);
                if distance <= radius {
                    result.matches.push(Match {
                        candidate,
                        distance,
                    });
                }
            }
            Err(reason) => {
                result.excluded.push(Excluded { candidate, reason });
            }
        }
    }
    result
}
