use std::{
    cmp,
    fmt::Display,
    hash::{Hash, Hasher},
    iter::Sum,
    ops::{Add, AddAssign, Sub},
};

use serde::{Deserialize, Serialize};

pub const EARTH_RADIUS: Distance = Distance::from_kilometers(6371.0);
pub(crate) const KILOMETERS_PER_MILE: f64 = 1.609344;
/// Coordinates are keyed on 7 fixed decimal digits (about 1 cm of latitude).
pub(crate) const KEY_SCALE: f64 = 10_000_000.0;

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Distance(f64);

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl Add for Distance {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Distance {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Distance {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sum for Distance {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, distance| acc + distance)
    }
}

impl Distance {
    pub const ZERO: Distance = Distance(0.0);

    pub const fn from_meters(distance: f64) -> Self {
        Self(distance)
    }

    pub const fn from_kilometers(distance: f64) -> Self {
        Self(distance * 1000.0)
    }

    pub const fn from_miles(distance: f64) -> Self {
        Self(distance * KILOMETERS_PER_MILE * 1000.0)
    }

    pub const fn as_meters(&self) -> f64 {
        self.0
    }

    pub const fn as_kilometers(&self) -> f64 {
        self.0 / 1000.0
    }

    pub const fn as_miles(&self) -> f64 {
        self.0 / 1000.0 / KILOMETERS_PER_MILE
    }

    /// Total order used by the router's priority queue.
    pub fn total_cmp(&self, other: &Self) -> cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Canonical, hashable form of a [`GeoPoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GeoKey {
    pub latitude: i64,
    pub longitude: i64,
}

/// Immutable latitude/longitude pair.
///
/// Equality and hashing go through [`GeoPoint::to_key`], so two points that
/// agree to 7 decimal digits are the same vertex.
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl PartialEq for GeoPoint {
    fn eq(&self, other: &Self) -> bool {
        self.to_key() == other.to_key()
    }
}

impl Eq for GeoPoint {}

impl Hash for GeoPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_key().hash(state);
    }
}

impl Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{:.7},{:.7}", self.latitude, self.longitude))
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<GeoPoint> for (f64, f64) {
    fn from(value: GeoPoint) -> Self {
        (value.latitude, value.longitude)
    }
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn to_key(&self) -> GeoKey {
        GeoKey {
            latitude: (self.latitude * KEY_SCALE).round() as i64,
            longitude: (self.longitude * KEY_SCALE).round() as i64,
        }
    }

    /// Haversine great-circle distance.
    pub fn distance(&self, other: &Self) -> Distance {
        let dist_lat = f64::to_radians(other.latitude - self.latitude);
        let dist_lon = f64::to_radians(other.longitude - self.longitude);
        let a = f64::powi(f64::sin(dist_lat / 2.0), 2)
            + f64::cos(f64::to_radians(self.latitude))
                * f64::cos(f64::to_radians(other.latitude))
                * f64::sin(dist_lon / 2.0)
                * f64::sin(dist_lon / 2.0);
        let c = 2.0 * f64::atan2(f64::sqrt(a), f64::sqrt(1.0 - a));
        Distance::from_meters(EARTH_RADIUS.as_meters() * c)
    }

    pub fn midpoint(&self, other: &Self) -> Self {
        Self {
            latitude: (self.latitude + other.latitude) / 2.0,
            longitude: (self.longitude + other.longitude) / 2.0,
        }
    }
}

/// Maps any angle in degrees into `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let normalized = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if normalized >= 360.0 { 0.0 } else { normalized }
}

/// Angle of travel from `from` to `to`, counter-clockwise from east, in `[0, 360)`.
pub fn angle_of_line(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let d_lat = to.latitude - from.latitude;
    let d_lon = to.longitude - from.longitude;
    normalize_degrees(f64::atan2(d_lat, d_lon).to_degrees())
}

/// Change of heading between two bearings, in `[0, 360)`.
pub fn angle_of_turn(from_bearing: f64, to_bearing: f64) -> f64 {
    normalize_degrees(to_bearing - from_bearing)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    East,
    Northeast,
    North,
    Northwest,
    West,
    Southwest,
    South,
    Southeast,
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::East => f.write_str("east"),
            Direction::Northeast => f.write_str("northeast"),
            Direction::North => f.write_str("north"),
            Direction::Northwest => f.write_str("northwest"),
            Direction::West => f.write_str("west"),
            Direction::Southwest => f.write_str("southwest"),
            Direction::South => f.write_str("south"),
            Direction::Southeast => f.write_str("southeast"),
        }
    }
}

impl Direction {
    /// Buckets are closed at their lower bound and open at the upper one.
    /// Both 0 and 360 degrees are east.
    pub fn from_bearing(bearing: f64) -> Self {
        match normalize_degrees(bearing) {
            b if b < 22.5 => Direction::East,
            b if b < 67.5 => Direction::Northeast,
            b if b < 112.5 => Direction::North,
            b if b < 157.5 => Direction::Northwest,
            b if b < 202.5 => Direction::West,
            b if b < 247.5 => Direction::Southwest,
            b if b < 292.5 => Direction::South,
            b if b < 337.5 => Direction::Southeast,
            _ => Direction::East,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnDirection {
    Left,
    Right,
}

impl Display for TurnDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnDirection::Left => f.write_str("left"),
            TurnDirection::Right => f.write_str("right"),
        }
    }
}

impl TurnDirection {
    /// `None` when the heading changes by less than a degree either way.
    /// A full reversal (180 degrees) counts as a right turn.
    pub fn from_turn_angle(angle: f64) -> Option<Self> {
        let angle = normalize_degrees(angle);
        if !(1.0..=359.0).contains(&angle) {
            None
        } else if angle < 180.0 {
            Some(TurnDirection::Left)
        } else {
            Some(TurnDirection::Right)
        }
    }
}

#[test]
fn distance_test() {
    let point_a = GeoPoint::new(48.85800943005911, 2.3514350059357927);
    let point_b = GeoPoint::new(51.5052389927712, -0.12495407345099824);
    let d = point_a.distance(&point_b);
    assert!((d.as_kilometers() - 343.5).abs() < 5.0);
}

#[test]
fn distance_eq_test() {
    let dist_a = Distance::from_meters(1000.0);
    let dist_b = Distance::from_kilometers(1.0);
    assert_eq!(dist_a, dist_b)
}

#[test]
fn distance_cmp_test() {
    let dist_a = Distance::from_meters(1000.0);
    let dist_b = Distance::from_kilometers(0.5);
    assert!(dist_a > dist_b)
}

#[test]
fn distance_miles_test() {
    let mile = Distance::from_miles(1.0);
    assert!((mile.as_meters() - 1609.344).abs() < 1e-9);
    assert!((mile.as_miles() - 1.0).abs() < 1e-12);
}

#[test]
fn key_rounds_to_seven_digits_test() {
    let a = GeoPoint::new(34.07000001, -118.44);
    let b = GeoPoint::new(34.07, -118.44000002);
    assert_eq!(a.to_key(), b.to_key());
    assert_eq!(a, b);
    assert_ne!(a, GeoPoint::new(34.0700001, -118.44));
}

#[test]
fn display_test() {
    let point = GeoPoint::new(34.0718238, -118.4525699);
    assert_eq!(point.to_string(), "34.0718238,-118.4525699");
}

#[test]
fn normalize_test() {
    assert_eq!(normalize_degrees(360.0), 0.0);
    assert_eq!(normalize_degrees(-90.0), 270.0);
    assert_eq!(normalize_degrees(-1e-20), 0.0);
}
