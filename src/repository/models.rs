use std::sync::Arc;

use crate::shared::geo::{Distance, GeoPoint};

/// A straight piece of named street between two points, as loaded from the map.
#[derive(Debug, Clone)]
pub struct Segment {
    /// Row index in the segment file, referenced by points of interest.
    pub index: u32,
    pub street: Arc<str>,
    pub start: GeoPoint,
    pub end: GeoPoint,
}

impl Segment {
    pub fn midpoint(&self) -> GeoPoint {
        self.start.midpoint(&self.end)
    }

    pub fn length(&self) -> Distance {
        self.start.distance(&self.end)
    }
}

/// A named place on the campus, reachable through a path to the midpoint of
/// the segment it sits on.
#[derive(Debug, Clone)]
pub struct Poi {
    pub index: u32,
    pub name: Arc<str>,
    pub location: GeoPoint,
    pub segment_idx: u32,
}
