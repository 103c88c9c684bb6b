use std::{collections::HashMap, sync::Arc};

mod models;
mod source;
pub use models::*;
use tracing::warn;

use crate::{
    mapdata,
    router::Router,
    shared::geo::{GeoKey, GeoPoint},
    tour::TourGenerator,
};

/// Street name given to the short link between a point of interest and its segment.
pub const POI_PATH_STREET: &str = "a path";

type KeyToPoint = HashMap<GeoKey, GeoPoint>;
type KeyToPoints = HashMap<GeoKey, Vec<GeoPoint>>;
type EdgeToStreet = HashMap<(GeoKey, GeoKey), Arc<str>>;
type NameToIndex = HashMap<Arc<str>, u32>;

/// Read-only view of the street graph used by routing and tour generation.
///
/// Adjacency must be symmetric: if `q` is connected to `p` then `p` is
/// connected to `q`, and both directions carry the same street name.
pub trait GeoDatabase {
    /// Every point one edge away from `point`. Empty for unknown points.
    fn connected_points(&self, point: &GeoPoint) -> &[GeoPoint];

    /// Street name of the edge between two adjacent points.
    fn street_name(&self, from: &GeoPoint, to: &GeoPoint) -> Option<&str>;

    fn poi_location(&self, name: &str) -> Option<GeoPoint>;
}

#[derive(Debug, Clone, Default)]
pub struct Repository {
    pub segments: Vec<Segment>,
    pub pois: Vec<Poi>,

    points: KeyToPoint,
    adjacency: KeyToPoints,
    streets: EdgeToStreet,
    poi_lookup: NameToIndex,
}

impl Repository {
    pub fn new() -> Self {
        Default::default()
    }

    /// Adds an undirected street segment and returns its index.
    pub fn add_segment(&mut self, street: &str, start: GeoPoint, end: GeoPoint) -> u32 {
        let index = self.segments.len() as u32;
        let street: Arc<str> = street.into();
        self.connect(&street, start, end);
        self.segments.push(Segment {
            index,
            street,
            start,
            end,
        });
        index
    }

    /// Adds a point of interest on segment `segment_idx`.
    ///
    /// The segment is split through its midpoint, and the POI is linked to that
    /// midpoint by a [`POI_PATH_STREET`] edge. The original segment edge stays.
    pub fn add_poi(
        &mut self,
        name: &str,
        location: GeoPoint,
        segment_idx: u32,
    ) -> Result<u32, mapdata::Error> {
        let segment = self
            .segments
            .get(segment_idx as usize)
            .cloned()
            .ok_or_else(|| mapdata::Error::InvalidSegment {
                name: name.to_string(),
                segment: segment_idx,
            })?;
        let midpoint = segment.midpoint();
        self.connect(&segment.street, segment.start, midpoint);
        self.connect(&segment.street, midpoint, segment.end);
        self.connect(&POI_PATH_STREET.into(), location, midpoint);

        let index = self.pois.len() as u32;
        let name: Arc<str> = name.into();
        if self.poi_lookup.insert(name.clone(), index).is_some() {
            warn!("Duplicate point of interest {name}, keeping the last one");
        }
        self.pois.push(Poi {
            index,
            name,
            location,
            segment_idx,
        });
        Ok(index)
    }

    fn connect(&mut self, street: &Arc<str>, from: GeoPoint, to: GeoPoint) {
        let (from_key, to_key) = (from.to_key(), to.to_key());
        if from_key == to_key {
            warn!("Skipping zero length segment on {street} at {from}");
            return;
        }
        if self.streets.contains_key(&(from_key, to_key)) {
            return;
        }
        self.points.insert(from_key, from);
        self.points.insert(to_key, to);
        self.streets.insert((from_key, to_key), street.clone());
        self.streets.insert((to_key, from_key), street.clone());
        self.adjacency.entry(from_key).or_default().push(to);
        self.adjacency.entry(to_key).or_default().push(from);
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.streets.len() / 2
    }

    pub fn point_by_key(&self, key: &GeoKey) -> Option<&GeoPoint> {
        self.points.get(key)
    }

    pub fn points(&self) -> impl Iterator<Item = &GeoPoint> {
        self.points.values()
    }

    pub fn poi_by_name(&self, name: &str) -> Option<&Poi> {
        let index = self.poi_lookup.get(name)?;
        Some(&self.pois[*index as usize])
    }

    pub fn router(&self) -> Router<'_, Self> {
        Router::new(self)
    }

    pub fn tour(&self) -> TourGenerator<'_, Self> {
        TourGenerator::new(self)
    }
}

impl GeoDatabase for Repository {
    fn connected_points(&self, point: &GeoPoint) -> &[GeoPoint] {
        self.adjacency
            .get(&point.to_key())
            .map(|points| points.as_slice())
            .unwrap_or_default()
    }

    fn street_name(&self, from: &GeoPoint, to: &GeoPoint) -> Option<&str> {
        self.streets
            .get(&(from.to_key(), to.to_key()))
            .map(|street| street.as_ref())
    }

    fn poi_location(&self, name: &str) -> Option<GeoPoint> {
        self.poi_by_name(name).map(|poi| poi.location)
    }
}
