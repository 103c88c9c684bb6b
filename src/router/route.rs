use serde::Serialize;

use crate::shared::geo::{Distance, GeoPoint};

/// Ordered points from a start to an end, each consecutive pair joined by an edge.
///
/// An empty route means the end could not be reached.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Route {
    points: Vec<GeoPoint>,
}

impl From<Vec<GeoPoint>> for Route {
    fn from(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }
}

impl Route {
    pub fn unreachable() -> Self {
        Default::default()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn into_points(self) -> Vec<GeoPoint> {
        self.points
    }

    pub fn start(&self) -> Option<&GeoPoint> {
        self.points.first()
    }

    pub fn end(&self) -> Option<&GeoPoint> {
        self.points.last()
    }

    /// Consecutive `(from, to)` pairs along the route.
    pub fn edges(&self) -> impl Iterator<Item = (&GeoPoint, &GeoPoint)> {
        self.points.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    pub fn distance(&self) -> Distance {
        self.edges().map(|(from, to)| from.distance(to)).sum()
    }
}
