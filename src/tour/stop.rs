use std::sync::Arc;

use serde::Serialize;

use crate::shared::geo::GeoPoint;

/// A point of interest visited by a tour, with the commentary spoken on arrival.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stop {
    pub name: Arc<str>,
    pub location: GeoPoint,
    pub commentary: Arc<str>,
}

impl Stop {
    pub fn new(
        name: impl Into<Arc<str>>,
        location: GeoPoint,
        commentary: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            name: name.into(),
            location,
            commentary: commentary.into(),
        }
    }
}
