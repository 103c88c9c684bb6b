use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct MapSegment {
    pub street: String,
    pub start_lat: f64,
    pub start_lon: f64,
    pub end_lat: f64,
    pub end_lon: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct MapPoi {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Row index of the street segment the POI sits on.
    pub segment: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct MapStop {
    pub poi: String,
    pub commentary: String,
}
