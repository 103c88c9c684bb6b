use crate::{
    mapdata::{self, MapData},
    repository::Repository,
    shared::geo::GeoPoint,
    tour::Stop,
};
use std::time::Instant;
use tracing::debug;

impl Repository {
    pub fn load_map(mut self, map: &MapData) -> Result<Self, mapdata::Error> {
        self.load_segments(map)?;
        self.load_pois(map)?;
        Ok(self)
    }

    /// Resolves the stop list against the loaded points of interest.
    pub fn load_stops(&self, map: &MapData) -> Result<Vec<Stop>, mapdata::Error> {
        debug!("Loading stops...");
        let now = Instant::now();
        let mut stops = Vec::new();
        map.stream_stops(|(_, stop)| {
            let poi = self
                .poi_by_name(&stop.poi)
                .ok_or_else(|| mapdata::Error::UnknownPoi(stop.poi.clone()))?;
            stops.push(Stop::new(
                poi.name.clone(),
                poi.location,
                stop.commentary.as_str(),
            ));
            Ok(())
        })?;
        debug!("Loading {} stops took {:?}", stops.len(), now.elapsed());
        Ok(stops)
    }

    fn load_segments(&mut self, map: &MapData) -> Result<(), mapdata::Error> {
        debug!("Loading segments...");
        let now = Instant::now();
        map.stream_segments(|(_, segment)| {
            self.add_segment(
                &segment.street,
                GeoPoint::new(segment.start_lat, segment.start_lon),
                GeoPoint::new(segment.end_lat, segment.end_lon),
            );
            Ok(())
        })?;
        debug!(
            "Loading {} segments took {:?}",
            self.segments.len(),
            now.elapsed()
        );
        Ok(())
    }

    fn load_pois(&mut self, map: &MapData) -> Result<(), mapdata::Error> {
        debug!("Loading points of interest...");
        let now = Instant::now();
        map.stream_pois(|(_, poi)| {
            self.add_poi(
                &poi.name,
                GeoPoint::new(poi.latitude, poi.longitude),
                poi.segment,
            )?;
            Ok(())
        })?;
        debug!(
            "Loading {} points of interest took {:?}",
            self.pois.len(),
            now.elapsed()
        );
        Ok(())
    }
}
