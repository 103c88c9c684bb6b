pub mod route;
pub mod state;

pub use route::*;

use std::time::Instant;
use tracing::debug;

use crate::{
    repository::GeoDatabase,
    router::state::State,
    shared::geo::GeoPoint,
};

/// Shortest-distance search over a [`GeoDatabase`], weighted by Haversine distance.
pub struct Router<'a, D: GeoDatabase + ?Sized> {
    database: &'a D,
}

impl<'a, D: GeoDatabase + ?Sized> Router<'a, D> {
    pub fn new(database: &'a D) -> Self {
        Self { database }
    }

    /// Returns the shortest route from `start` to `end`.
    ///
    /// `[start]` when both are the same point, an empty route when `end` is
    /// unreachable. The search stops as soon as `end` is finalized.
    pub fn route(&self, start: &GeoPoint, end: &GeoPoint) -> Route {
        self.solve(start, end, true)
    }

    /// Same search without early termination: every reachable point is finalized.
    pub fn route_exhaustive(&self, start: &GeoPoint, end: &GeoPoint) -> Route {
        self.solve(start, end, false)
    }

    fn solve(&self, start: &GeoPoint, end: &GeoPoint, stop_at_end: bool) -> Route {
        let now = Instant::now();
        let end_key = end.to_key();
        let mut state = State::new(*start);
        let mut reached = false;

        while let Some(entry) = state.pop() {
            if entry.point.to_key() == end_key {
                reached = true;
                if stop_at_end {
                    break;
                }
            }
            for neighbour in self.database.connected_points(&entry.point) {
                let candidate = entry.distance + entry.point.distance(neighbour);
                state.relax(*neighbour, candidate, entry.point);
            }
        }

        debug!(
            "Routed {start} -> {end}: finalized {} points in {:?}",
            state.finalized.len(),
            now.elapsed()
        );
        if !reached {
            return Route::unreachable();
        }
        state.path_to(*end).into()
    }
}
