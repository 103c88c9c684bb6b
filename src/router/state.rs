use std::{
    cmp::Ordering,
    collections::{BinaryHeap, HashMap, HashSet},
};

use crate::shared::geo::{Distance, GeoKey, GeoPoint};

/// A tentative distance waiting in the queue.
///
/// The queue may hold several entries for one point; only the first one popped
/// is acted on, the rest are stale.
#[derive(Debug, Clone, Copy)]
pub struct QueueEntry {
    pub distance: Distance,
    pub point: GeoPoint,
}

impl Ord for QueueEntry {
    // BinaryHeap is a max-heap, so the comparison is reversed.
    // Equal distances fall back to the smaller key first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.point.to_key().cmp(&self.point.to_key()))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

#[derive(Debug, Default)]
pub struct State {
    pub distance: HashMap<GeoKey, Distance>,
    pub predecessor: HashMap<GeoKey, GeoPoint>,
    pub finalized: HashSet<GeoKey>,
    pub queue: BinaryHeap<QueueEntry>,
}

impl State {
    pub fn new(start: GeoPoint) -> Self {
        let mut state = Self::default();
        state.distance.insert(start.to_key(), Distance::ZERO);
        state.queue.push(QueueEntry {
            distance: Distance::ZERO,
            point: start,
        });
        state
    }

    /// Records `candidate` for `point` if it beats the best known distance.
    /// Returns true when the point was improved and queued.
    pub fn relax(&mut self, point: GeoPoint, candidate: Distance, via: GeoPoint) -> bool {
        let key = point.to_key();
        if self.finalized.contains(&key) {
            return false;
        }
        match self.distance.get(&key) {
            Some(best) if *best <= candidate => false,
            _ => {
                self.distance.insert(key, candidate);
                self.predecessor.insert(key, via);
                self.queue.push(QueueEntry {
                    distance: candidate,
                    point,
                });
                true
            }
        }
    }

    /// Pops the closest point that is not finalized yet and finalizes it.
    pub fn pop(&mut self) -> Option<QueueEntry> {
        while let Some(entry) = self.queue.pop() {
            if self.finalized.insert(entry.point.to_key()) {
                return Some(entry);
            }
        }
        None
    }

    /// Walks the predecessor chain back from `end`, returning points in travel order.
    pub fn path_to(&self, end: GeoPoint) -> Vec<GeoPoint> {
        let mut path = vec![end];
        let mut current = end.to_key();
        while let Some(previous) = self.predecessor.get(&current) {
            path.push(*previous);
            current = previous.to_key();
        }
        path.reverse();
        path
    }
}
