pub use crate::{
    mapdata::{Config, MapData},
    repository::{GeoDatabase, Repository},
    router::{Route, Router},
    shared::geo::{Direction, Distance, GeoKey, GeoPoint, TurnDirection},
    tour::{Proceed, Stop, TourCommand, TourGenerator},
};
