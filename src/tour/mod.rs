pub mod command;
pub mod stop;

pub use command::*;
pub use stop::*;

use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::{
    repository::GeoDatabase,
    router::{Route, Router},
    shared::geo::{Direction, GeoPoint, TurnDirection, angle_of_line, angle_of_turn},
};

#[derive(Error, Debug)]
pub enum Error {
    #[error("Router: point unreachable, no route from {from} to {to}")]
    Unreachable { from: Arc<str>, to: Arc<str> },
    #[error("No street connects {from} and {to}")]
    MissingStreet { from: GeoPoint, to: GeoPoint },
}

/// Turns an ordered list of stops into narrated, turn-by-turn commands.
pub struct TourGenerator<'a, D: GeoDatabase + ?Sized> {
    database: &'a D,
    router: Router<'a, D>,
}

impl<'a, D: GeoDatabase + ?Sized> TourGenerator<'a, D> {
    pub fn new(database: &'a D) -> Self {
        Self {
            database,
            router: Router::new(database),
        }
    }

    /// Commentary for each stop, with the proceed and turn commands of the
    /// route to the next stop in between. Fails on the first unreachable leg.
    pub fn generate_tour(&self, stops: &[Stop]) -> Result<Vec<TourCommand>, self::Error> {
        let Some(last) = stops.last() else {
            return Ok(Vec::new());
        };
        let mut commands: Vec<TourCommand> = Vec::new();
        for pair in stops.windows(2) {
            let (from, to) = (&pair[0], &pair[1]);
            commands.push(from.into());
            let route = self.router.route(&from.location, &to.location);
            if route.is_empty() {
                return Err(self::Error::Unreachable {
                    from: from.name.clone(),
                    to: to.name.clone(),
                });
            }
            debug!(
                "Leg {} -> {} has {} points",
                from.name,
                to.name,
                route.len()
            );
            self.narrate(&route, &mut commands)?;
        }
        commands.push(last.into());
        Ok(commands)
    }

    /// Appends the proceed and turn commands for one route.
    fn narrate(&self, route: &Route, commands: &mut Vec<TourCommand>) -> Result<(), self::Error> {
        let mut open: Option<Proceed> = None;
        // Street and bearing of the previous edge, for turn detection.
        let mut previous: Option<(&str, f64)> = None;

        for (from, to) in route.edges() {
            let street = self
                .database
                .street_name(from, to)
                .ok_or(self::Error::MissingStreet {
                    from: *from,
                    to: *to,
                })?;
            let distance = from.distance(to);
            let bearing = angle_of_line(from, to);
            let direction = Direction::from_bearing(bearing);

            if let Some(proceed) = open.as_mut() {
                if proceed.continues(street, direction) {
                    proceed.extend(distance, *to);
                    previous = Some((street, bearing));
                    continue;
                }
            }

            if let Some(proceed) = open.take() {
                commands.push(TourCommand::Proceed(proceed));
            }
            if let Some((previous_street, previous_bearing)) = previous {
                if previous_street != street {
                    let angle = angle_of_turn(previous_bearing, bearing);
                    if let Some(turn) = TurnDirection::from_turn_angle(angle) {
                        commands.push(TourCommand::Turn {
                            direction: turn,
                            street: street.into(),
                        });
                    }
                }
            }
            open = Some(Proceed {
                direction,
                street: street.into(),
                distance,
                start: *from,
                end: *to,
            });
            previous = Some((street, bearing));
        }

        if let Some(proceed) = open {
            commands.push(TourCommand::Proceed(proceed));
        }
        Ok(())
    }
}
