use std::{fmt::Display, sync::Arc};

use serde::Serialize;

use crate::{
    shared::geo::{Direction, Distance, GeoPoint, TurnDirection},
    tour::Stop,
};

/// Travel along one street in one compass direction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Proceed {
    pub direction: Direction,
    pub street: Arc<str>,
    pub distance: Distance,
    pub start: GeoPoint,
    pub end: GeoPoint,
}

impl Proceed {
    pub(crate) fn continues(&self, street: &str, direction: Direction) -> bool {
        self.direction == direction && self.street.as_ref() == street
    }

    pub(crate) fn extend(&mut self, distance: Distance, end: GeoPoint) {
        self.distance += distance;
        self.end = end;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TourCommand {
    Commentary {
        poi: Arc<str>,
        description: Arc<str>,
    },
    Proceed(Proceed),
    Turn {
        direction: TurnDirection,
        street: Arc<str>,
    },
}

impl From<&Stop> for TourCommand {
    fn from(stop: &Stop) -> Self {
        Self::Commentary {
            poi: stop.name.clone(),
            description: stop.commentary.clone(),
        }
    }
}

impl Display for TourCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TourCommand::Commentary { poi, description } => {
                write!(f, "Welcome to {poi}: {description}")
            }
            TourCommand::Proceed(proceed) => write!(
                f,
                "Proceed {} on {} for {:.2} miles",
                proceed.direction,
                proceed.street,
                proceed.distance.as_miles()
            ),
            TourCommand::Turn { direction, street } => write!(f, "Turn {direction} on {street}"),
        }
    }
}

impl TourCommand {
    pub fn is_commentary(&self) -> bool {
        matches!(self, TourCommand::Commentary { .. })
    }

    pub fn is_proceed(&self) -> bool {
        matches!(self, TourCommand::Proceed(_))
    }

    pub fn is_turn(&self) -> bool {
        matches!(self, TourCommand::Turn { .. })
    }

    /// Distance covered by this command, zero unless it is a proceed.
    pub fn distance(&self) -> Distance {
        match self {
            TourCommand::Proceed(proceed) => proceed.distance,
            _ => Distance::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commentary_renders() {
        let stop = Stop::new("Royce Hall", GeoPoint::new(34.0729, -118.4422), "A landmark.");
        let command: TourCommand = (&stop).into();
        assert_eq!(command.to_string(), "Welcome to Royce Hall: A landmark.");
        assert!(command.is_commentary());
        assert_eq!(command.distance(), Distance::ZERO);
    }

    #[test]
    fn proceed_renders_miles_with_two_decimals() {
        let command = TourCommand::Proceed(Proceed {
            direction: Direction::Northeast,
            street: "Bruin Walk".into(),
            distance: Distance::from_miles(0.25),
            start: GeoPoint::new(34.07, -118.44),
            end: GeoPoint::new(34.071, -118.439),
        });
        assert_eq!(
            command.to_string(),
            "Proceed northeast on Bruin Walk for 0.25 miles"
        );
    }

    #[test]
    fn turn_renders() {
        let command = TourCommand::Turn {
            direction: TurnDirection::Left,
            street: "Oak Ave".into(),
        };
        assert_eq!(command.to_string(), "Turn left on Oak Ave");
        assert!(command.is_turn());
    }

    #[test]
    fn proceed_extends_on_same_street_and_direction() {
        let mut proceed = Proceed {
            direction: Direction::East,
            street: "Main St".into(),
            distance: Distance::from_meters(100.0),
            start: GeoPoint::new(0.0, 0.0),
            end: GeoPoint::new(0.0, 0.001),
        };
        assert!(proceed.continues("Main St", Direction::East));
        assert!(!proceed.continues("Main St", Direction::North));
        assert!(!proceed.continues("Oak Ave", Direction::East));
        proceed.extend(Distance::from_meters(50.0), GeoPoint::new(0.0, 0.002));
        assert_eq!(proceed.distance, Distance::from_meters(150.0));
        assert_eq!(proceed.end, GeoPoint::new(0.0, 0.002));
    }
}
