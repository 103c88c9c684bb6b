use wayfinder::{mapdata, prelude::*, repository::POI_PATH_STREET, tour};

fn campus() -> MapData {
    let dir = format!("{}/tests/data/campus", env!("CARGO_MANIFEST_DIR"));
    MapData::new(Config::default()).from_dir(dir)
}

fn campus_with_stops(stops_file_name: &str) -> MapData {
    let dir = format!("{}/tests/data/campus", env!("CARGO_MANIFEST_DIR"));
    let config = Config {
        stops_file_name: stops_file_name.into(),
        ..Default::default()
    };
    MapData::new(config).from_dir(dir)
}

#[test]
fn load_campus_test() {
    let repository = Repository::new().load_map(&campus()).unwrap();
    assert_eq!(repository.segments.len(), 9);
    assert_eq!(repository.pois.len(), 4);
    // 9 street points, 4 midpoints and 4 points of interest
    assert_eq!(repository.point_count(), 17);
    // 9 segments, plus 3 edges per point of interest
    assert_eq!(repository.edge_count(), 21);

    for poi in repository.pois.iter() {
        if poi.name.is_empty() {
            panic!("poi name should never be empty");
        }
    }
}

#[test]
fn poi_lookup_test() {
    let repository = Repository::new().load_map(&campus()).unwrap();
    assert_eq!(
        repository.poi_location("Royce Hall"),
        Some(GeoPoint::new(34.0731, -118.4429))
    );
    assert!(repository.poi_location("Powell Library").is_none());
}

#[test]
fn adjacency_is_symmetric_test() {
    let repository = Repository::new().load_map(&campus()).unwrap();
    for point in repository.points() {
        for neighbour in repository.connected_points(point) {
            assert!(repository.connected_points(neighbour).contains(point));
            assert_eq!(
                repository.street_name(point, neighbour),
                repository.street_name(neighbour, point)
            );
            assert!(repository.street_name(point, neighbour).is_some());
        }
    }
}

#[test]
fn poi_connects_through_midpoint_test() {
    let repository = Repository::new().load_map(&campus()).unwrap();
    let royce = repository.poi_location("Royce Hall").unwrap();
    let midpoint = GeoPoint::new(34.073, -118.443);
    assert_eq!(repository.connected_points(&royce), &[midpoint]);
    assert_eq!(repository.street_name(&royce, &midpoint), Some(POI_PATH_STREET));

    let neighbours = repository.connected_points(&midpoint);
    assert_eq!(neighbours.len(), 3);
    assert!(neighbours.contains(&GeoPoint::new(34.072, -118.443)));
    assert!(neighbours.contains(&GeoPoint::new(34.074, -118.443)));
    assert_eq!(
        repository.street_name(&midpoint, &GeoPoint::new(34.074, -118.443)),
        Some("Royce Dr")
    );
}

#[test]
fn load_stops_test() {
    let map = campus();
    let repository = Repository::new().load_map(&map).unwrap();
    let stops = repository.load_stops(&map).unwrap();
    let names: Vec<&str> = stops.iter().map(|stop| stop.name.as_ref()).collect();
    assert_eq!(names, vec!["Ackerman Union", "Royce Hall", "Pauley Pavilion"]);
    assert_eq!(
        stops[0].commentary.as_ref(),
        "Start your tour at the student union, home of the campus store."
    );
    assert_eq!(stops[1].location, GeoPoint::new(34.0731, -118.4429));
}

#[test]
fn unknown_stop_test() {
    let map = campus_with_stops("unknown_stops.csv");
    let repository = Repository::new().load_map(&map).unwrap();
    let result = repository.load_stops(&map);
    assert!(matches!(result, Err(mapdata::Error::UnknownPoi(name)) if name == "Powell Library"));
}

#[test]
fn missing_directory_test() {
    let map = MapData::new(Config::default()).from_dir("/no/such/campus");
    assert!(matches!(
        Repository::new().load_map(&map),
        Err(mapdata::Error::FileNotFound(_))
    ));
}

#[test]
fn campus_tour_test() {
    let map = campus();
    let repository = Repository::new().load_map(&map).unwrap();
    let stops = repository.load_stops(&map).unwrap();
    let commands = repository.tour().generate_tour(&stops).unwrap();
    let rendered: Vec<String> = commands.iter().map(ToString::to_string).collect();

    assert_eq!(
        rendered,
        vec![
            "Welcome to Ackerman Union: Start your tour at the student union, home of the campus store.",
            "Proceed south on a path for 0.01 miles",
            "Turn left on Westwood Plaza",
            "Proceed east on Westwood Plaza for 0.06 miles",
            "Turn left on Royce Dr",
            "Proceed north on Royce Dr for 0.21 miles",
            "Turn right on a path",
            "Proceed northeast on a path for 0.01 miles",
            "Welcome to Royce Hall: The iconic brick auditorium.",
            "Proceed southwest on a path for 0.01 miles",
            "Turn left on Royce Dr",
            "Proceed south on Royce Dr for 0.07 miles",
            "Turn left on Bruin Walk",
            "Proceed east on Bruin Walk for 0.11 miles",
            "Turn right on Charles E Young Dr",
            "Proceed south on Charles E Young Dr for 0.07 miles",
            "Turn left on a path",
            "Proceed east on a path for 0.01 miles",
            "Welcome to Pauley Pavilion: Home of Bruin basketball.",
        ]
    );

    let total: Distance = commands.iter().map(TourCommand::distance).sum();
    assert!((total.as_miles() - 0.5477).abs() < 0.001);
}

#[test]
fn unreachable_campus_stop_test() {
    let map = campus_with_stops("unreachable_stops.csv");
    let repository = Repository::new().load_map(&map).unwrap();
    let stops = repository.load_stops(&map).unwrap();
    let result = repository.tour().generate_tour(&stops);
    assert!(matches!(result, Err(tour::Error::Unreachable { .. })));
}

#[test]
fn tour_serializes_to_json_test() {
    let map = campus();
    let repository = Repository::new().load_map(&map).unwrap();
    let stops = repository.load_stops(&map).unwrap();
    let commands = repository.tour().generate_tour(&stops[..2]).unwrap();
    let json = serde_json::to_value(&commands).unwrap();

    assert_eq!(json[0]["type"], "commentary");
    assert_eq!(json[0]["poi"], "Ackerman Union");
    assert_eq!(json[1]["type"], "proceed");
    assert_eq!(json[1]["direction"], "south");
    assert_eq!(json[1]["street"], "a path");
    assert_eq!(json[2]["type"], "turn");
    assert_eq!(json[2]["direction"], "left");
}
