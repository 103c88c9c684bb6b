use std::{path::PathBuf, process::ExitCode, time::Instant};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use wayfinder::prelude::*;

const USAGE: &str = "usage: wayfinder <data-dir> [stops-file] [--json]";

struct Args {
    data_dir: PathBuf,
    stops_file: Option<String>,
    json: bool,
}

fn parse_args() -> Option<Args> {
    let mut json = false;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else {
            positional.push(arg);
        }
    }
    let mut positional = positional.into_iter();
    let data_dir = positional.next()?.into();
    let stops_file = positional.next();
    Some(Args {
        data_dir,
        stops_file,
        json,
    })
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let Some(args) = parse_args() else {
        error!("Missing data directory");
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };

    let mut config = Config::default();
    if let Some(stops_file) = args.stops_file {
        // An absolute path replaces the data directory when joined.
        config.stops_file_name = stops_file;
    }
    let map = MapData::new(config).from_dir(&args.data_dir);

    info!("Loading map from {}...", args.data_dir.display());
    let now = Instant::now();
    let repository = match Repository::new().load_map(&map) {
        Ok(repository) => repository,
        Err(err) => {
            error!("Failed to load map: {err}");
            return ExitCode::FAILURE;
        }
    };
    info!(
        "Loaded {} points and {} edges in {:?}",
        repository.point_count(),
        repository.edge_count(),
        now.elapsed()
    );

    let stops = match repository.load_stops(&map) {
        Ok(stops) => stops,
        Err(err) => {
            error!("Failed to load stops: {err}");
            return ExitCode::FAILURE;
        }
    };

    let commands = match repository.tour().generate_tour(&stops) {
        Ok(commands) => commands,
        Err(err) => {
            error!("Failed to generate tour: {err}");
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&commands) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                error!("Failed to serialize tour: {err}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    for command in commands.iter() {
        println!("{command}");
    }
    let total: Distance = commands.iter().map(TourCommand::distance).sum();
    println!("Your tour has finished!");
    println!("Total tour distance: {:.3} miles", total.as_miles());
    ExitCode::SUCCESS
}
