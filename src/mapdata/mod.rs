use serde::de::DeserializeOwned;
use std::{
    fs::File,
    io::{self},
    path::{Path, PathBuf},
};
use thiserror::Error;

mod config;
pub mod models;
pub use config::*;
use models::*;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Could not find file: {0}")]
    FileNotFound(String),
    #[error("Point of interest {name} references missing segment {segment}")]
    InvalidSegment { name: String, segment: u32 },
    #[error("Stop names an unknown point of interest: {0}")]
    UnknownPoi(String),
}

#[derive(Default, Debug)]
pub enum StorageType {
    #[default]
    None,
    Directory(PathBuf),
}

/// Flat-file source for street segments, points of interest and stops.
#[derive(Default)]
pub struct MapData {
    config: Config,
    storage: StorageType,
}

impl MapData {
    pub fn new(config: self::Config) -> Self {
        Self {
            config,
            storage: Default::default(),
        }
    }

    pub fn from_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.storage = StorageType::Directory(path.as_ref().to_path_buf());
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn stream_segments<F>(&self, f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, MapSegment)) -> Result<(), self::Error>,
    {
        match &self.storage {
            StorageType::None => Ok(()),
            StorageType::Directory(dir) => {
                stream_from_dir::<MapSegment, F>(dir, &self.config.segments_file_name, f)
            }
        }
    }

    pub fn stream_pois<F>(&self, f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, MapPoi)) -> Result<(), self::Error>,
    {
        match &self.storage {
            StorageType::None => Ok(()),
            StorageType::Directory(dir) => {
                stream_from_dir::<MapPoi, F>(dir, &self.config.pois_file_name, f)
            }
        }
    }

    pub fn stream_stops<F>(&self, f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, MapStop)) -> Result<(), self::Error>,
    {
        match &self.storage {
            StorageType::None => Ok(()),
            StorageType::Directory(dir) => {
                stream_from_dir::<MapStop, F>(dir, &self.config.stops_file_name, f)
            }
        }
    }
}

fn stream_from_dir<T, F>(dir: &Path, file_name: &str, mut f: F) -> Result<(), self::Error>
where
    T: DeserializeOwned,
    F: FnMut((usize, T)) -> Result<(), self::Error>,
{
    let path = dir.join(file_name);
    if !path.is_file() {
        return Err(self::Error::FileNotFound(path.display().to_string()));
    }
    let file = File::open(&path)?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);
    for (i, record) in reader.deserialize().enumerate() {
        let record: T = record?;
        f((i, record))?;
    }
    Ok(())
}
