#[derive(Debug, Clone)]
pub struct Config {
    pub segments_file_name: String,
    pub pois_file_name: String,
    pub stops_file_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            segments_file_name: "segments.csv".into(),
            pois_file_name: "pois.csv".into(),
            stops_file_name: "stops.csv".into(),
        }
    }
}
