/// File names looked up inside a feed archive. Defaults match the layout the
/// marketplace exporter produces; override per archive when needed.
pub struct Config {
    pub routes_file_name: String,
    pub locations_file_name: String,
    pub users_file_name: String,
    pub highlights_file_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            routes_file_name: "routes.csv".into(),
            locations_file_name: "locations.csv".into(),
            users_file_name: "users.csv".into(),
            highlights_file_name: "highlights.csv".into(),
        }
    }
}
