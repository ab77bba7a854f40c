use jaunt::{catalog::Catalog, market::Market};
use std::path::PathBuf;
use tokio::sync::RwLock;

/// Everything behind the single data lock. Search handlers read, market and
/// feed handlers write.
pub struct AppData {
    pub catalog: Catalog,
    pub market: Market,
}

pub struct AppState {
    pub feed_path: PathBuf,
    pub data: RwLock<AppData>,
}

impl AppState {
    pub fn new(feed_path: PathBuf, catalog: Catalog) -> Self {
        Self {
            feed_path,
            data: RwLock::new(AppData {
                catalog,
                market: Market::new(),
            }),
        }
    }
}
