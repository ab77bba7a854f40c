use serde::de::DeserializeOwned;
use std::{
    fs::File,
    io::{self},
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::warn;
use zip::{ZipArchive, read::ZipFile};

mod config;
pub mod models;
pub use config::*;
use models::*;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Could not find file with name: {0}")]
    FileNotFound(String),
}

#[derive(Default)]
pub enum StorageType {
    #[default]
    None,
    Zip(PathBuf),
}

/// Reader for a marketplace catalog feed: a zip archive of CSV files, streamed
/// row by row. A `Feed` with no storage streams nothing and never fails, which
/// gives callers an empty catalog.
#[derive(Default)]
pub struct Feed {
    config: Config,
    storage: StorageType,
}

impl Feed {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn from_zip<P: AsRef<Path>>(mut self, path: P) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();
        // Probe the archive once up front; streaming reopens it per file.
        let file = File::open(&path)?;
        ZipArchive::new(file)?;
        self.storage = StorageType::Zip(path);
        Ok(self)
    }

    pub fn stream_routes<F>(&self, f: F) -> Result<(), Error>
    where
        F: FnMut((usize, FeedRoute)),
    {
        match &self.storage {
            StorageType::None => Ok(()),
            StorageType::Zip(path) => {
                stream_from_zip::<FeedRoute, F>(path, &self.config.routes_file_name, f)
            }
        }
    }

    pub fn stream_locations<F>(&self, f: F) -> Result<(), Error>
    where
        F: FnMut((usize, FeedLocation)),
    {
        match &self.storage {
            StorageType::None => Ok(()),
            StorageType::Zip(path) => {
                stream_from_zip::<FeedLocation, F>(path, &self.config.locations_file_name, f)
            }
        }
    }

    pub fn stream_users<F>(&self, f: F) -> Result<(), Error>
    where
        F: FnMut((usize, FeedUser)),
    {
        match &self.storage {
            StorageType::None => Ok(()),
            StorageType::Zip(path) => {
                stream_from_zip::<FeedUser, F>(path, &self.config.users_file_name, f)
            }
        }
    }

    pub fn stream_highlights<F>(&self, f: F) -> Result<(), Error>
    where
        F: FnMut((usize, FeedHighlight)),
    {
        match &self.storage {
            StorageType::None => Ok(()),
            StorageType::Zip(path) => {
                stream_from_zip::<FeedHighlight, F>(path, &self.config.highlights_file_name, f)
            }
        }
    }
}

fn stream_from_zip<T, F>(zip_path: &Path, file_name: &str, mut f: F) -> Result<(), Error>
where
    T: DeserializeOwned,
    F: FnMut((usize, T)),
{
    let zip_file = File::open(zip_path)?;
    let mut archive = ZipArchive::new(zip_file)?;
    let file = get_file(&mut archive, file_name)?;
    let mut reader = csv::Reader::from_reader(file);
    reader
        .deserialize()
        .filter_map(|row| match row {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("Skipping malformed row in {file_name}: {err}");
                None
            }
        })
        .enumerate()
        .for_each(|pair| f(pair));
    Ok(())
}

fn get_file<'a>(
    archive: &'a mut ZipArchive<File>,
    name: &'a str,
) -> Result<ZipFile<'a, File>, Error> {
    let index = archive
        .index_for_name(name)
        .ok_or_else(|| Error::FileNotFound(name.to_string()))?;
    let file = archive.by_index(index)?;
    Ok(file)
}
