use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use super::category::Categories;
use super::event::EventRecord;

/// Why the event file could not be turned into records.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("could not parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Outcome of loading the event file; callers must branch on it.
pub type LoadResult = Result<EventSet, LoadError>;

/// The loaded, read-only record collection plus its derived categories.
#[derive(Debug, Clone)]
pub struct EventSet {
    records: Arc<[EventRecord]>,
    categories: Categories,
}

impl EventSet {
    pub fn new(records: Vec<EventRecord>) -> Self {
        let categories = Categories::from_records(&records);
        Self {
            records: records.into(),
            categories,
        }
    }

    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    pub fn categories(&self) -> &Categories {
        &self.categories
    }
}

pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> LoadResult {
        debug!("reading events from {}", self.path.display());
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| LoadError::Read {
                path: self.path.clone(),
                source,
            })?;
        self.parse(&bytes)
    }

    pub fn parse(&self, bytes: &[u8]) -> LoadResult {
        let records: Vec<EventRecord> =
            serde_json::from_slice(bytes).map_err(|source| LoadError::Parse {
                path: self.path.clone(),
                source,
            })?;

        for ev in records.iter().filter(|ev| ev.date.is_none()) {
            warn!(
                "event {:?} has unusable date {:?}; it will not appear on the calendar",
                ev.name(),
                ev.date_label()
            );
        }

        let set = EventSet::new(records);
        for cat in set.categories().conflicts() {
            warn!(
                "category {:?} has records with different colours; using {:?}",
                cat.name, cat.color
            );
        }

        info!(
            "loaded {} events in {} categories from {}",
            set.records().len(),
            set.categories().len(),
            self.path.display()
        );
        Ok(set)
    }
}
