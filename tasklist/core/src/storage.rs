use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::{info, warn};
use thiserror::Error;

use crate::task::Task;

/// The persisted shape of the store: category name to the tasks filed
/// under it, in insertion order.
pub type Buckets = HashMap<String, Vec<Task>>;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("cannot write task file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Reads the task file. A missing file is a fresh start, and an unreadable
/// or malformed one degrades to an empty map with a warning; neither is an
/// error the caller has to handle.
pub fn load(path: &Path) -> Buckets {
    if !path.exists() {
        info!("no task file at {}, starting fresh", path.display());
        return Buckets::new();
    }
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            warn!("cannot read task file {}: {err}", path.display());
            return Buckets::new();
        }
    };
    match serde_json::from_str(&contents) {
        Ok(buckets) => buckets,
        Err(err) => {
            warn!(
                "task file {} is not valid JSON, starting empty: {err}",
                path.display()
            );
            Buckets::new()
        }
    }
}

/// Serializes the whole map and rewrites the file from scratch.
pub fn save(path: &Path, buckets: &Buckets) -> Result<(), StorageError> {
    let json = serde_json::to_string_pretty(buckets)?;
    fs::write(path, json)?;
    Ok(())
}
