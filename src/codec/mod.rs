//! Text codec and file persistence for record stores.
//!
//! Each record type implements [`TextCodec`] for its flat-file layout.
//! [`load_or_init`] and [`save`] wrap the codec with file access:
//! - a missing or empty file is a fresh start, not an error
//! - an unreadable or malformed file is reported and yields an empty store
//! - saves truncate and rewrite the whole file (no temp-file rename)

mod lines;
mod student;
mod task;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::{info, warn};

use crate::error::{Result, TallyError};
use crate::store::RecordStore;

/// Default file for the grade book.
pub const DEFAULT_STUDENT_FILE: &str = "students.dat";

/// Default file for the to-do list.
pub const DEFAULT_TASK_FILE: &str = "tasks.txt";

/// Conversion between a list of records and its line-oriented text form.
///
/// `decode(&encode(records))` yields `records` as long as no text field
/// contains a newline.
pub trait TextCodec: Sized {
    fn encode(records: &[Self]) -> String;

    /// Parse a whole file body. Any shortfall is a `Malformed` error; no
    /// partial result is returned.
    fn decode(text: &str) -> Result<Vec<Self>>;
}

/// How a load went.
#[derive(Debug)]
pub enum LoadStatus {
    /// Records were read from the file
    Restored(usize),
    /// No file, or an empty one
    Fresh,
    /// The file exists but could not be read
    Unreadable(TallyError),
    /// The file was read but could not be decoded
    Malformed(TallyError),
}

impl LoadStatus {
    /// Whether the load discarded data the user may care about.
    pub fn is_problem(&self) -> bool {
        matches!(self, Self::Unreadable(_) | Self::Malformed(_))
    }
}

/// A store plus the outcome of loading it.
#[derive(Debug)]
pub struct Loaded<T> {
    pub store: RecordStore<T>,
    pub status: LoadStatus,
}

/// Read `path` into a store, falling back to an empty store on any problem.
pub fn load_or_init<T: TextCodec>(path: &Path) -> Loaded<T> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("No previous data at {}, starting fresh", path.display());
            return fresh();
        }
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            return Loaded {
                store: RecordStore::new(),
                status: LoadStatus::Unreadable(e.into()),
            };
        }
    };

    if text.trim().is_empty() {
        info!("{} is empty, starting fresh", path.display());
        return fresh();
    }

    match T::decode(&text) {
        Ok(records) => {
            let count = records.len();
            info!("Loaded {} records from {}", count, path.display());
            Loaded {
                store: RecordStore::from(records),
                status: LoadStatus::Restored(count),
            }
        }
        Err(e) => {
            warn!("Discarding contents of {}: {}", path.display(), e);
            Loaded {
                store: RecordStore::new(),
                status: LoadStatus::Malformed(e),
            }
        }
    }
}

/// Write the whole store to `path`, replacing what was there.
pub fn save<T: TextCodec>(path: &Path, store: &RecordStore<T>) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, T::encode(store.records()))?;
    info!("Saved {} records to {}", store.len(), path.display());
    Ok(())
}

fn fresh<T>() -> Loaded<T> {
    Loaded {
        store: RecordStore::new(),
        status: LoadStatus::Fresh,
    }
}
