// src/store.rs
//
// Local cache of the last collected record set (.store/movies.json).
// The GUI loads it at startup; the CLI re-analyses it with --from-cache.

use std::path::{Path, PathBuf};

use crate::config::consts::{STORE_DIR, STORE_FILE};
use crate::data::MovieRecord;
use crate::file::{self, ExportError};

pub fn store_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(STORE_FILE)
}

pub fn save_records(records: &[MovieRecord]) -> Result<PathBuf, ExportError> {
    save_records_at(&store_path(), records)
}

pub fn load_records() -> Result<Vec<MovieRecord>, ExportError> {
    load_records_at(&store_path())
}

pub fn save_records_at(path: &Path, records: &[MovieRecord]) -> Result<PathBuf, ExportError> {
    file::write_records(path, records)?;
    Ok(path.to_path_buf())
}

pub fn load_records_at(path: &Path) -> Result<Vec<MovieRecord>, ExportError> {
    file::read_records(path)
}
