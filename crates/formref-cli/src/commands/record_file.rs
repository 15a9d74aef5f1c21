//! Reading and writing single-record files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use formref::{FormReference, RecordError};

#[derive(Debug, thiserror::Error)]
pub enum RecordFileError {
    #[error("failed to read '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write '{}': {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Record(#[from] RecordError),
}

pub fn write_record(path: &Path, reference: &FormReference) -> Result<(), RecordFileError> {
    fs::write(path, reference.to_bytes()).map_err(|source| RecordFileError::Write {
        path: path.to_owned(),
        source,
    })
}

pub fn read_record(path: &Path) -> Result<FormReference, RecordFileError> {
    let bytes = fs::read(path).map_err(|source| RecordFileError::Read {
        path: path.to_owned(),
        source,
    })?;
    Ok(FormReference::from_bytes(&bytes)?)
}
