//! Provides input/output functionality for trajectory file formats.
//!
//! Each supported format lives in its own module behind the common
//! [`traits::TrajectoryFile`] interface. The top-level [`load_trajectory`]
//! and [`save_trajectory`] functions dispatch on the file extension, so
//! callers never name a format directly.

pub mod pdb;
pub mod traits;
pub mod xyz;

use crate::core::models::trajectory::Trajectory;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use traits::TrajectoryFile;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Pdb(#[from] pdb::PdbError),

    #[error(transparent)]
    Xyz(#[from] xyz::XyzError),

    #[error(
        "Cannot determine trajectory format for '{path}': unsupported or missing file extension",
        path = path.display()
    )]
    UnsupportedFormat { path: PathBuf },
}

fn format_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

/// Loads a fully-materialized trajectory from `path`, inferring the format
/// from the file extension (`.pdb` or `.xyz`).
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for unknown extensions, or the
/// format's own error (unreadable file, parse failure) unchanged.
pub fn load_trajectory<P: AsRef<Path>>(path: P) -> Result<Trajectory, IoError> {
    let path = path.as_ref();
    match format_extension(path).as_deref() {
        Some("pdb") => Ok(pdb::PdbFile::read_from_path(path)?),
        Some("xyz") => Ok(xyz::XyzFile::read_from_path(path)?),
        _ => Err(IoError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Serializes a trajectory to `path` in the format implied by the file
/// extension (`.pdb` or `.xyz`).
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for unknown extensions, or the
/// format's own error (unwritable path) unchanged.
pub fn save_trajectory<P: AsRef<Path>>(trajectory: &Trajectory, path: P) -> Result<(), IoError> {
    let path = path.as_ref();
    match format_extension(path).as_deref() {
        Some("pdb") => Ok(pdb::PdbFile::write_to_path(trajectory, path)?),
        Some("xyz") => Ok(xyz::XyzFile::write_to_path(trajectory, path)?),
        _ => Err(IoError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}
