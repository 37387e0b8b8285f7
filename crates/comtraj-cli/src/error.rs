use comtraj::core::io::IoError;
use comtraj::workflows::reduce::ReduceError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Reduce(#[from] ReduceError),

    #[error(transparent)]
    Trajectory(#[from] IoError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
