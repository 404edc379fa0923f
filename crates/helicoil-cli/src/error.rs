use helicoil::core::geometry::error::GeometryError;
use helicoil::workflows::helix::ParamsError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] GeometryError),

    #[error("Configuration error: {0}")]
    Config(#[from] ParamsError),

    #[error("Failed to read input '{path}': {source}", path = path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
