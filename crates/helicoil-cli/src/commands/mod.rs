pub mod distances;
pub mod omega;

use crate::error::{CliError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

/// Opens the command input: the named file, or standard input when no path
/// was given (the tools are built to sit in shell pipelines).
pub fn open_input(path: &Option<PathBuf>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|source| CliError::Input {
                path: path.clone(),
                source,
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(std::io::stdin()))),
    }
}
