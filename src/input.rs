use crate::analytics::PortfolioRecord;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum PortfolioInputError {
    #[error("failed to open portfolio file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse portfolio JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Reads a portfolio record from a JSON file.
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<PortfolioRecord, PortfolioInputError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| PortfolioInputError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    from_reader(BufReader::new(file))
}

pub fn from_reader<R: Read>(reader: R) -> Result<PortfolioRecord, PortfolioInputError> {
    Ok(serde_json::from_reader(reader)?)
}
