//! Input decoding glue - JSON record loading
//!
//! The input file is a JSON array of objects, one per item:
//!
//! ```json
//! [ {"file": "x.jpg", "features": [8692, 13411, 16458]}, ... ]
//! ```
//!
//! `grays` is accepted as a legacy name for the features array.

use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One item from the input file: an opaque label plus its feature vector
#[derive(Debug, Clone, Deserialize)]
pub struct InputRecord {
    pub file: String,
    #[serde(alias = "grays")]
    pub features: Vec<f64>,
}

/// Load records from a JSON file, keeping at most `limit` when it is nonzero
pub fn load_records(path: &Path, limit: usize) -> Result<Vec<InputRecord>, InputError> {
    let file = File::open(path)?;
    let mut records: Vec<InputRecord> = serde_json::from_reader(BufReader::new(file))?;
    if limit > 0 && records.len() > limit {
        records.truncate(limit);
    }
    Ok(records)
}
