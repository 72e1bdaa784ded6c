//! Error types for salesview-store

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid date {value:?} in record {record}")]
    InvalidDate { record: u64, value: String },

    #[error("Invalid number {value:?} for {field} in record {record}")]
    InvalidNumber {
        record: u64,
        field: &'static str,
        value: String,
    },

    #[error("IO error")]
    IoError(#[from] io::Error),
}
