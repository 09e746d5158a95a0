use std::string::FromUtf8Error;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("csv encoding failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("report is not valid utf-8: {0}")]
    Encoding(#[from] FromUtf8Error),
}
