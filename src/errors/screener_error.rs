//! Custom error types for the screener

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScreenerError {
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    #[error("Data parsing error: {context}")]
    DataParsing {
        context: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Malformed numeric field '{field}': {value:?}")]
    MalformedField { field: &'static str, value: String },
}

pub type ScreenerResult<T> = Result<T, ScreenerError>;
