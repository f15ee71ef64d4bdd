/// Error types for loading and reshaping the rainfall documents
use std::fmt;
use thiserror::Error;

/// Which of the two static documents an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Document {
    /// Per-district yearly rainy-day counts
    Rainfall,
    /// Summary statistics (top 10, yearly totals, extremes)
    Summary,
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Document::Rainfall => write!(f, "rainfall data"),
            Document::Summary => write!(f, "summary statistics"),
        }
    }
}

/// Main error type for rainfall data operations
#[derive(Error, Debug)]
pub enum Error {
    /// The request never produced a response
    #[error("Failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// The server answered with a non-success status
    #[error("Request for {url} failed with HTTP status {status}")]
    Status { url: String, status: u16 },

    /// The body was not valid JSON of the expected shape
    #[error("Failed to parse {document}: {source}")]
    Json {
        document: Document,
        #[source]
        source: serde_json::Error,
    },

    /// A year-selector value that names neither a known year nor an aggregate
    #[error("Unknown heatmap selection: {0:?}")]
    Selection(String),
}

/// Type alias for Results using the rainfall data Error
pub type Result<T> = std::result::Result<T, Error>;
