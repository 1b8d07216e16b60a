use thiserror::Error;

/// Everything that can abort the pipeline, one variant per stage so callers
/// and tests can tell which stage failed. The driver still collapses all of
/// them into a single failure line in the progress log.
#[derive(Debug, Error)]
pub enum EtlError {
    /// Network unreachable, non-2xx status, or an unreadable response body.
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The page no longer matches the positional layout we scrape by.
    #[error("unexpected page structure: {0}")]
    Structure(String),

    /// A GDP cell was not numeric after separator stripping.
    #[error("could not convert GDP value {value:?}: {source}")]
    Convert {
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// CSV serialization or the write beneath it failed.
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),

    /// Opening the database or loading the destination table failed.
    #[error("database load failed: {0}")]
    Store(#[source] rusqlite::Error),

    /// The filter query could not be prepared or executed.
    #[error("query failed: {0}")]
    Query(#[source] rusqlite::Error),

    /// The progress log itself could not be appended to.
    #[error("progress log write failed: {0}")]
    Log(#[from] std::io::Error),
}
