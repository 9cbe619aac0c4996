use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum FetchError {
    /// Every attempt failed with something other than "not found".
    #[error("Fetch exhausted after {attempts} attempt(s) for {url}: {source}")]
    Exhausted {
        url:      String,
        attempts: usize,
        #[source]
        source:   BoxError,
    },

    #[error("Invalid indexer url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Empty response shape does not fit the requested document: {0}")]
    EmptyShape(#[from] serde_json::Error),
}

impl FetchError {
    pub fn exhausted(
        url: impl Into<String>,
        attempts: usize,
        source: impl Into<BoxError>,
    ) -> Self {
        FetchError::Exhausted {
            url: url.into(),
            attempts,
            source: source.into(),
        }
    }
}
