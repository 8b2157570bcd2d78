mod client;
mod types;

pub use crate::{
    client::{
        Client,
        DEFAULT_API_URL,
    },
    types::{
        Definition,
        DefinitionList,
    },
};
pub use time::OffsetDateTime;

/// Library Error Type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A url parse error
    #[error(transparent)]
    Url(#[from] url::ParseError),

    /// Failed to send the request
    #[error("failed to send request")]
    Send(#[source] reqwest::Error),

    /// Invalid HTTP Status
    #[error("invalid status {0}")]
    InvalidStatus(reqwest::StatusCode),

    /// Failed to read the response body
    #[error("failed to read response body")]
    Read(#[source] reqwest::Error),

    /// Invalid JSON body
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The definition list was empty
    #[error("no results were found")]
    NoResults,

    /// A definition's `written_on` date failed to parse
    #[error("invalid `written_on` date \"{written_on}\" for definition {index}")]
    InvalidWrittenOn {
        /// The index of the definition in the list
        index: usize,

        /// The raw date string
        written_on: String,

        /// The parse error
        #[source]
        source: time::error::Parse,
    },
}
