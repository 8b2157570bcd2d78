use std::collections::HashMap;
use time::{
    format_description::FormatItem,
    OffsetDateTime,
    PrimitiveDateTime,
};

/// The fixed format of a `written_on` date.
///
/// The trailing `Z` is a literal; the instant is always UTC.
pub(crate) const WRITTEN_ON_FORMAT: &[FormatItem<'_>] = time::macros::format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
);

/// A List of [`Definition`]s.
#[derive(Debug, serde::Deserialize, serde::Serialize)]
pub struct DefinitionList {
    /// The inner list
    #[serde(default)]
    pub list: Vec<Definition>,

    /// Unknown k/vs
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_json::Value>,
}

/// A [`Definition`] for a term.
///
/// Missing fields are defaulted, not errors.
#[derive(Debug, serde::Deserialize, serde::Serialize)]
pub struct Definition {
    /// The author
    #[serde(default)]
    pub author: String,

    /// The current votes for this
    #[serde(default)]
    pub current_vote: String,

    /// The definition id
    #[serde(default)]
    pub defid: u64,

    /// The actual definition
    #[serde(default)]
    pub definition: String,

    /// An example usage
    #[serde(default)]
    pub example: String,

    /// The definition permalink
    #[serde(default)]
    pub permalink: String,

    /// # of thumbs down
    #[serde(default)]
    pub thumbs_down: u64,

    /// # of thumbs up
    #[serde(default)]
    pub thumbs_up: u64,

    /// The term
    #[serde(default)]
    pub word: String,

    /// Date written, as sent by the api
    #[serde(default)]
    pub written_on: String,

    /// `written_on` parsed as a UTC instant.
    ///
    /// Not part of the wire format.
    /// [`lookup`](crate::Client::lookup) fills this in;
    /// it is `Some` for every definition of a successful lookup.
    #[serde(skip)]
    pub written_on_date: Option<OffsetDateTime>,

    /// Unknown K/Vs
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_json::Value>,
}

impl Definition {
    /// Parse the `written_on` date under [`WRITTEN_ON_FORMAT`].
    pub(crate) fn parse_written_on(&self) -> Result<OffsetDateTime, time::error::Parse> {
        PrimitiveDateTime::parse(&self.written_on, WRITTEN_ON_FORMAT)
            .map(PrimitiveDateTime::assume_utc)
    }

    /// Get the raw definition.
    pub fn get_raw_definition(&self) -> String {
        self.definition
            .chars()
            .filter(|&c| c != '[' && c != ']')
            .collect()
    }

    /// Get the raw example.
    pub fn get_raw_example(&self) -> String {
        self.example
            .chars()
            .filter(|&c| c != '[' && c != ']')
            .collect()
    }
}
