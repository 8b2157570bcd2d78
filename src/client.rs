use crate::{
    DefinitionList,
    Error,
};
use reqwest::StatusCode;
use url::Url;

/// The default "define" endpoint
pub const DEFAULT_API_URL: &str = "http://api.urbandictionary.com/v0/define";

/// Client
#[derive(Debug, Clone)]
pub struct Client {
    /// The inner http client
    pub client: reqwest::Client,

    /// The "define" endpoint this client queries
    api_url: String,
}

impl Client {
    /// Make a new [`Client`].
    pub fn new() -> Self {
        Self::with_api_url(DEFAULT_API_URL)
    }

    /// Make a new [`Client`] for an alternate "define" endpoint.
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Client {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
        }
    }

    /// Look up a term.
    ///
    /// This makes exactly one GET request.
    /// It fails if the status is not 200,
    /// the body is not the expected JSON shape,
    /// the definition list is empty,
    /// or any definition's `written_on` date fails to parse.
    /// No partial lists are ever returned.
    pub async fn lookup(&self, term: &str) -> Result<DefinitionList, Error> {
        let url = Url::parse_with_params(&self.api_url, &[("term", term)])?;

        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(Error::Send)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::InvalidStatus(status));
        }

        let body = response.text().await.map_err(Error::Read)?;
        let mut definition_list: DefinitionList = serde_json::from_str(&body)?;

        if definition_list.list.is_empty() {
            return Err(Error::NoResults);
        }

        for (index, definition) in definition_list.list.iter_mut().enumerate() {
            let date = definition
                .parse_written_on()
                .map_err(|source| Error::InvalidWrittenOn {
                    index,
                    written_on: definition.written_on.clone(),
                    source,
                })?;
            definition.written_on_date = Some(date);
        }

        Ok(definition_list)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
