//! HTTP client for the SWAPI collection endpoints.
//!
//! Each `fetch_*` issues exactly one `GET {base}/{resource}` and expects the
//! whole collection back as a JSON array. Nothing is retried.

use holocron_core::kind::EntityKind;
use serde::de::DeserializeOwned;

use crate::records::{FilmRecord, PersonRecord, StarshipRecord};

/// Public SWAPI mirror that serves unpaginated collections.
pub const DEFAULT_BASE_URL: &str = "https://swapi.info/api";

/// Errors from the SWAPI client.
#[derive(Debug, thiserror::Error)]
pub enum SwapiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// SWAPI returned a non-2xx status code.
    #[error("SWAPI error ({status}): {body}")]
    UpstreamStatus {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The body was not a JSON array of records.
    #[error("Bad upstream response for {resource}: {detail}")]
    BadUpstreamResponse {
        resource: String,
        detail: String,
    },

    /// An element of the array did not have the expected record shape.
    #[error("Could not decode {resource} record: {source}")]
    Decode {
        resource: String,
        #[source]
        source: serde_json::Error,
    },
}

/// HTTP client for one SWAPI base URL.
#[derive(Debug, Clone)]
pub struct SwapiClient {
    client: reqwest::Client,
    base_url: String,
}

impl SwapiClient {
    /// Create a client for `base_url`, e.g. `https://swapi.info/api`.
    ///
    /// A trailing slash on the base URL is ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch every row of `resource` as raw JSON values.
    pub async fn fetch_all(&self, resource: &str) -> Result<Vec<serde_json::Value>, SwapiError> {
        let url = format!("{}/{resource}", self.base_url);
        tracing::debug!(%url, "Fetching SWAPI collection");

        let response = self.client.get(&url).send().await?;
        let response = Self::ensure_success(response).await?;
        let body = response.text().await?;

        let items = parse_collection(resource, &body)?;
        tracing::info!(resource, count = items.len(), "Fetched SWAPI collection");
        Ok(items)
    }

    pub async fn fetch_films(&self) -> Result<Vec<FilmRecord>, SwapiError> {
        self.fetch_records(EntityKind::Film.resource()).await
    }

    pub async fn fetch_starships(&self) -> Result<Vec<StarshipRecord>, SwapiError> {
        self.fetch_records(EntityKind::Starship.resource()).await
    }

    pub async fn fetch_people(&self) -> Result<Vec<PersonRecord>, SwapiError> {
        self.fetch_records(EntityKind::Character.resource()).await
    }

    // ---- private helpers ----

    async fn fetch_records<T: DeserializeOwned>(&self, resource: &str) -> Result<Vec<T>, SwapiError> {
        self.fetch_all(resource)
            .await?
            .into_iter()
            .map(|item| {
                serde_json::from_value(item).map_err(|source| SwapiError::Decode {
                    resource: resource.to_string(),
                    source,
                })
            })
            .collect()
    }

    /// Return the response unchanged on a 2xx status, otherwise an
    /// [`SwapiError::UpstreamStatus`] carrying the status and body text.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, SwapiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(SwapiError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

/// Parse a collection body, which must be a JSON array.
fn parse_collection(resource: &str, body: &str) -> Result<Vec<serde_json::Value>, SwapiError> {
    let bad = |detail: String| SwapiError::BadUpstreamResponse {
        resource: resource.to_string(),
        detail,
    };

    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Array(items)) => Ok(items),
        Ok(other) => Err(bad(format!("expected a JSON array, got {}", json_kind(&other)))),
        Err(e) => Err(bad(format!("body is not JSON: {e}"))),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
