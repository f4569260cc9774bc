//! FHIR REST API client

use crate::error::{Error, Result};
use crate::models::{CreatedResource, FHIR_JSON};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Url};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for a single FHIR server base.
#[derive(Debug, Clone)]
pub struct FhirClient {
    client: Client,
    base_url: String,
}

impl FhirClient {
    /// Create a client for `base_url` with the given request timeout.
    ///
    /// Trailing slashes on the base are dropped so `[base]/[type]` never
    /// contains `//`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = normalize_base_url(&base_url.into())?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    /// Create a client with the default 30 second timeout.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Self::new(base_url, DEFAULT_TIMEOUT)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the type-level endpoint `[base]/[type]`.
    pub fn type_url(&self, resource_type: &str) -> String {
        format!("{}/{}", self.base_url, resource_type)
    }

    /// Create a resource (`POST [base]/[type]`).
    ///
    /// The body is parsed as JSON regardless of status. A status at or above
    /// 400 yields [`Error::HttpStatus`] with the parsed body, or the raw text
    /// as a JSON string when the server did not send JSON. A success status
    /// with a non-JSON body yields [`Error::MalformedBody`]. Not idempotent:
    /// every call creates a new resource.
    pub async fn create<R: Serialize + ?Sized>(
        &self,
        resource_type: &str,
        resource: &R,
    ) -> Result<CreatedResource> {
        let url = self.type_url(resource_type);
        let payload = serde_json::to_vec(resource)?;

        tracing::debug!(url = %url, bytes = payload.len(), "POST resource");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, FHIR_JSON)
            .header(ACCEPT, FHIR_JSON)
            .body(payload)
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await?;

        if status >= 400 {
            let body = serde_json::from_str::<Value>(&text).unwrap_or(Value::String(text));
            tracing::warn!(url = %url, status, "FHIR server rejected create");
            return Err(Error::HttpStatus { status, body });
        }

        let body: Value = serde_json::from_str(&text)
            .map_err(|source| Error::MalformedBody { status, source })?;
        Ok(CreatedResource { status, body })
    }
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');

    let parsed = Url::parse(trimmed)
        .map_err(|e| Error::InvalidBaseUrl(format!("'{}': {}", raw, e)))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(Error::InvalidBaseUrl(format!(
            "'{}': scheme must be http or https",
            raw
        )));
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_are_dropped() {
        let client = FhirClient::with_base_url("https://example.org/fhir//").unwrap();
        assert_eq!(client.base_url(), "https://example.org/fhir");
        assert_eq!(
            client.type_url("Patient"),
            "https://example.org/fhir/Patient"
        );
    }

    #[test]
    fn test_base_without_path() {
        let client = FhirClient::with_base_url("http://localhost:8080").unwrap();
        assert_eq!(client.type_url("Patient"), "http://localhost:8080/Patient");
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err = FhirClient::with_base_url("ftp://example.org/fhir").unwrap_err();
        assert!(matches!(err, Error::InvalidBaseUrl(_)));
    }

    #[test]
    fn test_rejects_garbage() {
        let err = FhirClient::with_base_url("not a url").unwrap_err();
        assert!(matches!(err, Error::InvalidBaseUrl(_)));
    }
}
