//! HTTP ticket source.
//!
//! # Security Note - Logging
//!
//! The API key is protected from being logged through reqwest's request
//! logging by the `RedactedHeader` wrapper type, which implements `Display`
//! and `Debug` to redact sensitive values. Even if debug logging is enabled,
//! the Authorization header value will appear as `[REDACTED]` instead of the
//! actual key.

use reqwest::Client;
use reqwest::header;
use secrecy::{ExposeSecret, SecretBox};
use std::fmt;
use std::time::Duration;
use url::Url;

use crate::config::Config;
use crate::error::{CorkboardError, Result};

use super::{TicketBatch, TicketSource, decode_ticket_payload};

/// Wrapper for sensitive header values that redacts the value when formatted.
struct RedactedHeader {
    value: String,
}

impl RedactedHeader {
    fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    fn as_header_value(&self) -> Result<header::HeaderValue> {
        header::HeaderValue::from_str(&self.value).map_err(|_| {
            CorkboardError::Config("API key contains characters not valid in a header".to_string())
        })
    }
}

impl fmt::Display for RedactedHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl fmt::Debug for RedactedHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedactedHeader")
            .field("value", &"[REDACTED]")
            .finish()
    }
}

/// Fetches the ticket collection from the listing endpoint.
///
/// One GET per call, no retry: a failed fetch is reported as-is and the
/// caller decides what to show. Timeouts guarantee a hung endpoint still
/// resolves to a failure.
pub struct HttpTicketSource {
    client: Client,
    endpoint: Url,
    api_key: Option<SecretBox<String>>,
}

impl HttpTicketSource {
    /// Create a source for `endpoint`.
    ///
    /// Configures the HTTP client with 30s connect timeout and 60s total timeout.
    pub fn new(endpoint: Url, api_key: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            endpoint,
            api_key: api_key.map(|key| SecretBox::new(Box::new(key))),
        })
    }

    /// Build a source from configuration, honoring a CLI endpoint override.
    pub fn from_config(config: &Config, endpoint_override: Option<&str>) -> Result<Self> {
        let endpoint = config.resolved_endpoint(endpoint_override)?;
        Self::new(endpoint, config.api_key())
    }
}

#[async_trait::async_trait]
impl TicketSource for HttpTicketSource {
    async fn fetch_tickets(&self) -> Result<TicketBatch> {
        tracing::debug!(endpoint = %self.endpoint, "fetching ticket listing");

        let mut request = self.client.get(self.endpoint.clone());
        if let Some(key) = &self.api_key {
            let auth_header = RedactedHeader::new(&format!("Bearer {}", key.expose_secret()));
            request = request.header(header::AUTHORIZATION, auth_header.as_header_value()?);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "ticket listing request failed");
            return Err(CorkboardError::Api {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string(),
            });
        }

        let body = response.text().await?;
        let batch = decode_ticket_payload(&body)?;

        tracing::info!(
            count = batch.tickets.len(),
            skipped = batch.skipped.len(),
            "ticket listing fetched"
        );
        Ok(batch)
    }

    fn describe(&self) -> String {
        self.endpoint
            .host_str()
            .unwrap_or("endpoint")
            .to_string()
    }
}
