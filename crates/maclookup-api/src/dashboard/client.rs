// Dashboard API HTTP client
//
// Wraps `reqwest::Client` with base-URL normalization, bearer auth, status
// mapping, and 429 back-off. Endpoint methods live in sibling modules
// (`clients`, `devices`) as inherent impls.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue, RETRY_AFTER};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use super::models::ErrorResponse;
use crate::error::Error;
use crate::transport::TransportConfig;

/// Public Dashboard API v1 root.
pub const DEFAULT_BASE_URL: &str = "https://api.meraki.com/api/v1";

/// Wait used when a 429 carries no usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 1;
/// Upper bound on a single back-off, whatever the server asks for.
const MAX_RETRY_AFTER_SECS: u64 = 60;

/// Async client for the Dashboard REST API.
pub struct DashboardClient {
    http: reqwest::Client,
    base_url: Url,
    timeout_secs: u64,
    max_retries: u32,
}

impl DashboardClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from an API key and transport config.
    ///
    /// Injects `Authorization: Bearer <key>` as a default header on every
    /// request.
    pub fn from_api_key(
        base_url: &str,
        api_key: &SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let mut value = HeaderValue::from_str(&format!("Bearer {}", api_key.expose_secret()))
            .map_err(|e| Error::Authentication {
                message: format!("invalid API key header value: {e}"),
            })?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);

        let http = transport.build_client_with_headers(headers)?;
        Ok(Self {
            http,
            base_url: Self::normalize_base_url(base_url)?,
            timeout_secs: transport.timeout_secs(),
            max_retries: transport.max_retries,
        })
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let defaults = TransportConfig::default();
        Ok(Self {
            http,
            base_url: Self::normalize_base_url(base_url)?,
            timeout_secs: defaults.timeout_secs(),
            max_retries: defaults.max_retries,
        })
    }

    /// Override the 429 retry budget.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// The API root every request is built from.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        if url.cannot_be_a_base() {
            return Err(Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase));
        }
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&path);
        Ok(url)
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Append path segments to the base URL, percent-encoding each one.
    pub(crate) fn url(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    // ── HTTP ─────────────────────────────────────────────────────────

    /// Send a GET request, backing off on 429 up to `max_retries` times.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        let mut attempt = 0;
        loop {
            debug!("GET {url}");
            let resp = self
                .http
                .get(url.clone())
                .send()
                .await
                .map_err(|e| self.map_transport(e))?;

            match self.handle_response(resp).await {
                Err(Error::RateLimited { retry_after_secs }) if attempt < self.max_retries => {
                    attempt += 1;
                    warn!(attempt, retry_after_secs, "rate limited, backing off");
                    tokio::time::sleep(Duration::from_secs(retry_after_secs)).await;
                }
                other => return other,
            }
        }
    }

    fn map_transport(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout {
                timeout_secs: self.timeout_secs,
            }
        } else {
            Error::Transport(err)
        }
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();

        match status {
            StatusCode::UNAUTHORIZED => return Err(Error::InvalidApiKey),
            StatusCode::FORBIDDEN => {
                return Err(Error::Authentication {
                    message: "API key lacks access to this organization (HTTP 403)".into(),
                });
            }
            StatusCode::NOT_FOUND => {
                return Err(Error::NotFound {
                    resource: resp.url().path().to_owned(),
                });
            }
            StatusCode::TOO_MANY_REQUESTS => {
                return Err(Error::RateLimited {
                    retry_after_secs: retry_after(resp.headers()),
                });
            }
            _ => {}
        }

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .ok()
                .filter(|e| !e.errors.is_empty())
                .map_or_else(|| preview(&body), |e| e.errors.join("; "));
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = resp.text().await.map_err(|e| self.map_transport(e))?;
        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: format!("{e} (body preview: {:?})", preview(&body)),
            body,
        })
    }
}

fn retry_after(headers: &HeaderMap) -> u64 {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
        .min(MAX_RETRY_AFTER_SECS)
}

fn preview(body: &str) -> String {
    body.chars().take(200).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client(base: &str) -> DashboardClient {
        DashboardClient::from_reqwest(base, reqwest::Client::new()).unwrap()
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let a = client("https://api.meraki.com/api/v1/");
        let b = client("https://api.meraki.com/api/v1");
        assert_eq!(a.base_url(), b.base_url());
    }

    #[test]
    fn url_appends_segments() {
        let c = client("https://api.meraki.com/api/v1");
        let url = c.url(&["devices", "Q2XX-AAAA-BBBB"]).unwrap();
        assert_eq!(url.as_str(), "https://api.meraki.com/api/v1/devices/Q2XX-AAAA-BBBB");
    }

    #[test]
    fn url_encodes_segment_separators() {
        let c = client("http://localhost:8080");
        let url = c.url(&["networks", "N/1", "clients"]).unwrap();
        assert_eq!(url.path(), "/networks/N%2F1/clients");
    }

    #[test]
    fn rejects_non_base_urls() {
        let result = DashboardClient::from_reqwest("mailto:ops@example.com", reqwest::Client::new());
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn retry_after_is_parsed_and_capped() {
        let mut headers = HeaderMap::new();
        assert_eq!(retry_after(&headers), DEFAULT_RETRY_AFTER_SECS);

        headers.insert(RETRY_AFTER, HeaderValue::from_static("7"));
        assert_eq!(retry_after(&headers), 7);

        headers.insert(RETRY_AFTER, HeaderValue::from_static("3600"));
        assert_eq!(retry_after(&headers), MAX_RETRY_AFTER_SECS);
    }

    #[test]
    fn preview_respects_char_boundaries() {
        let body = "é".repeat(300);
        assert_eq!(preview(&body).chars().count(), 200);
    }
}
