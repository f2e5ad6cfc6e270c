/// Blocking HTTP client for the platform's records API.
use std::time::Duration;

use super::errors::ApiError;
use super::RecordStore;
use crate::types::RecordedEntry;

/// Request timeout for record queries.
const REQUEST_TIMEOUT_SECS: u64 = 10;
const CONNECT_TIMEOUT_SECS: u64 = 5;

/// A records API client bound to one server base URL.
pub struct ApiClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for the given server base URL.
    ///
    /// A trailing slash on the URL is tolerated and stripped.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Build` if the underlying HTTP client cannot be
    /// constructed (e.g., invalid TLS config).
    pub fn new(server: &str) -> Result<Self, ApiError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(ApiError::Build)?;
        Ok(Self {
            http,
            base_url: server.trim_end_matches('/').to_owned(),
        })
    }

    /// GET `url` and decode the body as a list of records.
    fn get_records(&self, url: &str) -> Result<Vec<RecordedEntry>, ApiError> {
        let resp = self
            .http
            .get(url)
            .send()
            .map_err(|e| ApiError::Transport {
                url: url.to_owned(),
                source: e,
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .unwrap_or_else(|_| "<unreadable body>".to_owned());
            return Err(ApiError::Status { status, body });
        }

        resp.json::<Vec<RecordedEntry>>().map_err(ApiError::Decode)
    }

    fn records_url(&self, suffix: &str) -> String {
        format!("{}/records{suffix}", self.base_url)
    }
}

impl RecordStore for ApiClient {
    fn records_all(&self) -> Result<Vec<RecordedEntry>, ApiError> {
        self.get_records(&self.records_url(""))
    }

    fn records_by_function(&self, function: &str) -> Result<Vec<RecordedEntry>, ApiError> {
        self.get_records(&self.records_url(&format!("/function/{function}")))
    }

    fn records_by_trigger(&self, trigger: &str) -> Result<Vec<RecordedEntry>, ApiError> {
        self.get_records(&self.records_url(&format!("/trigger/{trigger}")))
    }

    fn records_by_time(&self, from: &str, to: &str) -> Result<Vec<RecordedEntry>, ApiError> {
        self.get_records(&self.records_url(&format!("/time?from={from}&to={to}")))
    }
}
