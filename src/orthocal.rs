use tracing::{error, info, instrument};

use crate::config::CalendarVariant;
use crate::error::FetchError;
use crate::http;
use crate::model::calendar::CalendarRecord;

/// Client for the orthocal.info daily calendar API.
#[derive(Debug, Clone)]
pub struct Orthocal {
    base_url: String,
}

impl Orthocal {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// `{base_url}/{variant}/`, e.g. `https://orthocal.info/api/gregorian/`.
    pub fn url_for(&self, variant: CalendarVariant) -> String {
        format!("{}/{}/", self.base_url.trim_end_matches('/'), variant)
    }

    /// Fetch today's record. One GET, no retry; every failure is logged and returned.
    #[instrument(level = "info", skip(self))]
    pub fn fetch(&self, variant: CalendarVariant) -> Result<CalendarRecord, FetchError> {
        let url = self.url_for(variant);
        info!(url = %url, "Fetching calendar data");
        let response = http::agent().get(&url).call().map_err(|e| {
            error!(error = %e, url = %url, "Failed to fetch calendar data");
            FetchError::Request(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            error!(status = status.as_u16(), url = %url, "Calendar API returned non-success status");
            return Err(FetchError::Request(format!("unexpected status {}", status)));
        }

        let mut body_reader = response.into_body();
        let body = body_reader.read_to_string().map_err(|e| {
            error!(error = %e, "Failed to read calendar response body");
            FetchError::Body(e.to_string())
        })?;

        let record = CalendarRecord::from_json(&body).map_err(|e| {
            error!(error = %e, bytes = body.len(), "Failed to parse calendar JSON");
            FetchError::from(e)
        })?;
        if record.is_empty() {
            error!(url = %url, "Calendar API returned an empty record");
            return Err(FetchError::EmptyRecord);
        }
        info!("Successfully fetched calendar data");
        Ok(record)
    }
}
