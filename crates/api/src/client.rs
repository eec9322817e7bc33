// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Timeslot API seam and its HTTP implementation.

use crate::error::ApiError;
use crate::request_response::{
    CreateTimeslotResponse, StatusResponse, TimeslotPayload, is_reported_success,
};
use async_trait::async_trait;
use flight_sched_domain::TimeslotId;
use std::time::Duration;
use tracing::debug;

/// Remote store for the timeslots of one flight.
#[async_trait]
pub trait TimeslotApi: Send + Sync {
    /// Creates a timeslot and returns the id the server issued.
    async fn create(&self, payload: &TimeslotPayload) -> Result<TimeslotId, ApiError>;

    /// Replaces the bounds and courts of a timeslot.
    async fn update(&self, id: &TimeslotId, payload: &TimeslotPayload) -> Result<(), ApiError>;

    /// Deletes a timeslot.
    async fn delete(&self, id: &TimeslotId) -> Result<(), ApiError>;
}

/// Connection settings for `HttpTimeslotApi`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the booking site, e.g. `https://club.example`.
    pub base_url: String,
    /// The flight whose timeslots are managed.
    pub flight_id: String,
    /// Per-request timeout. `None` keeps the client default.
    pub timeout: Option<Duration>,
}

/// HTTP client for the timeslot endpoints of one flight.
#[derive(Debug, Clone)]
pub struct HttpTimeslotApi {
    client: reqwest::Client,
    base_url: String,
    flight_id: String,
}

impl HttpTimeslotApi {
    /// Creates a client from connection settings.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Request` if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let mut builder: reqwest::ClientBuilder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_client(
            builder.build()?,
            &config.base_url,
            &config.flight_id,
        ))
    }

    /// Creates a client reusing an existing `reqwest::Client`.
    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: &str, flight_id: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            flight_id: flight_id.to_string(),
        }
    }

    /// Returns the base URL with any trailing slash removed.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn timeslots_url(&self, tail: &str) -> String {
        format!(
            "{}/flights/{}/timeslots/{tail}",
            self.base_url, self.flight_id
        )
    }

    // ---- private helpers ----

    /// Returns the response unchanged when the status code is 2xx, or an
    /// `ApiError::Status` carrying the status and body otherwise.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status: reqwest::StatusCode = response.status();
        if !status.is_success() {
            let body: String = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("<unreadable body>"));
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parses a successful JSON body. An empty body reads as the default.
    async fn parse_response<T>(response: reqwest::Response) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        let response: reqwest::Response = Self::ensure_success(response).await?;
        let body: String = response.text().await?;
        if body.trim().is_empty() {
            return Ok(T::default());
        }
        Ok(serde_json::from_str::<T>(&body)?)
    }

    /// Checks the status code and the reported `status` of the body.
    async fn check_status(response: reqwest::Response) -> Result<(), ApiError> {
        let parsed: StatusResponse = Self::parse_response(response).await?;
        ensure_reported_success(parsed.status)
    }
}

fn ensure_reported_success(status: Option<String>) -> Result<(), ApiError> {
    match status {
        Some(status) if !is_reported_success(Some(&status)) => Err(ApiError::Rejected { status }),
        _ => Ok(()),
    }
}

#[async_trait]
impl TimeslotApi for HttpTimeslotApi {
    async fn create(&self, payload: &TimeslotPayload) -> Result<TimeslotId, ApiError> {
        let url: String = self.timeslots_url("new");
        debug!(url = %url, "Creating timeslot");

        let response: reqwest::Response = self.client.post(url).json(payload).send().await?;
        let parsed: CreateTimeslotResponse = Self::parse_response(response).await?;
        ensure_reported_success(parsed.status)?;
        parsed.timeslot_id.ok_or(ApiError::MissingTimeslotId)
    }

    async fn update(&self, id: &TimeslotId, payload: &TimeslotPayload) -> Result<(), ApiError> {
        let url: String = self.timeslots_url(&format!("{id}/edit"));
        debug!(url = %url, "Updating timeslot");

        let response: reqwest::Response = self.client.post(url).json(payload).send().await?;
        Self::check_status(response).await
    }

    async fn delete(&self, id: &TimeslotId) -> Result<(), ApiError> {
        let url: String = self.timeslots_url(&format!("{id}/delete"));
        debug!(url = %url, "Deleting timeslot");

        let response: reqwest::Response = self
            .client
            .delete(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await?;
        Self::check_status(response).await
    }
}
