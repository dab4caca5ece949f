//! Journal Backend HTTP Client
//!
//! reqwest implementation of [`JournalApi`].

use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;

use super::dto::{ErrorBody, MoodEntry, SubmitBody, SubmitOutcome, SubmitRequest};
use super::error::{ApiError, ApiResult};
use super::{endpoint, JournalApi, MOOD_HISTORY_PATH, SUBMIT_PATH};

/// Journal backend REST client
#[derive(Debug, Clone)]
pub struct HttpJournalApi {
    client: Client,
    base_url: String,
}

impl HttpJournalApi {
    /// Create a client for the backend at `base_url`
    pub fn new(base_url: &str, timeout: Duration) -> ApiResult<Self> {
        reqwest::Url::parse(base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Turn a non-success response into [`ApiError::Status`], reading the
    /// backend's `error` field when the body has one
    async fn status_error(response: Response) -> ApiError {
        let status = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();
        ApiError::Status {
            status,
            message: ErrorBody::from_text(&text).error,
        }
    }
}

fn map_reqwest_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout
    } else if e.is_decode() {
        ApiError::Decode(e.to_string())
    } else {
        ApiError::Network(e.to_string())
    }
}

#[async_trait(?Send)]
impl JournalApi for HttpJournalApi {
    async fn mood_history(&self) -> ApiResult<Vec<MoodEntry>> {
        let url = endpoint(&self.base_url, MOOD_HISTORY_PATH);
        tracing::debug!(url = %url, "Fetching mood history");

        let response = self.client.get(&url).send().await.map_err(map_reqwest_error)?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        let entries: Vec<MoodEntry> = response.json().await.map_err(map_reqwest_error)?;
        tracing::debug!(count = entries.len(), "Mood history received");
        Ok(entries)
    }

    async fn submit(&self, request: &SubmitRequest) -> ApiResult<SubmitOutcome> {
        let url = endpoint(&self.base_url, SUBMIT_PATH);
        tracing::debug!(
            url = %url,
            conversation = ?request.conversation_id,
            chars = request.text.chars().count(),
            "Submitting journal message"
        );

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        let body: SubmitBody = response.json().await.map_err(map_reqwest_error)?;
        body.into_outcome()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_base_url() {
        let err = HttpJournalApi::new("not a url", Duration::from_secs(5)).unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }

    #[test]
    fn test_base_url_normalized() {
        let api = HttpJournalApi::new("http://localhost:5000/", Duration::from_secs(5)).unwrap();
        assert_eq!(api.base_url(), "http://localhost:5000");
    }
}
