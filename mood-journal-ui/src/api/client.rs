//! HTTP API Client
//!
//! `gloo-net` implementation of the journal backend transport.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};

use mood_journal::api::{
    endpoint, ApiError, ApiResult, ErrorBody, JournalApi, MoodEntry, SubmitBody, SubmitOutcome,
    SubmitRequest, MOOD_HISTORY_PATH, SUBMIT_PATH,
};

/// Same origin as the page
pub const DEFAULT_API_BASE: &str = "";

const API_URL_KEY: &str = "mood_journal_api_url";

/// Get the API base URL from local storage (`mood_journal_api_url`) or use
/// the page's own origin
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    normalize_base(&url)
}

fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn map_error(e: gloo_net::Error) -> ApiError {
    match e {
        gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
        other => ApiError::Network(other.to_string()),
    }
}

/// Read the backend's `error` field from a failed response
async fn status_error(response: Response) -> ApiError {
    let text = response.text().await.unwrap_or_default();
    ApiError::Status {
        status: response.status(),
        message: ErrorBody::from_text(&text).error,
    }
}

/// Journal backend reached through the browser's fetch
#[derive(Debug, Clone)]
pub struct GlooJournalApi {
    base: String,
}

impl GlooJournalApi {
    pub fn new(base: &str) -> Self {
        Self {
            base: normalize_base(base),
        }
    }

    /// Client for the base URL configured in local storage
    pub fn from_storage() -> Self {
        Self::new(&get_api_base())
    }
}

#[async_trait(?Send)]
impl JournalApi for GlooJournalApi {
    async fn mood_history(&self) -> ApiResult<Vec<MoodEntry>> {
        let response = Request::get(&endpoint(&self.base, MOOD_HISTORY_PATH))
            .send()
            .await
            .map_err(map_error)?;

        if !response.ok() {
            return Err(status_error(response).await);
        }

        response.json().await.map_err(map_error)
    }

    async fn submit(&self, request: &SubmitRequest) -> ApiResult<SubmitOutcome> {
        let response = Request::post(&endpoint(&self.base, SUBMIT_PATH))
            .json(request)
            .map_err(map_error)?
            .send()
            .await
            .map_err(map_error)?;

        if !response.ok() {
            return Err(status_error(response).await);
        }

        let body: SubmitBody = response.json().await.map_err(map_error)?;
        body.into_outcome()
    }
}
