//! Journal Backend API
//!
//! Transport seam between the chart/chat logic and the backend.
//!
//! # Endpoints
//!
//! - `GET /mood_history` - classified entries for the chart
//! - `POST /submit` - journal text in, classified reply out
//!
//! The native build talks HTTP through [`HttpJournalApi`] (reqwest); the
//! browser crate provides its own implementation on top of `gloo-net`.

pub mod dto;
pub mod error;
#[cfg(feature = "native")]
mod http;
#[cfg(test)]
pub(crate) mod testing;

pub use dto::{
    ChatReply, ConversationId, ErrorBody, MoodEntry, SubmitBody, SubmitOutcome, SubmitRequest,
};
pub use error::{ApiError, ApiResult};
#[cfg(feature = "native")]
pub use http::HttpJournalApi;

use async_trait::async_trait;

/// Path of the mood history endpoint, relative to the API base
pub const MOOD_HISTORY_PATH: &str = "mood_history";
/// Path of the chat submission endpoint, relative to the API base
pub const SUBMIT_PATH: &str = "submit";

/// Backend operations the client needs.
///
/// Futures are not required to be `Send`: the browser runs everything on one
/// thread and its fetch futures hold JS handles.
#[async_trait(?Send)]
pub trait JournalApi {
    /// Fetch the mood history shown in the chart
    async fn mood_history(&self) -> ApiResult<Vec<MoodEntry>>;

    /// Submit one journal message
    async fn submit(&self, request: &SubmitRequest) -> ApiResult<SubmitOutcome>;
}

/// Join an API base and an endpoint path. An empty base means same origin.
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path)
}
