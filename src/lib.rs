//! # Mood Journal
//!
//! Client for a mood-journaling chat service: a chart of past moods and a
//! conversation with an assistant that classifies each entry's emotion.
//!
//! ## Modules
//!
//! - [`emotion`]: the fixed emotion registry (name, color, icon)
//! - [`mood`]: mood history → scatter chart, loaded once with a visible error state
//! - [`chat`]: conversation session, transcript, send protocol
//! - [`markup`]: escaped HTML rendering of transcripts
//! - [`api`]: backend transport trait, wire types, and the reqwest client
//! - [`config`]: TOML + environment configuration (native only)
//!
//! With `default-features = false` the crate builds for `wasm32` and carries
//! only the transport-agnostic parts; the browser front end supplies its own
//! [`api::JournalApi`] implementation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mood_journal::api::HttpJournalApi;
//! use mood_journal::chat::ChatSession;
//! use mood_journal::mood::{ChartState, MoodChartLoader};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = HttpJournalApi::new("http://localhost:5000", Duration::from_secs(30))?;
//!
//!     let mut loader = MoodChartLoader::new();
//!     if let ChartState::Ready(chart) = loader.load(&api).await {
//!         println!("{}", chart.to_table());
//!     }
//!
//!     let mut session = ChatSession::new();
//!     if let Some(Ok(turn)) = session.send(&api, "Slept well and went for a run").await {
//!         println!("{} {}", turn.emotion.emotion().icon, turn.response);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod chat;
#[cfg(feature = "native")]
pub mod config;
pub mod emotion;
pub mod markup;
pub mod mood;

// Re-export top-level types for convenience
pub use api::{ApiError, ConversationId, JournalApi, MoodEntry, SubmitOutcome, SubmitRequest};

#[cfg(feature = "native")]
pub use api::HttpJournalApi;

pub use chat::{ChatError, ChatSession, Transcript, TranscriptEntry, Turn};

pub use emotion::{Emotion, EmotionKey, EmotionMatch, UNKNOWN_EMOTION};

pub use mood::{ChartState, MoodChart, MoodChartLoader};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoggingConfig};
