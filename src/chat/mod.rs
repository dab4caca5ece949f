//! Chat Session Client
//!
//! Conversation state, transcript, and the send protocol against
//! [`JournalApi`](crate::api::JournalApi).

pub mod error;
pub mod session;
pub mod transcript;

pub use error::{ChatError, GENERIC_FAILURE, SUBMIT_FAILURE};
pub use session::{ChatSession, PendingSend, Turn};
pub use transcript::{Transcript, TranscriptEntry};
