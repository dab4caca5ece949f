//! Chat Session
//!
//! One conversation with the journal assistant. The session owns the
//! conversation id and the transcript; both change only when a reply is
//! accepted.
//!
//! Sending is split in two so a UI can drop its borrow of the session while
//! the request is in flight:
//!
//! ```rust,ignore
//! if let Some(pending) = session.begin(&text) {
//!     let result = api.submit(pending.request()).await;
//!     match session.finish(pending, result) { ... }
//! }
//! ```
//!
//! Each `begin` takes a sequence number. A reply is discarded as stale when a
//! reply to a later `begin` has already been applied.

use chrono::Utc;

use crate::api::{ApiError, ChatReply, ConversationId, JournalApi, SubmitOutcome, SubmitRequest};
use crate::emotion::{self, EmotionMatch};

use super::error::ChatError;
use super::transcript::{Transcript, TranscriptEntry};

/// A request that has been issued but not yet answered
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSend {
    seq: u64,
    request: SubmitRequest,
}

impl PendingSend {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn request(&self) -> &SubmitRequest {
        &self.request
    }
}

/// One accepted exchange
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    pub conversation_id: ConversationId,
    pub emotion: EmotionMatch,
    pub user_text: String,
    pub response: String,
}

#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    conversation_id: Option<ConversationId>,
    transcript: Transcript,
    input: String,
    next_seq: u64,
    applied_seq: Option<u64>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue an existing conversation
    pub fn resume(conversation_id: ConversationId) -> Self {
        Self {
            conversation_id: Some(conversation_id),
            ..Self::default()
        }
    }

    pub fn conversation_id(&self) -> Option<&ConversationId> {
        self.conversation_id.as_ref()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Current contents of the input box
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Start a send. Returns `None` for blank text: nothing is sent and
    /// nothing changes.
    pub fn begin(&mut self, text: &str) -> Option<PendingSend> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        self.next_seq += 1;
        let pending = PendingSend {
            seq: self.next_seq,
            request: SubmitRequest {
                text: text.to_string(),
                conversation_id: self.conversation_id.clone(),
            },
        };
        tracing::debug!(seq = pending.seq, conversation = ?pending.request.conversation_id, "Send started");
        Some(pending)
    }

    /// Apply the backend's answer to a pending send
    pub fn finish(
        &mut self,
        pending: PendingSend,
        result: Result<SubmitOutcome, ApiError>,
    ) -> Result<Turn, ChatError> {
        let reply = match result {
            Ok(SubmitOutcome::Reply(reply)) => reply,
            Ok(SubmitOutcome::Refused(message)) => {
                tracing::warn!(seq = pending.seq, error = %message, "Backend refused message");
                return Err(ChatError::Application(message));
            }
            Err(e) => {
                tracing::error!(seq = pending.seq, error = %e, "Failed to send message");
                return Err(e.into());
            }
        };

        if self.applied_seq.is_some_and(|applied| pending.seq < applied) {
            tracing::debug!(seq = pending.seq, "Dropping stale reply");
            return Err(ChatError::Stale { seq: pending.seq });
        }

        Ok(self.accept(pending, reply))
    }

    fn accept(&mut self, pending: PendingSend, reply: ChatReply) -> Turn {
        let ChatReply {
            conversation_id,
            emotion: raw_emotion,
            response,
            ..
        } = reply;
        let emotion = emotion::lookup(&raw_emotion);
        let now = Utc::now();

        self.applied_seq = Some(pending.seq);
        self.conversation_id = Some(conversation_id.clone());

        let user_text = pending.request.text;
        self.transcript.push(TranscriptEntry::User {
            text: user_text.clone(),
            at: now,
        });
        self.transcript.push(TranscriptEntry::Assistant {
            emotion: emotion.clone(),
            text: response.clone(),
            at: now,
        });
        self.input.clear();

        tracing::info!(
            seq = pending.seq,
            conversation = %conversation_id,
            emotion = %emotion.key(),
            "Reply received"
        );

        Turn {
            conversation_id,
            emotion,
            user_text,
            response,
        }
    }

    /// Send one message and wait for the reply. `None` when the text is blank.
    pub async fn send<A: JournalApi + ?Sized>(
        &mut self,
        api: &A,
        text: &str,
    ) -> Option<Result<Turn, ChatError>> {
        let pending = self.begin(text)?;
        let result = api.submit(pending.request()).await;
        Some(self.finish(pending, result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{reply, ScriptedApi};
    use crate::emotion::EmotionKey;

    #[tokio::test]
    async fn test_blank_text_is_noop() {
        let api = ScriptedApi::default();
        let mut session = ChatSession::new();
        session.set_input("   ");

        assert!(session.send(&api, "").await.is_none());
        assert!(session.send(&api, " \t\n ").await.is_none());
        assert_eq!(api.submit_calls(), 0);
        assert!(session.transcript().is_empty());
        assert_eq!(session.input(), "   ");
    }

    #[tokio::test]
    async fn test_successful_send() {
        let api = ScriptedApi::default();
        api.push_reply(reply("c1", "happy", "ok"));
        let mut session = ChatSession::new();
        session.set_input("  had a lovely walk  ");

        let turn = session.send(&api, "  had a lovely walk  ").await.unwrap().unwrap();

        assert_eq!(session.conversation_id(), Some(&ConversationId::from("c1")));
        assert_eq!(turn.emotion, EmotionMatch::Known(EmotionKey::Happy));
        assert_eq!(session.input(), "");

        let entries = session.transcript().entries();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].is_user());
        assert_eq!(entries[0].text(), "had a lovely walk");
        match &entries[1] {
            TranscriptEntry::Assistant { emotion, text, .. } => {
                assert_eq!(emotion.emotion().icon, "😊");
                assert_eq!(emotion.emotion().name, "Happy");
                assert_eq!(text, "ok");
            }
            other => panic!("expected assistant entry, got {:?}", other),
        }

        let sent = api.requests.borrow();
        assert_eq!(sent[0].text, "had a lovely walk");
        assert_eq!(sent[0].conversation_id, None);
    }

    #[tokio::test]
    async fn test_http_error_leaves_state() {
        let api = ScriptedApi::default();
        api.push_reply(reply(1i64, "sad", "first"));
        api.push_reply(Err(ApiError::Status {
            status: 400,
            message: Some("too long".to_string()),
        }));
        let mut session = ChatSession::new();
        session.send(&api, "first").await.unwrap().unwrap();

        session.set_input("x".repeat(10));
        let err = session.send(&api, &"x".repeat(10)).await.unwrap().unwrap_err();

        assert_eq!(err.alert_message().as_deref(), Some("too long"));
        assert_eq!(session.conversation_id(), Some(&ConversationId::Number(1)));
        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.input(), "xxxxxxxxxx");
    }

    #[tokio::test]
    async fn test_embedded_error_leaves_state() {
        let api = ScriptedApi::default();
        api.push_reply(Ok(SubmitOutcome::Refused("Invalid conversation ID".to_string())));
        let mut session = ChatSession::new();

        let err = session.send(&api, "hello").await.unwrap().unwrap_err();
        assert_eq!(err, ChatError::Application("Invalid conversation ID".to_string()));
        assert_eq!(session.conversation_id(), None);
        assert!(session.transcript().is_empty());
    }

    #[tokio::test]
    async fn test_network_failure_is_generic() {
        let api = ScriptedApi::default();
        api.push_reply(Err(ApiError::Network("connection reset".to_string())));
        let mut session = ChatSession::new();

        let err = session.send(&api, "hello").await.unwrap().unwrap_err();
        assert_eq!(
            err.alert_message().as_deref(),
            Some("Failed to send message. Please try again.")
        );
        assert!(session.transcript().is_empty());
    }

    #[tokio::test]
    async fn test_conversation_id_follows_server() {
        let api = ScriptedApi::default();
        api.push_reply(reply(7i64, "sad", "sorry to hear"));
        api.push_reply(reply(9i64, "excited", "great!"));
        let mut session = ChatSession::new();

        session.send(&api, "rough day").await.unwrap().unwrap();
        assert_eq!(session.conversation_id(), Some(&ConversationId::Number(7)));

        session.send(&api, "but the evening was fun").await.unwrap().unwrap();
        assert_eq!(session.conversation_id(), Some(&ConversationId::Number(9)));

        let sent = api.requests.borrow();
        assert_eq!(sent[0].conversation_id, None);
        assert_eq!(sent[1].conversation_id, Some(ConversationId::Number(7)));
        assert_eq!(session.transcript().len(), 4);
    }

    #[tokio::test]
    async fn test_unknown_emotion_falls_back() {
        let api = ScriptedApi::default();
        api.push_reply(reply(1i64, "unknown", "I'm here for you."));
        let mut session = ChatSession::new();

        let turn = session.send(&api, "hmm").await.unwrap().unwrap();
        assert_eq!(turn.emotion, EmotionMatch::Unknown("unknown".to_string()));

        match session.transcript().last() {
            Some(TranscriptEntry::Assistant { emotion, text, .. }) => {
                assert_eq!(emotion.emotion().name, "Unknown");
                assert_eq!(emotion.emotion().icon, "❔");
                assert_eq!(text, "I'm here for you.");
            }
            other => panic!("expected assistant entry, got {:?}", other),
        }
    }

    #[test]
    fn test_stale_reply_discarded() {
        let mut session = ChatSession::new();
        let first = session.begin("first").unwrap();
        let second = session.begin("second").unwrap();
        assert!(first.seq() < second.seq());

        session.finish(second, reply(2i64, "happy", "newer")).unwrap();
        let err = session.finish(first, reply(1i64, "sad", "older")).unwrap_err();

        assert_eq!(err, ChatError::Stale { seq: 1 });
        assert_eq!(err.alert_message(), None);
        assert_eq!(session.conversation_id(), Some(&ConversationId::Number(2)));
        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.transcript().entries()[0].text(), "second");
    }

    #[test]
    fn test_in_order_replies_both_apply() {
        let mut session = ChatSession::new();
        let first = session.begin("first").unwrap();
        let second = session.begin("second").unwrap();

        session.finish(first, reply(1i64, "happy", "a")).unwrap();
        session.finish(second, reply(1i64, "sad", "b")).unwrap();
        assert_eq!(session.transcript().len(), 4);
    }

    #[test]
    fn test_resume_sends_existing_id() {
        let mut session = ChatSession::resume(ConversationId::Number(12));
        let pending = session.begin("back again").unwrap();
        assert_eq!(pending.request().conversation_id, Some(ConversationId::Number(12)));
    }
}
