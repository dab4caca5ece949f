//! Data Transfer Objects
//!
//! Wire types for the journal backend endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ApiError;
use crate::emotion::{self, EmotionMatch};

// ============================================
// MOOD HISTORY DTOs
// ============================================

/// One classified journal entry from `GET /mood_history`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Day of the entry, `YYYY-MM-DD`
    pub date: String,
    /// Emotion key as sent; may fall outside the registry
    pub emotion: String,
    /// Marker color chosen by the backend
    pub color: String,
}

impl MoodEntry {
    pub fn new(date: impl Into<String>, emotion: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            emotion: emotion.into(),
            color: color.into(),
        }
    }

    /// Resolve the emotion through the registry
    pub fn emotion(&self) -> EmotionMatch {
        emotion::lookup(&self.emotion)
    }
}

// ============================================
// SUBMIT DTOs
// ============================================

/// Server-issued conversation token.
///
/// The backend hands out integer row ids, but the client treats the value as
/// opaque and echoes it back in whatever JSON form it arrived.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConversationId {
    Number(i64),
    Text(String),
}

impl ConversationId {
    /// Parse user input, preferring the numeric form the backend issues
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        raw.parse::<i64>()
            .map(ConversationId::Number)
            .unwrap_or_else(|_| ConversationId::Text(raw.to_string()))
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversationId::Number(n) => write!(f, "{}", n),
            ConversationId::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ConversationId {
    fn from(s: &str) -> Self {
        ConversationId::Text(s.to_string())
    }
}

impl From<i64> for ConversationId {
    fn from(n: i64) -> Self {
        ConversationId::Number(n)
    }
}

/// Body of `POST /submit`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitRequest {
    /// Journal text, already trimmed
    pub text: String,
    /// `null` on the first message of a session
    pub conversation_id: Option<ConversationId>,
}

/// Raw `POST /submit` body, before deciding whether it is a reply or a refusal
#[derive(Debug, Default, Deserialize)]
pub struct SubmitBody {
    #[serde(default)]
    pub conversation_id: Option<ConversationId>,
    #[serde(default)]
    pub emotion: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Classified assistant reply
#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub conversation_id: ConversationId,
    pub emotion: String,
    pub color: Option<String>,
    pub response: String,
}

/// What a 2xx `/submit` body meant
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Reply(ChatReply),
    /// The body carried an `error` field despite the success status
    Refused(String),
}

impl SubmitBody {
    /// Interpret a success-status body
    pub fn into_outcome(self) -> Result<SubmitOutcome, ApiError> {
        if let Some(error) = self.error.filter(|e| !e.is_empty()) {
            return Ok(SubmitOutcome::Refused(error));
        }

        let conversation_id = self
            .conversation_id
            .ok_or_else(|| ApiError::Decode("reply is missing conversation_id".to_string()))?;
        let emotion = self
            .emotion
            .ok_or_else(|| ApiError::Decode("reply is missing emotion".to_string()))?;
        let response = self
            .response
            .ok_or_else(|| ApiError::Decode("reply is missing response".to_string()))?;

        Ok(SubmitOutcome::Reply(ChatReply {
            conversation_id,
            emotion,
            color: self.color,
            response,
        }))
    }
}

/// Error body the backend sends with non-2xx statuses
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Best-effort parse; a body that is not JSON, or an empty `error`,
    /// yields no message
    pub fn from_text(text: &str) -> Self {
        let body: ErrorBody = serde_json::from_str(text).unwrap_or_default();
        Self {
            error: body.error.filter(|e| !e.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversation_id_accepts_number_and_string() {
        let n: ConversationId = serde_json::from_str("42").unwrap();
        assert_eq!(n, ConversationId::Number(42));
        let s: ConversationId = serde_json::from_str("\"c1\"").unwrap();
        assert_eq!(s, ConversationId::Text("c1".to_string()));
        assert_eq!(ConversationId::parse(" 7 "), ConversationId::Number(7));
        assert_eq!(ConversationId::parse("abc"), ConversationId::Text("abc".to_string()));
    }

    #[test]
    fn test_first_request_sends_null_conversation() {
        let req = SubmitRequest {
            text: "hello".to_string(),
            conversation_id: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({"text": "hello", "conversation_id": null}));

        let req = SubmitRequest {
            text: "again".to_string(),
            conversation_id: Some(ConversationId::Number(3)),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["conversation_id"], 3);
    }

    #[test]
    fn test_embedded_error_wins() {
        let body: SubmitBody = serde_json::from_str(
            r#"{"error": "quota exceeded", "conversation_id": 1, "emotion": "sad", "response": "x"}"#,
        )
        .unwrap();
        assert_eq!(
            body.into_outcome().unwrap(),
            SubmitOutcome::Refused("quota exceeded".to_string())
        );
    }

    #[test]
    fn test_reply_requires_fields() {
        let body: SubmitBody = serde_json::from_str(r#"{"conversation_id": 1, "emotion": "sad"}"#).unwrap();
        assert!(matches!(body.into_outcome(), Err(ApiError::Decode(_))));

        let body: SubmitBody = serde_json::from_str(
            r##"{"conversation_id": 1, "emotion": "sad", "color": "#ADD8E6", "response": "I'm here."}"##,
        )
        .unwrap();
        match body.into_outcome().unwrap() {
            SubmitOutcome::Reply(reply) => {
                assert_eq!(reply.conversation_id, ConversationId::Number(1));
                assert_eq!(reply.color.as_deref(), Some("#ADD8E6"));
                assert_eq!(reply.response, "I'm here.");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_error_body_from_text() {
        assert_eq!(ErrorBody::from_text(r#"{"error": "too long"}"#).error.as_deref(), Some("too long"));
        assert_eq!(ErrorBody::from_text("<html>502</html>").error, None);
        assert_eq!(ErrorBody::from_text(r#"{"error": ""}"#).error, None);
    }

    #[test]
    fn test_empty_error_field_is_absent() {
        let body: SubmitBody = serde_json::from_str(
            r#"{"error": "", "conversation_id": 4, "emotion": "happy", "response": "ok"}"#,
        )
        .unwrap();
        match body.into_outcome().unwrap() {
            SubmitOutcome::Reply(reply) => {
                assert_eq!(reply.conversation_id, ConversationId::Number(4));
                assert_eq!(reply.response, "ok");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
}
