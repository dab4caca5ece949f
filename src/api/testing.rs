//! Scripted in-memory backend for unit tests.

use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use super::dto::{ChatReply, ConversationId, MoodEntry, SubmitOutcome, SubmitRequest};
use super::error::{ApiError, ApiResult};
use super::JournalApi;

/// Replays queued responses and records every request it sees
#[derive(Default)]
pub(crate) struct ScriptedApi {
    history: RefCell<Option<ApiResult<Vec<MoodEntry>>>>,
    replies: RefCell<VecDeque<ApiResult<SubmitOutcome>>>,
    pub(crate) history_calls: Cell<usize>,
    pub(crate) requests: RefCell<Vec<SubmitRequest>>,
}

impl ScriptedApi {
    pub(crate) fn with_history(history: ApiResult<Vec<MoodEntry>>) -> Self {
        let api = Self::default();
        *api.history.borrow_mut() = Some(history);
        api
    }

    pub(crate) fn push_reply(&self, reply: ApiResult<SubmitOutcome>) {
        self.replies.borrow_mut().push_back(reply);
    }

    pub(crate) fn submit_calls(&self) -> usize {
        self.requests.borrow().len()
    }
}

pub(crate) fn reply(conversation_id: impl Into<ConversationId>, emotion: &str, response: &str) -> ApiResult<SubmitOutcome> {
    Ok(SubmitOutcome::Reply(ChatReply {
        conversation_id: conversation_id.into(),
        emotion: emotion.to_string(),
        color: None,
        response: response.to_string(),
    }))
}

#[async_trait(?Send)]
impl JournalApi for ScriptedApi {
    async fn mood_history(&self) -> ApiResult<Vec<MoodEntry>> {
        self.history_calls.set(self.history_calls.get() + 1);
        self.history
            .borrow()
            .clone()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn submit(&self, request: &SubmitRequest) -> ApiResult<SubmitOutcome> {
        self.requests.borrow_mut().push(request.clone());
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted reply".to_string())))
    }
}
