//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use mood_journal::chat::{ChatError, ChatSession};
use mood_journal::mood::ChartState;

/// Page state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Mood chart panel contents
    pub chart: RwSignal<ChartState>,
    /// The one conversation for this page load
    pub session: RwSignal<ChatSession>,
    /// A send is in flight; the chat input is locked until it settles
    pub sending: RwSignal<bool>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        chart: create_rw_signal(ChartState::Loading),
        session: create_rw_signal(ChatSession::new()),
        sending: create_rw_signal(false),
    };

    provide_context(state);
}

/// Blocking browser alert
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

impl GlobalState {
    /// Report a failed send: console log plus one alert when there is
    /// something to tell the user
    pub fn report_chat_error(&self, error: &ChatError) {
        web_sys::console::error_1(&format!("Chat error: {}", error).into());
        if let Some(message) = error.alert_message() {
            alert(&message);
        }
    }
}
