//! Chat Component
//!
//! Transcript plus the journal input. All message text is inserted as text
//! nodes, never as markup.

use leptos::*;

use mood_journal::api::JournalApi;
use mood_journal::chat::TranscriptEntry;

use crate::api::GlooJournalApi;
use crate::state::GlobalState;

/// DOM id of the transcript container
pub const CHAT_CONTAINER_ID: &str = "chatContainer";
/// DOM id of the journal input
pub const CHAT_INPUT_ID: &str = "chatInput";

/// Journaling chat panel
#[component]
pub fn ChatPanel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let transcript_ref = create_node_ref::<html::Div>();

    let send = move || {
        if state.sending.get_untracked() {
            return;
        }

        let pending = state
            .session
            .try_update(|session| {
                let text = session.input().to_string();
                session.begin(&text)
            })
            .flatten();
        let Some(pending) = pending else {
            return;
        };

        state.sending.set(true);
        spawn_local(async move {
            let api = GlooJournalApi::from_storage();
            let result = api.submit(pending.request()).await;
            let outcome = state.session.try_update(|session| session.finish(pending, result));
            state.sending.set(false);

            match outcome {
                Some(Ok(_)) => scroll_to_bottom(transcript_ref),
                Some(Err(e)) => state.report_chat_error(&e),
                None => {}
            }
        });
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send();
        }
    };

    view! {
        <section class="bg-white rounded-xl shadow p-6 flex flex-col h-[32rem]">
            <div
                id=CHAT_CONTAINER_ID
                node_ref=transcript_ref
                class="flex-1 overflow-y-auto mb-4"
            >
                {move || state.session.with(|session| {
                    session
                        .transcript()
                        .iter()
                        .map(|entry| view! { <Message entry=entry.clone() /> })
                        .collect_view()
                })}
            </div>

            <div class="flex gap-2">
                <input
                    id=CHAT_INPUT_ID
                    type="text"
                    placeholder="How are you feeling today?"
                    prop:value=move || state.session.with(|session| session.input().to_string())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.session.update(|session| session.set_input(value));
                    }
                    on:keydown=on_keydown
                    disabled=move || state.sending.get()
                    class="flex-1 border border-gray-300 rounded-lg px-4 py-2
                           focus:outline-none focus:border-blue-400 disabled:bg-gray-100"
                />
                <button
                    on:click=move |_| send()
                    disabled=move || state.sending.get()
                    class="px-4 py-2 bg-blue-500 hover:bg-blue-600 disabled:bg-gray-400
                           text-white rounded-lg font-medium transition-colors"
                >
                    {move || if state.sending.get() { "Sending..." } else { "Send" }}
                </button>
            </div>
        </section>
    }
}

/// One transcript bubble
#[component]
fn Message(entry: TranscriptEntry) -> impl IntoView {
    match entry {
        TranscriptEntry::User { text, .. } => view! {
            <div class="user-message flex justify-end mb-4">
                <div class="bg-blue-100 px-4 py-2 rounded-l-lg rounded-r-lg max-w-[80%]">
                    {text}
                </div>
            </div>
        }
        .into_view(),
        TranscriptEntry::Assistant { emotion, text, at } => {
            let e = emotion.emotion();
            view! {
                <div class="ai-message flex justify-start mb-4">
                    <div class="bg-gray-100 px-4 py-2 rounded-l-lg rounded-r-lg max-w-[80%]">
                        <div class="flex items-center gap-2 mb-2">
                            <span class="text-xl">{e.icon}</span>
                            <span class="font-semibold">{e.name}</span>
                            <span class="text-xs text-gray-400">{at.format("%H:%M").to_string()}</span>
                        </div>
                        {text}
                    </div>
                </div>
            }
            .into_view()
        }
    }
}

fn scroll_to_bottom(container: NodeRef<html::Div>) {
    if let Some(el) = container.get_untracked() {
        el.set_scroll_top(el.scroll_height());
    }
}
