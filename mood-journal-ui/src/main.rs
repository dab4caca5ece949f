//! Mood Journal Page
//!
//! Browser front end for the mood journal built with Leptos (WASM).
//!
//! # Features
//!
//! - Mood history scatter chart (Plotly.js, loaded by the host page)
//! - Journaling chat with emotion-tagged replies
//!
//! The page talks to the journal backend over HTTP through
//! [`mood_journal::api::JournalApi`].

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
