//! App Root Component
//!
//! Single page: mood chart above the journaling chat.

use leptos::*;

use crate::components::{ChatPanel, MoodChartPanel};
use crate::state::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    view! {
        <div class="min-h-screen bg-gray-50 text-gray-900">
            <main class="container mx-auto max-w-3xl px-4 py-8 space-y-8">
                <header>
                    <h1 class="text-3xl font-bold">"Mood Journal"</h1>
                    <p class="text-gray-500">"Write about your day. We'll keep track of how you feel."</p>
                </header>

                <MoodChartPanel />
                <ChatPanel />
            </main>
        </div>
    }
}
