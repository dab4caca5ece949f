//! Loading Component

use leptos::*;

/// Panel loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12 text-gray-500">
            <div class="loading-spinner w-8 h-8 mb-2" />
            <span class="text-sm">"Loading..."</span>
        </div>
    }
}
