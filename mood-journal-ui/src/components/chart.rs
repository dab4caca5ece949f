//! Mood Chart Component
//!
//! Scatter chart of mood history, drawn by Plotly.js from the host page.

use leptos::*;
use wasm_bindgen::prelude::*;

use mood_journal::mood::{ChartState, MoodChart, MoodChartLoader, CHART_CONTAINER_ID};

use crate::api::GlooJournalApi;
use crate::components::Loading;
use crate::state::GlobalState;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = Plotly, js_name = newPlot)]
    fn plotly_new_plot(container: &str, data: JsValue, layout: JsValue) -> Result<JsValue, JsValue>;
}

/// Mood history panel. Loads the history once when mounted.
#[component]
pub fn MoodChartPanel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    spawn_local(async move {
        let api = GlooJournalApi::from_storage();
        let mut loader = MoodChartLoader::new();
        let loaded = loader.load(&api).await.clone();

        if let ChartState::Failed(message) = &loaded {
            web_sys::console::error_1(&message.into());
        }
        state.chart.set(loaded);
    });

    // Draw once the container is in the DOM and the figure is ready
    let container_ref = create_node_ref::<html::Div>();
    create_effect(move |_| {
        if container_ref.get().is_none() {
            return;
        }
        let drawn = state.chart.with(|chart| match chart {
            ChartState::Ready(chart) => draw(chart),
            _ => Ok(()),
        });
        if let Err(e) = drawn {
            web_sys::console::error_1(&e);
            state.chart.set(ChartState::Failed("The chart could not be drawn.".to_string()));
        }
    });

    let is_ready = move || state.chart.with(|chart| matches!(chart, ChartState::Ready(_)));

    view! {
        <section class="bg-white rounded-xl shadow p-6">
            {move || state.chart.with(|chart| match chart {
                ChartState::Loading => view! { <Loading /> }.into_view(),
                ChartState::Empty => view! {
                    <p class="text-gray-500 text-center py-12">"No mood entries yet. Write your first journal entry below."</p>
                }.into_view(),
                ChartState::Failed(message) => view! {
                    <div class="bg-red-50 border border-red-200 text-red-700 rounded-lg px-4 py-3" role="alert">
                        <p class="font-semibold">"Mood chart unavailable"</p>
                        <p class="text-sm">{message.clone()}</p>
                    </div>
                }.into_view(),
                ChartState::Ready(_) => view! {}.into_view(),
            })}

            <div
                id=CHART_CONTAINER_ID
                node_ref=container_ref
                class:hidden=move || !is_ready()
            />
        </section>
    }
}

/// Hand the figure to Plotly
fn draw(chart: &MoodChart) -> Result<(), JsValue> {
    let data = to_js(&chart.data)?;
    let layout = to_js(&chart.layout)?;
    plotly_new_plot(CHART_CONTAINER_ID, data, layout).map(|_| ())
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
    js_sys::JSON::parse(&json)
}
