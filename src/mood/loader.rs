//! Mood Chart Loader
//!
//! Fetches the mood history once and turns the result into a displayable
//! state, including a visible failure state.

use crate::api::{ApiError, JournalApi, MoodEntry};

use super::chart::{self, MoodChart};

/// What the chart area should show
#[derive(Debug, Clone, PartialEq)]
pub enum ChartState {
    Loading,
    /// History loaded but has no entries
    Empty,
    Ready(MoodChart),
    /// Load failed; the message is meant for the user
    Failed(String),
}

impl ChartState {
    pub fn from_result(result: Result<Vec<MoodEntry>, ApiError>) -> Self {
        match result {
            Ok(entries) if entries.is_empty() => ChartState::Empty,
            Ok(entries) => ChartState::Ready(chart::render(&entries)),
            Err(e) => {
                tracing::error!(error = %e, "Failed to load mood history");
                ChartState::Failed(format!("Could not load your mood history. {}", e))
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ChartState::Loading)
    }
}

/// Loads the chart at most once
#[derive(Debug)]
pub struct MoodChartLoader {
    state: ChartState,
    loaded: bool,
}

impl Default for MoodChartLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl MoodChartLoader {
    pub fn new() -> Self {
        Self {
            state: ChartState::Loading,
            loaded: false,
        }
    }

    pub fn state(&self) -> &ChartState {
        &self.state
    }

    /// Fetch and render. Later calls return the first result without
    /// touching the network.
    pub async fn load<A: JournalApi + ?Sized>(&mut self, api: &A) -> &ChartState {
        if self.loaded {
            return &self.state;
        }
        self.loaded = true;

        self.state = ChartState::from_result(api.mood_history().await);
        if let ChartState::Ready(chart) = &self.state {
            tracing::info!(
                points = chart.point_count(),
                unknown = chart.unknown_keys().len(),
                "Mood chart ready"
            );
        }
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::ScriptedApi;

    #[tokio::test]
    async fn test_load_renders_history() {
        let api = ScriptedApi::with_history(Ok(vec![
            MoodEntry::new("2024-03-01", "happy", "#FFD700"),
            MoodEntry::new("2024-03-02", "angry", "#FF4500"),
        ]));
        let mut loader = MoodChartLoader::new();
        assert!(loader.state().is_loading());

        match loader.load(&api).await {
            ChartState::Ready(chart) => assert_eq!(chart.point_count(), 2),
            other => panic!("unexpected state: {:?}", other),
        }
        assert_eq!(api.history_calls.get(), 1);
    }

    #[tokio::test]
    async fn test_load_failure_is_visible() {
        let api = ScriptedApi::with_history(Err(ApiError::Network("connection refused".to_string())));
        let mut loader = MoodChartLoader::new();

        match loader.load(&api).await {
            ChartState::Failed(message) => {
                assert!(message.contains("Could not load your mood history"));
                assert!(message.contains("connection refused"));
            }
            other => panic!("unexpected state: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_runs_once() {
        let api = ScriptedApi::with_history(Ok(vec![MoodEntry::new("2024-03-01", "sad", "#ADD8E6")]));
        let mut loader = MoodChartLoader::new();

        loader.load(&api).await;
        loader.load(&api).await;
        assert_eq!(api.history_calls.get(), 1);
    }

    #[tokio::test]
    async fn test_empty_history_state() {
        let api = ScriptedApi::with_history(Ok(Vec::new()));
        let mut loader = MoodChartLoader::new();
        assert_eq!(loader.load(&api).await, &ChartState::Empty);
    }
}
