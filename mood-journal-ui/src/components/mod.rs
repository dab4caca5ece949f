//! UI Components
//!
//! Leptos components for the journal page.

pub mod chart;
pub mod chat;
pub mod loading;

pub use chart::MoodChartPanel;
pub use chat::ChatPanel;
pub use loading::Loading;
