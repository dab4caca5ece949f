//! Mood History Chart
//!
//! - [`chart`]: history → scatter figure (Plotly JSON shape, text table)
//! - [`loader`]: one-shot fetch with an explicit error state

pub mod chart;
pub mod loader;

pub use chart::{render, MoodChart, CHART_CONTAINER_ID};
pub use loader::{ChartState, MoodChartLoader};
