//! Mood Chart
//!
//! Turns mood history into a single scatter figure in Plotly's JSON shape:
//! dates along x, emotions along y, one marker per entry.

use serde::Serialize;

use crate::api::MoodEntry;
use crate::emotion::{self, EmotionMatch, UNKNOWN_EMOTION};

/// DOM id of the chart container on the journal page
pub const CHART_CONTAINER_ID: &str = "moodChart";

pub const CHART_TITLE: &str = "Your Mood History";
pub const CHART_HEIGHT: u32 = 400;
pub const MARKER_SIZE: u32 = 20;
pub const X_TICK_ANGLE: i32 = -45;
pub const MARGIN_TOP: u32 = 40;
pub const MARGIN_BOTTOM: u32 = 100;

/// A complete chart figure: one scatter trace plus layout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodChart {
    pub data: Vec<ScatterTrace>,
    pub layout: ChartLayout,
    #[serde(skip)]
    unknown_keys: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterTrace {
    pub x: Vec<String>,
    pub y: Vec<String>,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub mode: &'static str,
    pub marker: Marker,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    /// One color per point, in point order
    pub color: Vec<String>,
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    pub title: String,
    pub xaxis: XAxis,
    pub yaxis: YAxis,
    pub height: u32,
    pub margin: Margin,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XAxis {
    pub title: String,
    pub tickangle: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YAxis {
    pub title: String,
    pub tickmode: &'static str,
    pub tickvals: Vec<String>,
    pub ticktext: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Margin {
    pub t: u32,
    pub b: u32,
}

/// Build the figure for a mood history.
///
/// Point order follows the input. Marker colors are the backend's, not the
/// registry's. The y ticks are always the registry in registry order; keys
/// outside the registry get extra "Unknown" ticks after them.
pub fn render(entries: &[MoodEntry]) -> MoodChart {
    let dates: Vec<String> = entries.iter().map(|e| e.date.clone()).collect();
    // Known keys are plotted in their registry form so they land on a labeled tick
    let matches: Vec<EmotionMatch> = entries.iter().map(MoodEntry::emotion).collect();
    let emotions: Vec<String> = matches.iter().map(|m| m.key().to_string()).collect();
    let colors: Vec<String> = entries.iter().map(|e| e.color.clone()).collect();

    let mut tickvals: Vec<String> = Vec::new();
    let mut ticktext: Vec<String> = Vec::new();
    for (key, emotion) in emotion::registry() {
        tickvals.push(key.as_str().to_string());
        ticktext.push(emotion.name.to_string());
    }

    let mut unknown_keys: Vec<String> = Vec::new();
    for m in &matches {
        if let EmotionMatch::Unknown(raw) = m {
            if !unknown_keys.contains(raw) {
                unknown_keys.push(raw.clone());
            }
        }
    }
    for key in &unknown_keys {
        tickvals.push(key.clone());
        ticktext.push(UNKNOWN_EMOTION.name.to_string());
    }

    let trace = ScatterTrace {
        x: dates,
        y: emotions,
        kind: "scatter",
        mode: "markers",
        marker: Marker {
            color: colors,
            size: MARKER_SIZE,
        },
    };

    let layout = ChartLayout {
        title: CHART_TITLE.to_string(),
        xaxis: XAxis {
            title: "Date".to_string(),
            tickangle: X_TICK_ANGLE,
        },
        yaxis: YAxis {
            title: "Emotion".to_string(),
            tickmode: "array",
            tickvals,
            ticktext,
        },
        height: CHART_HEIGHT,
        margin: Margin {
            t: MARGIN_TOP,
            b: MARGIN_BOTTOM,
        },
    };

    MoodChart {
        data: vec![trace],
        layout,
        unknown_keys,
    }
}

impl MoodChart {
    pub fn trace(&self) -> &ScatterTrace {
        &self.data[0]
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    pub fn point_count(&self) -> usize {
        self.trace().x.len()
    }

    /// Emotion keys in the data that the registry does not know
    pub fn unknown_keys(&self) -> &[String] {
        &self.unknown_keys
    }

    /// Plotly figure JSON (`{"data": [...], "layout": {...}}`)
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Plain-text rendering: one row per y tick, one column per distinct date
    pub fn to_table(&self) -> String {
        let trace = self.trace();
        let yaxis = &self.layout.yaxis;

        let mut dates: Vec<&str> = Vec::new();
        for date in &trace.x {
            if !dates.contains(&date.as_str()) {
                dates.push(date);
            }
        }

        let label_width = yaxis
            .ticktext
            .iter()
            .map(|t| t.chars().count())
            .max()
            .unwrap_or(0)
            .max(self.layout.yaxis.title.len());
        let col_width = dates.iter().map(|d| d.chars().count()).max().unwrap_or(0).max(3);

        let mut out = String::new();
        out.push_str(&self.layout.title);
        out.push('\n');
        out.push('\n');

        for (key, label) in yaxis.tickvals.iter().zip(&yaxis.ticktext) {
            out.push_str(&format!("{:<width$} |", label, width = label_width));
            for date in &dates {
                let hit = trace
                    .x
                    .iter()
                    .zip(&trace.y)
                    .any(|(x, y)| x == date && y == key);
                let mark = if hit { "●" } else { "·" };
                out.push_str(&format!(" {:^width$}", mark, width = col_width));
            }
            out.push('\n');
        }

        out.push_str(&format!("{:<width$} +", "", width = label_width));
        out.push_str(&"-".repeat((col_width + 1) * dates.len()));
        out.push('\n');
        out.push_str(&format!("{:<width$}  ", self.layout.yaxis.title, width = label_width));
        for date in &dates {
            out.push_str(&format!("{:^width$} ", date, width = col_width));
        }
        out.push('\n');

        out
    }
}
