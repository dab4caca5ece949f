//! State Management
//!
//! Page-wide signals for the chart and the chat session.

pub mod global;

pub use global::{provide_global_state, GlobalState};
