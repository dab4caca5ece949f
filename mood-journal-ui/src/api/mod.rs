//! API Module
//!
//! Browser transport for the journal backend.

pub mod client;

pub use client::GlooJournalApi;
