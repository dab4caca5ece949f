//! Transcript
//!
//! Append-only history of the conversation as shown to the user.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::emotion::EmotionMatch;

#[derive(Debug, Clone, PartialEq)]
pub enum TranscriptEntry {
    User {
        text: String,
        at: DateTime<Utc>,
    },
    Assistant {
        emotion: EmotionMatch,
        text: String,
        at: DateTime<Utc>,
    },
}

impl TranscriptEntry {
    pub fn text(&self) -> &str {
        match self {
            TranscriptEntry::User { text, .. } | TranscriptEntry::Assistant { text, .. } => text,
        }
    }

    pub fn at(&self) -> DateTime<Utc> {
        match self {
            TranscriptEntry::User { at, .. } | TranscriptEntry::Assistant { at, .. } => *at,
        }
    }

    pub fn is_user(&self) -> bool {
        matches!(self, TranscriptEntry::User { .. })
    }
}

impl fmt::Display for TranscriptEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscriptEntry::User { text, at } => {
                write!(f, "[{}] you: {}", at.format("%H:%M"), text)
            }
            TranscriptEntry::Assistant { emotion, text, at } => {
                let e = emotion.emotion();
                write!(f, "[{}] {} {}: {}", at.format("%H:%M"), e.icon, e.name, text)
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, entry: TranscriptEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &TranscriptEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&TranscriptEntry> {
        self.entries.last()
    }
}
