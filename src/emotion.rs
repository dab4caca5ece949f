//! Emotion Registry
//!
//! The fixed set of emotions the journal backend classifies entries into,
//! with the display name, color and icon used by charts and chat messages.
//! Registry order is significant: chart axes are laid out in this order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display record for one emotion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Emotion {
    pub name: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
}

static HAPPY: Emotion = Emotion { name: "Happy", color: "#FFD700", icon: "😊" };
static SAD: Emotion = Emotion { name: "Sad", color: "#ADD8E6", icon: "😔" };
static ANGRY: Emotion = Emotion { name: "Angry", color: "#FF4500", icon: "😡" };
static ANXIOUS: Emotion = Emotion { name: "Anxious", color: "#FFB6C1", icon: "😢" };
static EXCITED: Emotion = Emotion { name: "Excited", color: "#FFA500", icon: "🤩" };

/// Shown for any key outside the registry. White matches the color the
/// backend stores for text it could not classify.
pub static UNKNOWN_EMOTION: Emotion = Emotion { name: "Unknown", color: "#FFFFFF", icon: "❔" };

/// Key of a registered emotion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionKey {
    Happy,
    Sad,
    Angry,
    Anxious,
    Excited,
}

impl EmotionKey {
    /// All keys in registry order
    pub const ALL: [EmotionKey; 5] = [
        EmotionKey::Happy,
        EmotionKey::Sad,
        EmotionKey::Angry,
        EmotionKey::Anxious,
        EmotionKey::Excited,
    ];

    /// Wire form of the key, as sent by the backend
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionKey::Happy => "happy",
            EmotionKey::Sad => "sad",
            EmotionKey::Angry => "angry",
            EmotionKey::Anxious => "anxious",
            EmotionKey::Excited => "excited",
        }
    }

    pub fn emotion(&self) -> &'static Emotion {
        match self {
            EmotionKey::Happy => &HAPPY,
            EmotionKey::Sad => &SAD,
            EmotionKey::Angry => &ANGRY,
            EmotionKey::Anxious => &ANXIOUS,
            EmotionKey::Excited => &EXCITED,
        }
    }

    /// Parse a wire key, ignoring surrounding whitespace and ASCII case
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for EmotionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a registry lookup. Never fails: keys outside the registry are
/// kept verbatim and displayed with [`UNKNOWN_EMOTION`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EmotionMatch {
    Known(EmotionKey),
    Unknown(String),
}

impl EmotionMatch {
    pub fn emotion(&self) -> &'static Emotion {
        match self {
            EmotionMatch::Known(key) => key.emotion(),
            EmotionMatch::Unknown(_) => &UNKNOWN_EMOTION,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, EmotionMatch::Known(_))
    }

    /// The key as received
    pub fn key(&self) -> &str {
        match self {
            EmotionMatch::Known(key) => key.as_str(),
            EmotionMatch::Unknown(raw) => raw,
        }
    }
}

/// Total lookup by wire key
pub fn lookup(raw: &str) -> EmotionMatch {
    match EmotionKey::parse(raw) {
        Some(key) => EmotionMatch::Known(key),
        None => {
            tracing::warn!(emotion = %raw, "Emotion not in registry, using fallback");
            EmotionMatch::Unknown(raw.to_string())
        }
    }
}

/// Iterate the registry in order
pub fn registry() -> impl Iterator<Item = (EmotionKey, &'static Emotion)> {
    EmotionKey::ALL.into_iter().map(|key| (key, key.emotion()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order() {
        let keys: Vec<&str> = registry().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["happy", "sad", "angry", "anxious", "excited"]);

        let names: Vec<&str> = registry().map(|(_, e)| e.name).collect();
        assert_eq!(names, vec!["Happy", "Sad", "Angry", "Anxious", "Excited"]);
    }

    #[test]
    fn test_registry_values() {
        let happy = EmotionKey::Happy.emotion();
        assert_eq!(happy.icon, "😊");
        assert_eq!(happy.color, "#FFD700");
        assert_eq!(EmotionKey::Anxious.emotion().icon, "😢");
        assert_eq!(EmotionKey::Excited.emotion().color, "#FFA500");
    }

    #[test]
    fn test_parse_tolerates_case_and_whitespace() {
        assert_eq!(EmotionKey::parse("sad"), Some(EmotionKey::Sad));
        assert_eq!(EmotionKey::parse("  Angry\n"), Some(EmotionKey::Angry));
        assert_eq!(EmotionKey::parse("content"), None);
        assert_eq!(EmotionKey::parse(""), None);
    }

    #[test]
    fn test_lookup_unknown_falls_back() {
        let found = lookup("bored");
        assert!(!found.is_known());
        assert_eq!(found.key(), "bored");
        assert_eq!(found.emotion().name, "Unknown");
        assert_eq!(found.emotion().color, "#FFFFFF");
    }

    #[test]
    fn test_lookup_known() {
        let found = lookup("excited");
        assert_eq!(found, EmotionMatch::Known(EmotionKey::Excited));
        assert_eq!(found.emotion().name, "Excited");
    }

    #[test]
    fn test_key_serde_uses_wire_form() {
        let json = serde_json::to_string(&EmotionKey::Anxious).unwrap();
        assert_eq!(json, "\"anxious\"");
        let key: EmotionKey = serde_json::from_str("\"happy\"").unwrap();
        assert_eq!(key, EmotionKey::Happy);
    }
}
