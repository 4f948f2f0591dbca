// crates/types/src/events.rs
//! Timestamped linguistic-event annotations attached to a session.
//!
//! Every list is `#[serde(default)]`: a payload with a missing family
//! deserializes to an empty list, never an error. Aggregation and counting
//! must keep working on sparse data.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single filler-word or repeated-phrase occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../app/src/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct WordEvent {
    pub word: String,
    /// Offset into the recording, in seconds.
    #[serde(default)]
    pub timestamp: f64,
}

/// A crutch-phrase occurrence ("you know", "sort of", ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../app/src/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct PhraseEvent {
    pub phrase: String,
    #[serde(default)]
    pub timestamp: f64,
}

/// A detected pause, tagged with its kind ("strategic", "awkward", ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../app/src/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct PauseEvent {
    pub pause_type: String,
    #[serde(default)]
    pub duration_seconds: f64,
    #[serde(default)]
    pub timestamp: f64,
}

/// A grammar mistake flagged by the analysis backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../app/src/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct GrammarEvent {
    pub phrase: String,
    #[serde(default)]
    pub timestamp: f64,
}

/// An environmental/engagement element ("eye contact", "gesture", ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../app/src/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct EngagementEvent {
    pub element_type: String,
    #[serde(default)]
    pub duration_seconds: f64,
    #[serde(default)]
    pub timestamp: f64,
}

/// All event families for one session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../app/src/types/generated/")]
#[serde(rename_all = "camelCase", default)]
pub struct SessionEvents {
    pub filler_words: Vec<WordEvent>,
    pub crutch_phrases: Vec<PhraseEvent>,
    pub repeated_phrases: Vec<WordEvent>,
    pub pauses: Vec<PauseEvent>,
    pub grammar_mistakes: Vec<GrammarEvent>,
    pub engagement_elements: Vec<EngagementEvent>,
}

impl SessionEvents {
    /// Total occurrences across all families.
    pub fn total(&self) -> usize {
        self.filler_words.len()
            + self.crutch_phrases.len()
            + self.repeated_phrases.len()
            + self.pauses.len()
            + self.grammar_mistakes.len()
            + self.engagement_elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_families_default_to_empty() {
        let events: SessionEvents = serde_json::from_str(r#"{"fillerWords":[{"word":"um"}]}"#).unwrap();
        assert_eq!(events.filler_words.len(), 1);
        assert_eq!(events.filler_words[0].word, "um");
        // Omitted timestamp defaults to 0.0
        assert_eq!(events.filler_words[0].timestamp, 0.0);
        assert!(events.pauses.is_empty());
        assert!(events.grammar_mistakes.is_empty());
        assert_eq!(events.total(), 1);
    }

    #[test]
    fn test_empty_object_is_valid() {
        let events: SessionEvents = serde_json::from_str("{}").unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_serializes_camel_case() {
        let events = SessionEvents {
            pauses: vec![PauseEvent {
                pause_type: "awkward".into(),
                duration_seconds: 2.5,
                timestamp: 14.0,
            }],
            ..Default::default()
        };
        let json = serde_json::to_string(&events).unwrap();
        assert!(json.contains("\"pauseType\":\"awkward\""));
        assert!(json.contains("\"durationSeconds\":2.5"));
        assert!(json.contains("\"engagementElements\":[]"));
    }
}
