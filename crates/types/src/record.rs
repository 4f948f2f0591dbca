// crates/types/src/record.rs
//! The normalized session record consumed by the analytics engine.
//!
//! Three source kinds share overlapping but non-identical fields, so the
//! record is a serde-tagged union with accessor methods that give the
//! aggregator and the library filter a uniform view. Records are built
//! fresh on every fetch and never mutated.

use crate::events::SessionEvents;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Which source a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../app/src/types/generated/")]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    Speech,
    Evaluation,
    Practice,
}

/// A recorded (or uploaded) speech with full analysis attached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../app/src/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct SpeechSession {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    /// Raw creation timestamp as fetched; parsing is the engine's job.
    #[serde(default)]
    pub created_at: String,
    /// 0-100. Absent scores read as 0 everywhere downstream.
    #[serde(default)]
    pub overall_score: Option<u32>,
    /// `"MM:SS"`, bare seconds, or `"n/a"`.
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub events: SessionEvents,
}

/// An AI evaluation of an existing speech. The backend labels the title
/// field differently for this kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../app/src/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct EvaluationSession {
    pub id: String,
    #[serde(default)]
    pub speech_title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub overall_score: Option<u32>,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub events: SessionEvents,
}

/// A quick practice attempt. Carries the same summary fields but usually
/// no event annotations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../app/src/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct PracticeSession {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub overall_score: Option<u32>,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub events: SessionEvents,
}

/// One completed speech, evaluation, or practice attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../app/src/types/generated/")]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SessionRecord {
    Speech(SpeechSession),
    Evaluation(EvaluationSession),
    Practice(PracticeSession),
}

impl SessionRecord {
    pub fn kind(&self) -> SessionKind {
        match self {
            SessionRecord::Speech(_) => SessionKind::Speech,
            SessionRecord::Evaluation(_) => SessionKind::Evaluation,
            SessionRecord::Practice(_) => SessionKind::Practice,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            SessionRecord::Speech(s) => &s.id,
            SessionRecord::Evaluation(e) => &e.id,
            SessionRecord::Practice(p) => &p.id,
        }
    }

    /// Display label. Evaluations expose their `speech_title` here so the
    /// search predicate works uniformly across kinds.
    pub fn title(&self) -> &str {
        match self {
            SessionRecord::Speech(s) => &s.title,
            SessionRecord::Evaluation(e) => &e.speech_title,
            SessionRecord::Practice(p) => &p.title,
        }
    }

    pub fn category(&self) -> &str {
        match self {
            SessionRecord::Speech(s) => &s.category,
            SessionRecord::Evaluation(e) => &e.category,
            SessionRecord::Practice(p) => &p.category,
        }
    }

    /// Raw creation timestamp as fetched. May be empty or unparseable;
    /// callers go through `parse_date_loose` and treat `None` as "no date".
    pub fn created_at_raw(&self) -> &str {
        match self {
            SessionRecord::Speech(s) => &s.created_at,
            SessionRecord::Evaluation(e) => &e.created_at,
            SessionRecord::Practice(p) => &p.created_at,
        }
    }

    /// Overall score with the absent-reads-as-zero rule applied.
    pub fn overall_score(&self) -> u32 {
        match self {
            SessionRecord::Speech(s) => s.overall_score,
            SessionRecord::Evaluation(e) => e.overall_score,
            SessionRecord::Practice(p) => p.overall_score,
        }
        .unwrap_or(0)
    }

    /// Raw duration text (`"MM:SS"`, bare seconds, or `"n/a"`).
    pub fn duration_raw(&self) -> &str {
        match self {
            SessionRecord::Speech(s) => &s.duration,
            SessionRecord::Evaluation(e) => &e.duration,
            SessionRecord::Practice(p) => &p.duration,
        }
    }

    pub fn events(&self) -> &SessionEvents {
        match self {
            SessionRecord::Speech(s) => &s.events,
            SessionRecord::Evaluation(e) => &e.events,
            SessionRecord::Practice(p) => &p.events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tagged_roundtrip() {
        let record = SessionRecord::Speech(SpeechSession {
            id: "sp-1".into(),
            title: "Intro Speech".into(),
            category: "Custom".into(),
            created_at: "2026-08-01 10:30:00".into(),
            overall_score: Some(72),
            duration: "04:30".into(),
            ..Default::default()
        });

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"kind\":\"speech\""));
        assert!(json.contains("\"overallScore\":72"));

        let back: SessionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_evaluation_title_is_speech_title() {
        let record = SessionRecord::Evaluation(EvaluationSession {
            id: "ev-1".into(),
            speech_title: "Final Pitch".into(),
            ..Default::default()
        });
        assert_eq!(record.title(), "Final Pitch");
        assert_eq!(record.kind(), SessionKind::Evaluation);
    }

    #[test]
    fn test_absent_score_reads_as_zero() {
        let record = SessionRecord::Practice(PracticeSession {
            id: "pr-1".into(),
            ..Default::default()
        });
        assert_eq!(record.overall_score(), 0);
        assert!(record.events().is_empty());
        assert_eq!(record.duration_raw(), "");
    }

    #[test]
    fn test_minimal_payload_deserializes() {
        // Only id and kind are required; everything else defaults.
        let record: SessionRecord =
            serde_json::from_str(r#"{"kind":"practice","id":"pr-9"}"#).unwrap();
        assert_eq!(record.id(), "pr-9");
        assert_eq!(record.overall_score(), 0);
        assert_eq!(record.title(), "");
    }
}
