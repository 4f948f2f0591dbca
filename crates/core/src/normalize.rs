// crates/core/src/normalize.rs
//! Normalization of raw backend payloads into `SessionRecord`s.
//!
//! The analysis backend nests event lists under `analytics` (with pauses,
//! grammar, and engagement inside `analytics.speaker_analysis[0]`) and the
//! score under `summary.Metadata.overall_score`. This module flattens that
//! into the normalized shape the engine consumes.
//!
//! Individual records that cannot be normalized are skipped with a warning;
//! only a structurally unusable document is an error.

use crate::error::NormalizeError;
use podium_types::{
    EvaluationSession, SessionEvents, SessionRecord, SpeechSession,
};
use serde_json::Value;
use tracing::warn;

/// Normalize a full library payload: a JSON object with `speeches` and/or
/// `evaluations` arrays.
pub fn normalize_library_payload(payload: &Value) -> Result<Vec<SessionRecord>, NormalizeError> {
    let object = payload.as_object().ok_or(NormalizeError::NotAnObject)?;

    let speeches = object.get("speeches").and_then(Value::as_array);
    let evaluations = object.get("evaluations").and_then(Value::as_array);
    if speeches.is_none() && evaluations.is_none() {
        return Err(NormalizeError::MissingSessionLists);
    }

    let mut records = Vec::new();
    for (index, raw) in speeches.into_iter().flatten().enumerate() {
        match normalize_speech(raw) {
            Some(record) => records.push(record),
            None => warn!("Skipping speech at index {index} with missing id"),
        }
    }
    for (index, raw) in evaluations.into_iter().flatten().enumerate() {
        match normalize_evaluation(raw) {
            Some(record) => records.push(record),
            None => warn!("Skipping evaluation at index {index} with missing id"),
        }
    }
    Ok(records)
}

/// Normalize one raw speech object. `None` when the record has no id.
pub fn normalize_speech(raw: &Value) -> Option<SessionRecord> {
    let id = raw.get("id").and_then(Value::as_str)?.to_string();
    Some(SessionRecord::Speech(SpeechSession {
        id,
        title: string_field(raw, "title"),
        category: string_field(raw, "category"),
        created_at: string_field(raw, "created_at"),
        overall_score: extract_score(raw),
        duration: string_field(raw, "duration"),
        events: extract_events(raw),
    }))
}

/// Normalize one raw evaluation object. `None` when the record has no id.
pub fn normalize_evaluation(raw: &Value) -> Option<SessionRecord> {
    let id = raw.get("id").and_then(Value::as_str)?.to_string();
    Some(SessionRecord::Evaluation(EvaluationSession {
        id,
        speech_title: string_field(raw, "speech_title"),
        category: string_field(raw, "category"),
        created_at: string_field(raw, "created_at"),
        overall_score: extract_score(raw),
        duration: string_field(raw, "duration"),
        events: extract_events(raw),
    }))
}

fn string_field(raw: &Value, key: &str) -> String {
    raw.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Score lives at `summary.Metadata.overall_score`. The backend emits it
/// as an integer or a float; both round into the 0-100 integer the engine
/// uses. Anything non-numeric reads as absent.
fn extract_score(raw: &Value) -> Option<u32> {
    raw.pointer("/summary/Metadata/overall_score")
        .and_then(Value::as_f64)
        .map(|score| score.round() as u32)
}

/// Event lists sit under `analytics`: word/phrase families directly, the
/// rest inside `speaker_analysis[0]`. Each list deserializes leniently:
/// a malformed or missing family is an empty list, never an error.
fn extract_events(raw: &Value) -> SessionEvents {
    let Some(analytics) = raw.get("analytics") else {
        return SessionEvents::default();
    };
    let speaker = analytics.pointer("/speaker_analysis/0");

    SessionEvents {
        filler_words: event_list(analytics.get("filler_words")),
        crutch_phrases: event_list(analytics.get("crutch_phrases")),
        repeated_phrases: event_list(analytics.get("repeated_phrases")),
        pauses: event_list(speaker.and_then(|s| s.get("pauses"))),
        grammar_mistakes: event_list(speaker.and_then(|s| s.get("grammar_mistakes"))),
        engagement_elements: event_list(speaker.and_then(|s| s.get("engagement_elements"))),
    }
}

fn event_list<T: serde::de::DeserializeOwned>(value: Option<&Value>) -> Vec<T> {
    value
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default()
}

// ============================================================================
// Tests
// ============================================================================
