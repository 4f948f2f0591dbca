// crates/core/src/aggregate.rs
//! Time-bucketed trend series and top-N event breakdowns for the
//! performance dashboard.
//!
//! Every function recomputes from scratch over the snapshot it is handed;
//! there is no incremental state. Callers re-invoke on each fetch or poll
//! tick and replace the previous result wholesale.

use crate::dates::{month_anchor, parse_date_loose, same_month, week_start};
use chrono::{DateTime, Duration, Utc};
use podium_types::{ChartSeries, SessionEvents, SessionRecord, TopEntry};
use serde::Serialize;
use std::collections::HashMap;
use ts_rs::TS;

/// Default week count for the trailing-weeks series.
pub const DEFAULT_TRAILING_WEEKS: usize = 4;
/// Default month count for the trailing-months series.
pub const DEFAULT_TRAILING_MONTHS: usize = 6;

/// Which number a trend series plots per bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "../../app/src/types/generated/")]
#[serde(rename_all = "snake_case")]
pub enum ChartMetric {
    /// Mean overall score of the bucket's records, rounded; 0 when empty.
    Score,
    /// Total filler-word occurrences across the bucket's records.
    FillerWordCount,
}

impl ChartMetric {
    /// For trend-direction judgments: fewer filler words is an improvement.
    pub fn lower_is_better(self) -> bool {
        matches!(self, ChartMetric::FillerWordCount)
    }
}

fn bucket_value(records: &[&SessionRecord], metric: ChartMetric) -> i64 {
    match metric {
        ChartMetric::Score => {
            if records.is_empty() {
                return 0;
            }
            let sum: u64 = records.iter().map(|r| r.overall_score() as u64).sum();
            (sum as f64 / records.len() as f64).round() as i64
        }
        ChartMetric::FillerWordCount => records
            .iter()
            .map(|r| r.events().filler_words.len() as i64)
            .sum(),
    }
}

fn collect<'a>(
    records: &'a [SessionRecord],
    mut in_bucket: impl FnMut(DateTime<Utc>) -> bool,
) -> Vec<&'a SessionRecord> {
    // Records without a parseable date belong to no bucket.
    records
        .iter()
        .filter(|r| {
            parse_date_loose(r.created_at_raw())
                .map(&mut in_bucket)
                .unwrap_or(false)
        })
        .collect()
}

/// One point per day from Monday of `now`'s week through `now`'s day.
///
/// Days before today that have no records still get a zero point; days
/// after today are never emitted.
pub fn current_week_series(
    records: &[SessionRecord],
    metric: ChartMetric,
    now: DateTime<Utc>,
) -> ChartSeries {
    let mut series = ChartSeries::with_capacity(7);
    let mut day = week_start(now).date_naive();
    let today = now.date_naive();

    while day <= today {
        let in_day = collect(records, |d| d.date_naive() == day);
        series.push(day.format("%a").to_string(), bucket_value(&in_day, metric));
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    series
}

/// One point per ISO week, oldest first, ending with the current week.
///
/// Bucket membership is exclusive on both edges: a record stamped exactly
/// at a Monday-midnight boundary belongs to no bucket.
pub fn trailing_weeks_series(
    records: &[SessionRecord],
    metric: ChartMetric,
    now: DateTime<Utc>,
    weeks: usize,
) -> ChartSeries {
    let current_start = week_start(now);
    let mut series = ChartSeries::with_capacity(weeks);

    for i in 0..weeks {
        let start = current_start - Duration::weeks((weeks - 1 - i) as i64);
        let end = start + Duration::days(7);
        let in_week = collect(records, |d| d > start && d < end);
        series.push(start.format("%b %-d").to_string(), bucket_value(&in_week, metric));
    }
    series
}

/// One point per calendar month, oldest first, ending with the current
/// month. Always exactly `months` points, zero-filled, regardless of input.
pub fn trailing_months_series(
    records: &[SessionRecord],
    metric: ChartMetric,
    now: DateTime<Utc>,
    months: usize,
) -> ChartSeries {
    let mut series = ChartSeries::with_capacity(months);

    for i in 0..months {
        let anchor = month_anchor(now, (months - 1 - i) as u32);
        let in_month = collect(records, |d| same_month(d, anchor));
        series.push(anchor.format("%b").to_string(), bucket_value(&in_month, metric));
    }
    series
}

// ============================================================================
// Top-N event breakdowns
// ============================================================================

/// Which nested event list a breakdown flattens across all records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "../../app/src/types/generated/")]
#[serde(rename_all = "snake_case")]
pub enum EventFamily {
    FillerWords,
    CrutchPhrases,
    RepeatedPhrases,
    Pauses,
    EngagementElements,
}

impl EventFamily {
    /// How many rows the dashboard card shows for this family.
    pub fn default_limit(self) -> usize {
        match self {
            EventFamily::Pauses => 3,
            _ => 5,
        }
    }

    fn keys<'a>(self, events: &'a SessionEvents) -> Vec<&'a str> {
        match self {
            EventFamily::FillerWords => {
                events.filler_words.iter().map(|e| e.word.as_str()).collect()
            }
            EventFamily::CrutchPhrases => {
                events.crutch_phrases.iter().map(|e| e.phrase.as_str()).collect()
            }
            EventFamily::RepeatedPhrases => {
                events.repeated_phrases.iter().map(|e| e.word.as_str()).collect()
            }
            EventFamily::Pauses => {
                events.pauses.iter().map(|e| e.pause_type.as_str()).collect()
            }
            EventFamily::EngagementElements => events
                .engagement_elements
                .iter()
                .map(|e| e.element_type.as_str())
                .collect(),
        }
    }
}

/// The `limit` most frequent keys in one event family, descending by count.
///
/// Keys are trimmed and lowercased before counting, so `"Um"` and `" um "`
/// collapse into one row. Ties keep first-seen order (the sort is stable).
/// Keys that normalize to the empty string are dropped.
pub fn top_events(records: &[SessionRecord], family: EventFamily, limit: usize) -> Vec<TopEntry> {
    let mut entries: Vec<TopEntry> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        for key in family.keys(record.events()) {
            let normalized = key.trim().to_lowercase();
            if normalized.is_empty() {
                continue;
            }
            match index.get(&normalized) {
                Some(&slot) => entries[slot].count += 1,
                None => {
                    index.insert(normalized.clone(), entries.len());
                    entries.push(TopEntry { key: normalized, count: 1 });
                }
            }
        }
    }

    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(limit);
    entries
}

// ============================================================================
// Session-to-session improvement
// ============================================================================

/// Score movement relative to the immediately prior session.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../../app/src/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct ScoreDelta {
    pub id: String,
    pub score: u32,
    /// `None` for the chronologically first session.
    #[ts(type = "number | null")]
    pub delta: Option<i64>,
}

impl ScoreDelta {
    /// Display label: `"+5"`, `"-3"`, `"+0"`, or `"First speech"`.
    pub fn label(&self) -> String {
        match self.delta {
            Some(delta) if delta >= 0 => format!("+{delta}"),
            Some(delta) => delta.to_string(),
            None => "First speech".to_string(),
        }
    }
}

/// Per-session score deltas, each against the immediately prior session in
/// chronological (ascending) order.
///
/// Records without a parseable creation date cannot be placed in the
/// timeline and are omitted.
pub fn score_deltas(records: &[SessionRecord]) -> Vec<ScoreDelta> {
    let mut dated: Vec<(DateTime<Utc>, &SessionRecord)> = records
        .iter()
        .filter_map(|r| parse_date_loose(r.created_at_raw()).map(|d| (d, r)))
        .collect();
    dated.sort_by_key(|(date, _)| *date);

    let mut deltas = Vec::with_capacity(dated.len());
    let mut previous: Option<u32> = None;
    for (_, record) in dated {
        let score = record.overall_score();
        deltas.push(ScoreDelta {
            id: record.id().to_string(),
            score,
            delta: previous.map(|p| score as i64 - p as i64),
        });
        previous = Some(score);
    }
    deltas
}

// ============================================================================
// Tests
// ============================================================================
