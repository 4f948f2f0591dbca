// crates/core/src/trends.rs
//! Week-over-week trend comparison for the dashboard header.
//!
//! Current period is Monday 00:00 UTC of this week through `now`;
//! the previous period is the seven days before that Monday,
//! end-exclusive. Both are computed in one pass over the snapshot.

use crate::dates::{parse_date_loose, week_start};
use crate::duration::parse_duration_seconds;
use chrono::{DateTime, Duration, Utc};
use podium_types::SessionRecord;
use serde::Serialize;
use ts_rs::TS;

/// A single trend metric comparing current vs previous period.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../../app/src/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct TrendMetric {
    #[ts(type = "number")]
    pub current: i64,
    #[ts(type = "number")]
    pub previous: i64,
    /// Absolute change (current - previous).
    #[ts(type = "number")]
    pub delta: i64,
    /// Percentage change, rounded to 1 decimal place.
    /// `None` when previous is 0 (no percentage can be computed).
    pub delta_percent: Option<f64>,
}

impl TrendMetric {
    pub fn new(current: i64, previous: i64) -> Self {
        let delta = current - previous;
        let delta_percent = if previous == 0 {
            None
        } else {
            let percent = (delta as f64 / previous as f64) * 100.0;
            Some((percent * 10.0).round() / 10.0)
        };
        Self { current, previous, delta, delta_percent }
    }
}

/// All week-over-week metrics the dashboard header shows.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../../app/src/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct WeekTrends {
    pub sessions: TrendMetric,
    /// Mean overall score per period, rounded; 0 for an empty period.
    pub avg_score: TrendMetric,
    pub filler_words: TrendMetric,
    pub practiced_seconds: TrendMetric,
}

#[derive(Default)]
struct PeriodTotals {
    sessions: i64,
    score_sum: u64,
    filler_words: i64,
    practiced_seconds: i64,
}

impl PeriodTotals {
    fn add(&mut self, record: &SessionRecord) {
        self.sessions += 1;
        self.score_sum += record.overall_score() as u64;
        self.filler_words += record.events().filler_words.len() as i64;
        self.practiced_seconds += parse_duration_seconds(record.duration_raw()) as i64;
    }

    fn avg_score(&self) -> i64 {
        if self.sessions == 0 {
            return 0;
        }
        (self.score_sum as f64 / self.sessions as f64).round() as i64
    }
}

/// Compare this week against last week across the whole snapshot.
pub fn week_over_week(records: &[SessionRecord], now: DateTime<Utc>) -> WeekTrends {
    let current_start = week_start(now);
    let previous_start = current_start - Duration::days(7);

    let mut current = PeriodTotals::default();
    let mut previous = PeriodTotals::default();

    for record in records {
        let Some(date) = parse_date_loose(record.created_at_raw()) else {
            continue;
        };
        if date >= current_start && date <= now {
            current.add(record);
        } else if date >= previous_start && date < current_start {
            previous.add(record);
        }
    }

    WeekTrends {
        sessions: TrendMetric::new(current.sessions, previous.sessions),
        avg_score: TrendMetric::new(current.avg_score(), previous.avg_score()),
        filler_words: TrendMetric::new(current.filler_words, previous.filler_words),
        practiced_seconds: TrendMetric::new(current.practiced_seconds, previous.practiced_seconds),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use podium_types::{SessionEvents, SpeechSession, WordEvent};
    use pretty_assertions::assert_eq;

    // ========================================================================
    // TrendMetric arithmetic
    // ========================================================================

    #[test]
    fn test_trend_metric_positive_delta() {
        let metric = TrendMetric::new(120, 100);
        assert_eq!(metric.delta, 20);
        assert_eq!(metric.delta_percent, Some(20.0));
    }

    #[test]
    fn test_trend_metric_negative_delta_rounds() {
        let metric = TrendMetric::new(100, 120);
        assert_eq!(metric.delta, -20);
        assert_eq!(metric.delta_percent, Some(-16.7));
    }

    #[test]
    fn test_trend_metric_previous_zero_has_no_percent() {
        let metric = TrendMetric::new(50, 0);
        assert_eq!(metric.delta, 50);
        assert_eq!(metric.delta_percent, None);
    }

    #[test]
    fn test_trend_metric_serializes_null_percent() {
        let json = serde_json::to_string(&TrendMetric::new(50, 0)).unwrap();
        assert!(json.contains("\"deltaPercent\":null"));
        assert!(json.contains("\"current\":50"));
    }

    // ========================================================================
    // week_over_week
    // ========================================================================

    /// Thursday 2026-08-06; current week starts Monday 2026-08-03.
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 6, 15, 0, 0).unwrap()
    }

    fn speech(created_at: &str, score: u32, fillers: usize, duration: &str) -> SessionRecord {
        SessionRecord::Speech(SpeechSession {
            id: format!("sp-{created_at}"),
            created_at: created_at.into(),
            overall_score: Some(score),
            duration: duration.into(),
            events: SessionEvents {
                filler_words: (0..fillers)
                    .map(|_| WordEvent { word: "um".into(), timestamp: 0.0 })
                    .collect(),
                ..Default::default()
            },
            ..Default::default()
        })
    }

    #[test]
    fn test_week_over_week_splits_periods() {
        let records = vec![
            // Current week
            speech("2026-08-04 09:00:00", 80, 3, "05:00"),
            speech("2026-08-05 09:00:00", 90, 1, "03:00"),
            // Previous week
            speech("2026-07-29 09:00:00", 70, 6, "04:00"),
            // Two weeks back: in neither period
            speech("2026-07-20 09:00:00", 10, 9, "10:00"),
        ];
        let trends = week_over_week(&records, now());

        assert_eq!(trends.sessions.current, 2);
        assert_eq!(trends.sessions.previous, 1);
        assert_eq!(trends.sessions.delta, 1);
        assert_eq!(trends.sessions.delta_percent, Some(100.0));

        assert_eq!(trends.avg_score.current, 85);
        assert_eq!(trends.avg_score.previous, 70);

        assert_eq!(trends.filler_words.current, 4);
        assert_eq!(trends.filler_words.previous, 6);

        assert_eq!(trends.practiced_seconds.current, 480);
        assert_eq!(trends.practiced_seconds.previous, 240);
    }

    #[test]
    fn test_week_over_week_empty_snapshot() {
        let trends = week_over_week(&[], now());
        assert_eq!(trends.sessions, TrendMetric::new(0, 0));
        assert_eq!(trends.avg_score.current, 0);
        assert_eq!(trends.sessions.delta_percent, None);
    }

    #[test]
    fn test_previous_week_end_is_exclusive() {
        // Monday 00:00 of the current week belongs to the current period only.
        let records = vec![speech("2026-08-03 00:00:00", 80, 0, "01:00")];
        let trends = week_over_week(&records, now());
        assert_eq!(trends.sessions.current, 1);
        assert_eq!(trends.sessions.previous, 0);
    }

    #[test]
    fn test_records_after_now_are_ignored() {
        let records = vec![speech("2026-08-06 23:00:00", 80, 0, "01:00")];
        let trends = week_over_week(&records, now());
        assert_eq!(trends.sessions.current, 0);
    }
}
