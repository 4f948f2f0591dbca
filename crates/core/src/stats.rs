// crates/core/src/stats.rs
//! Rollup statistics for the library header card.

use crate::dates::parse_date_loose;
use crate::duration::parse_duration_seconds;
use chrono::{Duration, NaiveDate};
use podium_types::SessionRecord;
use serde::Serialize;
use ts_rs::TS;

/// Summary numbers shown above the session list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../../app/src/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct LibraryStats {
    #[ts(type = "number")]
    pub count: i64,
    /// Mean overall score, rounded to the nearest integer. 0 when empty.
    pub avg_score: u32,
    pub highest_score: u32,
    #[ts(type = "number")]
    pub total_duration_seconds: u64,
    pub streak_days: u32,
}

/// Compute the rollup over an entity collection.
///
/// Total for any input: an empty collection yields the zero-valued struct,
/// absent scores count as 0, and unparseable durations contribute 0 seconds.
pub fn compute_stats(records: &[SessionRecord]) -> LibraryStats {
    if records.is_empty() {
        return LibraryStats::default();
    }

    let count = records.len() as i64;
    let score_sum: u64 = records.iter().map(|r| r.overall_score() as u64).sum();
    let avg_score = (score_sum as f64 / count as f64).round() as u32;
    let highest_score = records.iter().map(|r| r.overall_score()).max().unwrap_or(0);
    let total_duration_seconds = records
        .iter()
        .map(|r| parse_duration_seconds(r.duration_raw()))
        .sum();

    LibraryStats {
        count,
        avg_score,
        highest_score,
        total_duration_seconds,
        streak_days: streak_days(records),
    }
}

/// Trailing consecutive-day run ending at the latest recorded day.
///
/// Calendar days with at least one record are deduplicated and sorted; the
/// streak walks backward from the most recent day, counting while the gap
/// is exactly one day. At least 1 whenever any record has a parseable date.
///
/// This deliberately does NOT check whether the latest day is today: it
/// measures the run ending at the latest known date, not current activity.
pub fn streak_days(records: &[SessionRecord]) -> u32 {
    let mut days: Vec<NaiveDate> = records
        .iter()
        .filter_map(|r| parse_date_loose(r.created_at_raw()))
        .map(|d| d.date_naive())
        .collect();
    days.sort();
    days.dedup();

    let Some(&latest) = days.last() else {
        return 0;
    };

    let mut streak = 1;
    let mut current = latest;
    for &day in days.iter().rev().skip(1) {
        if current - day == Duration::days(1) {
            streak += 1;
            current = day;
        } else {
            break;
        }
    }
    streak
}

// ============================================================================
// Tests
// ============================================================================
