// crates/core/src/filter.rs
//! Client-side predicate filtering for the session library screen.
//!
//! All predicates are optional; absent means always-pass. Present predicates
//! combine with AND, input order is preserved, and no predicate ever panics
//! on sparse records (missing titles, unparseable dates).

use crate::dates::{days_ago_ceil, parse_date_loose};
use crate::duration::parse_duration_minutes;
use chrono::{DateTime, Utc};
use podium_types::SessionRecord;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Length buckets for the duration filter chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../app/src/types/generated/")]
#[serde(rename_all = "snake_case")]
pub enum DurationBucket {
    /// Under 5 minutes.
    Under5Min,
    /// 5 to 7 minutes, inclusive both ends.
    From5To7Min,
    /// Over 7 minutes.
    Over7Min,
}

impl DurationBucket {
    fn contains(self, minutes: f64) -> bool {
        match self {
            DurationBucket::Under5Min => minutes < 5.0,
            DurationBucket::From5To7Min => (5.0..=7.0).contains(&minutes),
            DurationBucket::Over7Min => minutes > 7.0,
        }
    }
}

/// Relative date windows for the recency filter.
///
/// Each window is cumulative ("at most N days ago"), so a record from
/// today satisfies all three. The UI labels these "Yesterday", "Last 7
/// days", "Last 30 days"; the names here say what the comparison does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../app/src/types/generated/")]
#[serde(rename_all = "snake_case")]
pub enum DateWindow {
    WithinLastDay,
    WithinLastWeek,
    WithinLastMonth,
}

impl DateWindow {
    fn max_days(self) -> i64 {
        match self {
            DateWindow::WithinLastDay => 1,
            DateWindow::WithinLastWeek => 7,
            DateWindow::WithinLastMonth => 30,
        }
    }
}

/// The library screen's filter state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../app/src/types/generated/")]
#[serde(rename_all = "camelCase", default)]
pub struct LibraryFilter {
    /// Case-insensitive substring match over the record title.
    pub search_text: Option<String>,
    /// Case-insensitive category equality ("Custom", "Toastmasters", ...).
    pub category: Option<String>,
    pub duration: Option<DurationBucket>,
    /// Inclusive `[low, high]` bounds on the overall score.
    pub score_range: Option<(u32, u32)>,
    pub recency: Option<DateWindow>,
}

impl LibraryFilter {
    /// True when `record` passes every present predicate.
    pub fn matches(&self, record: &SessionRecord, now: DateTime<Utc>) -> bool {
        if let Some(needle) = &self.search_text {
            let haystack = record.title().to_lowercase();
            if !haystack.contains(&needle.to_lowercase()) {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if !record.category().eq_ignore_ascii_case(category) {
                return false;
            }
        }

        if let Some(bucket) = self.duration {
            if !bucket.contains(parse_duration_minutes(record.duration_raw())) {
                return false;
            }
        }

        if let Some((low, high)) = self.score_range {
            let score = record.overall_score();
            if score < low || score > high {
                return false;
            }
        }

        if let Some(window) = self.recency {
            // An unparseable date fails the predicate, it never errors.
            match parse_date_loose(record.created_at_raw()) {
                Some(date) => {
                    if days_ago_ceil(now, date) > window.max_days() {
                        return false;
                    }
                }
                None => return false,
            }
        }

        true
    }

    /// Filter `records`, preserving input order.
    pub fn apply<'a>(
        &self,
        records: &'a [SessionRecord],
        now: DateTime<Utc>,
    ) -> Vec<&'a SessionRecord> {
        records.iter().filter(|r| self.matches(r, now)).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
