// crates/types/src/series.rs
//! Chart-facing output shapes.
//!
//! The mobile charts consume parallel `labels`/`values` arrays; the two
//! arrays are always the same length. Values are integers: counts as-is,
//! averaged scores rounded to the nearest whole point.

use serde::Serialize;
use ts_rs::TS;

/// An ordered series of `(label, value)` points, one per time bucket.
/// Produced fresh on every aggregation call, never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../../app/src/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub labels: Vec<String>,
    #[ts(type = "number[]")]
    pub values: Vec<i64>,
}

impl ChartSeries {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            labels: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, label: impl Into<String>, value: i64) {
        self.labels.push(label.into());
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// One row of a top-N frequency breakdown. Keys are already normalized
/// (trimmed, lowercased) by the aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../../app/src/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct TopEntry {
    pub key: String,
    #[ts(type = "number")]
    pub count: i64,
}

impl ChartSeries {
    /// Flatten a breakdown into the same labels/values shape the charts use.
    pub fn from_entries(entries: &[TopEntry]) -> Self {
        let mut series = ChartSeries::with_capacity(entries.len());
        for entry in entries {
            series.push(entry.key.clone(), entry.count);
        }
        series
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_arrays_parallel() {
        let mut series = ChartSeries::default();
        series.push("Mon", 3);
        series.push("Tue", 0);
        assert_eq!(series.len(), 2);
        assert_eq!(series.labels, vec!["Mon", "Tue"]);
        assert_eq!(series.values, vec![3, 0]);
    }

    #[test]
    fn test_from_entries() {
        let entries = vec![
            TopEntry { key: "um".into(), count: 3 },
            TopEntry { key: "like".into(), count: 1 },
        ];
        let series = ChartSeries::from_entries(&entries);
        assert_eq!(series.labels, vec!["um", "like"]);
        assert_eq!(series.values, vec![3, 1]);
    }

    #[test]
    fn test_serializes_camel_case() {
        let mut series = ChartSeries::default();
        series.push("Aug", 72);
        let json = serde_json::to_string(&series).unwrap();
        assert_eq!(json, r#"{"labels":["Aug"],"values":[72]}"#);
    }
}
