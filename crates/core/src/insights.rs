// crates/core/src/insights.rs
//! Trend direction and human-readable one-liners for the dashboard.

use crate::aggregate::ChartMetric;
use podium_types::ChartSeries;
use serde::Serialize;
use ts_rs::TS;

/// Where a series is heading, after accounting for which direction is good.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "../../app/src/types/generated/")]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Improving,
    Worsening,
    Stable,
}

/// Summary statistics over one chart series.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../../app/src/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct SeriesTrend {
    pub average: f64,
    /// First-to-last percent change; 0 when the first point is 0.
    pub change_percent: f64,
    pub direction: TrendDirection,
}

/// Calculate trend statistics from a bucketed series.
///
/// Changes within a ±5% band read as stable. For filler-word series a
/// falling value is an improvement; for score series a rising one is.
pub fn series_trend(series: &ChartSeries, metric: ChartMetric) -> SeriesTrend {
    if series.is_empty() {
        return SeriesTrend {
            average: 0.0,
            change_percent: 0.0,
            direction: TrendDirection::Stable,
        };
    }

    let average =
        series.values.iter().map(|v| *v as f64).sum::<f64>() / series.values.len() as f64;

    if series.values.len() < 2 {
        return SeriesTrend {
            average,
            change_percent: 0.0,
            direction: TrendDirection::Stable,
        };
    }

    let first = series.values[0] as f64;
    let last = series.values[series.values.len() - 1] as f64;
    let change_percent = if first == 0.0 {
        0.0
    } else {
        ((last - first) / first) * 100.0
    };

    let direction = if change_percent.abs() < 5.0 {
        TrendDirection::Stable
    } else if (change_percent < 0.0) == metric.lower_is_better() {
        TrendDirection::Improving
    } else {
        TrendDirection::Worsening
    };

    SeriesTrend { average, change_percent, direction }
}

/// One human-readable sentence for the selected metric and period.
pub fn trend_insight(metric: ChartMetric, trend: &SeriesTrend, period: &str) -> String {
    let change = trend.change_percent.abs();
    match (metric, trend.direction) {
        (ChartMetric::FillerWordCount, TrendDirection::Improving) => format!(
            "Filler words dropped {change:.0}% over {period} -- your delivery is getting cleaner"
        ),
        (ChartMetric::FillerWordCount, TrendDirection::Worsening) => format!(
            "Filler words rose {change:.0}% over {period} -- try pausing instead of filling"
        ),
        (ChartMetric::Score, TrendDirection::Improving) => {
            format!("Your score climbed {change:.0}% over {period} -- keep the streak going")
        }
        (ChartMetric::Score, TrendDirection::Worsening) => {
            format!("Your score slipped {change:.0}% over {period} -- a short practice run can help")
        }
        (_, TrendDirection::Stable) => format!("Holding steady over {period}"),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[i64]) -> ChartSeries {
        let mut s = ChartSeries::default();
        for (i, v) in values.iter().enumerate() {
            s.push(format!("p{i}"), *v);
        }
        s
    }

    #[test]
    fn test_rising_score_improves() {
        let trend = series_trend(&series(&[60, 70, 80]), ChartMetric::Score);
        assert_eq!(trend.direction, TrendDirection::Improving);
        assert!((trend.average - 70.0).abs() < 1e-9);
        assert!((trend.change_percent - 33.333).abs() < 0.01);
    }

    #[test]
    fn test_falling_fillers_improve() {
        let trend = series_trend(&series(&[12, 9, 6]), ChartMetric::FillerWordCount);
        assert_eq!(trend.direction, TrendDirection::Improving);
    }

    #[test]
    fn test_rising_fillers_worsen() {
        let trend = series_trend(&series(&[6, 9, 12]), ChartMetric::FillerWordCount);
        assert_eq!(trend.direction, TrendDirection::Worsening);
    }

    #[test]
    fn test_small_changes_are_stable() {
        let trend = series_trend(&series(&[100, 98, 103]), ChartMetric::Score);
        assert_eq!(trend.direction, TrendDirection::Stable);
    }

    #[test]
    fn test_empty_and_single_point_are_stable() {
        let empty = series_trend(&series(&[]), ChartMetric::Score);
        assert_eq!(empty.direction, TrendDirection::Stable);
        assert_eq!(empty.average, 0.0);

        let single = series_trend(&series(&[50]), ChartMetric::Score);
        assert_eq!(single.direction, TrendDirection::Stable);
        assert_eq!(single.average, 50.0);
    }

    #[test]
    fn test_zero_first_point_reads_stable() {
        let trend = series_trend(&series(&[0, 40]), ChartMetric::Score);
        assert_eq!(trend.change_percent, 0.0);
        assert_eq!(trend.direction, TrendDirection::Stable);
    }

    #[test]
    fn test_insight_wording() {
        let improving = SeriesTrend {
            average: 8.0,
            change_percent: -52.0,
            direction: TrendDirection::Improving,
        };
        let text = trend_insight(ChartMetric::FillerWordCount, &improving, "the last 6 months");
        assert!(text.contains("dropped 52%"));
        assert!(text.contains("the last 6 months"));

        let stable = SeriesTrend {
            average: 70.0,
            change_percent: 1.0,
            direction: TrendDirection::Stable,
        };
        assert!(trend_insight(ChartMetric::Score, &stable, "this month").contains("Holding steady"));
    }
}
