// crates/core/src/duration.rs
//! Duration-string parsing.
//!
//! The backend encodes durations inconsistently: `"MM:SS"`, a bare integer
//! number of seconds, or the literal `"n/a"`. Two parsers coexist on purpose:
//! the stats rollup counts whole seconds while the library duration filter
//! buckets fractional minutes, and the two differ in rounding by call site.
//! Do not merge them.

use regex_lite::Regex;

/// Parse a duration string into whole seconds.
///
/// Accepts `"MM:SS"` (`"05:30"` -> 330) or a bare integer (`"120"` -> 120).
/// Everything else (`"n/a"` in any casing, the empty string, garbage,
/// negative numbers) parses to 0. Total: never panics.
pub fn parse_duration_seconds(text: &str) -> u64 {
    let clock = Regex::new(r"^(\d+):(\d{1,2})$").unwrap();
    if let Some(caps) = clock.captures(text) {
        let minutes: u64 = caps[1].parse().unwrap_or(0);
        let seconds: u64 = caps[2].parse().unwrap_or(0);
        return minutes * 60 + seconds;
    }
    match text.parse::<i64>() {
        Ok(n) if n > 0 => n as u64,
        _ => 0,
    }
}

/// Parse a duration string into fractional minutes, for the duration filter.
///
/// Recognizes `"MM:SS"` (`"06:10"` -> 6.166…) and a leading minutes figure
/// (`"5m"`, `"12m 30s"` -> 5.0, 12.0). Anything else parses to 0.0.
///
/// This is deliberately NOT `parse_duration_seconds` divided by 60: the
/// filter's minutes grammar accepts inputs the seconds parser rejects and
/// vice versa.
pub fn parse_duration_minutes(text: &str) -> f64 {
    let clock = Regex::new(r"^(\d+):(\d{1,2})$").unwrap();
    if let Some(caps) = clock.captures(text) {
        let minutes: f64 = caps[1].parse().unwrap_or(0.0);
        let seconds: f64 = caps[2].parse().unwrap_or(0.0);
        return minutes + seconds / 60.0;
    }
    let leading = Regex::new(r"^(\d+)m").unwrap();
    if let Some(caps) = leading.captures(text) {
        return caps[1].parse().unwrap_or(0.0);
    }
    0.0
}

// ============================================================================
// Tests
// ============================================================================
