//! Week-1 interpolation and quarter-long walk-direction checks.
//!
//! Initiative exports often omit the first week of a quarter. The fill rule
//! is a fixed backward step from week 2: percentage metrics start slightly
//! worse (lower) than week 2, the duration metric slightly worse (higher).

use serde::Serialize;

use crate::metric::Metric;

/// Backward step for DWR and FCR (percentage points, as a fraction).
pub const PERCENTAGE_STEP: f64 = 0.003;

/// Backward step for AHT (minutes).
pub const MINUTES_STEP: f64 = 0.3;

/// Direction a metric series moves across a quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WalkDirection {
    Up,
    Down,
}

impl std::fmt::Display for WalkDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WalkDirection::Up => f.write_str("UP"),
            WalkDirection::Down => f.write_str("DOWN"),
        }
    }
}

impl Metric {
    /// The direction a healthy series walks over the quarter: percentage
    /// metrics improve upward, AHT improves downward.
    #[must_use]
    pub fn expected_direction(self) -> WalkDirection {
        if self.is_percentage() {
            WalkDirection::Up
        } else {
            WalkDirection::Down
        }
    }
}

/// Outcome of a walk-direction check over one goal's series.
#[derive(Debug, Clone, Serialize)]
pub struct WalkCheck {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<WalkDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Compute the week-1 value from week 2.
///
/// DWR/FCR: week 2 minus [`PERCENTAGE_STEP`], rounded to 3 decimals.
/// AHT: week 2 plus [`MINUTES_STEP`], rounded to 2 decimals.
#[must_use]
pub fn interpolate_week1(metric: Metric, week2: f64) -> f64 {
    match metric {
        Metric::Dwr | Metric::Fcr => round_to(week2 - PERCENTAGE_STEP, 3),
        Metric::Aht => round_to(week2 + MINUTES_STEP, 2),
    }
}

/// Fill a missing week 1 in a series of weekly values.
///
/// Only the first element is ever filled, and only when the second is
/// present; every other configuration returns the series unchanged.
#[must_use]
pub fn interpolate_series(metric: Metric, values: &[Option<f64>]) -> Vec<Option<f64>> {
    let mut out = values.to_vec();
    if let [first @ None, Some(week2), ..] = out.as_mut_slice() {
        *first = Some(interpolate_week1(metric, *week2));
    }
    out
}

/// Check that a series walks in the metric's expected direction, comparing
/// the first and last values only.
///
/// Fewer than two values is trivially valid. Flat series are valid in both
/// directions.
#[must_use]
pub fn validate_walk_direction(metric: Metric, values: &[f64]) -> WalkCheck {
    let [first, .., last] = values else {
        return insufficient();
    };
    let (first, last) = (*first, *last);

    if metric.is_percentage() {
        let delta = round_to(last - first, 4);
        if last >= first {
            walk(WalkDirection::Up, delta, None)
        } else {
            walk(
                WalkDirection::Down,
                delta,
                Some(format!(
                    "{metric} should walk UP but walks DOWN ({first} \u{2192} {last})"
                )),
            )
        }
    } else {
        let delta = round_to(last - first, 2);
        if last <= first {
            walk(WalkDirection::Down, delta, None)
        } else {
            walk(
                WalkDirection::Up,
                delta,
                Some(format!(
                    "{metric} should walk DOWN but walks UP ({first} \u{2192} {last})"
                )),
            )
        }
    }
}

fn insufficient() -> WalkCheck {
    WalkCheck {
        valid: true,
        direction: None,
        delta: None,
        message: Some("Insufficient data to validate".to_string()),
    }
}

fn walk(direction: WalkDirection, delta: f64, message: Option<String>) -> WalkCheck {
    WalkCheck {
        valid: message.is_none(),
        direction: Some(direction),
        delta: Some(delta),
        message,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[path = "interpolate_test.rs"]
mod tests;
