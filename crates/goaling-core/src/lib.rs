//! Core domain model for BPO weekly goaling data.
//!
//! Covers the two pure pieces every tool in this workspace shares: parsing
//! `Unique Goal ID` strings into their components, and interpolating a
//! missing week-1 value from week 2 (plus the quarter-long walk-direction
//! check that goes with it).

mod goal_id;
mod interpolate;
mod metric;

pub use goal_id::{parse_goal_id, ParsedGoalId, Quarter};
pub use interpolate::{
    interpolate_series, interpolate_week1, validate_walk_direction, WalkCheck, WalkDirection,
    MINUTES_STEP, PERCENTAGE_STEP,
};
pub use metric::Metric;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GoalingError {
    #[error("unknown metric: {0} (expected DWR, FCR, or AHT)")]
    UnknownMetric(String),
}
