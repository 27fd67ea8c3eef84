//! The upload validation pipeline.
//!
//! Reads the whole file up front, runs per-row checks, then the cross-row
//! checks (duplicates, week counts, walk direction) over series grouped by
//! goal id and sorted by date.

use std::collections::{BTreeMap, HashSet};
use std::io::Read;
use std::path::Path;

use goaling_core::{parse_goal_id, validate_walk_direction};
use serde::Deserialize;

use crate::report::ValidationReport;
use crate::rules::{check_date, check_value};

/// Columns every upload must carry.
pub const REQUIRED_COLUMNS: [&str; 3] = ["Unique Goal ID", "Target Start Date", "Goal Values"];

/// Weeks expected per goal in a full reporting quarter.
pub const EXPECTED_WEEKS: usize = 13;

const MAX_WEEK_COUNT_WARNINGS: usize = 5;
const MAX_DIRECTION_ERRORS: usize = 10;

#[derive(Debug, Deserialize)]
struct UploadRow {
    #[serde(rename = "Unique Goal ID", default)]
    goal_id: String,
    #[serde(rename = "Target Start Date", default)]
    date: String,
    #[serde(rename = "Goal Values", default)]
    value: String,
}

/// Validate an upload CSV on disk.
///
/// An unreadable upload file produces a single "Could not read file" error;
/// an unreadable existing-export file only produces a warning, since the
/// duplicate check against it is best-effort.
#[must_use]
pub fn validate_upload(path: &Path, existing: Option<&Path>) -> ValidationReport {
    let mut report = ValidationReport::default();

    let mut existing_keys = HashSet::new();
    if let Some(existing_path) = existing {
        match csv::Reader::from_path(existing_path).and_then(load_existing_keys) {
            Ok(keys) => existing_keys = keys,
            Err(e) => {
                tracing::warn!(
                    path = %existing_path.display(),
                    error = %e,
                    "could not load existing export; skipping cross-file duplicate check"
                );
                report.warning(format!("Could not load existing file: {e}"));
            }
        }
    }

    match csv::Reader::from_path(path) {
        Ok(reader) => validate_reader(reader, &existing_keys, &mut report),
        Err(e) => report.error(format!("Could not read file: {e}")),
    }

    report
}

/// Validate an upload from any reader, e.g. an in-memory CSV.
///
/// `existing_keys` holds `"{goal_id}|{date}"` keys from a prior export;
/// pass an empty set to skip the cross-file duplicate check.
#[must_use]
pub fn validate_upload_reader<R: Read>(
    reader: csv::Reader<R>,
    existing_keys: &HashSet<String>,
) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_reader(reader, existing_keys, &mut report);
    report
}

fn load_existing_keys<R: Read>(mut reader: csv::Reader<R>) -> Result<HashSet<String>, csv::Error> {
    let headers = reader.headers()?.clone();
    let mut keys = HashSet::new();
    let (Some(goal_idx), Some(date_idx)) = (
        headers.iter().position(|h| h == "Unique Goal ID"),
        headers.iter().position(|h| h == "Target Start Date"),
    ) else {
        return Ok(keys);
    };

    for record in reader.records() {
        let record = record?;
        let goal_id = record.get(goal_idx).unwrap_or("").trim();
        let date = record.get(date_idx).unwrap_or("").trim();
        if !goal_id.is_empty() && !date.is_empty() {
            keys.insert(format!("{goal_id}|{date}"));
        }
    }
    Ok(keys)
}

fn validate_reader<R: Read>(
    mut reader: csv::Reader<R>,
    existing_keys: &HashSet<String>,
    report: &mut ValidationReport,
) {
    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(e) => {
            report.error(format!("Could not read file: {e}"));
            return;
        }
    };

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|required| !headers.iter().any(|h| h == *required))
        .collect();
    if !missing.is_empty() {
        report.error(format!("Missing required columns: {missing:?}"));
        return;
    }

    let rows: Vec<UploadRow> = match reader.deserialize().collect::<Result<_, csv::Error>>() {
        Ok(rows) => rows,
        Err(e) => {
            report.error(format!("Could not read file: {e}"));
            return;
        }
    };

    report.stats.total_rows = rows.len();

    let mut seen_keys: HashSet<String> = HashSet::new();
    let mut goal_values: BTreeMap<String, Vec<(String, f64)>> = BTreeMap::new();
    let mut quarters: BTreeMap<String, usize> = BTreeMap::new();

    for (i, row) in rows.iter().enumerate() {
        let row_num = i + 1;
        let goal_id = row.goal_id.trim();
        let date = row.date.trim();
        let value = row.value.trim();

        if goal_id.is_empty() {
            report.error(format!("Row {row_num}: Empty Goal ID"));
            continue;
        }
        let Some(parsed) = parse_goal_id(goal_id) else {
            report.error(format!("Row {row_num}: Invalid Goal ID format: {goal_id}"));
            continue;
        };

        *quarters.entry(parsed.quarter.to_string()).or_default() += 1;

        if let Err(e) = check_date(date) {
            report.error(format!("Row {row_num}: {e}"));
        }
        if let Err(e) = check_value(value, &parsed.metric) {
            report.error(format!("Row {row_num}: {e}"));
        }

        let key = format!("{goal_id}|{date}");
        if seen_keys.contains(&key) {
            report.error(format!(
                "Row {row_num}: Duplicate (Goal ID + Date): {goal_id}, {date}"
            ));
        }
        seen_keys.insert(key.clone());

        if existing_keys.contains(&key) {
            report.warning(format!(
                "Row {row_num}: Already exists in export: {goal_id}, {date}"
            ));
        }

        // A value that fails the precision rule still joins the series; the
        // walk-direction check should see what was actually uploaded.
        if let Ok(v) = value.parse::<f64>() {
            goal_values
                .entry(goal_id.to_string())
                .or_default()
                .push((date.to_string(), v));
        }
    }

    check_week_counts(&goal_values, report);
    check_walk_directions(&goal_values, report);

    report.stats.unique_goal_ids = goal_values.len();
    report.stats.quarters = quarters;
    let distinct = i64::try_from(seen_keys.len()).unwrap_or(i64::MAX);
    let expected = i64::try_from(goal_values.len() * EXPECTED_WEEKS).unwrap_or(i64::MAX);
    report.stats.duplicate_within_upload = distinct - expected;
    report.stats.would_duplicate_existing = seen_keys
        .iter()
        .filter(|key| existing_keys.contains(*key))
        .count();
}

fn check_week_counts(goal_values: &BTreeMap<String, Vec<(String, f64)>>, report: &mut ValidationReport) {
    let unusual: Vec<(&str, usize)> = goal_values
        .iter()
        .filter(|(_, values)| values.len() != EXPECTED_WEEKS)
        .map(|(goal_id, values)| (goal_id.as_str(), values.len()))
        .collect();

    for (goal_id, count) in unusual.iter().take(MAX_WEEK_COUNT_WARNINGS) {
        report.warning(format!(
            "Unexpected week count for {goal_id}: {count} (expected {EXPECTED_WEEKS})"
        ));
    }
    if unusual.len() > MAX_WEEK_COUNT_WARNINGS {
        report.warning(format!(
            "...and {} more with unusual counts",
            unusual.len() - MAX_WEEK_COUNT_WARNINGS
        ));
    }
}

fn check_walk_directions(
    goal_values: &BTreeMap<String, Vec<(String, f64)>>,
    report: &mut ValidationReport,
) {
    let mut direction_errors = Vec::new();

    for (goal_id, values) in goal_values {
        if values.len() < 2 {
            continue;
        }
        // Dates are YYYY-MM-DD, so lexicographic order is chronological.
        let mut sorted = values.clone();
        sorted.sort_by(|a, b| a.0.cmp(&b.0));
        let series: Vec<f64> = sorted.iter().map(|(_, v)| *v).collect();

        let Some(metric) = parse_goal_id(goal_id).and_then(|p| p.metric_kind()) else {
            continue;
        };

        let check = validate_walk_direction(metric, &series);
        if let (false, Some(direction)) = (check.valid, check.direction) {
            let places = if metric.is_percentage() { 3 } else { 2 };
            let first = series[0];
            let last = series[series.len() - 1];
            direction_errors.push(format!(
                "{goal_id}: {metric} walks {direction} ({first:.places$} \u{2192} {last:.places$})"
            ));
        }
    }

    for err in direction_errors.iter().take(MAX_DIRECTION_ERRORS) {
        report.error(format!("Wrong direction: {err}"));
    }
    if direction_errors.len() > MAX_DIRECTION_ERRORS {
        report.error(format!(
            "...and {} more direction errors",
            direction_errors.len() - MAX_DIRECTION_ERRORS
        ));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[path = "upload_test.rs"]
mod tests;
