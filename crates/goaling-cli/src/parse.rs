//! The `parse` subcommand: single goal id or CSV batch mode.

use std::path::Path;
use std::process::ExitCode;

use goaling_core::{parse_goal_id, ParsedGoalId};

const MAX_LISTED_FAILURES: usize = 10;

pub(crate) fn run(
    goal_id: Option<&str>,
    file: Option<&Path>,
    column: &str,
    json: bool,
) -> anyhow::Result<ExitCode> {
    if let Some(goal_id) = goal_id {
        return run_single(goal_id, json);
    }
    if let Some(file) = file {
        run_file(file, column, json)?;
        return Ok(ExitCode::SUCCESS);
    }
    crate::subcommand_help("parse")
}

fn run_single(goal_id: &str, json: bool) -> anyhow::Result<ExitCode> {
    let Some(parsed) = parse_goal_id(goal_id) else {
        eprintln!("ERROR: Failed to parse Goal ID: {goal_id}");
        return Ok(ExitCode::FAILURE);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
    } else {
        println!("Quarter: {}", parsed.quarter);
        println!("Year: {}", parsed.year);
        println!("Metric: {} (raw: {})", parsed.metric, parsed.metric_raw);
        println!("LOB: {}", parsed.lob);
        println!("Queue: {}", parsed.queue);
        println!("Partner: {}", parsed.partner);
        println!("Merged Channel: {}", parsed.is_merged_channel);
    }
    Ok(ExitCode::SUCCESS)
}

fn run_file(file: &Path, column: &str, json: bool) -> anyhow::Result<()> {
    let mut reader = csv::Reader::from_path(file)?;
    let headers = reader.headers()?.clone();
    let Some(idx) = headers.iter().position(|h| h == column) else {
        anyhow::bail!("column '{column}' not found in {}", file.display());
    };

    let mut parsed: Vec<ParsedGoalId> = Vec::new();
    let mut failures: Vec<(usize, String)> = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let goal_id = record.get(idx).unwrap_or("").trim();
        if goal_id.is_empty() {
            continue;
        }
        match parse_goal_id(goal_id) {
            Some(p) => parsed.push(p),
            None => failures.push((i + 1, goal_id.to_string())),
        }
    }

    if json {
        let failures: Vec<serde_json::Value> = failures
            .iter()
            .map(|(row, goal_id)| serde_json::json!({ "row": row, "goal_id": goal_id }))
            .collect();
        let payload = serde_json::json!({ "parsed": parsed, "errors": failures });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("Parsed: {} Goal IDs", parsed.len());
        println!("Errors: {} Goal IDs", failures.len());
        if !failures.is_empty() {
            println!("\nFailed to parse:");
            for (row, goal_id) in failures.iter().take(MAX_LISTED_FAILURES) {
                println!("  Row {row}: {goal_id}");
            }
            if failures.len() > MAX_LISTED_FAILURES {
                println!("  ... and {} more", failures.len() - MAX_LISTED_FAILURES);
            }
        }
    }
    Ok(())
}
