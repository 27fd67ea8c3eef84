//! The `validate` subcommand: run the upload checks and print the report.

use std::path::Path;
use std::process::ExitCode;

use goaling_validate::validate_upload;

const MAX_PRINTED_ERRORS: usize = 20;
const MAX_PRINTED_WARNINGS: usize = 10;

pub(crate) fn run(
    filepath: &Path,
    existing: Option<&Path>,
    json: bool,
) -> anyhow::Result<ExitCode> {
    let report = validate_upload(filepath, existing);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        if report.valid {
            println!("\u{2713} VALID");
        } else {
            println!("\u{2717} INVALID");
        }

        println!("\nStats:");
        println!("  total_rows: {}", report.stats.total_rows);
        println!("  unique_goal_ids: {}", report.stats.unique_goal_ids);
        for (quarter, count) in &report.stats.quarters {
            println!("  {quarter}: {count} rows");
        }
        println!(
            "  duplicate_within_upload: {}",
            report.stats.duplicate_within_upload
        );
        println!(
            "  would_duplicate_existing: {}",
            report.stats.would_duplicate_existing
        );

        if !report.errors.is_empty() {
            println!("\nErrors ({}):", report.errors.len());
            for error in report.errors.iter().take(MAX_PRINTED_ERRORS) {
                println!("  \u{2717} {error}");
            }
            if report.errors.len() > MAX_PRINTED_ERRORS {
                println!(
                    "  ... and {} more errors",
                    report.errors.len() - MAX_PRINTED_ERRORS
                );
            }
        }

        if !report.warnings.is_empty() {
            println!("\nWarnings ({}):", report.warnings.len());
            for warning in report.warnings.iter().take(MAX_PRINTED_WARNINGS) {
                println!("  \u{26a0} {warning}");
            }
            if report.warnings.len() > MAX_PRINTED_WARNINGS {
                println!(
                    "  ... and {} more warnings",
                    report.warnings.len() - MAX_PRINTED_WARNINGS
                );
            }
        }
    }

    Ok(if report.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
