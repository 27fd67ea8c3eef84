//! The `interpolate` subcommand: single-value and series modes.

use std::process::ExitCode;

use goaling_core::{
    interpolate_series, interpolate_week1, validate_walk_direction, Metric, WalkCheck,
    MINUTES_STEP, PERCENTAGE_STEP,
};

pub(crate) fn run(
    metric: &str,
    week2: Option<f64>,
    values: Option<&str>,
    validate: bool,
    json: bool,
) -> anyhow::Result<ExitCode> {
    let metric: Metric = metric.parse()?;

    if let Some(week2) = week2 {
        run_single(metric, week2, json)?;
        return Ok(ExitCode::SUCCESS);
    }
    if let Some(values) = values {
        run_series(metric, values, validate, json)?;
        return Ok(ExitCode::SUCCESS);
    }
    crate::subcommand_help("interpolate")
}

fn run_single(metric: Metric, week2: f64, json: bool) -> anyhow::Result<()> {
    let week1 = interpolate_week1(metric, week2);
    let step = if metric.is_percentage() {
        PERCENTAGE_STEP
    } else {
        MINUTES_STEP
    };

    if json {
        let payload = serde_json::json!({
            "metric": metric,
            "week2": week2,
            "week1_interpolated": week1,
            "step": step,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        let sign = if metric.is_percentage() { '-' } else { '+' };
        println!("Week 1 (interpolated): {week1}");
        println!("Week 2: {week2}");
        println!("Step applied: {sign}{step}");
    }
    Ok(())
}

fn run_series(metric: Metric, values: &str, validate: bool, json: bool) -> anyhow::Result<()> {
    let original = parse_values(values)?;
    let interpolated = interpolate_series(metric, &original);

    let check: Option<WalkCheck> = validate.then(|| {
        let clean: Vec<f64> = interpolated.iter().copied().flatten().collect();
        validate_walk_direction(metric, &clean)
    });

    if json {
        let mut payload = serde_json::json!({
            "metric": metric,
            "original": original,
            "interpolated": interpolated,
        });
        if let Some(check) = &check {
            payload["validation"] = serde_json::to_value(check)?;
        }
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("Original: {}", format_series(&original));
        println!("Interpolated: {}", format_series(&interpolated));
        if let Some(check) = &check {
            let direction = check
                .direction
                .map_or_else(|| "N/A".to_string(), |d| d.to_string());
            if check.valid {
                println!("Direction: {direction} \u{2713}");
            } else {
                println!(
                    "Direction: {direction} \u{2717} - {}",
                    check.message.as_deref().unwrap_or_default()
                );
            }
        }
    }
    Ok(())
}

/// Parse a comma-separated series; `None` (any case) and empty tokens are
/// missing values.
fn parse_values(raw: &str) -> anyhow::Result<Vec<Option<f64>>> {
    raw.split(',')
        .map(|token| {
            let token = token.trim();
            if token.is_empty() || token.eq_ignore_ascii_case("none") {
                Ok(None)
            } else {
                token
                    .parse::<f64>()
                    .map(Some)
                    .map_err(|_| anyhow::anyhow!("invalid value in series: '{token}'"))
            }
        })
        .collect()
}

fn format_series(values: &[Option<f64>]) -> String {
    let parts: Vec<String> = values
        .iter()
        .map(|v| v.map_or_else(|| "None".to_string(), |v| v.to_string()))
        .collect();
    format!("[{}]", parts.join(", "))
}
