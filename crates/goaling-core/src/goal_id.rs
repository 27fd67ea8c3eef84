//! Goal-id parsing.
//!
//! Goal ids follow the fixed layout
//! `BPO-{Quarter}-{Year}-Weekly-Team-{Metric}---_{LOB}-{Queue}-{Partner}`.
//! The `---_` separator between prefix and suffix is the only reliable
//! anchor; LOB names themselves contain hyphens, so the suffix is parsed
//! from the right.

use serde::Serialize;

use crate::metric::Metric;

/// Queue names that can appear between the LOB and the partner.
const KNOWN_QUEUES: [&str; 8] = [
    "CxChat", "CxPhone", "DxChat", "DxPhone", "CxChatSp", "CxPhoneSp", "DxChatSp", "DxPhoneSp",
];

/// LOBs whose initiative source reports Chat and Phone as one merged series.
const MERGED_CHANNEL_LOBS: [&str; 2] = ["Dx Direct and Payments", "Non-Live/App Troubleshooting"];

/// Reporting quarter carried in a goal id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Quarter {
    Q1,
    Q2,
}

impl Quarter {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Quarter::Q1 => "Q1",
            Quarter::Q2 => "Q2",
        }
    }
}

impl std::fmt::Display for Quarter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A goal id decomposed into its components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedGoalId {
    pub quarter: Quarter,
    /// Four-digit year, kept as text exactly as it appeared.
    pub year: String,
    /// Normalized metric name (`DWR`, `FCR`, `AHT`), or the raw string when
    /// the metric is not in the normalization table.
    pub metric: String,
    /// Metric exactly as written in the goal id (`TxFCR`, `Contact AHT`, ...).
    pub metric_raw: String,
    pub lob: String,
    pub queue: String,
    pub partner: String,
    pub is_merged_channel: bool,
}

impl ParsedGoalId {
    /// Reassemble the goal id string these components came from.
    #[must_use]
    pub fn goal_id(&self) -> String {
        format!(
            "BPO-{}-{}-Weekly-Team-{}---_{}-{}-{}",
            self.quarter, self.year, self.metric_raw, self.lob, self.queue, self.partner
        )
    }

    /// The normalized metric as a typed value, when it is one of the three
    /// known metrics.
    #[must_use]
    pub fn metric_kind(&self) -> Option<Metric> {
        self.metric.parse().ok()
    }
}

/// Parse a goal id into its components.
///
/// Returns `None` when the string does not follow the goal-id layout: the
/// `---_` separator is missing or repeated, the quarter marker is absent,
/// the year is not exactly four digits, the `Weekly-Team-` metric marker is
/// absent, or the suffix has too few tokens. An unrecognized metric name is
/// not a failure; it passes through un-normalized.
#[must_use]
pub fn parse_goal_id(goal_id: &str) -> Option<ParsedGoalId> {
    let parts: Vec<&str> = goal_id.split("---_").collect();
    let [prefix, suffix] = parts.as_slice() else {
        return None;
    };

    let quarter = if prefix.contains("-Q1-") {
        Quarter::Q1
    } else if prefix.contains("-Q2-") {
        Quarter::Q2
    } else {
        return None;
    };

    let marker = format!("-{quarter}-");
    let year_start = prefix.find(&marker)? + marker.len();
    let year = prefix.get(year_start..year_start + 4)?;
    if !year.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let metric_raw = prefix.split("Weekly-Team-").nth(1)?;
    let metric = Metric::from_goal_id_raw(metric_raw)
        .map_or_else(|| metric_raw.to_string(), |m| m.as_str().to_string());

    // Partner never contains a hyphen, so it is the last token.
    let (lob_queue, partner) = suffix.rsplit_once('-')?;

    // Longest known queue suffix wins; `DxChat` must not shadow `DxChatSp`.
    let mut matched_queue: Option<&str> = None;
    for q in KNOWN_QUEUES {
        if lob_queue.ends_with(&format!("-{q}"))
            && matched_queue.is_none_or(|best| q.len() > best.len())
        {
            matched_queue = Some(q);
        }
    }

    let (lob, queue) = match matched_queue {
        Some(q) => (&lob_queue[..lob_queue.len() - q.len() - 1], q),
        // Fallback for queues not in the fixed list: naive last-token split.
        None => lob_queue.rsplit_once('-')?,
    };

    Some(ParsedGoalId {
        quarter,
        year: year.to_string(),
        metric,
        metric_raw: metric_raw.to_string(),
        lob: lob.to_string(),
        queue: queue.to_string(),
        partner: partner.to_string(),
        is_merged_channel: MERGED_CHANNEL_LOBS.contains(&lob),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[path = "goal_id_test.rs"]
mod tests;
