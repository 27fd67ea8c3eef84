use super::*;

fn parse_ok(goal_id: &str) -> ParsedGoalId {
    parse_goal_id(goal_id).unwrap_or_else(|| panic!("expected '{goal_id}' to parse"))
}

#[test]
fn parses_simple_goal_id() {
    let parsed = parse_ok("BPO-Q1-2026-Weekly-Team-DWR---_Mainline-DxChat-Alorica");
    assert_eq!(parsed.quarter, Quarter::Q1);
    assert_eq!(parsed.year, "2026");
    assert_eq!(parsed.metric, "DWR");
    assert_eq!(parsed.metric_raw, "DWR");
    assert_eq!(parsed.lob, "Mainline");
    assert_eq!(parsed.queue, "DxChat");
    assert_eq!(parsed.partner, "Alorica");
    assert!(!parsed.is_merged_channel);
}

#[test]
fn parses_hyphenated_lob_and_normalizes_metric() {
    let parsed = parse_ok("BPO-Q2-2026-Weekly-Team-Contact AHT---_Dx Direct and Payments-DxChat-TaskUs");
    assert_eq!(parsed.quarter, Quarter::Q2);
    assert_eq!(parsed.metric, "AHT");
    assert_eq!(parsed.metric_raw, "Contact AHT");
    assert_eq!(parsed.lob, "Dx Direct and Payments");
    assert_eq!(parsed.queue, "DxChat");
    assert_eq!(parsed.partner, "TaskUs");
    assert!(parsed.is_merged_channel);
}

#[test]
fn parses_txfcr_as_fcr() {
    let parsed = parse_ok("BPO-Q1-2026-Weekly-Team-TxFCR---_Mainline-CxPhone-Concentrix");
    assert_eq!(parsed.metric, "FCR");
    assert_eq!(parsed.metric_raw, "TxFCR");
}

#[test]
fn parses_spanish_queue_variant() {
    let parsed = parse_ok("BPO-Q1-2026-Weekly-Team-DWR---_Mainline-DxChatSp-Alorica");
    assert_eq!(parsed.queue, "DxChatSp");
    assert_eq!(parsed.lob, "Mainline");
}

#[test]
fn unknown_queue_falls_back_to_last_token_split() {
    let parsed = parse_ok("BPO-Q1-2026-Weekly-Team-DWR---_Mainline-EmailQueue-Alorica");
    assert_eq!(parsed.lob, "Mainline");
    assert_eq!(parsed.queue, "EmailQueue");
    assert_eq!(parsed.partner, "Alorica");
}

#[test]
fn unknown_metric_passes_through() {
    let parsed = parse_ok("BPO-Q1-2026-Weekly-Team-CSAT---_Mainline-DxChat-Alorica");
    assert_eq!(parsed.metric, "CSAT");
    assert_eq!(parsed.metric_raw, "CSAT");
    assert_eq!(parsed.metric_kind(), None);
}

#[test]
fn merged_channel_lob_non_live() {
    let parsed = parse_ok("BPO-Q1-2026-Weekly-Team-DWR---_Non-Live/App Troubleshooting-CxChat-Alorica");
    assert_eq!(parsed.lob, "Non-Live/App Troubleshooting");
    assert!(parsed.is_merged_channel);
}

#[test]
fn rejects_missing_separator() {
    assert_eq!(parse_goal_id("BPO-Q1-2026-Weekly-Team-DWR_Mainline-DxChat-Alorica"), None);
}

#[test]
fn rejects_repeated_separator() {
    assert_eq!(parse_goal_id("BPO-Q1-2026---_Weekly-Team-DWR---_Mainline-DxChat-Alorica"), None);
}

#[test]
fn rejects_unknown_quarter() {
    assert_eq!(parse_goal_id("BPO-Q3-2026-Weekly-Team-DWR---_Mainline-DxChat-Alorica"), None);
}

#[test]
fn rejects_non_numeric_year() {
    assert_eq!(parse_goal_id("BPO-Q1-20X6-Weekly-Team-DWR---_Mainline-DxChat-Alorica"), None);
}

#[test]
fn rejects_truncated_year() {
    assert_eq!(parse_goal_id("BPO-Q1-26---_Mainline-DxChat-Alorica"), None);
}

#[test]
fn rejects_missing_metric_marker() {
    assert_eq!(parse_goal_id("BPO-Q1-2026-DWR---_Mainline-DxChat-Alorica"), None);
}

#[test]
fn rejects_suffix_without_enough_tokens() {
    assert_eq!(parse_goal_id("BPO-Q1-2026-Weekly-Team-DWR---_Alorica"), None);
}

#[test]
fn rejects_empty_input() {
    assert_eq!(parse_goal_id(""), None);
}

#[test]
fn round_trips_through_goal_id() {
    for id in [
        "BPO-Q1-2026-Weekly-Team-DWR---_Mainline-DxChat-Alorica",
        "BPO-Q2-2026-Weekly-Team-Contact AHT---_Dx Direct and Payments-DxChat-TaskUs",
        "BPO-Q1-2026-Weekly-Team-TxFCR---_Non-Live/App Troubleshooting-CxPhoneSp-Concentrix",
    ] {
        assert_eq!(parse_ok(id).goal_id(), id);
    }
}

#[test]
fn serializes_with_snake_case_fields() {
    let parsed = parse_ok("BPO-Q1-2026-Weekly-Team-DWR---_Mainline-DxChat-Alorica");
    let json = serde_json::to_value(&parsed).expect("serializable");
    assert_eq!(json["quarter"], "Q1");
    assert_eq!(json["metric_raw"], "DWR");
    assert_eq!(json["is_merged_channel"], false);
}
