use super::*;

fn approx(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "expected {b}, got {a}");
}

#[test]
fn percentage_metrics_step_down_three_decimals() {
    approx(interpolate_week1(Metric::Dwr, 0.724), 0.721);
    approx(interpolate_week1(Metric::Fcr, 0.85), 0.847);
}

#[test]
fn aht_steps_up_two_decimals() {
    approx(interpolate_week1(Metric::Aht, 5.2), 5.5);
    approx(interpolate_week1(Metric::Aht, 5.234), 5.53);
}

#[test]
fn series_fills_missing_week1_only() {
    let filled = interpolate_series(Metric::Dwr, &[None, Some(0.724), Some(0.73)]);
    assert_eq!(filled, vec![Some(0.721), Some(0.724), Some(0.73)]);
}

#[test]
fn series_unchanged_when_week1_present() {
    let values = [Some(0.72), Some(0.724)];
    assert_eq!(interpolate_series(Metric::Dwr, &values), values.to_vec());
}

#[test]
fn series_unchanged_when_week2_missing() {
    let values = [None, None, Some(0.73)];
    assert_eq!(interpolate_series(Metric::Fcr, &values), values.to_vec());
}

#[test]
fn series_unchanged_for_interior_gaps() {
    let values = [Some(0.72), None, Some(0.73)];
    assert_eq!(interpolate_series(Metric::Fcr, &values), values.to_vec());
}

#[test]
fn empty_and_single_series_pass_through() {
    assert_eq!(interpolate_series(Metric::Aht, &[]), vec![]);
    assert_eq!(interpolate_series(Metric::Aht, &[None]), vec![None]);
}

#[test]
fn percentage_walk_up_is_valid() {
    let check = validate_walk_direction(Metric::Dwr, &[0.72, 0.71, 0.73]);
    assert!(check.valid);
    assert_eq!(check.direction, Some(WalkDirection::Up));
    approx(check.delta.unwrap(), 0.01);
    assert!(check.message.is_none());
}

#[test]
fn percentage_walk_down_is_invalid() {
    let check = validate_walk_direction(Metric::Fcr, &[0.85, 0.84]);
    assert!(!check.valid);
    assert_eq!(check.direction, Some(WalkDirection::Down));
    approx(check.delta.unwrap(), -0.01);
    let message = check.message.unwrap();
    assert!(message.contains("FCR should walk UP"), "{message}");
}

#[test]
fn aht_walk_down_is_valid() {
    let check = validate_walk_direction(Metric::Aht, &[5.5, 5.2]);
    assert!(check.valid);
    assert_eq!(check.direction, Some(WalkDirection::Down));
}

#[test]
fn aht_walk_up_is_invalid() {
    let check = validate_walk_direction(Metric::Aht, &[5.2, 5.5]);
    assert!(!check.valid);
    assert_eq!(check.direction, Some(WalkDirection::Up));
    approx(check.delta.unwrap(), 0.3);
}

#[test]
fn flat_series_is_valid_both_ways() {
    assert!(validate_walk_direction(Metric::Dwr, &[0.72, 0.72]).valid);
    assert!(validate_walk_direction(Metric::Aht, &[5.0, 5.0]).valid);
}

#[test]
fn short_series_is_trivially_valid() {
    for values in [&[][..], &[0.72][..]] {
        let check = validate_walk_direction(Metric::Dwr, values);
        assert!(check.valid);
        assert!(check.direction.is_none());
        assert!(check.message.is_some());
    }
}

#[test]
fn expected_directions() {
    assert_eq!(Metric::Dwr.expected_direction(), WalkDirection::Up);
    assert_eq!(Metric::Fcr.expected_direction(), WalkDirection::Up);
    assert_eq!(Metric::Aht.expected_direction(), WalkDirection::Down);
}
