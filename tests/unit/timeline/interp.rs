use super::*;
use crate::timeline::anchors::ANCHORS;

#[test]
fn boundaries_return_exact_anchor_values() {
    let noon = time_info(0.0);
    assert_eq!(noon.illuminance, 480);
    assert_eq!(noon.color_temperature_k, 4400);
    assert_eq!(noon.hour, 12);
    assert_eq!(noon.label, "12pm");

    let midnight = time_info(1.0);
    assert_eq!(midnight.illuminance, 80);
    assert_eq!(midnight.color_temperature_k, 2700);
    assert_eq!(midnight.hour, 24);
    assert_eq!(midnight.label, "12am");
}

#[test]
fn every_anchor_position_reproduces_its_readings() {
    for a in &ANCHORS {
        let info = time_info(a.position);
        assert_eq!(info.illuminance, a.illuminance, "at {}", a.position);
        assert_eq!(info.color_temperature_k, a.color_temperature_k);
        assert_eq!(info.hour, a.hour24);
        assert_eq!(info.label, a.hour_label);
    }
}

#[test]
fn label_snaps_while_numbers_interpolate() {
    let info = time_info(0.165);
    assert_eq!(info.label, "12pm");
    assert!(info.illuminance > 380 && info.illuminance < 480);
    assert!(info.color_temperature_k > 4000 && info.color_temperature_k < 4400);
}

#[test]
fn readings_are_non_increasing_across_domain() {
    let mut prev = time_info(0.0);
    for i in 1..=200 {
        let cur = time_info(f64::from(i) / 200.0);
        assert!(cur.illuminance <= prev.illuminance);
        assert!(cur.color_temperature_k <= prev.color_temperature_k);
        assert!(cur.hour >= prev.hour);
        prev = cur;
    }
}

#[test]
fn out_of_range_input_is_clamped_not_rejected() {
    assert_eq!(time_info(-3.0), time_info(0.0));
    assert_eq!(time_info(42.0), time_info(1.0));
    assert_eq!(time_info(f64::NAN), time_info(0.0));
}

#[test]
fn dark_mode_threshold_is_inclusive() {
    assert!(!is_dark_mode(0.0));
    assert!(!is_dark_mode(0.4999));
    assert!(is_dark_mode(0.5));
    assert!(is_dark_mode(1.0));
    assert!(!is_dark_mode(f64::NAN));
}

#[test]
fn serializes_with_camel_case_temperature() {
    let v = serde_json::to_value(time_info(0.0)).unwrap();
    assert_eq!(v["colorTemperatureK"], 4400);
    assert_eq!(v["label"], "12pm");
}
