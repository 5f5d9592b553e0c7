use super::*;

#[test]
fn fixed_points() {
    assert_eq!(clock_label(0.0), "12:00pm");
    assert_eq!(clock_label(0.25), "3:00pm");
    assert_eq!(clock_label(0.5), "6:00pm");
    assert_eq!(clock_label(1.0), "12:00am");
}

#[test]
fn minutes_are_rounded_and_padded() {
    // 0.1 * 720 = 72 minutes past noon.
    assert_eq!(clock_label(0.1), "1:12pm");
    // 1/720 of the cycle is one minute.
    assert_eq!(clock_label(1.0 / 720.0), "12:01pm");
    // 11:59pm just before midnight.
    assert_eq!(clock_label(719.0 / 720.0), "11:59pm");
}

#[test]
fn out_of_range_progress_is_clamped() {
    assert_eq!(clock_label(-0.2), "12:00pm");
    assert_eq!(clock_label(3.0), "12:00am");
    assert_eq!(clock_label(f64::NAN), "12:00pm");
}

#[test]
fn percent_readout() {
    assert_eq!(percent_label(0.0), "0%");
    assert_eq!(percent_label(0.256), "26%");
    assert_eq!(percent_label(1.0), "100%");
}

#[test]
fn range_maps_offsets() {
    let r = ScrollRange::new(100.0, 500.0);
    assert_eq!(r.progress(100.0), 0.0);
    assert_eq!(r.progress(300.0), 0.5);
    assert_eq!(r.progress(500.0), 1.0);
    assert_eq!(r.progress(0.0), 0.0);
    assert_eq!(r.progress(900.0), 1.0);
    assert_eq!(r.progress(f64::NAN), 0.0);
}

#[test]
fn zero_width_range_is_a_step() {
    let r = ScrollRange::new(50.0, 50.0);
    assert_eq!(r.progress(49.9), 0.0);
    assert_eq!(r.progress(50.0), 1.0);
}
