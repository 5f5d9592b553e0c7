use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn anchor_positions() -> Vec<f64> {
    ANCHORS.iter().map(|a| a.position).collect()
}

#[test]
fn snap_always_lands_on_an_anchor() {
    let positions = anchor_positions();
    for i in 0..=1000 {
        let raw = f64::from(i) / 10.0;
        let snapped = snap_raw(raw).position;
        assert!(positions.contains(&snapped), "raw {raw} -> {snapped}");
    }
}

#[test]
fn snap_is_idempotent() {
    for raw in [0.0, 12.0, 16.5, 40.0, 50.0, 66.0, 83.0, 99.0] {
        let once = snap_raw(raw).position;
        let twice = snap_raw(once * SLIDER_RANGE_MAX).position;
        assert_eq!(once, twice);
    }
}

#[test]
fn snap_clamps_out_of_range_raw() {
    assert_eq!(snap_raw(-20.0).position, 0.0);
    assert_eq!(snap_raw(250.0).position, 1.0);
    assert_eq!(snap_raw(f64::NAN).position, 0.0);
}

#[test]
fn release_commits_snapped_value_only() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let state = TimeState::new(0.0);
    let scope = Scope::provide(state.clone());
    let mut slider = SnapSlider::connected(&scope, SliderVariant::Labeled)
        .unwrap()
        .on_change(move |v| sink.borrow_mut().push(v));

    slider.pointer_down(10.0);
    slider.pointer_move(20.0);
    slider.pointer_move(58.0);
    // Nothing committed mid-gesture.
    assert_eq!(state.timeline(), 0.0);
    assert!(calls.borrow().is_empty());
    assert!((slider.display_value() - 0.58).abs() < 1e-12);

    let committed = slider.pointer_up(60.0).unwrap();
    assert_eq!(committed, 0.67);
    assert_eq!(state.timeline(), 0.67);
    assert_eq!(*calls.borrow(), vec![0.67]);
    assert!(!slider.is_dragging());
}

#[test]
fn cancel_discards_preview() {
    let mut slider = SnapSlider::local(0.33, SliderVariant::Compact);
    slider.pointer_down(95.0);
    slider.cancel();
    assert_eq!(slider.value(), 0.33);
    assert_eq!(slider.pointer_up(95.0), None);
}

#[test]
fn move_without_press_is_ignored() {
    let mut slider = SnapSlider::local(0.0, SliderVariant::Labeled);
    slider.pointer_move(80.0);
    assert!(!slider.is_dragging());
    assert_eq!(slider.display_value(), 0.0);
}

#[test]
fn both_variants_commit_identically() {
    for i in 0..=100 {
        let x = f64::from(i);
        let mut labeled = SnapSlider::local(0.0, SliderVariant::Labeled);
        let mut compact = SnapSlider::local(0.0, SliderVariant::Compact);
        assert_eq!(labeled.click(x), compact.click(x), "x = {x}");
    }
}

#[test]
fn track_geometry_maps_pointer_to_range() {
    let slider = SnapSlider::local(0.0, SliderVariant::Labeled)
        .with_track(Rect::new(200.0, 10.0, 600.0, 50.0));
    assert_eq!(slider.raw_from_x(200.0), 0.0);
    assert_eq!(slider.raw_from_x(400.0), 50.0);
    assert_eq!(slider.raw_from_x(600.0), 100.0);
    assert_eq!(slider.raw_from_x(10_000.0), 100.0);
    assert_eq!(slider.raw_from_x(-10_000.0), 0.0);
}

#[test]
fn zero_width_track_is_tolerated() {
    let mut slider =
        SnapSlider::local(0.5, SliderVariant::Labeled).with_track(Rect::new(5.0, 0.0, 5.0, 0.0));
    assert_eq!(slider.raw_from_x(5.0), 0.0);
    assert_eq!(slider.click(5.0), 0.0);
}

#[test]
fn local_slider_does_not_touch_shared_state() {
    let state = TimeState::new(0.0);
    let _scope = Scope::provide(state.clone());
    let mut preview = SnapSlider::local(0.0, SliderVariant::Compact);
    preview.click(100.0);
    assert_eq!(preview.value(), 1.0);
    assert_eq!(state.timeline(), 0.0);
}

#[test]
fn connected_outside_scope_is_an_error() {
    let err = SnapSlider::connected(&Scope::root(), SliderVariant::Labeled).unwrap_err();
    assert!(err.to_string().contains("SnapSlider"));
}

#[test]
fn step_walks_adjacent_anchors_and_saturates() {
    let mut slider = SnapSlider::local(0.0, SliderVariant::Labeled);
    assert_eq!(slider.step(1), 0.33);
    assert_eq!(slider.step(1), 0.67);
    assert_eq!(slider.step(1), 1.0);
    assert_eq!(slider.step(1), 1.0);
    assert_eq!(slider.step(-3), 0.0);
}

#[test]
fn drive_follows_signal_without_snapping_or_callbacks() {
    let calls = Rc::new(RefCell::new(0u32));
    let sink = Rc::clone(&calls);
    let mut slider = SnapSlider::local(0.0, SliderVariant::Compact)
        .with_transition(TransitionMode::Disabled)
        .on_change(move |_| *sink.borrow_mut() += 1);

    assert!(slider.drive(0.412));
    assert_eq!(slider.value(), 0.412);
    assert!(slider.drive(1.7));
    assert_eq!(slider.value(), 1.0);
    assert_eq!(*calls.borrow(), 0);
    assert!(slider.frame().transition.is_disabled());
}

#[test]
fn connected_slider_refuses_continuous_drive() {
    let state = TimeState::new(0.33);
    let mut slider = SnapSlider::connected(&Scope::provide(state.clone()), SliderVariant::Labeled)
        .unwrap();
    assert!(!slider.drive(0.412));
    assert_eq!(state.timeline(), 0.33);
    assert_eq!(state.revision(), 0);
}

#[test]
fn indicator_agrees_with_time_info_label() {
    for i in 0..=100 {
        let t = f64::from(i) / 100.0;
        let mut slider = SnapSlider::local(0.0, SliderVariant::Labeled);
        slider.drive(t);
        assert_eq!(
            slider.active_anchor().hour_label,
            crate::timeline::interp::time_info(t).label,
            "t = {t}"
        );
    }
}

#[test]
fn frame_marks_match_variant_and_highlight_nearest() {
    let slider = SnapSlider::local(0.67, SliderVariant::Compact)
        .with_track(Rect::new(0.0, 0.0, 300.0, 24.0));
    let frame = slider.frame();
    assert_eq!(frame.ticks.len(), 4);
    assert_eq!(frame.ticks[3].mark, TickMark::Icon(AnchorIcon::Moon));
    assert!(frame.ticks[2].active);
    assert_eq!(frame.ticks.iter().filter(|t| t.active).count(), 1);
    assert!((frame.knob_x - 201.0).abs() < 1e-9);

    let labeled = SnapSlider::local(0.0, SliderVariant::Labeled).frame();
    assert_eq!(labeled.ticks[1].mark, TickMark::Label("4pm"));
    assert!(labeled.ticks[0].active);
}

#[test]
fn frame_highlight_tracks_drag_preview() {
    let mut slider = SnapSlider::local(0.0, SliderVariant::Labeled);
    slider.pointer_down(90.0);
    let frame = slider.frame();
    assert!(frame.dragging);
    assert!(frame.ticks[3].active);
    // Committed indicator still reflects the stored value.
    assert_eq!(slider.active_anchor().hour_label, "12pm");
}
