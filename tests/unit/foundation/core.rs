use super::*;

#[test]
fn hex_parses_short_long_and_alpha_forms() {
    assert_eq!(Rgba8::from_hex("#fff").unwrap(), Rgba8::rgb(255, 255, 255));
    assert_eq!(Rgba8::from_hex("0a141e").unwrap(), Rgba8::rgb(10, 20, 30));
    assert_eq!(
        Rgba8::from_hex("#0a141e80").unwrap(),
        Rgba8::rgba(10, 20, 30, 128)
    );
}

#[test]
fn hex_rejects_bad_input() {
    assert!(Rgba8::from_hex("#12").is_err());
    assert!(Rgba8::from_hex("#zzzzzz").is_err());
    assert!(Rgba8::from_hex("#ééé").is_err());
}

#[test]
fn hex_serde_is_stable() {
    let c = Rgba8::rgba(1, 2, 3, 4);
    let s = serde_json::to_string(&c).unwrap();
    assert_eq!(s, "\"#01020304\"");
    let back: Rgba8 = serde_json::from_str(&s).unwrap();
    assert_eq!(back, c);
    assert_eq!(Rgba8::rgb(255, 0, 16).to_string(), "#ff0010");
}

#[test]
fn transition_zero_duration_counts_as_disabled() {
    assert!(TransitionMode::Disabled.is_disabled());
    assert!(TransitionMode::Smooth { duration_ms: 0 }.is_disabled());
    assert_eq!(
        TransitionMode::Smooth { duration_ms: 300 }.duration(),
        Some(std::time::Duration::from_millis(300))
    );
}
