use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        DaylightError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        DaylightError::config("x")
            .to_string()
            .contains("config error:")
    );
    assert!(
        DaylightError::image("x")
            .to_string()
            .contains("image error:")
    );
    assert!(
        DaylightError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn missing_container_names_the_consumer() {
    let msg = DaylightError::missing_container("SnapSlider").to_string();
    assert!(msg.contains("missing time state container"));
    assert!(msg.contains("SnapSlider"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = DaylightError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
