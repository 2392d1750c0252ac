use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        HueforgeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(HueforgeError::render("x").to_string().contains("render error:"));
    assert!(HueforgeError::encode("x").to_string().contains("encode error:"));
    assert!(HueforgeError::io("x").to_string().contains("io error:"));
    assert!(
        HueforgeError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = HueforgeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
