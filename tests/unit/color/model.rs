use super::*;

#[test]
fn hex_is_lowercase_and_drops_alpha() {
    let c = Color::from_rgba8(0xAB, 0xCD, 0xEF, 10);
    assert_eq!(c.to_hex(), "#abcdef");
}

#[test]
fn midpoint_mix_of_opaque_colors_averages() {
    let left = Color::parse("#00e1ff").unwrap();
    let right = Color::parse("#0000ff").unwrap();
    let mixed = left.mix(right, 0.5);
    assert!(mixed.is_opaque());
    assert_eq!(mixed.to_css(), "#0071ff");
}

#[test]
fn mix_with_transparent_keeps_opaque_hue_and_averages_alpha() {
    let red = Color::parse("#ff0000").unwrap();
    let clear = Color::parse("rgba(0, 0, 255, 0)").unwrap();
    let mixed = red.mix(clear, 0.5);
    assert_eq!(mixed.to_rgb8(), [255, 0, 0]);
    assert!((mixed.a - 0.5).abs() < 1e-9);
    assert_eq!(mixed.to_css(), "rgba(255, 0, 0, 0.5)");
}

#[test]
fn mix_weight_endpoints() {
    let a = Color::parse("#102030").unwrap();
    let b = Color::parse("#405060").unwrap();
    assert_eq!(a.mix(b, 0.0).to_hex(), "#102030");
    assert_eq!(a.mix(b, 1.0).to_hex(), "#405060");
}

#[test]
fn blend_css_colors_falls_back_on_parse_failure() {
    assert_eq!(blend_css_colors("#ff0000", "bogus"), FALLBACK_BLEND_COLOR);
    assert_eq!(blend_css_colors("#000000", "#ffffff"), "#808080");
}

#[test]
fn from_str_matches_parse() {
    let c: Color = "#336699".parse().unwrap();
    assert_eq!(c, Color::parse("#336699").unwrap());
}
