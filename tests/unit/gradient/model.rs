use super::*;

#[test]
fn default_spec_matches_initial_editor_state() {
    let spec = GradientSpec::default();
    let stops: Vec<(&str, f64)> = spec
        .stops()
        .iter()
        .map(|s| (s.color.as_str(), s.position))
        .collect();
    assert_eq!(stops, vec![("#00e1ff", 0.0), ("#0000ff", 100.0)]);
    assert_eq!(spec.shape, GradientShape::Linear);
    assert_eq!(spec.angle, 90.0);
    assert!(!spec.noise.is_active());
    assert!(!spec.blur.is_active());
    spec.validate().unwrap();
}

#[test]
fn from_parts_sorts_and_assigns_unique_ids() {
    let spec = GradientSpec::from_parts(
        [("#fff", 80.0), ("#000", 10.0), ("#f00", 50.0)],
        GradientShape::Radial,
        0.0,
        EffectToggle::default(),
        EffectToggle::default(),
    );
    let positions: Vec<f64> = spec.stops().iter().map(|s| s.position).collect();
    assert_eq!(positions, vec![10.0, 50.0, 80.0]);
    let mut ids: Vec<StopId> = spec.stops().iter().map(|s| s.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[test]
fn toggle_active_requires_enabled_and_positive_amount() {
    assert!(!EffectToggle::off(10.0).is_active());
    assert!(!EffectToggle::on(0.0).is_active());
    assert_eq!(EffectToggle::on(4.0).active_amount(), Some(4.0));
}

#[test]
fn validate_rejects_out_of_range_values() {
    let mut spec = GradientSpec::default();
    spec.stops[0].position = 120.0;
    assert!(spec.validate().is_err());

    let mut spec = GradientSpec::default();
    spec.noise = EffectToggle::on(500.0);
    assert!(spec.validate().is_err());

    let mut spec = GradientSpec::default();
    spec.blur = EffectToggle::on(51.0);
    assert!(spec.validate().is_err());

    let mut spec = GradientSpec::default();
    spec.stops[1].color = "nope".to_owned();
    assert!(spec.validate().is_err());

    let mut spec = GradientSpec::default();
    spec.stops.truncate(1);
    assert!(spec.validate().is_err());
}

#[test]
fn json_roundtrip_keeps_ids_and_fills_missing_ones() {
    let json = r##"{
        "stops": [
            { "id": 7, "color": "#ff0000", "position": 100 },
            { "color": "#00ff00", "position": 0 }
        ],
        "shape": "radial",
        "blur": { "enabled": true, "amount": 8 }
    }"##;
    let mut spec = GradientSpec::from_json_str(json).unwrap();
    assert!(spec.is_radial());
    assert_eq!(spec.angle, 90.0);
    assert_eq!(spec.stops()[0].color, "#00ff00");
    assert_eq!(spec.stops()[0].id, StopId(8));
    assert_eq!(spec.stops()[1].id, StopId(7));
    assert_eq!(spec.fresh_id(), StopId(9));

    let back = GradientSpec::from_json_str(&spec.to_json_pretty().unwrap()).unwrap();
    assert_eq!(back.stops(), spec.stops());
    assert_eq!(back.blur, EffectToggle::on(8.0));
}

#[test]
fn json_rejects_duplicate_ids_and_invalid_specs() {
    let dup = r##"{ "stops": [
        { "id": 1, "color": "#000", "position": 0 },
        { "id": 1, "color": "#fff", "position": 100 }
    ] }"##;
    assert!(matches!(
        GradientSpec::from_json_str(dup),
        Err(HueforgeError::Serde(_))
    ));

    let single = r##"{ "stops": [ { "color": "#000", "position": 0 } ] }"##;
    assert!(matches!(
        GradientSpec::from_json_str(single),
        Err(HueforgeError::Validation(_))
    ));
}
