use super::*;
use crate::gradient::model::EffectToggle;

const EPS: f64 = 1e-9;

#[test]
fn zero_degrees_is_vertical() {
    let (a, b) = linear_endpoints(0.0, 100.0, 100.0).unwrap();
    assert!((a.x - b.x).abs() < EPS);
    assert!((a.y - b.y).abs() > 100.0);
}

#[test]
fn ninety_degrees_is_horizontal() {
    let (a, b) = linear_endpoints(90.0, 100.0, 100.0).unwrap();
    assert!((a.y - b.y).abs() < EPS);
    assert!((a.x - b.x).abs() > 100.0);
}

#[test]
fn endpoints_are_symmetric_and_span_the_diagonal() {
    for angle in [0.0, 17.0, 42.0, 135.0, 200.0, 315.0] {
        let (a, b) = linear_endpoints(angle, 300.0, 120.0).unwrap();
        let mid = a.midpoint(b);
        assert!((mid.x - 150.0).abs() < EPS && (mid.y - 60.0).abs() < EPS);
        assert!(((a - b).hypot() - 300.0f64.hypot(120.0)).abs() < 1e-6);
    }
}

#[test]
fn offset_zero_sits_at_center_plus_direction() {
    let (a, b) = linear_endpoints(90.0, 100.0, 100.0).unwrap();
    assert!(a.x > b.x);
    let (top, bottom) = linear_endpoints(0.0, 100.0, 100.0).unwrap();
    assert!(top.y < bottom.y);
    let g = GradientGeometry::Linear { start: a, end: b };
    assert!((g.offset_at(a) - 0.0).abs() < EPS);
    assert!((g.offset_at(b) - 1.0).abs() < EPS);
}

#[test]
fn radial_uses_half_the_longer_side() {
    let (c, r) = radial_params(200.0, 80.0).unwrap();
    assert_eq!((c.x, c.y), (100.0, 40.0));
    assert_eq!(r, 100.0);

    let g = GradientGeometry::Radial {
        center: c,
        radius: r,
    };
    assert!((g.offset_at(Point::new(200.0, 40.0)) - 1.0).abs() < EPS);
    assert!(g.offset_at(c).abs() < EPS);
}

#[test]
fn non_positive_dimensions_are_rejected() {
    assert!(linear_endpoints(0.0, 0.0, 10.0).is_err());
    assert!(linear_endpoints(0.0, 10.0, -1.0).is_err());
    assert!(radial_params(f64::NAN, 10.0).is_err());
    assert!(linear_endpoints(f64::INFINITY, 10.0, 10.0).is_err());
}

#[test]
fn for_spec_follows_shape() {
    let mut spec = GradientSpec::default();
    assert!(matches!(
        GradientGeometry::for_spec(&spec, 10.0, 10.0).unwrap(),
        GradientGeometry::Linear { .. }
    ));
    spec.shape = GradientShape::Radial;
    spec.noise = EffectToggle::on(3.0);
    assert!(matches!(
        GradientGeometry::for_spec(&spec, 10.0, 10.0).unwrap(),
        GradientGeometry::Radial { .. }
    ));
}
