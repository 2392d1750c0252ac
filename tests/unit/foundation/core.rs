use super::*;

#[test]
fn canvas_rejects_zero_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert_eq!(
        Canvas::new(3, 2).unwrap(),
        Canvas {
            width: 3,
            height: 2
        }
    );
}

#[test]
fn canvas_padding_grows_both_axes() {
    let c = Canvas::new(10, 4).unwrap().padded(3).unwrap();
    assert_eq!((c.width, c.height), (16, 10));
    assert_eq!(c.byte_len().unwrap(), 16 * 10 * 4);
}

#[test]
fn straight_alpha_recovers_opaque_and_translucent_channels() {
    let opaque = Rgba8Premul { r: 10, g: 200, b: 30, a: 255 };
    assert_eq!(opaque.to_straight_rgba(), [10, 200, 30, 255]);

    // 200, 100, 50 premultiplied by 128/255.
    let half = Rgba8Premul { r: 100, g: 50, b: 25, a: 128 };
    let back = half.to_straight_rgba();
    for (a, b) in back.iter().zip([200u8, 100, 50, 128]) {
        assert!((i32::from(*a) - i32::from(b)).abs() <= 2);
    }

    let clear = Rgba8Premul { r: 0, g: 0, b: 0, a: 0 };
    assert_eq!(clear.to_straight_rgba(), [0, 0, 0, 0]);
}
