use super::*;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |k: &str| map.get(k).cloned()
}

#[test]
fn defaults() {
    let opts = SessionOpts::default();
    assert_eq!((opts.preview_width, opts.preview_height), (1000, 1000));
    assert_eq!(opts.jpeg.quality, 95);
    assert_eq!(opts.jpeg.bg_rgba, [0, 0, 0, 255]);
}

#[test]
fn env_overrides_size_and_quality() {
    let opts = SessionOpts::from_lookup(lookup(&[
        ("HUEFORGE_PREVIEW_SIZE", "640x360"),
        ("HUEFORGE_JPEG_QUALITY", "80"),
    ]));
    assert_eq!((opts.preview_width, opts.preview_height), (640, 360));
    assert_eq!(opts.jpeg.quality, 80);

    let square = SessionOpts::from_lookup(lookup(&[("HUEFORGE_PREVIEW_SIZE", " 256 ")]));
    assert_eq!((square.preview_width, square.preview_height), (256, 256));
}

#[test]
fn malformed_env_values_are_ignored() {
    for (size, quality) in [("0x10", "0"), ("wide", "101"), ("10x", "high"), ("", "-1")] {
        let opts = SessionOpts::from_lookup(lookup(&[
            ("HUEFORGE_PREVIEW_SIZE", size),
            ("HUEFORGE_JPEG_QUALITY", quality),
        ]));
        assert_eq!(opts, SessionOpts::default(), "size={size:?} quality={quality:?}");
    }
}

#[test]
fn builders_chain() {
    let opts = SessionOpts::default()
        .with_preview_size(32, 16)
        .with_jpeg_quality(70)
        .with_jpeg_background([255, 255, 255, 255]);
    assert_eq!((opts.preview_width, opts.preview_height), (32, 16));
    assert_eq!(opts.jpeg.quality, 70);
    assert_eq!(opts.jpeg.bg_rgba, [255, 255, 255, 255]);
}
