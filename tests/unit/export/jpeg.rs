use super::*;

fn solid(w: u32, h: u32, px: [u8; 4]) -> FrameRGBA {
    FrameRGBA {
        width: w,
        height: h,
        data: px.repeat((w * h) as usize),
        premultiplied: false,
    }
}

#[test]
fn flatten_opaque_is_identity() {
    let rgb = flatten_to_rgb8(&solid(2, 1, [10, 20, 30, 255]), [200, 200, 200, 255]).unwrap();
    assert_eq!(rgb, vec![10, 20, 30, 10, 20, 30]);
}

#[test]
fn flatten_transparent_returns_background() {
    let rgb = flatten_to_rgb8(&solid(1, 1, [255, 0, 0, 0]), [1, 2, 3, 255]).unwrap();
    assert_eq!(rgb, vec![1, 2, 3]);
}

#[test]
fn flatten_half_alpha_blends_straight_input() {
    let rgb = flatten_to_rgb8(&solid(1, 1, [255, 0, 0, 128]), [0, 0, 0, 255]).unwrap();
    assert_eq!(rgb, vec![128, 0, 0]);
}

#[test]
fn flatten_rejects_short_buffer() {
    let mut f = solid(2, 2, [0, 0, 0, 255]);
    f.data.pop();
    assert!(flatten_to_rgb8(&f, [0, 0, 0, 255]).is_err());
}

#[test]
fn encode_produces_decodable_jpeg_of_same_size() {
    let bytes = encode_jpeg(&solid(16, 8, [0, 225, 255, 255]), DEFAULT_JPEG_QUALITY, [0, 0, 0, 255])
        .unwrap();
    assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    let img = image::load_from_memory_with_format(&bytes, image::ImageFormat::Jpeg).unwrap();
    assert_eq!((img.width(), img.height()), (16, 8));
    let px = img.to_rgb8().get_pixel(4, 4).0;
    assert!(px[0] < 12 && (px[1] as i32 - 225).abs() < 12 && px[2] > 243, "{px:?}");
}

#[test]
fn encode_rejects_out_of_range_quality() {
    let f = solid(1, 1, [0, 0, 0, 255]);
    assert!(encode_jpeg(&f, 0, [0, 0, 0, 255]).is_err());
    assert!(encode_jpeg(&f, 101, [0, 0, 0, 255]).is_err());
}
