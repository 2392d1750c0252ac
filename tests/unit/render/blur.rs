use super::*;

fn gaussian_rows_reference(src: &[u8], width: u32, sigma: f64) -> Vec<f64> {
    let r = (sigma * 4.0).ceil() as i64;
    let weights: Vec<f64> = (-r..=r)
        .map(|i| (-(i * i) as f64 / (2.0 * sigma * sigma)).exp())
        .collect();
    let total: f64 = weights.iter().sum();
    let w = i64::from(width);
    let stride = (width as usize) * 4;

    let mut out = vec![0.0; src.len()];
    for (row_in, row_out) in src.chunks_exact(stride).zip(out.chunks_exact_mut(stride)) {
        for x in 0..w {
            for c in 0..4 {
                let mut acc = 0.0;
                for (k, wt) in (-r..=r).zip(&weights) {
                    let sx = (x + k).clamp(0, w - 1) as usize;
                    acc += wt * f64::from(row_in[sx * 4 + c]);
                }
                row_out[x as usize * 4 + c] = acc / total;
            }
        }
    }
    out
}

fn step_image(width: u32, height: u32) -> Vec<u8> {
    let mut src = Vec::with_capacity((width * height * 4) as usize);
    for _ in 0..height {
        for x in 0..width {
            let v = if x < width / 2 { 0 } else { 255 };
            src.extend_from_slice(&[v, v, v, 255]);
        }
    }
    src
}

#[test]
fn zero_or_invalid_sigma_is_identity() {
    let src = vec![1u8, 2, 3, 4, 5, 6, 7, 8];
    assert_eq!(blur_rgba8_premul(&src, 1, 2, 0.0).unwrap(), src);
    assert_eq!(blur_rgba8_premul(&src, 1, 2, f64::NAN).unwrap(), src);
    assert_eq!(blur_rgba8_premul(&src, 2, 1, -3.0).unwrap(), src);
}

#[test]
fn constant_image_is_identity() {
    let (w, h) = (7u32, 3u32);
    let px = [10u8, 20u8, 30u8, 40u8];
    let src = px.repeat((w * h) as usize);
    assert_eq!(blur_rgba8_premul(&src, w, h, 2.0).unwrap(), src);
    // Windows far wider than the image still clamp to the edge.
    assert_eq!(blur_rgba8_premul(&src, w, h, 50.0).unwrap(), src);
}

#[test]
fn spreads_energy_from_single_pixel() {
    let (w, h) = (5u32, 5u32);
    let mut src = vec![0u8; (w * h * 4) as usize];
    let center = ((2 * w + 2) * 4) as usize;
    src[center..center + 4].copy_from_slice(&[255, 255, 255, 255]);

    let out = blur_rgba8_premul(&src, w, h, 1.2).unwrap();

    let nonzero = out.chunks_exact(4).filter(|px| px[3] != 0).count();
    assert!(nonzero > 1);

    let sum_a: u32 = out.chunks_exact(4).map(|px| u32::from(px[3])).sum();
    assert!((sum_a as i32 - 255).abs() <= 4, "alpha sum {sum_a}");
}

#[test]
fn rejects_mismatched_buffer() {
    assert!(blur_rgba8_premul(&[0u8; 7], 1, 2, 1.0).is_err());
}

#[test]
fn box_widths_are_odd_and_track_sigma() {
    assert_eq!(box_widths_for_sigma(0.0), [1, 1, 1]);
    assert_eq!(box_widths_for_sigma(1.2), [1, 3, 3]);
    assert_eq!(box_widths_for_sigma(50.0), [99, 99, 101]);

    for sigma in [2.0f64, 5.0, 12.0, 30.0, 50.0] {
        let widths = box_widths_for_sigma(sigma);
        assert!(widths.iter().all(|w| w % 2 == 1), "{widths:?}");
        let variance: f64 = widths
            .iter()
            .map(|&w| (f64::from(w) * f64::from(w) - 1.0) / 12.0)
            .sum();
        let rel = (variance - sigma * sigma).abs() / (sigma * sigma);
        let tolerance = if sigma >= 10.0 { 0.05 } else { 0.2 };
        assert!(rel <= tolerance, "sigma {sigma}: variance {variance}");
    }
}

#[test]
fn step_edge_matches_reference_gaussian() {
    for (w, sigma) in [(64u32, 4.0f64), (160, 12.0)] {
        let h = 3;
        let src = step_image(w, h);
        let out = blur_rgba8_premul(&src, w, h, sigma).unwrap();
        let reference = gaussian_rows_reference(&src, w, sigma);

        let mut max = 0.0f64;
        let mut sum = 0.0f64;
        for (a, b) in out.iter().zip(&reference) {
            let d = (f64::from(*a) - b).abs();
            max = max.max(d);
            sum += d;
        }
        let mean = sum / out.len() as f64;
        assert!(max <= 4.0, "sigma {sigma}: max diff {max}");
        assert!(mean <= 1.0, "sigma {sigma}: mean diff {mean}");
    }
}

#[test]
fn keeps_premultiplied_channels_within_alpha() {
    let (w, h) = (9u32, 6u32);
    let mut src = Vec::with_capacity((w * h * 4) as usize);
    for i in 0..(w * h) {
        let a = ((i * 37) % 256) as u8;
        let c = ((u32::from(a) * ((i * 11) % 10)) / 9) as u8;
        src.extend_from_slice(&[c, a / 2, a, a]);
    }
    let out = blur_rgba8_premul(&src, w, h, 2.5).unwrap();
    for px in out.chunks_exact(4) {
        assert!(px[0] <= px[3] && px[1] <= px[3] && px[2] <= px[3], "{px:?}");
    }
}

#[test]
fn transpose_swaps_axes() {
    // 2x1 image -> 1x2 image.
    let src = [1u8, 2, 3, 4, 5, 6, 7, 8];
    assert_eq!(transpose(&src, 2, 1), src.to_vec());
    let src = [1u8, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 5, 6, 6, 6, 6];
    // 3 wide, 2 tall: rows [1 2 3] [4 5 6] -> rows [1 4] [2 5] [3 6].
    let t = transpose(&src, 3, 2);
    let firsts: Vec<u8> = t.chunks_exact(4).map(|p| p[0]).collect();
    assert_eq!(firsts, vec![1, 4, 2, 5, 3, 6]);
}
