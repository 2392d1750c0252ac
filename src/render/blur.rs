use crate::foundation::error::{HueforgeError, HueforgeResult};
use rayon::prelude::*;

/// Widths of three successive box filters approximating a Gaussian of `sigma`.
///
/// Widths are odd so every box stays centred on its pixel, and chosen so the summed box
/// variances land as close to `sigma²` as odd widths allow. Returns `[1, 1, 1]` (identity)
/// for non-positive or non-finite `sigma`.
pub(crate) fn box_widths_for_sigma(sigma: f64) -> [u32; 3] {
    if !sigma.is_finite() || sigma <= 0.0 {
        return [1, 1, 1];
    }
    let n = 3.0;
    let ideal = (12.0 * sigma * sigma / n + 1.0).sqrt();
    let mut lower = ideal.floor() as u32;
    if lower % 2 == 0 {
        lower -= 1;
    }
    let upper = lower + 2;

    let wl = f64::from(lower);
    let m = ((12.0 * sigma * sigma - n * wl * wl - 4.0 * n * wl - 3.0 * n) / (-4.0 * wl - 4.0))
        .round()
        .clamp(0.0, n) as usize;

    let mut widths = [upper; 3];
    for w in widths.iter_mut().take(m) {
        *w = lower;
    }
    widths
}

/// Gaussian-style blur over premultiplied RGBA8 with edge clamping.
///
/// Three running-sum box passes per axis, so the cost per pixel does not depend on
/// `sigma`.
pub(crate) fn blur_rgba8_premul(
    src: &[u8],
    width: u32,
    height: u32,
    sigma: f64,
) -> HueforgeResult<Vec<u8>> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| HueforgeError::render("blur buffer size overflow"))?;
    if src.len() != expected_len {
        return Err(HueforgeError::render(
            "blur_rgba8_premul expects src matching width*height*4",
        ));
    }

    let widths = box_widths_for_sigma(sigma);
    if widths == [1, 1, 1] || width == 0 || height == 0 {
        return Ok(src.to_vec());
    }

    let mut cur = src.to_vec();
    let mut scratch = vec![0u8; expected_len];
    box_passes(&mut cur, &mut scratch, width, &widths);

    // Columns become rows so the vertical passes reuse the row kernel.
    let mut cols = transpose(&cur, width, height);
    box_passes(&mut cols, &mut scratch, height, &widths);
    Ok(transpose(&cols, height, width))
}

fn box_passes(buf: &mut Vec<u8>, scratch: &mut Vec<u8>, row_len: u32, widths: &[u32; 3]) {
    for &w in widths {
        if w <= 1 {
            continue;
        }
        box_rows(buf, scratch, row_len, (w - 1) / 2);
        std::mem::swap(buf, scratch);
    }
}

fn box_rows(src: &[u8], dst: &mut [u8], row_len: u32, radius: u32) {
    let stride = (row_len as usize) * 4;
    let n = i64::from(row_len);
    let r = i64::from(radius);
    let window = 2 * radius + 1;
    let half = window / 2;

    dst.par_chunks_exact_mut(stride)
        .zip(src.par_chunks_exact(stride))
        .for_each(|(dst_row, src_row)| {
            let at = |i: i64| (i.clamp(0, n - 1) as usize) * 4;

            let mut sum = [0u32; 4];
            for k in -r..=r {
                let i = at(k);
                for c in 0..4 {
                    sum[c] += u32::from(src_row[i + c]);
                }
            }

            for x in 0..n {
                let o = (x as usize) * 4;
                for c in 0..4 {
                    dst_row[o + c] = ((sum[c] + half) / window) as u8;
                }
                let add = at(x + r + 1);
                let sub = at(x - r);
                for c in 0..4 {
                    sum[c] = sum[c] + u32::from(src_row[add + c]) - u32::from(src_row[sub + c]);
                }
            }
        });
}

/// Swap rows and columns of a `width x height` RGBA8 image.
fn transpose(src: &[u8], width: u32, height: u32) -> Vec<u8> {
    let (w, h) = (width as usize, height as usize);
    let mut out = vec![0u8; src.len()];
    out.par_chunks_exact_mut(h * 4)
        .enumerate()
        .for_each(|(x, out_row)| {
            for y in 0..h {
                let s = (y * w + x) * 4;
                out_row[y * 4..y * 4 + 4].copy_from_slice(&src[s..s + 4]);
            }
        });
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/blur.rs"]
mod tests;
