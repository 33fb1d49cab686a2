//! Span interpolation and bilinear row resampling.
//!
//! Row resampling walks destination pixels at source positions
//! `x0 + i * dx`. Quantized positions are 21.11 fixed point, so the low 11
//! bits are directly the right-hand weight. Positions past either edge clamp
//! to the edge pixel.
//!
//! # Example
//!
//! ```rust
//! use pixkit_interp::{resample_row, POSITION_ONE};
//! use pixkit_core::Luminance8;
//!
//! let row = [Luminance8::new(0), Luminance8::new(200)];
//! let mut out = [Luminance8::default(); 3];
//! // Upscale with half-pixel steps.
//! resample_row(&row, &row, 0, 0, POSITION_ONE / 2, &mut out);
//! assert_eq!(out.map(|p| p.l), [0, 100, 200]);
//! ```

use crate::float::FloatInterpolate;
use crate::quantized::QuantizedInterpolate;
use crate::weights::WEIGHT_SHIFT;
use tracing::trace;

/// Fractional bits of a quantized source position.
pub const POSITION_SHIFT: u32 = WEIGHT_SHIFT;

/// One source pixel in 21.11 fixed point.
pub const POSITION_ONE: u32 = 1 << POSITION_SHIFT;

const POSITION_MASK: u64 = (1 << POSITION_SHIFT) - 1;

/// Interpolates two spans element-wise with one weight.
///
/// The shortest of the three lengths is processed.
pub fn interpolate_span<S: Copy, D: QuantizedInterpolate<S>>(
    left: &[S],
    right: &[S],
    weight_right: u32,
    dst: &mut [D],
) {
    for ((d, &l), &r) in dst.iter_mut().zip(left).zip(right) {
        *d = D::interpolate_linear(l, r, weight_right);
    }
}

/// Floating [`interpolate_span`].
pub fn interpolate_span_f<S: Copy, D: FloatInterpolate<S>>(
    left: &[S],
    right: &[S],
    weight_right: f32,
    dst: &mut [D],
) {
    for ((d, &l), &r) in dst.iter_mut().zip(left).zip(right) {
        *d = D::interpolate_linear(l, r, weight_right);
    }
}

/// Resamples between two source rows into `dst`.
///
/// `weight_y` in `[0, 2^11]` pulls toward `bottom`. Destination pixel `i`
/// samples source position `x0 + i * dx` (21.11 fixed point). Empty source
/// rows leave `dst` untouched.
pub fn resample_row<S: Copy, D: QuantizedInterpolate<S>>(
    top: &[S],
    bottom: &[S],
    weight_y: u32,
    x0: u32,
    dx: u32,
    dst: &mut [D],
) {
    let n = top.len().min(bottom.len());
    trace!(src = n, dst = dst.len(), x0, dx, "resample_row");
    if n == 0 {
        return;
    }
    let last = n - 1;
    for (i, d) in dst.iter_mut().enumerate() {
        let x = x0 as u64 + i as u64 * dx as u64;
        let ix = (x >> POSITION_SHIFT) as usize;
        let (l, r, wx) = if ix >= last {
            (last, last, 0)
        } else {
            (ix, ix + 1, (x & POSITION_MASK) as u32)
        };
        *d = D::interpolate_bilinear(top[l], top[r], bottom[l], bottom[r], wx, weight_y);
    }
}

/// Floating [`resample_row`]: positions and weights are in source pixels
/// and `[0, 1]` respectively.
pub fn resample_row_f<S: Copy, D: FloatInterpolate<S>>(
    top: &[S],
    bottom: &[S],
    weight_y: f32,
    x0: f32,
    dx: f32,
    dst: &mut [D],
) {
    let n = top.len().min(bottom.len());
    trace!(src = n, dst = dst.len(), x0, dx, "resample_row_f");
    if n == 0 {
        return;
    }
    let last = n - 1;
    for (i, d) in dst.iter_mut().enumerate() {
        let x = x0 + i as f32 * dx;
        let x = if x > 0.0 { x } else { 0.0 };
        let ix = x.floor() as usize;
        let (l, r, wx) = if ix >= last {
            (last, last, 0.0)
        } else {
            (ix, ix + 1, x - ix as f32)
        };
        *d = D::interpolate_bilinear(top[l], top[r], bottom[l], bottom[r], wx, weight_y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use pixkit_core::{Bgr24, Bgra32, Bgrp32, Luminance32F, Luminance8, Rgb24};

    #[test]
    fn test_span_midpoint() {
        let l = [Bgr24::new(0, 0, 0); 4];
        let r = [Bgr24::new(255, 255, 255); 4];
        let mut d = [Rgb24::default(); 4];
        interpolate_span(&l, &r, 1024, &mut d);
        assert!(d.iter().all(|p| *p == Rgb24::new(127, 127, 127)));
    }

    #[test]
    fn test_span_f() {
        let l = [Luminance32F::new(0.0); 2];
        let r = [Luminance32F::new(1.0); 2];
        let mut d = [Luminance32F::default(); 2];
        interpolate_span_f(&l, &r, 0.25, &mut d);
        assert_abs_diff_eq!(d[1].l, 0.25);
    }

    #[test]
    fn test_edge_clamping() {
        let row = [Luminance8::new(10), Luminance8::new(20)];
        let mut out = [Luminance8::default(); 4];
        resample_row(&row, &row, 0, POSITION_ONE, POSITION_ONE, &mut out);
        assert_eq!(out.map(|p| p.l), [20, 20, 20, 20]);
    }

    #[test]
    fn test_vertical_weight() {
        let top = [Luminance8::new(0); 2];
        let bottom = [Luminance8::new(100); 2];
        let mut out = [Luminance8::default(); 2];
        resample_row(&top, &bottom, 512, 0, POSITION_ONE / 4, &mut out);
        assert_eq!(out.map(|p| p.l), [25, 25]);
    }

    #[test]
    fn test_empty_source_leaves_dst() {
        let mut out = [Luminance8::new(7); 2];
        resample_row::<Luminance8, Luminance8>(&[], &[], 0, 0, POSITION_ONE, &mut out);
        assert_eq!(out.map(|p| p.l), [7, 7]);
        resample_row_f::<Luminance8, Luminance32F>(&[], &[], 0.0, 0.0, 1.0, &mut []);
    }

    #[test]
    fn test_resample_premultiplies() {
        let row = [Bgra32::new(0, 0, 255, 0), Bgra32::new(255, 0, 0, 255)];
        let mut out = [Bgrp32::default(); 3];
        resample_row(&row, &row, 0, 0, POSITION_ONE / 2, &mut out);
        assert_eq!(out[0], Bgrp32::TRANSPARENT);
        assert_eq!(out[1], Bgrp32::new(127, 0, 0, 127));
        assert_eq!(out[2], Bgrp32::new(255, 0, 0, 255));
    }

    #[test]
    fn test_resample_row_f() {
        let row = [Luminance8::new(0), Luminance8::new(255)];
        let mut out = [Luminance32F::default(); 5];
        resample_row_f(&row, &row, 0.0, -1.0, 0.5, &mut out);
        let got = out.map(|p| p.l);
        for (g, e) in got.into_iter().zip([0.0, 0.0, 0.0, 0.5, 1.0]) {
            assert_abs_diff_eq!(g, e, epsilon = 1e-6);
        }
    }
}
