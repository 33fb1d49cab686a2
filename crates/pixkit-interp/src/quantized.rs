//! Fixed-point interpolation between quantized pixels.
//!
//! # Kernels
//!
//! The kernel is chosen from the source format's metadata at
//! monomorphization time:
//!
//! | Source | Kernel |
//! |---|---|
//! | `Alpha8`, `Luminance8`, `Luminance16` | plain weighted sum of the single channel |
//! | opaque color | plain weighted sum, alpha 255 |
//! | straight alpha | premultiply each sample, sum alpha first, then color |
//! | premultiplied | weighted sum of every channel |
//!
//! Alpha-bearing kernels produce a premultiplied result. An interpolated
//! alpha of zero yields the zero pixel. The result is then encoded into the
//! destination by the conversion rules, so straight destinations are
//! unpremultiplied by reciprocal-alpha multiply with rounding bias.
//!
//! All sums truncate: the midpoint of 0 and 255 is 127.

use crate::weights::{BilinearWeights, LinearWeights, BILINEAR_SHIFT, WEIGHT_SHIFT};
use pixkit_convert::{premultiply_bgra32, Canonical, CanonicalPixel};
use pixkit_core::formats::*;
use pixkit_core::{Bgra32, Bgrp32, FormatCode};

/// Marker for fixed-point formats.
pub trait QuantizedPixel: CanonicalPixel {}

macro_rules! quantized_pixel {
    ($($ty:ty),+) => {
        $(impl QuantizedPixel for $ty {})+
    };
}

quantized_pixel!(
    Alpha8, Luminance8, Luminance16, Bgr565, Bgra5551, Bgra4444, Bgr24, Rgb24, Bgra32, Rgba32,
    Argb32, Bgrp32, Rgbp32
);

/// Typed quantized interpolation, implemented on destination types.
///
/// # Example
///
/// ```rust
/// use pixkit_interp::QuantizedInterpolate;
/// use pixkit_core::{Bgr24, Rgb24};
///
/// let mid = Rgb24::interpolate_linear(Bgr24::new(0, 0, 0), Bgr24::new(255, 255, 255), 1024);
/// assert_eq!(mid, Rgb24::new(127, 127, 127));
/// ```
pub trait QuantizedInterpolate<S>: Sized {
    /// Interpolates between `left` and `right`; `weight_right` is in
    /// `[0, 2^11]`.
    fn interpolate_linear(left: S, right: S, weight_right: u32) -> Self;

    /// Interpolates four corners; axis weights are in `[0, 2^11]`, toward
    /// the right and bottom samples.
    fn interpolate_bilinear(
        top_left: S,
        top_right: S,
        bottom_left: S,
        bottom_right: S,
        weight_x: u32,
        weight_y: u32,
    ) -> Self;
}

impl<S: QuantizedPixel, D: QuantizedPixel> QuantizedInterpolate<S> for D {
    #[inline]
    fn interpolate_linear(left: S, right: S, weight_right: u32) -> Self {
        quantized_linear(left, right, weight_right)
    }

    #[inline]
    fn interpolate_bilinear(
        top_left: S,
        top_right: S,
        bottom_left: S,
        bottom_right: S,
        weight_x: u32,
        weight_y: u32,
    ) -> Self {
        quantized_bilinear([top_left, top_right, bottom_left, bottom_right], weight_x, weight_y)
    }
}

/// Linear interpolation for any pair of formats.
///
/// Unlike [`QuantizedInterpolate`] this accepts float types too, which are
/// quantized to 8 bits first.
#[inline]
pub fn quantized_linear<S: CanonicalPixel, D: CanonicalPixel>(
    left: S,
    right: S,
    weight_right: u32,
) -> D {
    let w = LinearWeights::new(weight_right);
    D::from_canonical(accumulate([left, right], w.to_array(), WEIGHT_SHIFT))
}

/// Bilinear interpolation for any pair of formats.
///
/// Corners are `[top_left, top_right, bottom_left, bottom_right]`.
#[inline]
pub fn quantized_bilinear<S: CanonicalPixel, D: CanonicalPixel>(
    corners: [S; 4],
    weight_x: u32,
    weight_y: u32,
) -> D {
    let w = BilinearWeights::new(weight_x, weight_y);
    D::from_canonical(accumulate(corners, w.to_array(), BILINEAR_SHIFT))
}

#[inline]
fn dot<const N: usize>(values: [u32; N], weights: [u32; N], shift: u32) -> u64 {
    let mut acc = 0u64;
    for i in 0..N {
        acc += values[i] as u64 * weights[i] as u64;
    }
    acc >> shift
}

#[inline]
fn accumulate<S: CanonicalPixel, const N: usize>(
    samples: [S; N],
    weights: [u32; N],
    shift: u32,
) -> Canonical {
    match S::CODE {
        FormatCode::Alpha8 => {
            let a = samples.map(|s| s.to_canonical().to_alpha8() as u32);
            Canonical::Alpha(dot(a, weights, shift) as u8)
        }
        FormatCode::Luminance8 => {
            let l = samples.map(|s| s.to_canonical().to_luma8() as u32);
            Canonical::Luma8(dot(l, weights, shift) as u8)
        }
        FormatCode::Luminance16 => {
            let l = samples.map(|s| s.to_canonical().to_luma16() as u32);
            Canonical::Luma16(dot(l, weights, shift) as u16)
        }
        _ if S::IS_OPAQUE => {
            let p = samples.map(|s| s.to_canonical().to_bgra32());
            Canonical::Straight8(Bgra32::opaque(
                dot(p.map(|p| p.b as u32), weights, shift) as u8,
                dot(p.map(|p| p.g as u32), weights, shift) as u8,
                dot(p.map(|p| p.r as u32), weights, shift) as u8,
            ))
        }
        _ if !S::IS_PREMULTIPLIED && S::IS_QUANTIZED => {
            let p = samples.map(|s| premultiply_bgra32(s.to_canonical().to_bgra32()));
            Canonical::Premul8(sum_premultiplied(p, weights, shift))
        }
        _ => {
            let p = samples.map(|s| s.to_canonical().to_bgrp32());
            Canonical::Premul8(sum_premultiplied(p, weights, shift))
        }
    }
}

#[inline]
fn sum_premultiplied<const N: usize>(p: [Bgrp32; N], weights: [u32; N], shift: u32) -> Bgrp32 {
    let a = dot(p.map(|p| p.a as u32), weights, shift) as u8;
    if a == 0 {
        return Bgrp32::TRANSPARENT;
    }
    // Each sample has c <= a, so every color sum is bounded by the alpha sum.
    Bgrp32::new(
        dot(p.map(|p| p.b as u32), weights, shift) as u8,
        dot(p.map(|p| p.g as u32), weights, shift) as u8,
        dot(p.map(|p| p.r as u32), weights, shift) as u8,
        a,
    )
}
