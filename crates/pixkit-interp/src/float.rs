//! Floating interpolation into float destinations.
//!
//! Mirrors the quantized kernels with continuous weights summing to 1.0 per
//! axis. Alpha-bearing samples are premultiplied as `glam::Vec4` columns
//! and summed; a non-positive interpolated alpha yields the zero pixel.

use crate::weights::{bilinear_weights_f, clamp_unit};
use glam::Vec4;
use pixkit_convert::{Canonical, CanonicalPixel};
use pixkit_core::formats::*;

/// Marker for floating-point formats.
pub trait FloatPixel: CanonicalPixel {}

impl FloatPixel for Luminance32F {}
impl FloatPixel for Bgr96F {}
impl FloatPixel for Rgb96F {}
impl FloatPixel for Bgra128F {}
impl FloatPixel for Rgba128F {}
impl FloatPixel for Rgbp128F {}

/// Typed floating interpolation, implemented on float destination types.
///
/// Any cataloged source may be interpolated into a float destination.
pub trait FloatInterpolate<S>: Sized {
    /// Interpolates between `left` and `right`; `weight_right` is clamped to
    /// `[0, 1]`.
    fn interpolate_linear(left: S, right: S, weight_right: f32) -> Self;

    /// Interpolates four corners with right/bottom axis weights in `[0, 1]`.
    fn interpolate_bilinear(
        top_left: S,
        top_right: S,
        bottom_left: S,
        bottom_right: S,
        weight_x: f32,
        weight_y: f32,
    ) -> Self;
}

impl<S: CanonicalPixel, D: FloatPixel> FloatInterpolate<S> for D {
    #[inline]
    fn interpolate_linear(left: S, right: S, weight_right: f32) -> Self {
        float_linear(left, right, weight_right)
    }

    #[inline]
    fn interpolate_bilinear(
        top_left: S,
        top_right: S,
        bottom_left: S,
        bottom_right: S,
        weight_x: f32,
        weight_y: f32,
    ) -> Self {
        float_bilinear([top_left, top_right, bottom_left, bottom_right], weight_x, weight_y)
    }
}

/// Floating linear interpolation for any pair of formats.
#[inline]
pub fn float_linear<S: CanonicalPixel, D: CanonicalPixel>(
    left: S,
    right: S,
    weight_right: f32,
) -> D {
    let r = clamp_unit(weight_right);
    D::from_canonical(accumulate_f([left, right], [1.0 - r, r]))
}

/// Floating bilinear interpolation for any pair of formats.
///
/// Corners are `[top_left, top_right, bottom_left, bottom_right]`.
#[inline]
pub fn float_bilinear<S: CanonicalPixel, D: CanonicalPixel>(
    corners: [S; 4],
    weight_x: f32,
    weight_y: f32,
) -> D {
    D::from_canonical(accumulate_f(corners, bilinear_weights_f(weight_x, weight_y)))
}

#[inline]
fn accumulate_f<S: CanonicalPixel, const N: usize>(samples: [S; N], weights: [f32; N]) -> Canonical {
    if S::CODE.is_luminance() {
        let mut l = 0.0;
        for (s, w) in samples.into_iter().zip(weights) {
            l += s.to_canonical().to_luma_f32() * w;
        }
        return Canonical::LumaF(l);
    }

    let mut acc = Vec4::ZERO;
    for (s, w) in samples.into_iter().zip(weights) {
        acc += Vec4::from_array(s.to_canonical().to_rgbp128f().to_array()) * w;
    }
    if S::IS_OPAQUE {
        return Canonical::StraightF(Rgba128F::new(acc.x, acc.y, acc.z, 1.0));
    }
    if !(acc.w > 0.0) {
        return Canonical::PremulF(Rgbp128F::TRANSPARENT);
    }
    Canonical::PremulF(Rgbp128F::from_array(acc.to_array()))
}
