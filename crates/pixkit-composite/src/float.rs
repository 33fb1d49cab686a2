//! Floating compositing onto `Rgbp128F` destinations.
//!
//! Same algebra as the integer path with weights in `[0, 1]`. Each pixel is
//! a `glam::Vec4` column `(r, g, b, a)`; the source and blend columns carry
//! 1.0 in the alpha lane so one weighted column sum yields color and alpha
//! together:
//!
//! ```text
//! out = dst * wDst + (src.rgb, 1) * wSrc + (blend.rgb, 1) * wMix
//! ```

use crate::blend::BlendMode;
use glam::{Vec3, Vec4};
use pixkit_convert::{to_rgba128f, CanonicalPixel};
use pixkit_core::{Rgba128F, Rgbp128F};
use tracing::trace;

#[inline]
fn column(p: Rgbp128F) -> Vec4 {
    Vec4::from_array(p.to_array())
}

/// The shared floating `over` primitive.
///
/// `src` is straight; `blend` is the overlap color. Opacity is clamped to
/// `[0, 1]`.
#[inline]
pub fn over_f(dst: &mut Rgbp128F, src: Rgba128F, blend: Vec3, opacity: f32) {
    if !(src.a > 0.0) {
        return;
    }
    let eff = src.a.min(1.0) * opacity.clamp(0.0, 1.0);
    if !(eff > 0.0) {
        return;
    }
    let d = column(*dst);
    let mix = d.w * eff;
    let w_src = eff - mix;
    let w_dst = 1.0 - eff;
    let s = Vec3::new(src.r, src.g, src.b).extend(1.0);
    let out = d * w_dst + s * w_src + blend.extend(1.0) * mix;
    *dst = Rgbp128F::from_array(out.to_array());
}

#[inline]
fn compose_straight_f(mode: BlendMode, dst: &mut Rgbp128F, src: Rgba128F, opacity: f32) {
    if !(src.a > 0.0) {
        return;
    }
    let blend = mode.blend_f32(Vec3::new(src.r, src.g, src.b));
    over_f(dst, src, blend, opacity);
}

/// Floating source-over of any pixel onto a premultiplied destination.
#[inline]
pub fn source_over_f<S: CanonicalPixel>(dst: &mut Rgbp128F, src: S, opacity: f32) {
    compose_straight_f(BlendMode::Normal, dst, to_rgba128f(src), opacity);
}

/// Floating source-over with a saturating additive blend in the overlap.
#[inline]
pub fn add_over_f<S: CanonicalPixel>(dst: &mut Rgbp128F, src: S, opacity: f32) {
    compose_straight_f(BlendMode::Add, dst, to_rgba128f(src), opacity);
}

/// Floating source-over with a multiplicative blend in the overlap.
#[inline]
pub fn multiply_over_f<S: CanonicalPixel>(dst: &mut Rgbp128F, src: S, opacity: f32) {
    compose_straight_f(BlendMode::Multiply, dst, to_rgba128f(src), opacity);
}

/// Composites one pixel with a runtime-selected blend mode.
#[inline]
pub fn compose_f<S: CanonicalPixel>(mode: BlendMode, dst: &mut Rgbp128F, src: S, opacity: f32) {
    compose_straight_f(mode, dst, to_rgba128f(src), opacity);
}

/// Composites a span; the shorter length is processed.
pub fn compose_span_f<S: CanonicalPixel>(
    mode: BlendMode,
    dst: &mut [Rgbp128F],
    src: &[S],
    opacity: f32,
) {
    trace!(pixels = dst.len().min(src.len()), %mode, "compose_span_f");
    match mode {
        BlendMode::Normal => {
            for (d, &s) in dst.iter_mut().zip(src) {
                source_over_f(d, s, opacity);
            }
        }
        BlendMode::Add => {
            for (d, &s) in dst.iter_mut().zip(src) {
                add_over_f(d, s, opacity);
            }
        }
        BlendMode::Multiply => {
            for (d, &s) in dst.iter_mut().zip(src) {
                multiply_over_f(d, s, opacity);
            }
        }
    }
}

/// Floating source-over across a span.
pub fn source_over_span_f<S: CanonicalPixel>(dst: &mut [Rgbp128F], src: &[S], opacity: f32) {
    compose_span_f(BlendMode::Normal, dst, src, opacity);
}
