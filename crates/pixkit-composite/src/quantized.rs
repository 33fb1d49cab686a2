//! Integer compositing onto `Bgrp32` destinations.
//!
//! # Algorithm
//!
//! With source alpha `sA`, destination alpha `dA` (both mapped into the
//! weight domain of `W`) and `opacity` in `[0, W::ONE]`:
//!
//! ```text
//! effA = (sA * opacity) >> SHIFT
//! wMix = (dA * effA)    >> SHIFT      overlap
//! wSrc = effA - wMix                  source only
//! wDst = ONE - wSrc - wMix            destination only
//!
//! c' = (dst.c * wDst + src.c * wSrc + blend.c * wMix) >> SHIFT
//! a' = (dst.a * wDst + 255 * (wSrc + wMix))        >> SHIFT
//! ```
//!
//! `src.c` is the straight source color and `dst.c` the premultiplied
//! destination color. The three weights always sum to `ONE`, and since every
//! color term is bounded by its alpha term the result stays premultiplied.
//! A source with zero alpha, or zero effective alpha, leaves the destination
//! untouched.

use crate::blend::BlendMode;
use crate::weights::WeightScale;
use pixkit_convert::{to_bgra32, CanonicalPixel};
use pixkit_core::{Bgra32, Bgrp32};
use tracing::trace;

/// The three compositing weights for one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverWeights {
    /// Destination-only weight.
    pub dst: u32,
    /// Source-only weight.
    pub src: u32,
    /// Overlap weight, applied to the blend value.
    pub mix: u32,
}

impl OverWeights {
    /// Computes the weights for 8-bit alphas; `None` when the source
    /// contributes nothing.
    #[inline]
    pub fn compute<W: WeightScale>(src_a: u8, dst_a: u8, opacity: u32) -> Option<Self> {
        if src_a == 0 {
            return None;
        }
        let opacity = opacity.min(W::ONE);
        let eff = (W::weight(src_a) * opacity) >> W::SHIFT;
        if eff == 0 {
            return None;
        }
        let mix = (W::weight(dst_a) * eff) >> W::SHIFT;
        let src = eff - mix;
        Some(Self {
            dst: W::ONE - src - mix,
            src,
            mix,
        })
    }

    /// Sum of the three weights.
    #[inline]
    pub const fn total(&self) -> u32 {
        self.dst + self.src + self.mix
    }
}

/// The shared `over` primitive.
///
/// `src` is straight color plus alpha and `blend` the precomputed overlap
/// color as `[b, g, r]`.
#[inline]
pub fn over<W: WeightScale>(dst: &mut Bgrp32, src: Bgra32, blend: [u8; 3], opacity: u32) {
    let Some(w) = OverWeights::compute::<W>(src.a, dst.a, opacity) else {
        return;
    };
    let ch = |d: u8, s: u8, b: u8| -> u8 {
        ((d as u32 * w.dst + s as u32 * w.src + b as u32 * w.mix) >> W::SHIFT) as u8
    };
    *dst = Bgrp32::new(
        ch(dst.b, src.b, blend[0]),
        ch(dst.g, src.g, blend[1]),
        ch(dst.r, src.r, blend[2]),
        ((dst.a as u32 * w.dst + 255 * (w.src + w.mix)) >> W::SHIFT) as u8,
    );
}

#[inline]
fn compose_straight<W: WeightScale>(mode: BlendMode, dst: &mut Bgrp32, src: Bgra32, opacity: u32) {
    if src.a == 0 {
        return;
    }
    let blend = mode.blend_u8(src);
    over::<W>(dst, src, blend, opacity);
}

/// Porter-Duff source-over of any pixel onto a premultiplied destination.
///
/// `opacity` is in the weight domain of `W`; pass `W::ONE` for full opacity.
#[inline]
pub fn source_over<W: WeightScale, S: CanonicalPixel>(dst: &mut Bgrp32, src: S, opacity: u32) {
    let s = to_bgra32(src);
    over::<W>(dst, s, [s.b, s.g, s.r], opacity);
}

/// Source-over with a saturating additive blend in the overlap.
#[inline]
pub fn add_over<W: WeightScale, S: CanonicalPixel>(dst: &mut Bgrp32, src: S, opacity: u32) {
    compose_straight::<W>(BlendMode::Add, dst, to_bgra32(src), opacity);
}

/// Source-over with a multiplicative blend in the overlap.
#[inline]
pub fn multiply_over<W: WeightScale, S: CanonicalPixel>(dst: &mut Bgrp32, src: S, opacity: u32) {
    compose_straight::<W>(BlendMode::Multiply, dst, to_bgra32(src), opacity);
}

/// Composites one pixel with a runtime-selected blend mode.
#[inline]
pub fn compose<W: WeightScale, S: CanonicalPixel>(
    mode: BlendMode,
    dst: &mut Bgrp32,
    src: S,
    opacity: u32,
) {
    compose_straight::<W>(mode, dst, to_bgra32(src), opacity);
}

/// Source-over across a span; the shorter length is processed.
pub fn source_over_span<W: WeightScale, S: CanonicalPixel>(
    dst: &mut [Bgrp32],
    src: &[S],
    opacity: u32,
) {
    trace!(pixels = dst.len().min(src.len()), shift = W::SHIFT, "source_over_span");
    for (d, &s) in dst.iter_mut().zip(src) {
        source_over::<W, S>(d, s, opacity);
    }
}

/// Additive source-over across a span.
pub fn add_over_span<W: WeightScale, S: CanonicalPixel>(
    dst: &mut [Bgrp32],
    src: &[S],
    opacity: u32,
) {
    trace!(pixels = dst.len().min(src.len()), shift = W::SHIFT, "add_over_span");
    for (d, &s) in dst.iter_mut().zip(src) {
        add_over::<W, S>(d, s, opacity);
    }
}

/// Multiplicative source-over across a span.
pub fn multiply_over_span<W: WeightScale, S: CanonicalPixel>(
    dst: &mut [Bgrp32],
    src: &[S],
    opacity: u32,
) {
    trace!(pixels = dst.len().min(src.len()), shift = W::SHIFT, "multiply_over_span");
    for (d, &s) in dst.iter_mut().zip(src) {
        multiply_over::<W, S>(d, s, opacity);
    }
}

/// Composites a span with a blend mode resolved once for the whole span.
pub fn compose_span<W: WeightScale, S: CanonicalPixel>(
    mode: BlendMode,
    dst: &mut [Bgrp32],
    src: &[S],
    opacity: u32,
) {
    match mode {
        BlendMode::Normal => source_over_span::<W, S>(dst, src, opacity),
        BlendMode::Add => add_over_span::<W, S>(dst, src, opacity),
        BlendMode::Multiply => multiply_over_span::<W, S>(dst, src, opacity),
    }
}
