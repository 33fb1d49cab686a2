//! Canonical conversion hubs.
//!
//! Instead of one formula per format pair, every format decodes into one of
//! eight canonical representatives that keep the source's native precision,
//! and every format encodes from any of them. After inlining, the hub variant
//! produced by a given source type is a constant, so the `match` below folds
//! away in monomorphized conversion loops.
//!
//! | Hub | Produced by |
//! |---|---|
//! | [`Canonical::Alpha`] | `Alpha8` |
//! | [`Canonical::Luma8`] | `Luminance8` |
//! | [`Canonical::Luma16`] | `Luminance16` |
//! | [`Canonical::LumaF`] | `Luminance32F` |
//! | [`Canonical::Straight8`] | packed formats, `Bgr24`, `Rgb24`, `Bgra32`, `Rgba32`, `Argb32` |
//! | [`Canonical::Premul8`] | `Bgrp32`, `Rgbp32` |
//! | [`Canonical::StraightF`] | `Bgr96F`, `Rgb96F`, `Bgra128F`, `Rgba128F` |
//! | [`Canonical::PremulF`] | `Rgbp128F` |
//!
//! Premultiplied hubs encode into premultiplied formats by remapping
//! channels directly; they only pass through straight alpha when the
//! destination is straight or opaque.

use pixkit_core::quantize::{
    alpha_reciprocal, luminance_f32, luminance_u16, luminance_u8, narrow_u16, premultiply_u8,
    u16_to_unit, u8_to_unit, unit_to_u16, unit_to_u8, unpremultiply_with, widen_u8,
};
use pixkit_core::{Bgra32, Bgrp32, Rgba128F, Rgbp128F};

/// A pixel value in one of the canonical hub representations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Canonical {
    /// Alpha without color.
    Alpha(u8),
    /// 8-bit luminance, opaque.
    Luma8(u8),
    /// 16-bit luminance, opaque.
    Luma16(u16),
    /// Float luminance, opaque.
    LumaF(f32),
    /// 8-bit straight-alpha color.
    Straight8(Bgra32),
    /// 8-bit premultiplied color.
    Premul8(Bgrp32),
    /// Float straight-alpha color.
    StraightF(Rgba128F),
    /// Float premultiplied color.
    PremulF(Rgbp128F),
}

/// Premultiplies an 8-bit straight pixel.
#[inline]
pub fn premultiply_bgra32(p: Bgra32) -> Bgrp32 {
    Bgrp32::new(
        premultiply_u8(p.b, p.a),
        premultiply_u8(p.g, p.a),
        premultiply_u8(p.r, p.a),
        p.a,
    )
}

/// Unpremultiplies an 8-bit premultiplied pixel; zero alpha yields zero.
#[inline]
pub fn unpremultiply_bgrp32(p: Bgrp32) -> Bgra32 {
    if p.a == 0 {
        return Bgra32::TRANSPARENT;
    }
    let rcp = alpha_reciprocal(p.a);
    Bgra32::new(
        unpremultiply_with(p.b, rcp),
        unpremultiply_with(p.g, rcp),
        unpremultiply_with(p.r, rcp),
        p.a,
    )
}

/// Premultiplies a float straight pixel.
///
/// Non-positive (or NaN) alpha yields the zero pixel.
#[inline]
pub fn premultiply_rgba128f(p: Rgba128F) -> Rgbp128F {
    if !(p.a > 0.0) {
        return Rgbp128F::TRANSPARENT;
    }
    Rgbp128F::new(p.r * p.a, p.g * p.a, p.b * p.a, p.a)
}

/// Unpremultiplies a float premultiplied pixel by reciprocal alpha.
///
/// Non-positive (or NaN) alpha yields the zero pixel.
#[inline]
pub fn unpremultiply_rgbp128f(p: Rgbp128F) -> Rgba128F {
    if !(p.a > 0.0) {
        return Rgba128F::TRANSPARENT;
    }
    let inv = 1.0 / p.a;
    Rgba128F::new(p.r * inv, p.g * inv, p.b * inv, p.a)
}

impl Canonical {
    /// Alpha as 8 bits; opaque hubs report 255.
    #[inline]
    pub fn to_alpha8(self) -> u8 {
        match self {
            Self::Alpha(a) => a,
            Self::Luma8(_) | Self::Luma16(_) | Self::LumaF(_) => 255,
            Self::Straight8(p) => p.a,
            Self::Premul8(p) => p.a,
            Self::StraightF(p) => unit_to_u8(p.a),
            Self::PremulF(p) => unit_to_u8(p.a),
        }
    }

    /// Luminance as 8 bits; alpha is dropped.
    #[inline]
    pub fn to_luma8(self) -> u8 {
        match self {
            Self::Alpha(_) => 0,
            Self::Luma8(l) => l,
            Self::Luma16(l) => narrow_u16(l),
            Self::LumaF(l) => unit_to_u8(l),
            Self::Straight8(p) => luminance_u8(p.r, p.g, p.b),
            Self::Premul8(p) => {
                let p = unpremultiply_bgrp32(p);
                luminance_u8(p.r, p.g, p.b)
            }
            Self::StraightF(p) => unit_to_u8(luminance_f32(p.r, p.g, p.b)),
            Self::PremulF(p) => {
                let p = unpremultiply_rgbp128f(p);
                unit_to_u8(luminance_f32(p.r, p.g, p.b))
            }
        }
    }

    /// Luminance as 16 bits; alpha is dropped.
    #[inline]
    pub fn to_luma16(self) -> u16 {
        match self {
            Self::Alpha(_) => 0,
            Self::Luma8(l) => widen_u8(l),
            Self::Luma16(l) => l,
            Self::LumaF(l) => unit_to_u16(l),
            Self::Straight8(p) => luminance_u16(p.r, p.g, p.b),
            Self::Premul8(p) => {
                let p = unpremultiply_bgrp32(p);
                luminance_u16(p.r, p.g, p.b)
            }
            Self::StraightF(p) => unit_to_u16(luminance_f32(p.r, p.g, p.b)),
            Self::PremulF(p) => {
                let p = unpremultiply_rgbp128f(p);
                unit_to_u16(luminance_f32(p.r, p.g, p.b))
            }
        }
    }

    /// Luminance as a float; alpha is dropped.
    #[inline]
    pub fn to_luma_f32(self) -> f32 {
        match self {
            Self::Alpha(_) => 0.0,
            Self::Luma8(l) => u8_to_unit(l),
            Self::Luma16(l) => u16_to_unit(l),
            Self::LumaF(l) => l,
            Self::Straight8(p) => luminance_f32(u8_to_unit(p.r), u8_to_unit(p.g), u8_to_unit(p.b)),
            Self::Premul8(_) | Self::PremulF(_) => {
                let p = self.to_rgba128f();
                luminance_f32(p.r, p.g, p.b)
            }
            Self::StraightF(p) => luminance_f32(p.r, p.g, p.b),
        }
    }

    /// 8-bit straight-alpha color.
    #[inline]
    pub fn to_bgra32(self) -> Bgra32 {
        match self {
            Self::Alpha(a) => Bgra32::new(0, 0, 0, a),
            Self::Luma8(l) => Bgra32::opaque(l, l, l),
            Self::Luma16(l) => {
                let l = narrow_u16(l);
                Bgra32::opaque(l, l, l)
            }
            Self::LumaF(l) => {
                let l = unit_to_u8(l);
                Bgra32::opaque(l, l, l)
            }
            Self::Straight8(p) => p,
            Self::Premul8(p) => unpremultiply_bgrp32(p),
            Self::StraightF(p) => {
                Bgra32::new(unit_to_u8(p.b), unit_to_u8(p.g), unit_to_u8(p.r), unit_to_u8(p.a))
            }
            Self::PremulF(p) => Self::StraightF(unpremultiply_rgbp128f(p)).to_bgra32(),
        }
    }

    /// 8-bit premultiplied color.
    ///
    /// Premultiplied hubs are remapped without an unpremultiplied
    /// intermediate; the result always satisfies `c <= a`.
    #[inline]
    pub fn to_bgrp32(self) -> Bgrp32 {
        match self {
            Self::Alpha(a) => Bgrp32::new(0, 0, 0, a),
            Self::Luma8(_) | Self::Luma16(_) | Self::LumaF(_) => {
                let p = self.to_bgra32();
                Bgrp32::new(p.b, p.g, p.r, 255)
            }
            Self::Straight8(p) => premultiply_bgra32(p),
            Self::Premul8(p) => p,
            Self::StraightF(p) => {
                let clamped = Rgba128F::new(
                    p.r.clamp(0.0, 1.0),
                    p.g.clamp(0.0, 1.0),
                    p.b.clamp(0.0, 1.0),
                    p.a.clamp(0.0, 1.0),
                );
                Self::PremulF(premultiply_rgba128f(clamped)).to_bgrp32()
            }
            Self::PremulF(p) => {
                let a = unit_to_u8(p.a);
                Bgrp32::new(
                    unit_to_u8(p.b).min(a),
                    unit_to_u8(p.g).min(a),
                    unit_to_u8(p.r).min(a),
                    a,
                )
            }
        }
    }

    /// Float straight-alpha color.
    #[inline]
    pub fn to_rgba128f(self) -> Rgba128F {
        match self {
            Self::Alpha(a) => Rgba128F::new(0.0, 0.0, 0.0, u8_to_unit(a)),
            Self::Luma8(l) => {
                let l = u8_to_unit(l);
                Rgba128F::new(l, l, l, 1.0)
            }
            Self::Luma16(l) => {
                let l = u16_to_unit(l);
                Rgba128F::new(l, l, l, 1.0)
            }
            Self::LumaF(l) => Rgba128F::new(l, l, l, 1.0),
            Self::Straight8(p) => Rgba128F::new(
                u8_to_unit(p.r),
                u8_to_unit(p.g),
                u8_to_unit(p.b),
                u8_to_unit(p.a),
            ),
            Self::Premul8(p) => {
                if p.a == 0 {
                    return Rgba128F::TRANSPARENT;
                }
                let inv = 1.0 / p.a as f32;
                Rgba128F::new(
                    (p.r as f32 * inv).min(1.0),
                    (p.g as f32 * inv).min(1.0),
                    (p.b as f32 * inv).min(1.0),
                    u8_to_unit(p.a),
                )
            }
            Self::StraightF(p) => p,
            Self::PremulF(p) => unpremultiply_rgbp128f(p),
        }
    }

    /// Float premultiplied color.
    ///
    /// Premultiplied hubs are rescaled without an unpremultiplied
    /// intermediate.
    #[inline]
    pub fn to_rgbp128f(self) -> Rgbp128F {
        match self {
            Self::Alpha(a) => Rgbp128F::new(0.0, 0.0, 0.0, u8_to_unit(a)),
            Self::Luma8(_) | Self::Luma16(_) | Self::LumaF(_) => {
                let p = self.to_rgba128f();
                Rgbp128F::new(p.r, p.g, p.b, 1.0)
            }
            Self::Straight8(p) => premultiply_rgba128f(Self::Straight8(p).to_rgba128f()),
            Self::Premul8(p) => Rgbp128F::new(
                u8_to_unit(p.r),
                u8_to_unit(p.g),
                u8_to_unit(p.b),
                u8_to_unit(p.a),
            ),
            Self::StraightF(p) => premultiply_rgba128f(p),
            Self::PremulF(p) => p,
        }
    }
}
