//! Channel-level numeric rules shared by every conversion path.
//!
//! Each narrowing operation has exactly one rule:
//!
//! | Operation | Rule |
//! |---|---|
//! | u8 → u16 | `v * 257` |
//! | u16 → u8 | `v >> 8` |
//! | u8 → f32 | `v / 255` |
//! | f32 → u8 | clamp to [0, 1], `* 255`, truncate |
//! | f32 → u16 | clamp to [0, 1], `* 65535`, truncate |
//! | straight → premultiplied (u8) | `(c * a + 255) >> 8` |
//! | premultiplied → straight (u8) | `(c * ((255 << 16) / a) + 0x8000) >> 16`, clamped |
//! | 5/6/4 bit → u8 | replicate high bits into the low bits |
//!
//! The premultiply and unpremultiply rules carry a rounding bias while the
//! float narrowing rules truncate. Both behaviors are kept as they are because
//! callers depend on the exact output.

/// Perceptual luminance weight of the red channel.
pub const LUMA_R: f32 = 0.2989;
/// Perceptual luminance weight of the green channel.
pub const LUMA_G: f32 = 0.5870;
/// Perceptual luminance weight of the blue channel.
pub const LUMA_B: f32 = 0.1140;

/// Sum of the float luminance weights; white maps to exactly `1.0`.
const LUMA_SUM: f32 = LUMA_R + LUMA_G + LUMA_B;

/// Red luminance weight over a 16-bit fixed-point scale.
pub const LUMA_WEIGHT_R: u32 = 19562;
/// Green luminance weight over a 16-bit fixed-point scale.
pub const LUMA_WEIGHT_G: u32 = 38550;
/// Blue luminance weight over a 16-bit fixed-point scale.
pub const LUMA_WEIGHT_B: u32 = 7424;

/// Alpha at or above this value sets the 1-bit alpha of `Bgra5551`.
pub const ALPHA_1BIT_THRESHOLD: u8 = 96;

/// Weighted 8-bit color sum over the 16-bit fixed-point scale.
#[inline]
const fn luma_sum(r: u8, g: u8, b: u8) -> u32 {
    LUMA_WEIGHT_R * r as u32 + LUMA_WEIGHT_G * g as u32 + LUMA_WEIGHT_B * b as u32
}

/// 8-bit luminance of an 8-bit color.
#[inline]
pub const fn luminance_u8(r: u8, g: u8, b: u8) -> u8 {
    (luma_sum(r, g, b) >> 16) as u8
}

/// 16-bit luminance of an 8-bit color.
///
/// Scales the 16-bit fixed-point sum by 257 so that 8-bit white maps to
/// 65535.
#[inline]
pub const fn luminance_u16(r: u8, g: u8, b: u8) -> u16 {
    ((luma_sum(r, g, b) * 257) >> 16) as u16
}

/// Float luminance of a float color.
///
/// Neutral colors return their own value so gray survives a round trip
/// through RGB exactly.
#[inline]
pub fn luminance_f32(r: f32, g: f32, b: f32) -> f32 {
    if r == g && g == b {
        return r;
    }
    (r * LUMA_R + g * LUMA_G + b * LUMA_B) / LUMA_SUM
}

/// Widens an 8-bit channel to 16 bits (`v * 257`).
#[inline]
pub const fn widen_u8(v: u8) -> u16 {
    v as u16 * 257
}

/// Narrows a 16-bit channel to 8 bits by truncation.
#[inline]
pub const fn narrow_u16(v: u16) -> u8 {
    (v >> 8) as u8
}

/// Converts an 8-bit channel to a unit float.
#[inline]
pub fn u8_to_unit(v: u8) -> f32 {
    v as f32 / 255.0
}

/// Converts a 16-bit channel to a unit float.
#[inline]
pub fn u16_to_unit(v: u16) -> f32 {
    v as f32 / 65535.0
}

/// Converts a unit float to 8 bits: clamp, scale, truncate.
///
/// NaN maps to 0.
#[inline]
pub fn unit_to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0) as u8
}

/// Converts a unit float to 16 bits: clamp, scale, truncate.
///
/// NaN maps to 0.
#[inline]
pub fn unit_to_u16(v: f32) -> u16 {
    (v.clamp(0.0, 1.0) * 65535.0) as u16
}

/// Multiplies an 8-bit straight channel by 8-bit alpha.
///
/// The result never exceeds `a`, and `a == 255` leaves `c` unchanged.
#[inline]
pub const fn premultiply_u8(c: u8, a: u8) -> u8 {
    ((c as u32 * a as u32 + 255) >> 8) as u8
}

/// Fixed-point reciprocal of 8-bit alpha for [`unpremultiply_with`].
///
/// Returns 0 for zero alpha.
#[inline]
pub const fn alpha_reciprocal(a: u8) -> u32 {
    if a == 0 { 0 } else { (255 << 16) / a as u32 }
}

/// Divides a premultiplied channel by alpha using a precomputed reciprocal.
#[inline]
pub const fn unpremultiply_with(c: u8, rcp: u32) -> u8 {
    let v = (c as u32 * rcp + 0x8000) >> 16;
    if v > 255 { 255 } else { v as u8 }
}

/// Divides an 8-bit premultiplied channel by alpha.
///
/// Zero alpha yields zero.
#[inline]
pub const fn unpremultiply_u8(c: u8, a: u8) -> u8 {
    unpremultiply_with(c, alpha_reciprocal(a))
}

/// Expands a 5-bit field to 8 bits.
#[inline]
pub const fn expand5(v: u16) -> u8 {
    let v = (v & 0x1f) as u8;
    (v << 3) | (v >> 2)
}

/// Expands a 6-bit field to 8 bits.
#[inline]
pub const fn expand6(v: u16) -> u8 {
    let v = (v & 0x3f) as u8;
    (v << 2) | (v >> 4)
}

/// Expands a 4-bit field to 8 bits.
#[inline]
pub const fn expand4(v: u16) -> u8 {
    let v = (v & 0x0f) as u8;
    (v << 4) | v
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_luma_weights_partition() {
        assert_eq!(LUMA_WEIGHT_R + LUMA_WEIGHT_G + LUMA_WEIGHT_B, 65536);
        assert_eq!(luminance_u8(255, 255, 255), 255);
        assert_eq!(luminance_u16(255, 255, 255), 65535);
        assert_eq!(luminance_u8(0, 0, 0), 0);
        for v in 0..=255u8 {
            assert_eq!(luminance_u8(v, v, v), v);
            assert_eq!(luminance_u16(v, v, v), widen_u8(v));
        }
    }

    #[test]
    fn test_luminance_f32() {
        assert_eq!(luminance_f32(1.0, 1.0, 1.0), 1.0);
        assert_eq!(luminance_f32(0.25, 0.25, 0.25), 0.25);
        assert_abs_diff_eq!(luminance_f32(1.0, 0.0, 0.0), 0.2989 / 0.9999, epsilon = 1e-5);
        assert_abs_diff_eq!(luminance_f32(0.0, 1.0, 0.0), 0.5870 / 0.9999, epsilon = 1e-5);
    }

    #[test]
    fn test_widen_narrow() {
        for v in 0..=255u8 {
            assert_eq!(narrow_u16(widen_u8(v)), v);
            assert_eq!(unit_to_u8(u8_to_unit(v)), v);
        }
        assert_eq!(widen_u8(255), 65535);
        assert_eq!(narrow_u16(0x80ff), 0x80);
        assert_eq!(unit_to_u16(u16_to_unit(12345)), 12345);
    }

    #[test]
    fn test_float_narrowing_truncates_and_clamps() {
        assert_eq!(unit_to_u8(0.5), 127);
        assert_eq!(unit_to_u8(-3.0), 0);
        assert_eq!(unit_to_u8(7.0), 255);
        assert_eq!(unit_to_u8(f32::NAN), 0);
        assert_eq!(unit_to_u16(1.0), 65535);
    }

    #[test]
    fn test_premultiply() {
        assert_eq!(premultiply_u8(200, 128), 100);
        assert_eq!(premultiply_u8(100, 128), 50);
        assert_eq!(premultiply_u8(50, 128), 25);
        assert_eq!(premultiply_u8(77, 0), 0);
        for c in 0..=255u8 {
            assert_eq!(premultiply_u8(c, 255), c);
        }
        for a in 0..=255u8 {
            for c in (0..=255u8).step_by(5) {
                assert!(premultiply_u8(c, a) <= a);
            }
        }
    }

    #[test]
    fn test_unpremultiply() {
        assert_eq!(unpremultiply_u8(100, 128), 199);
        assert_eq!(unpremultiply_u8(50, 0), 0);
        assert_eq!(unpremultiply_u8(255, 1), 255);
        for c in 0..=255u8 {
            assert_eq!(unpremultiply_u8(c, 255), c);
        }
    }

    #[test]
    fn test_straight_premul_straight_within_one() {
        for a in 1..=255u8 {
            for c in 0..=255u8 {
                let back = unpremultiply_u8(premultiply_u8(c, a), a);
                // Precision drops with alpha; the error is bounded by 255 / a.
                let tolerance = 255 / a as i32 + 1;
                assert!((back as i32 - c as i32).abs() <= tolerance, "c={c} a={a} back={back}");
            }
        }
    }

    #[test]
    fn test_bit_expansion() {
        assert_eq!(expand5(0x1f), 255);
        assert_eq!(expand6(0x3f), 255);
        assert_eq!(expand4(0x0f), 255);
        assert_eq!(expand5(0), 0);
        assert_eq!(expand5(16), 132);
        assert_eq!(expand4(8), 136);
        for v in 0..32u16 {
            assert_eq!((expand5(v) >> 3) as u16, v);
        }
        for v in 0..64u16 {
            assert_eq!((expand6(v) >> 2) as u16, v);
        }
    }
}
