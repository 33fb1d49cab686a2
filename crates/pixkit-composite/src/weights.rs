//! Fixed-point weight domains.
//!
//! Integer compositing runs in a `2^SHIFT` fixed point. An 8-bit alpha maps
//! onto `[0, ONE]` so that 255 becomes exactly `ONE`; opacities are given
//! directly in the weight domain.

/// A fixed-point weight domain for the integer compositing path.
pub trait WeightScale: Copy + Send + Sync + 'static {
    /// Fractional bits.
    const SHIFT: u32;

    /// Unit weight, `1 << SHIFT`. Also the full-opacity value.
    const ONE: u32 = 1 << Self::SHIFT;

    /// Maps an 8-bit alpha (or opacity) into `[0, ONE]`; 255 maps to `ONE`.
    fn weight(a: u8) -> u32;
}

/// 256-scale weights (`SHIFT = 8`).
///
/// Cheapest domain; alpha maps as `a + (a >> 7)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scale256;

impl WeightScale for Scale256 {
    const SHIFT: u32 = 8;

    #[inline]
    fn weight(a: u8) -> u32 {
        let a = a as u32;
        a + (a >> 7)
    }
}

/// 16384-scale weights (`SHIFT = 14`).
///
/// Rounds alpha to the nearest of 16385 levels; tracks the floating path to
/// within one 8-bit step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scale16384;

impl WeightScale for Scale16384 {
    const SHIFT: u32 = 14;

    #[inline]
    fn weight(a: u8) -> u32 {
        (a as u32 * 16384 + 127) / 255
    }
}

/// Full opacity in the weight domain of `W`.
#[inline]
pub const fn full_opacity<W: WeightScale>() -> u32 {
    W::ONE
}
