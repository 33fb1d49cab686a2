//! Interpolation weights.
//!
//! Quantized weights are integers in `[0, 2^11]`. A linear pair sums to
//! `2^11`; the four bilinear corner weights are products of the axis weights
//! and sum to exactly `2^22`.
//!
//! # Example
//!
//! ```rust
//! use pixkit_interp::weights::{BilinearWeights, BILINEAR_ONE};
//!
//! let w = BilinearWeights::new(300, 1900);
//! assert_eq!(w.total(), BILINEAR_ONE);
//! ```

/// Fractional bits of a quantized axis weight.
pub const WEIGHT_SHIFT: u32 = 11;

/// Unit axis weight, `2^11`.
pub const WEIGHT_ONE: u32 = 1 << WEIGHT_SHIFT;

/// Fractional bits of a bilinear corner weight.
pub const BILINEAR_SHIFT: u32 = 2 * WEIGHT_SHIFT;

/// Sum of the four bilinear corner weights, `2^22`.
pub const BILINEAR_ONE: u32 = 1 << BILINEAR_SHIFT;

/// Converts a unit-interval weight to a quantized axis weight, rounding to
/// nearest. Out-of-range and NaN inputs clamp.
#[inline]
pub fn quantize_weight(t: f32) -> u32 {
    if !(t > 0.0) {
        return 0;
    }
    if t >= 1.0 {
        return WEIGHT_ONE;
    }
    (t * WEIGHT_ONE as f32 + 0.5) as u32
}

/// Quantized weights of a left/right pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearWeights {
    /// Weight of the left sample.
    pub left: u32,
    /// Weight of the right sample.
    pub right: u32,
}

impl LinearWeights {
    /// Weights from the right-hand weight; values above `2^11` clamp.
    #[inline]
    pub const fn new(weight_right: u32) -> Self {
        let right = if weight_right > WEIGHT_ONE {
            WEIGHT_ONE
        } else {
            weight_right
        };
        Self {
            left: WEIGHT_ONE - right,
            right,
        }
    }

    /// As `[left, right]`.
    #[inline]
    pub const fn to_array(self) -> [u32; 2] {
        [self.left, self.right]
    }
}

/// Quantized weights of the four bilinear corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BilinearWeights {
    /// Top-left, `lx * ty`.
    pub top_left: u32,
    /// Top-right, `rx * ty`.
    pub top_right: u32,
    /// Bottom-left, `lx * by`.
    pub bottom_left: u32,
    /// Bottom-right, `rx * by`.
    pub bottom_right: u32,
}

impl BilinearWeights {
    /// Corner weights from the right (`weight_x`) and bottom (`weight_y`)
    /// axis weights.
    #[inline]
    pub const fn new(weight_x: u32, weight_y: u32) -> Self {
        let x = LinearWeights::new(weight_x);
        let y = LinearWeights::new(weight_y);
        Self {
            top_left: x.left * y.left,
            top_right: x.right * y.left,
            bottom_left: x.left * y.right,
            bottom_right: x.right * y.right,
        }
    }

    /// As `[top_left, top_right, bottom_left, bottom_right]`.
    #[inline]
    pub const fn to_array(self) -> [u32; 4] {
        [self.top_left, self.top_right, self.bottom_left, self.bottom_right]
    }

    /// Sum of the corner weights.
    #[inline]
    pub const fn total(self) -> u32 {
        self.top_left + self.top_right + self.bottom_left + self.bottom_right
    }
}

/// Float corner weights from right and bottom axis weights, clamped to
/// `[0, 1]`, as `[top_left, top_right, bottom_left, bottom_right]`.
#[inline]
pub fn bilinear_weights_f(weight_x: f32, weight_y: f32) -> [f32; 4] {
    let rx = clamp_unit(weight_x);
    let by = clamp_unit(weight_y);
    let lx = 1.0 - rx;
    let ty = 1.0 - by;
    [lx * ty, rx * ty, lx * by, rx * by]
}

/// Clamps to `[0, 1]`, mapping NaN to 0.
#[inline]
pub fn clamp_unit(t: f32) -> f32 {
    if t > 0.0 { t.min(1.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_bilinear_partition_exhaustive() {
        for x in 0..=WEIGHT_ONE {
            for y in 0..=WEIGHT_ONE {
                assert_eq!(BilinearWeights::new(x, y).total(), BILINEAR_ONE, "x={x} y={y}");
            }
        }
    }

    #[test]
    fn test_linear_clamps() {
        assert_eq!(LinearWeights::new(5000), LinearWeights { left: 0, right: 2048 });
        assert_eq!(LinearWeights::new(0).to_array(), [2048, 0]);
        assert_eq!(LinearWeights::new(1024).to_array(), [1024, 1024]);
    }

    #[test]
    fn test_quantize_weight() {
        assert_eq!(quantize_weight(0.5), 1024);
        assert_eq!(quantize_weight(-1.0), 0);
        assert_eq!(quantize_weight(f32::NAN), 0);
        assert_eq!(quantize_weight(2.0), WEIGHT_ONE);
        assert_eq!(quantize_weight(0.25), 512);
    }

    #[test]
    fn test_float_weights_sum_to_one() {
        for (x, y) in [(0.0, 0.0), (0.3, 0.7), (1.0, 0.5), (0.123, 0.999)] {
            let w = bilinear_weights_f(x, y);
            assert_abs_diff_eq!(w.iter().sum::<f32>(), 1.0, epsilon = 1e-6);
        }
        assert_eq!(bilinear_weights_f(f32::NAN, 2.0), [0.0, 0.0, 1.0, 0.0]);
    }
}
