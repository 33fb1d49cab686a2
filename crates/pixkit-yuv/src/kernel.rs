//! The BT.601 integer transform.
//!
//! ```text
//! y' = 298 * (Y - 16)
//! B  = (y' + 516 * (U - 128)                   + 128) >> 8
//! G  = (y' - 100 * (U - 128) - 208 * (V - 128) + 128) >> 8
//! R  = (y' + 409 * (V - 128)                   + 128) >> 8
//! ```
//!
//! Results clamp to `[0, 255]`. The chroma half of each sum depends only on
//! `(U, V)`, which subsampled layouts share between two luma samples, so
//! [`ChromaTerms`] evaluates it once per pair.

use pixkit_core::Bgr24;

/// Cached chroma contributions for one `(U, V)` sample.
///
/// The default is neutral chroma `(128, 128)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromaTerms {
    b: i32,
    g: i32,
    r: i32,
}

impl ChromaTerms {
    /// Terms for a chroma sample.
    #[inline]
    pub const fn new(u: u8, v: u8) -> Self {
        let u = u as i32 - 128;
        let v = v as i32 - 128;
        Self {
            b: 516 * u + 128,
            g: -100 * u - 208 * v + 128,
            r: 409 * v + 128,
        }
    }

    /// Replaces the cached chroma sample.
    #[inline]
    pub fn set_uv(&mut self, u: u8, v: u8) {
        *self = Self::new(u, v);
    }

    /// Decodes one luma sample against the cached chroma.
    #[inline]
    pub const fn pixel(&self, y: u8) -> Bgr24 {
        let y = 298 * (y as i32 - 16);
        Bgr24::new(clamp(y + self.b), clamp(y + self.g), clamp(y + self.r))
    }
}

impl Default for ChromaTerms {
    fn default() -> Self {
        Self::new(128, 128)
    }
}

#[inline]
const fn clamp(v: i32) -> u8 {
    let v = v >> 8;
    if v < 0 {
        0
    } else if v > 255 {
        255
    } else {
        v as u8
    }
}

/// Decodes a single `(Y, U, V)` sample.
#[inline]
pub const fn yuv_to_bgr(y: u8, u: u8, v: u8) -> Bgr24 {
    ChromaTerms::new(u, v).pixel(y)
}
