//! The format trait implemented by every cataloged pixel type.
//!
//! [`PixelFormat`] exposes per-format metadata as associated constants so
//! generic algorithms select integer or floating code paths at
//! monomorphization time, with no runtime branch in the per-pixel loop.
//!
//! # Example
//!
//! ```
//! use pixkit_core::prelude::*;
//!
//! fn describe<T: PixelFormat>() -> &'static str {
//!     if is_floating_point_format::<T>() {
//!         "float"
//!     } else {
//!         "fixed"
//!     }
//! }
//!
//! assert_eq!(describe::<Bgra32>(), "fixed");
//! assert_eq!(describe::<Rgbp128F>(), "float");
//! assert!(is_premultiplied_format::<Bgrp32>());
//! assert!(is_opaque_format::<Rgb24>());
//! ```
//!
//! # Byte Layout
//!
//! Pixel values never reinterpret memory. [`PixelFormat::read_bytes`] and
//! [`PixelFormat::write_bytes`] are explicit pack/unpack functions; every
//! multi-byte field is little-endian.

use crate::format::FormatCode;
use std::fmt;

/// Trait for cataloged pixel value types.
///
/// # Constants
///
/// - [`CODE`](PixelFormat::CODE) - stable format code
/// - [`IS_OPAQUE`](PixelFormat::IS_OPAQUE) - no alpha channel
/// - [`IS_PREMULTIPLIED`](PixelFormat::IS_PREMULTIPLIED) - color scaled by alpha
/// - [`IS_QUANTIZED`](PixelFormat::IS_QUANTIZED) - fixed-point channels
/// - [`BYTES`](PixelFormat::BYTES) - serialized size
pub trait PixelFormat: Copy + Default + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Stable numeric format code.
    const CODE: FormatCode;

    /// Whether the format has no alpha channel.
    const IS_OPAQUE: bool = Self::CODE.is_opaque();

    /// Whether color channels are premultiplied by alpha.
    const IS_PREMULTIPLIED: bool = Self::CODE.is_premultiplied();

    /// Whether channels are fixed-point integers.
    const IS_QUANTIZED: bool = Self::CODE.is_quantized();

    /// Serialized size in bytes.
    const BYTES: usize = Self::CODE.bytes_per_pixel();

    /// Unpacks a pixel from the first [`BYTES`](PixelFormat::BYTES) bytes.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is shorter than [`BYTES`](PixelFormat::BYTES).
    fn read_bytes(bytes: &[u8]) -> Self;

    /// Packs the pixel into the first [`BYTES`](PixelFormat::BYTES) bytes.
    ///
    /// # Panics
    ///
    /// Panics if `out` is shorter than [`BYTES`](PixelFormat::BYTES).
    fn write_bytes(self, out: &mut [u8]);
}

/// Whether `T` stores 32-bit float channels.
#[inline]
pub const fn is_floating_point_format<T: PixelFormat>() -> bool {
    !T::IS_QUANTIZED
}

/// Whether `T` stores premultiplied color.
#[inline]
pub const fn is_premultiplied_format<T: PixelFormat>() -> bool {
    T::IS_PREMULTIPLIED
}

/// Whether `T` has no alpha channel.
#[inline]
pub const fn is_opaque_format<T: PixelFormat>() -> bool {
    T::IS_OPAQUE
}

/// Whether `T` stores fixed-point channels.
#[inline]
pub const fn is_quantized_format<T: PixelFormat>() -> bool {
    T::IS_QUANTIZED
}

/// Reads the `index`-th little-endian `f32` from `bytes`.
#[inline]
pub(crate) fn read_f32(bytes: &[u8], index: usize) -> f32 {
    let mut raw = [0u8; 4];
    raw.copy_from_slice(&bytes[index * 4..index * 4 + 4]);
    f32::from_le_bytes(raw)
}

/// Writes `value` as the `index`-th little-endian `f32` of `out`.
#[inline]
pub(crate) fn write_f32(out: &mut [u8], index: usize, value: f32) {
    out[index * 4..index * 4 + 4].copy_from_slice(&value.to_le_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::*;

    #[test]
    fn test_constants_follow_codes() {
        assert!(Bgr24::IS_OPAQUE);
        assert!(!Bgra32::IS_OPAQUE);
        assert!(Bgrp32::IS_PREMULTIPLIED);
        assert!(!Rgba128F::IS_PREMULTIPLIED);
        assert!(Bgra4444::IS_QUANTIZED);
        assert!(!Luminance32F::IS_QUANTIZED);
        assert_eq!(Bgr565::BYTES, 2);
        assert_eq!(Rgbp128F::BYTES, 16);
    }

    #[test]
    fn test_compile_time_predicates() {
        const FLOAT: bool = is_floating_point_format::<Bgr96F>();
        const PREMUL: bool = is_premultiplied_format::<Rgbp32>();
        const OPAQUE: bool = is_opaque_format::<Luminance16>();
        assert!(FLOAT && PREMUL && OPAQUE);
        assert!(is_quantized_format::<Alpha8>());
        assert!(!is_opaque_format::<Alpha8>());
    }

    #[test]
    fn test_f32_helpers_little_endian() {
        let mut buf = [0u8; 8];
        write_f32(&mut buf, 1, 1.0);
        assert_eq!(&buf[4..], &[0x00, 0x00, 0x80, 0x3f]);
        assert_eq!(read_f32(&buf, 1), 1.0);
        assert_eq!(read_f32(&buf, 0), 0.0);
    }
}
