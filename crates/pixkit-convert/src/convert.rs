//! Typed conversion between any two cataloged formats.
//!
//! A [`Converter`] validates its format pair once; afterwards every
//! conversion is infallible and branch-free with respect to format.
//!
//! # Example
//!
//! ```rust
//! use pixkit_convert::{Converter, convert};
//! use pixkit_core::{Bgra32, Rgbp32, Rgb24};
//!
//! let px: Rgbp32 = convert(Bgra32::new(50, 100, 200, 128)).unwrap();
//! assert_eq!(px, Rgbp32::new(100, 50, 25, 128));
//!
//! let to_rgb = Converter::<Bgra32, Rgb24>::new().unwrap();
//! let mut out = [Rgb24::default(); 2];
//! to_rgb.convert_span(&[Bgra32::opaque(1, 2, 3), Bgra32::opaque(4, 5, 6)], &mut out);
//! assert_eq!(out[1], Rgb24::new(6, 5, 4));
//! ```

use crate::canonical::CanonicalPixel;
use pixkit_core::{Error, FormatCode, Result};
use std::fmt;
use std::marker::PhantomData;
use tracing::debug;

/// Whether a conversion from `src` to `dst` has a defined formula.
///
/// The only rejected pairs are `Alpha8` into a format without an alpha
/// channel: the source carries no color and the destination no alpha.
#[inline]
pub const fn is_supported(src: FormatCode, dst: FormatCode) -> bool {
    src.has_color() || dst.has_alpha()
}

/// Validates a pair, returning [`Error::UnsupportedConversion`] when it has
/// no formula.
#[inline]
pub fn check_pair(src: FormatCode, dst: FormatCode) -> Result<()> {
    if is_supported(src, dst) {
        Ok(())
    } else {
        debug!(%src, %dst, "conversion pair rejected");
        Err(Error::unsupported_conversion(src, dst))
    }
}

/// Converts one pixel without validating the pair.
///
/// Rejected pairs still produce a defined value (black for `Alpha8` into an
/// opaque format); use [`convert`] or [`Converter`] for checked paths.
#[inline]
pub fn convert_unchecked<S: CanonicalPixel, D: CanonicalPixel>(src: S) -> D {
    D::from_canonical(src.to_canonical())
}

/// Converts one pixel, validating the pair.
#[inline]
pub fn convert<S: CanonicalPixel, D: CanonicalPixel>(src: S) -> Result<D> {
    check_pair(S::CODE, D::CODE)?;
    Ok(convert_unchecked(src))
}

/// A validated conversion from `S` to `D`.
pub struct Converter<S, D> {
    _marker: PhantomData<fn(S) -> D>,
}

impl<S: CanonicalPixel, D: CanonicalPixel> Converter<S, D> {
    /// Resolves the conversion, failing if the pair has no formula.
    pub fn new() -> Result<Self> {
        check_pair(S::CODE, D::CODE)?;
        Ok(Self {
            _marker: PhantomData,
        })
    }

    /// Source format code.
    #[inline]
    pub const fn src_format(&self) -> FormatCode {
        S::CODE
    }

    /// Destination format code.
    #[inline]
    pub const fn dst_format(&self) -> FormatCode {
        D::CODE
    }

    /// Converts one pixel.
    #[inline]
    pub fn convert(&self, src: S) -> D {
        convert_unchecked(src)
    }

    /// Converts a span; the shorter of the two lengths is processed.
    pub fn convert_span(&self, src: &[S], dst: &mut [D]) {
        debug_assert_eq!(src.len(), dst.len(), "span length mismatch");
        for (d, &s) in dst.iter_mut().zip(src) {
            *d = convert_unchecked(s);
        }
    }

    /// Converts a span into a freshly allocated buffer.
    pub fn convert_to_vec(&self, src: &[S]) -> Vec<D> {
        src.iter().map(|&s| convert_unchecked(s)).collect()
    }

    /// Converts a span on the rayon thread pool.
    ///
    /// Output is bit-identical to [`Converter::convert_span`].
    #[cfg(feature = "parallel")]
    pub fn convert_span_par(&self, src: &[S], dst: &mut [D]) {
        use rayon::prelude::*;
        use tracing::trace;

        const CHUNK: usize = 4096;
        debug_assert_eq!(src.len(), dst.len(), "span length mismatch");
        trace!(pixels = src.len(), src = %S::CODE, dst = %D::CODE, "convert_span_par");
        let n = src.len().min(dst.len());
        dst[..n]
            .par_chunks_mut(CHUNK)
            .zip(src[..n].par_chunks(CHUNK))
            .for_each(|(d, s)| self.convert_span(s, d));
    }
}

impl<S, D> Clone for Converter<S, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, D> Copy for Converter<S, D> {}

impl<S: CanonicalPixel, D: CanonicalPixel> fmt::Debug for Converter<S, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter")
            .field("src", &S::CODE)
            .field("dst", &D::CODE)
            .finish()
    }
}
