//! Per-row decoders.
//!
//! Each decoder fills `dst` completely, so `dst.len()` is the row width.
//! Chroma is horizontally subsampled by two in every layout: pixel `x` uses
//! chroma sample `x / 2`, and each sample is evaluated once per pair.
//!
//! Destinations may be any format with RGB channels. `Alpha8` and the
//! luminance formats are rejected with [`Error::NotImplemented`]; all
//! validation happens before any output is written.

use crate::kernel::ChromaTerms;
use pixkit_convert::{Canonical, CanonicalPixel};
use pixkit_core::{Bgr24, Bgra32, Error, FormatCode, Result};

/// Byte order of interleaved chroma words in semi-planar layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChromaOrder {
    /// `U` in the low byte (NV12).
    Uv,
    /// `V` in the low byte (NV21).
    Vu,
}

impl ChromaOrder {
    /// Splits a little-endian chroma word into `(u, v)`.
    #[inline]
    pub const fn split(self, word: u16) -> (u8, u8) {
        let lo = word as u8;
        let hi = (word >> 8) as u8;
        match self {
            Self::Uv => (lo, hi),
            Self::Vu => (hi, lo),
        }
    }
}

/// Sample order within a packed 4:2:2 macropixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackedOrder {
    /// `Y0 U Y1 V`.
    Yuyv,
    /// `U Y0 V Y1`.
    Uyvy,
}

impl PackedOrder {
    /// Splits a 4-byte macropixel into `(y0, y1, u, v)`.
    #[inline]
    pub const fn split(self, m: [u8; 4]) -> (u8, u8, u8, u8) {
        match self {
            Self::Yuyv => (m[0], m[2], m[1], m[3]),
            Self::Uyvy => (m[1], m[3], m[0], m[2]),
        }
    }
}

/// Fails with [`Error::NotImplemented`] for destinations without RGB
/// channels.
pub fn check_destination(dst: FormatCode) -> Result<()> {
    if dst.has_color() && !dst.is_luminance() {
        Ok(())
    } else {
        Err(Error::not_implemented("YUV decode", dst))
    }
}

#[inline]
fn encode<D: CanonicalPixel>(px: Bgr24) -> D {
    D::from_canonical(Canonical::Straight8(Bgra32::opaque(px.b, px.g, px.r)))
}

#[inline]
const fn chroma_width(width: usize) -> usize {
    width.div_ceil(2)
}

fn too_short(what: &str, have: usize, need: usize) -> Error {
    Error::invalid_layout(format!("{what} row has {have} bytes, needs {need}"))
}

/// Decodes a planar row from separate luma, `U` and `V` rows (I420, YV12).
pub fn decode_row_planar<D: CanonicalPixel>(
    y: &[u8],
    u: &[u8],
    v: &[u8],
    dst: &mut [D],
) -> Result<()> {
    check_destination(D::CODE)?;
    let width = dst.len();
    let cw = chroma_width(width);
    if y.len() < width {
        return Err(too_short("luma", y.len(), width));
    }
    if u.len() < cw || v.len() < cw {
        return Err(too_short("chroma", u.len().min(v.len()), cw));
    }

    let mut terms = ChromaTerms::default();
    for (k, (out, luma)) in dst.chunks_mut(2).zip(y.chunks(2)).enumerate() {
        terms.set_uv(u[k], v[k]);
        for (d, &l) in out.iter_mut().zip(luma) {
            *d = encode(terms.pixel(l));
        }
    }
    Ok(())
}

/// Decodes a semi-planar row from a luma row and a row of interleaved
/// 16-bit chroma words (NV12, NV21).
pub fn decode_row_semiplanar<D: CanonicalPixel>(
    y: &[u8],
    uv: &[u8],
    order: ChromaOrder,
    dst: &mut [D],
) -> Result<()> {
    check_destination(D::CODE)?;
    let width = dst.len();
    let cw = chroma_width(width);
    if y.len() < width {
        return Err(too_short("luma", y.len(), width));
    }
    if uv.len() < 2 * cw {
        return Err(too_short("chroma", uv.len(), 2 * cw));
    }

    let mut terms = ChromaTerms::default();
    let words = uv.chunks_exact(2);
    for ((out, luma), word) in dst.chunks_mut(2).zip(y.chunks(2)).zip(words) {
        let (u, v) = order.split(u16::from_le_bytes([word[0], word[1]]));
        terms.set_uv(u, v);
        for (d, &l) in out.iter_mut().zip(luma) {
            *d = encode(terms.pixel(l));
        }
    }
    Ok(())
}

/// Decodes a packed 4:2:2 row (YUYV, UYVY).
///
/// `src` holds one 4-byte macropixel per two output pixels; an odd width
/// still needs the final full macropixel.
pub fn decode_row_packed<D: CanonicalPixel>(
    src: &[u8],
    order: PackedOrder,
    dst: &mut [D],
) -> Result<()> {
    check_destination(D::CODE)?;
    let need = 4 * chroma_width(dst.len());
    if src.len() < need {
        return Err(too_short("packed", src.len(), need));
    }

    let mut terms = ChromaTerms::default();
    for (out, m) in dst.chunks_mut(2).zip(src.chunks_exact(4)) {
        let (y0, y1, u, v) = order.split([m[0], m[1], m[2], m[3]]);
        terms.set_uv(u, v);
        out[0] = encode(terms.pixel(y0));
        if let Some(d) = out.get_mut(1) {
            *d = encode(terms.pixel(y1));
        }
    }
    Ok(())
}
