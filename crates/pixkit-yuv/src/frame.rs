//! Frame-level decoding over row-strided planes.
//!
//! Geometry is validated up front: every plane must cover its rows at the
//! given stride, and the destination must cover `height` rows of `width`
//! pixels at `dst_stride` (in pixels). Nothing is written unless the whole
//! frame is valid.
//!
//! # Example
//!
//! ```rust
//! use pixkit_yuv::{decode_420_frame, Chroma420, Yuv420Frame};
//! use pixkit_core::Bgr24;
//!
//! // 2x2 frame, one chroma sample.
//! let frame = Yuv420Frame {
//!     width: 2,
//!     height: 2,
//!     y: &[16, 235, 235, 16],
//!     y_stride: 2,
//!     chroma: Chroma420::Planar { u: &[128], v: &[128], stride: 1 },
//! };
//! let mut out = [Bgr24::default(); 4];
//! decode_420_frame(&frame, &mut out, 2).unwrap();
//! assert_eq!(out[1], Bgr24::new(255, 255, 255));
//! ```

use crate::row::{
    check_destination, decode_row_packed, decode_row_planar, decode_row_semiplanar, ChromaOrder,
    PackedOrder,
};
use pixkit_convert::CanonicalPixel;
use pixkit_core::{Error, Result};
use tracing::debug;

/// Chroma planes of a 4:2:0 frame.
///
/// Each chroma row covers two luma rows and `ceil(width / 2)` samples.
#[derive(Debug, Clone, Copy)]
pub enum Chroma420<'a> {
    /// Separate `U` and `V` planes sharing one stride (I420, YV12).
    Planar {
        /// `U` plane.
        u: &'a [u8],
        /// `V` plane.
        v: &'a [u8],
        /// Bytes per chroma row.
        stride: usize,
    },
    /// One plane of interleaved 16-bit chroma words (NV12, NV21).
    Interleaved {
        /// Chroma plane.
        uv: &'a [u8],
        /// Bytes per chroma row.
        stride: usize,
        /// Byte order of each word.
        order: ChromaOrder,
    },
}

/// A borrowed 4:2:0 frame.
#[derive(Debug, Clone, Copy)]
pub struct Yuv420Frame<'a> {
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
    /// Luma plane.
    pub y: &'a [u8],
    /// Bytes per luma row.
    pub y_stride: usize,
    /// Chroma planes.
    pub chroma: Chroma420<'a>,
}

/// A borrowed packed 4:2:2 frame.
#[derive(Debug, Clone, Copy)]
pub struct Yuv422Frame<'a> {
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
    /// Packed samples.
    pub data: &'a [u8],
    /// Bytes per row.
    pub stride: usize,
    /// Macropixel order.
    pub order: PackedOrder,
}

fn check_plane(what: &str, len: usize, stride: usize, row: usize, rows: usize) -> Result<()> {
    if rows == 0 || row == 0 {
        return Ok(());
    }
    if stride < row {
        return Err(Error::invalid_layout(format!(
            "{what} stride {stride} is smaller than its {row}-byte row"
        )));
    }
    let need = (rows - 1) * stride + row;
    if len < need {
        return Err(Error::invalid_layout(format!(
            "{what} plane has {len} bytes, needs {need} for {rows} rows"
        )));
    }
    Ok(())
}

impl Yuv420Frame<'_> {
    /// Validates plane sizes and strides.
    pub fn validate(&self) -> Result<()> {
        let (w, h) = (self.width, self.height);
        let (cw, ch) = (w.div_ceil(2), h.div_ceil(2));
        check_plane("luma", self.y.len(), self.y_stride, w, h)?;
        match self.chroma {
            Chroma420::Planar { u, v, stride } => {
                check_plane("U", u.len(), stride, cw, ch)?;
                check_plane("V", v.len(), stride, cw, ch)
            }
            Chroma420::Interleaved { uv, stride, .. } => {
                check_plane("UV", uv.len(), stride, 2 * cw, ch)
            }
        }
    }

    fn decode_row<D: CanonicalPixel>(&self, row: usize, dst: &mut [D]) -> Result<()> {
        let w = self.width;
        let y = &self.y[row * self.y_stride..][..w];
        let c = row / 2;
        match self.chroma {
            Chroma420::Planar { u, v, stride } => {
                decode_row_planar(y, &u[c * stride..], &v[c * stride..], dst)
            }
            Chroma420::Interleaved { uv, stride, order } => {
                decode_row_semiplanar(y, &uv[c * stride..], order, dst)
            }
        }
    }
}

impl Yuv422Frame<'_> {
    /// Validates the plane size and stride.
    pub fn validate(&self) -> Result<()> {
        check_plane(
            "packed",
            self.data.len(),
            self.stride,
            4 * self.width.div_ceil(2),
            self.height,
        )
    }

    fn decode_row<D: CanonicalPixel>(&self, row: usize, dst: &mut [D]) -> Result<()> {
        decode_row_packed(&self.data[row * self.stride..], self.order, dst)
    }
}

fn check_dst<D: CanonicalPixel>(
    len: usize,
    stride: usize,
    width: usize,
    height: usize,
) -> Result<()> {
    check_destination(D::CODE)?;
    if width == 0 || height == 0 {
        return Ok(());
    }
    if stride < width {
        return Err(Error::invalid_layout(format!(
            "destination stride {stride} is smaller than width {width}"
        )));
    }
    let need = (height - 1) * stride + width;
    if len < need {
        return Err(Error::invalid_layout(format!(
            "destination has {len} pixels, needs {need}"
        )));
    }
    Ok(())
}

/// Decodes a 4:2:0 frame into `dst`; `dst_stride` is in pixels.
pub fn decode_420_frame<D: CanonicalPixel>(
    frame: &Yuv420Frame<'_>,
    dst: &mut [D],
    dst_stride: usize,
) -> Result<()> {
    check_dst::<D>(dst.len(), dst_stride, frame.width, frame.height)?;
    frame.validate()?;
    if frame.width == 0 || frame.height == 0 {
        return Ok(());
    }
    debug!(width = frame.width, height = frame.height, dst = %D::CODE, "decode_420_frame");
    for row in 0..frame.height {
        let out = &mut dst[row * dst_stride..][..frame.width];
        frame.decode_row(row, out)?;
    }
    Ok(())
}

/// Decodes a packed 4:2:2 frame into `dst`; `dst_stride` is in pixels.
pub fn decode_422_frame<D: CanonicalPixel>(
    frame: &Yuv422Frame<'_>,
    dst: &mut [D],
    dst_stride: usize,
) -> Result<()> {
    check_dst::<D>(dst.len(), dst_stride, frame.width, frame.height)?;
    frame.validate()?;
    if frame.width == 0 || frame.height == 0 {
        return Ok(());
    }
    debug!(width = frame.width, height = frame.height, dst = %D::CODE, "decode_422_frame");
    for row in 0..frame.height {
        let out = &mut dst[row * dst_stride..][..frame.width];
        frame.decode_row(row, out)?;
    }
    Ok(())
}

/// Like [`decode_420_frame`], decoding row pairs on the rayon thread pool.
///
/// Output is bit-identical to the sequential decoder.
#[cfg(feature = "parallel")]
pub fn decode_420_frame_par<D: CanonicalPixel>(
    frame: &Yuv420Frame<'_>,
    dst: &mut [D],
    dst_stride: usize,
) -> Result<()> {
    use rayon::prelude::*;

    check_dst::<D>(dst.len(), dst_stride, frame.width, frame.height)?;
    frame.validate()?;
    if frame.width == 0 || frame.height == 0 {
        return Ok(());
    }
    debug!(width = frame.width, height = frame.height, dst = %D::CODE, "decode_420_frame_par");
    dst.par_chunks_mut(2 * dst_stride)
        .take(frame.height.div_ceil(2))
        .enumerate()
        .try_for_each(|(pair, chunk)| {
            for sub in 0..2 {
                let row = 2 * pair + sub;
                if row >= frame.height {
                    break;
                }
                let out = &mut chunk[sub * dst_stride..][..frame.width];
                frame.decode_row(row, out)?;
            }
            Ok(())
        })
}

/// Like [`decode_422_frame`], decoding rows on the rayon thread pool.
#[cfg(feature = "parallel")]
pub fn decode_422_frame_par<D: CanonicalPixel>(
    frame: &Yuv422Frame<'_>,
    dst: &mut [D],
    dst_stride: usize,
) -> Result<()> {
    use rayon::prelude::*;

    check_dst::<D>(dst.len(), dst_stride, frame.width, frame.height)?;
    frame.validate()?;
    if frame.width == 0 || frame.height == 0 {
        return Ok(());
    }
    debug!(width = frame.width, height = frame.height, dst = %D::CODE, "decode_422_frame_par");
    dst.par_chunks_mut(dst_stride)
        .take(frame.height)
        .enumerate()
        .try_for_each(|(row, chunk)| frame.decode_row(row, &mut chunk[..frame.width]))
}
