//! Runtime byte-level dispatch.
//!
//! For callers that only know formats at runtime (image adapters, file
//! decoders), [`ByteConverter`] resolves a `(FormatCode, FormatCode)` pair to
//! a monomorphized row function once. Rows are plain byte slices; pixels are
//! unpacked and packed through [`PixelFormat`], never reinterpreted.
//!
//! # Example
//!
//! ```rust
//! use pixkit_convert::ByteConverter;
//! use pixkit_core::FormatCode;
//!
//! let conv = ByteConverter::new(FormatCode::Rgba32, FormatCode::Bgr24).unwrap();
//! let src = [10u8, 20, 30, 255, 40, 50, 60, 0];
//! let mut dst = [0u8; 6];
//! conv.convert_row(&src, &mut dst).unwrap();
//! assert_eq!(dst, [30, 20, 10, 60, 50, 40]);
//! ```

use crate::canonical::CanonicalPixel;
use crate::convert::check_pair;
use pixkit_core::{with_pixel_format, Error, FormatCode, PixelFormat, Result};
use tracing::{debug, trace};

/// A monomorphized row converter: `(src, dst, pixels)`.
pub type RowFn = fn(&[u8], &mut [u8], usize);

fn convert_row_typed<S: CanonicalPixel, D: CanonicalPixel>(
    src: &[u8],
    dst: &mut [u8],
    pixels: usize,
) {
    let src = src.chunks_exact(S::BYTES);
    let dst = dst.chunks_exact_mut(D::BYTES);
    for (s, d) in src.zip(dst).take(pixels) {
        D::from_canonical(S::read_bytes(s).to_canonical()).write_bytes(d);
    }
}

/// Looks up the row function for a pair without validating it.
pub fn row_fn(src: FormatCode, dst: FormatCode) -> RowFn {
    with_pixel_format!(src, S => with_pixel_format!(dst, D => convert_row_typed::<S, D> as RowFn))
}

/// A resolved runtime conversion between two format codes.
#[derive(Clone, Copy)]
pub struct ByteConverter {
    src: FormatCode,
    dst: FormatCode,
    row: RowFn,
}

impl ByteConverter {
    /// Resolves a conversion between two formats.
    pub fn new(src: FormatCode, dst: FormatCode) -> Result<Self> {
        check_pair(src, dst)?;
        debug!(%src, %dst, "byte converter resolved");
        Ok(Self {
            src,
            dst,
            row: row_fn(src, dst),
        })
    }

    /// Resolves a conversion from raw numeric codes.
    pub fn from_codes(src: u16, dst: u16) -> Result<Self> {
        Self::new(FormatCode::try_from(src)?, FormatCode::try_from(dst)?)
    }

    /// Source format code.
    #[inline]
    pub fn src_format(&self) -> FormatCode {
        self.src
    }

    /// Destination format code.
    #[inline]
    pub fn dst_format(&self) -> FormatCode {
        self.dst
    }

    /// Converts one row of packed pixels.
    ///
    /// `src` must hold a whole number of source pixels and `dst` room for at
    /// least as many destination pixels. Geometry is checked before anything
    /// is written.
    pub fn convert_row(&self, src: &[u8], dst: &mut [u8]) -> Result<()> {
        let sb = self.src.bytes_per_pixel();
        let db = self.dst.bytes_per_pixel();
        if src.len() % sb != 0 {
            return Err(Error::invalid_layout(format!(
                "source row of {} bytes is not a whole number of {} pixels",
                src.len(),
                self.src
            )));
        }
        let pixels = src.len() / sb;
        if dst.len() < pixels * db {
            return Err(Error::invalid_layout(format!(
                "destination row of {} bytes cannot hold {pixels} {} pixels",
                dst.len(),
                self.dst
            )));
        }
        (self.row)(src, dst, pixels);
        Ok(())
    }

    /// Converts a `width` x `height` image between row-strided buffers.
    pub fn convert_rows(
        &self,
        src: &[u8],
        src_stride: usize,
        dst: &mut [u8],
        dst_stride: usize,
        width: usize,
        height: usize,
    ) -> Result<()> {
        self.check_rows(src.len(), src_stride, dst.len(), dst_stride, width, height)?;
        trace!(width, height, src = %self.src, dst = %self.dst, "convert_rows");
        if width == 0 || height == 0 {
            return Ok(());
        }
        let row_in = width * self.src.bytes_per_pixel();
        let row_out = width * self.dst.bytes_per_pixel();
        for y in 0..height {
            let s = &src[y * src_stride..y * src_stride + row_in];
            let d = &mut dst[y * dst_stride..y * dst_stride + row_out];
            (self.row)(s, d, width);
        }
        Ok(())
    }

    /// Like [`ByteConverter::convert_rows`], splitting rows across the
    /// rayon thread pool.
    #[cfg(feature = "parallel")]
    pub fn convert_rows_par(
        &self,
        src: &[u8],
        src_stride: usize,
        dst: &mut [u8],
        dst_stride: usize,
        width: usize,
        height: usize,
    ) -> Result<()> {
        use rayon::prelude::*;

        self.check_rows(src.len(), src_stride, dst.len(), dst_stride, width, height)?;
        trace!(width, height, src = %self.src, dst = %self.dst, "convert_rows_par");
        if width == 0 || height == 0 {
            return Ok(());
        }
        let row_in = width * self.src.bytes_per_pixel();
        let row_out = width * self.dst.bytes_per_pixel();
        let row = self.row;
        dst.par_chunks_mut(dst_stride)
            .take(height)
            .enumerate()
            .for_each(|(y, d)| {
                let s = &src[y * src_stride..y * src_stride + row_in];
                row(s, &mut d[..row_out], width);
            });
        Ok(())
    }

    fn check_rows(
        &self,
        src_len: usize,
        src_stride: usize,
        dst_len: usize,
        dst_stride: usize,
        width: usize,
        height: usize,
    ) -> Result<()> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        let row_in = width * self.src.bytes_per_pixel();
        let row_out = width * self.dst.bytes_per_pixel();
        if src_stride < row_in || dst_stride < row_out {
            return Err(Error::invalid_layout(format!(
                "stride smaller than row: src {src_stride} < {row_in} or dst {dst_stride} < {row_out}"
            )));
        }
        let need_in = (height - 1) * src_stride + row_in;
        let need_out = (height - 1) * dst_stride + row_out;
        if src_len < need_in || dst_len < need_out {
            return Err(Error::invalid_layout(format!(
                "{width}x{height} image needs {need_in} source and {need_out} destination bytes, \
                 got {src_len} and {dst_len}"
            )));
        }
        Ok(())
    }
}

impl std::fmt::Debug for ByteConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByteConverter")
            .field("src", &self.src)
            .field("dst", &self.dst)
            .finish()
    }
}

/// Converts one byte row between two runtime formats.
pub fn convert_row(
    src_format: FormatCode,
    src: &[u8],
    dst_format: FormatCode,
    dst: &mut [u8],
) -> Result<()> {
    ByteConverter::new(src_format, dst_format)?.convert_row(src, dst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixkit_core::formats::*;

    #[test]
    fn test_row_conversion() {
        let conv = ByteConverter::new(FormatCode::Bgra32, FormatCode::Rgbp32).unwrap();
        let src = [50u8, 100, 200, 128];
        let mut dst = [0u8; 4];
        conv.convert_row(&src, &mut dst).unwrap();
        assert_eq!(dst, [100, 50, 25, 128]);
    }

    #[test]
    fn test_unsupported_pair_rejected() {
        let err = ByteConverter::new(FormatCode::Alpha8, FormatCode::Rgb96F).unwrap_err();
        assert!(err.is_unsupported());
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(
            ByteConverter::from_codes(0, 1).unwrap_err(),
            Error::UnknownFormatCode(0)
        );
        let conv = ByteConverter::from_codes(8, 9).unwrap();
        assert_eq!(conv.src_format(), FormatCode::Bgr24);
        assert_eq!(conv.dst_format(), FormatCode::Rgb24);
    }

    #[test]
    fn test_partial_pixel_is_layout_error() {
        let conv = ByteConverter::new(FormatCode::Bgr24, FormatCode::Bgra32).unwrap();
        let mut dst = [0xaau8; 8];
        let err = conv.convert_row(&[1, 2, 3, 4], &mut dst).unwrap_err();
        assert!(err.is_layout_error());
        assert_eq!(dst, [0xaa; 8]);
        let err = conv.convert_row(&[1, 2, 3, 4, 5, 6, 7, 8, 9], &mut dst).unwrap_err();
        assert!(err.is_layout_error());
        assert_eq!(dst, [0xaa; 8]);
    }

    #[test]
    fn test_empty_row() {
        let conv = ByteConverter::new(FormatCode::Rgba128F, FormatCode::Bgr565).unwrap();
        conv.convert_row(&[], &mut []).unwrap();
    }

    #[test]
    fn test_float_little_endian_row() {
        let mut src = [0u8; 12];
        Rgb96F::new(1.0, 0.5, 0.0).write_bytes(&mut src);
        let mut dst = [0u8; 2];
        convert_row(FormatCode::Rgb96F, &src, FormatCode::Luminance16, &mut dst).unwrap();
        let l = Luminance16::read_bytes(&dst);
        assert_eq!(l.l, u16::from_le_bytes(dst));
        assert!((38_000..39_500).contains(&l.l), "{}", l.l);
    }

    #[test]
    fn test_strided_rows() {
        let conv = ByteConverter::new(FormatCode::Luminance8, FormatCode::Bgr24).unwrap();
        // 2x2 image, stride 3 with one padding byte per row.
        let src = [10u8, 20, 0xff, 30, 40, 0xff];
        let mut dst = [0u8; 2 * 8];
        conv.convert_rows(&src, 3, &mut dst, 8, 2, 2).unwrap();
        assert_eq!(&dst[..6], &[10, 10, 10, 20, 20, 20]);
        assert_eq!(&dst[6..8], &[0, 0]);
        assert_eq!(&dst[8..14], &[30, 30, 30, 40, 40, 40]);
    }

    #[test]
    fn test_strided_rows_validate_geometry() {
        let conv = ByteConverter::new(FormatCode::Bgra32, FormatCode::Bgra32).unwrap();
        let src = [0u8; 16];
        let mut dst = [0u8; 16];
        assert!(conv.convert_rows(&src, 4, &mut dst, 8, 2, 2).unwrap_err().is_layout_error());
        assert!(conv.convert_rows(&src, 8, &mut dst, 8, 2, 3).unwrap_err().is_layout_error());
        conv.convert_rows(&src, 8, &mut dst, 8, 2, 2).unwrap();
        conv.convert_rows(&[], 0, &mut [], 0, 0, 0).unwrap();
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_rows_match_sequential() {
        let conv = ByteConverter::new(FormatCode::Argb32, FormatCode::Bgra5551).unwrap();
        let (w, h) = (33usize, 17usize);
        let src: Vec<u8> = (0..w * 4 * h).map(|i| (i * 31) as u8).collect();
        let mut seq = vec![0u8; w * 2 * h];
        let mut par = vec![0u8; w * 2 * h];
        conv.convert_rows(&src, w * 4, &mut seq, w * 2, w, h).unwrap();
        conv.convert_rows_par(&src, w * 4, &mut par, w * 2, w, h).unwrap();
        assert_eq!(seq, par);
    }
}
