//! Runtime kernel lookup by format pair.
//!
//! [`quantized_kernel`] and [`float_kernel`] resolve a
//! `(FormatCode, FormatCode)` pair to monomorphized byte-level kernels once.
//! Unregistered pairs yield `None`; callers must treat that as "no
//! interpolator available" rather than substituting a lossy fallback.
//!
//! | Registry | Registered pairs |
//! |---|---|
//! | quantized | fixed-point source and destination |
//! | float | any source, floating destination |
//!
//! In both, pairs without a conversion formula (`Alpha8` into an opaque
//! format) are unregistered.

use crate::float::{float_bilinear, float_linear};
use crate::quantized::{quantized_bilinear, quantized_linear};
use pixkit_convert::{is_supported, CanonicalPixel};
use pixkit_core::{with_pixel_format, Error, FormatCode, PixelFormat, Result};
use tracing::debug;

type LinearFn<W> = fn(&[u8], &[u8], W, &mut [u8]);
type BilinearFn<W> = fn([&[u8]; 4], W, W, &mut [u8]);

/// A resolved interpolation kernel over packed pixel bytes.
///
/// `W` is the weight type: `u32` in `[0, 2^11]` for quantized kernels,
/// `f32` in `[0, 1]` for float kernels.
#[derive(Clone, Copy)]
pub struct Kernel<W> {
    src: FormatCode,
    dst: FormatCode,
    linear: LinearFn<W>,
    bilinear: BilinearFn<W>,
}

/// Fixed-point kernel.
pub type QuantizedKernel = Kernel<u32>;

/// Floating kernel.
pub type FloatKernel = Kernel<f32>;

impl<W: Copy> Kernel<W> {
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

    /// Interpolates two packed source pixels into `out`.
    pub fn linear(
        &self,
        left: &[u8],
        right: &[u8],
        weight_right: W,
        out: &mut [u8],
    ) -> Result<()> {
        self.check(&[left, right], out)?;
        (self.linear)(left, right, weight_right, out);
        Ok(())
    }

    /// Interpolates four packed corners
    /// (`[top_left, top_right, bottom_left, bottom_right]`) into `out`.
    pub fn bilinear(
        &self,
        corners: [&[u8]; 4],
        weight_x: W,
        weight_y: W,
        out: &mut [u8],
    ) -> Result<()> {
        self.check(&corners, out)?;
        (self.bilinear)(corners, weight_x, weight_y, out);
        Ok(())
    }

    fn check(&self, inputs: &[&[u8]], out: &[u8]) -> Result<()> {
        let sb = self.src.bytes_per_pixel();
        if let Some(short) = inputs.iter().find(|s| s.len() < sb) {
            return Err(Error::invalid_layout(format!(
                "{} sample needs {sb} bytes, got {}",
                self.src,
                short.len()
            )));
        }
        let db = self.dst.bytes_per_pixel();
        if out.len() < db {
            return Err(Error::invalid_layout(format!(
                "{} output needs {db} bytes, got {}",
                self.dst,
                out.len()
            )));
        }
        Ok(())
    }
}

impl<W> std::fmt::Debug for Kernel<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Kernel")
            .field("src", &self.src)
            .field("dst", &self.dst)
            .finish()
    }
}

fn linear_q<S: CanonicalPixel, D: CanonicalPixel>(l: &[u8], r: &[u8], w: u32, out: &mut [u8]) {
    quantized_linear::<S, D>(S::read_bytes(l), S::read_bytes(r), w).write_bytes(out);
}

fn bilinear_q<S: CanonicalPixel, D: CanonicalPixel>(c: [&[u8]; 4], x: u32, y: u32, out: &mut [u8]) {
    quantized_bilinear::<S, D>(c.map(S::read_bytes), x, y).write_bytes(out);
}

fn linear_f<S: CanonicalPixel, D: CanonicalPixel>(l: &[u8], r: &[u8], w: f32, out: &mut [u8]) {
    float_linear::<S, D>(S::read_bytes(l), S::read_bytes(r), w).write_bytes(out);
}

fn bilinear_f<S: CanonicalPixel, D: CanonicalPixel>(c: [&[u8]; 4], x: f32, y: f32, out: &mut [u8]) {
    float_bilinear::<S, D>(c.map(S::read_bytes), x, y).write_bytes(out);
}

/// Whether the quantized registry has a kernel for the pair.
#[inline]
pub const fn has_quantized_kernel(src: FormatCode, dst: FormatCode) -> bool {
    src.is_quantized() && dst.is_quantized() && is_supported(src, dst)
}

/// Whether the float registry has a kernel for the pair.
#[inline]
pub const fn has_float_kernel(src: FormatCode, dst: FormatCode) -> bool {
    dst.is_floating_point() && is_supported(src, dst)
}

/// Looks up the fixed-point kernel for a pair.
pub fn quantized_kernel(src: FormatCode, dst: FormatCode) -> Option<QuantizedKernel> {
    if !has_quantized_kernel(src, dst) {
        debug!(%src, %dst, "no quantized interpolation kernel");
        return None;
    }
    let (linear, bilinear) = with_pixel_format!(src, S => with_pixel_format!(dst, D => (
        linear_q::<S, D> as LinearFn<u32>,
        bilinear_q::<S, D> as BilinearFn<u32>,
    )));
    Some(Kernel {
        src,
        dst,
        linear,
        bilinear,
    })
}

/// Looks up the floating kernel for a pair.
pub fn float_kernel(src: FormatCode, dst: FormatCode) -> Option<FloatKernel> {
    if !has_float_kernel(src, dst) {
        debug!(%src, %dst, "no float interpolation kernel");
        return None;
    }
    let (linear, bilinear) = with_pixel_format!(src, S => with_pixel_format!(dst, D => (
        linear_f::<S, D> as LinearFn<f32>,
        bilinear_f::<S, D> as BilinearFn<f32>,
    )));
    Some(Kernel {
        src,
        dst,
        linear,
        bilinear,
    })
}
