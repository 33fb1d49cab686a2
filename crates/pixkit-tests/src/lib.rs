//! Integration tests for pixkit crates.
//!
//! This crate contains end-to-end tests that exercise the conversion matrix,
//! compositing, interpolation and YUV decode together, plus a few sample
//! generators shared by them.
//!
//! # Running
//!
//! ```bash
//! cargo test --package pixkit-tests
//! ```

use pixkit_convert::convert_unchecked;
use pixkit_core::{with_pixel_format, Bgra32, FormatCode, PixelFormat};

#[cfg(test)]
mod matrix;
#[cfg(test)]
mod pipeline;

/// Deterministic xorshift generator for reproducible samples.
#[derive(Debug, Clone)]
pub struct SampleRng(u64);

impl SampleRng {
    /// Generator from a non-zero seed.
    pub fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    /// Next 64 random bits.
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    /// Next random byte.
    pub fn next_u8(&mut self) -> u8 {
        (self.next_u64() >> 56) as u8
    }

    /// Random straight-alpha pixel. One in four is opaque and one in eight
    /// fully transparent so both edge cases show up in every batch.
    pub fn next_bgra32(&mut self) -> Bgra32 {
        let a = match self.next_u8() & 7 {
            0 => 0,
            1 | 2 => 255,
            _ => self.next_u8(),
        };
        Bgra32::new(self.next_u8(), self.next_u8(), self.next_u8(), a)
    }
}

/// Straight-alpha samples, including the black, white and transparent
/// corners.
pub fn straight_samples(count: usize, seed: u64) -> Vec<Bgra32> {
    let mut rng = SampleRng::new(seed);
    let mut out = vec![
        Bgra32::TRANSPARENT,
        Bgra32::opaque(0, 0, 0),
        Bgra32::opaque(255, 255, 255),
        Bgra32::new(50, 100, 200, 128),
    ];
    out.extend((0..count).map(|_| rng.next_bgra32()));
    out
}

/// Packed bytes of valid `format` pixels, derived from
/// [`straight_samples`] through the conversion matrix.
pub fn sample_bytes(format: FormatCode, count: usize, seed: u64) -> Vec<u8> {
    let samples = straight_samples(count, seed);
    with_pixel_format!(format, T => {
        let mut out = vec![0u8; samples.len() * T::BYTES];
        for (px, chunk) in samples.iter().zip(out.chunks_exact_mut(T::BYTES)) {
            convert_unchecked::<Bgra32, T>(*px).write_bytes(chunk);
        }
        out
    })
}

/// Converts packed bytes pixel by pixel through the typed API.
pub fn convert_typed(src: FormatCode, dst: FormatCode, bytes: &[u8]) -> Vec<u8> {
    with_pixel_format!(src, S => with_pixel_format!(dst, D => {
        let n = bytes.len() / S::BYTES;
        let mut out = vec![0u8; n * D::BYTES];
        for (s, d) in bytes.chunks_exact(S::BYTES).zip(out.chunks_exact_mut(D::BYTES)) {
            convert_unchecked::<S, D>(S::read_bytes(s)).write_bytes(d);
        }
        out
    }))
}

/// Installs a test subscriber once so `tracing` events show up in failing
/// test output.
#[cfg(test)]
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .try_init();
}
