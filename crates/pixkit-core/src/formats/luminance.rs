//! Single-channel formats: alpha only and luminance.

use crate::format::FormatCode;
use crate::pixel::{read_f32, write_f32, PixelFormat};

/// 8-bit alpha-only pixel.
///
/// Carries coverage but no color; decodes as black with this alpha.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Alpha8 {
    /// Alpha channel.
    pub a: u8,
}

impl Alpha8 {
    /// Create an alpha pixel.
    #[inline]
    pub const fn new(a: u8) -> Self {
        Self { a }
    }
}

impl PixelFormat for Alpha8 {
    const CODE: FormatCode = FormatCode::Alpha8;

    #[inline]
    fn read_bytes(bytes: &[u8]) -> Self {
        Self::new(bytes[0])
    }

    #[inline]
    fn write_bytes(self, out: &mut [u8]) {
        out[0] = self.a;
    }
}

/// 8-bit luminance pixel.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Luminance8 {
    /// Luminance channel.
    pub l: u8,
}

impl Luminance8 {
    /// Create a luminance pixel.
    #[inline]
    pub const fn new(l: u8) -> Self {
        Self { l }
    }
}

impl PixelFormat for Luminance8 {
    const CODE: FormatCode = FormatCode::Luminance8;

    #[inline]
    fn read_bytes(bytes: &[u8]) -> Self {
        Self::new(bytes[0])
    }

    #[inline]
    fn write_bytes(self, out: &mut [u8]) {
        out[0] = self.l;
    }
}

/// 16-bit luminance pixel.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Luminance16 {
    /// Luminance channel.
    pub l: u16,
}

impl Luminance16 {
    /// Create a luminance pixel.
    #[inline]
    pub const fn new(l: u16) -> Self {
        Self { l }
    }
}

impl PixelFormat for Luminance16 {
    const CODE: FormatCode = FormatCode::Luminance16;

    #[inline]
    fn read_bytes(bytes: &[u8]) -> Self {
        Self::new(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    #[inline]
    fn write_bytes(self, out: &mut [u8]) {
        out[..2].copy_from_slice(&self.l.to_le_bytes());
    }
}

/// 32-bit float luminance pixel, nominal range 0.0–1.0.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Luminance32F {
    /// Luminance channel.
    pub l: f32,
}

impl Luminance32F {
    /// Create a luminance pixel.
    #[inline]
    pub const fn new(l: f32) -> Self {
        Self { l }
    }
}

impl PixelFormat for Luminance32F {
    const CODE: FormatCode = FormatCode::Luminance32F;

    #[inline]
    fn read_bytes(bytes: &[u8]) -> Self {
        Self::new(read_f32(bytes, 0))
    }

    #[inline]
    fn write_bytes(self, out: &mut [u8]) {
        write_f32(out, 0, self.l);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance16_is_little_endian() {
        let mut buf = [0u8; 2];
        Luminance16::new(0x1234).write_bytes(&mut buf);
        assert_eq!(buf, [0x34, 0x12]);
        assert_eq!(Luminance16::read_bytes(&buf), Luminance16::new(0x1234));
    }

    #[test]
    fn test_single_byte_formats() {
        let mut buf = [0u8; 1];
        Alpha8::new(77).write_bytes(&mut buf);
        assert_eq!(Alpha8::read_bytes(&buf).a, 77);
        Luminance8::new(200).write_bytes(&mut buf);
        assert_eq!(Luminance8::read_bytes(&buf).l, 200);
    }

    #[test]
    fn test_luminance32f_bytes() {
        let mut buf = [0u8; 4];
        Luminance32F::new(0.5).write_bytes(&mut buf);
        assert_eq!(Luminance32F::read_bytes(&buf).l, 0.5);
    }
}
