//! Packed 16-bit formats.
//!
//! Channels are truncated to their field width on encode and replicated back
//! to 8 bits on read-out, so a field never decodes with all-zero low bits.
//!
//! Bit layouts, least significant bit first:
//!
//! ```text
//! Bgr565    B[0..5]  G[5..11]  R[11..16]
//! Bgra5551  B[0..5]  G[5..10]  R[10..15]  A[15]
//! Bgra4444  B[0..4]  G[4..8]   R[8..12]   A[12..16]
//! ```

use crate::format::FormatCode;
use crate::pixel::PixelFormat;
use crate::quantize::{expand4, expand5, expand6, ALPHA_1BIT_THRESHOLD};

/// Packed 5-6-5 BGR pixel.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bgr565 {
    bits: u16,
}

impl Bgr565 {
    /// Wraps a raw packed value.
    #[inline]
    pub const fn from_packed(bits: u16) -> Self {
        Self { bits }
    }

    /// Raw packed value.
    #[inline]
    pub const fn to_packed(self) -> u16 {
        self.bits
    }

    /// Packs field values; each is masked to its width.
    #[inline]
    pub const fn pack(b5: u16, g6: u16, r5: u16) -> Self {
        Self::from_packed((b5 & 0x1f) | ((g6 & 0x3f) << 5) | ((r5 & 0x1f) << 11))
    }

    /// Field values `(b5, g6, r5)` without expansion.
    #[inline]
    pub const fn fields(self) -> (u16, u16, u16) {
        (self.bits & 0x1f, (self.bits >> 5) & 0x3f, self.bits >> 11)
    }

    /// Encodes 8-bit channels by truncation.
    #[inline]
    pub const fn from_bgr8(b: u8, g: u8, r: u8) -> Self {
        Self::pack((b >> 3) as u16, (g >> 2) as u16, (r >> 3) as u16)
    }

    /// Expanded 8-bit channels `[b, g, r]`.
    #[inline]
    pub const fn to_bgr8(self) -> [u8; 3] {
        let (b, g, r) = self.fields();
        [expand5(b), expand6(g), expand5(r)]
    }
}

impl PixelFormat for Bgr565 {
    const CODE: FormatCode = FormatCode::Bgr565;

    #[inline]
    fn read_bytes(bytes: &[u8]) -> Self {
        Self::from_packed(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    #[inline]
    fn write_bytes(self, out: &mut [u8]) {
        out[..2].copy_from_slice(&self.bits.to_le_bytes());
    }
}

/// Packed 5-5-5-1 BGRA pixel with a boolean alpha.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bgra5551 {
    bits: u16,
}

impl Bgra5551 {
    /// Wraps a raw packed value.
    #[inline]
    pub const fn from_packed(bits: u16) -> Self {
        Self { bits }
    }

    /// Raw packed value.
    #[inline]
    pub const fn to_packed(self) -> u16 {
        self.bits
    }

    /// Packs field values; each is masked to its width.
    #[inline]
    pub const fn pack(b5: u16, g5: u16, r5: u16, a1: bool) -> Self {
        let a = if a1 { 0x8000 } else { 0 };
        Self::from_packed((b5 & 0x1f) | ((g5 & 0x1f) << 5) | ((r5 & 0x1f) << 10) | a)
    }

    /// Field values `(b5, g5, r5, a1)` without expansion.
    #[inline]
    pub const fn fields(self) -> (u16, u16, u16, bool) {
        (
            self.bits & 0x1f,
            (self.bits >> 5) & 0x1f,
            (self.bits >> 10) & 0x1f,
            self.bits & 0x8000 != 0,
        )
    }

    /// Encodes straight 8-bit channels; alpha is thresholded at 96.
    #[inline]
    pub const fn from_bgra8(b: u8, g: u8, r: u8, a: u8) -> Self {
        Self::pack(
            (b >> 3) as u16,
            (g >> 3) as u16,
            (r >> 3) as u16,
            a >= ALPHA_1BIT_THRESHOLD,
        )
    }

    /// Expanded 8-bit channels `[b, g, r, a]`; alpha is 0 or 255.
    #[inline]
    pub const fn to_bgra8(self) -> [u8; 4] {
        let (b, g, r, a) = self.fields();
        [expand5(b), expand5(g), expand5(r), if a { 255 } else { 0 }]
    }
}

impl PixelFormat for Bgra5551 {
    const CODE: FormatCode = FormatCode::Bgra5551;

    #[inline]
    fn read_bytes(bytes: &[u8]) -> Self {
        Self::from_packed(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    #[inline]
    fn write_bytes(self, out: &mut [u8]) {
        out[..2].copy_from_slice(&self.bits.to_le_bytes());
    }
}

/// Packed 4-4-4-4 BGRA pixel.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bgra4444 {
    bits: u16,
}

impl Bgra4444 {
    /// Wraps a raw packed value.
    #[inline]
    pub const fn from_packed(bits: u16) -> Self {
        Self { bits }
    }

    /// Raw packed value.
    #[inline]
    pub const fn to_packed(self) -> u16 {
        self.bits
    }

    /// Packs field values; each is masked to its width.
    #[inline]
    pub const fn pack(b4: u16, g4: u16, r4: u16, a4: u16) -> Self {
        Self::from_packed((b4 & 0xf) | ((g4 & 0xf) << 4) | ((r4 & 0xf) << 8) | ((a4 & 0xf) << 12))
    }

    /// Field values `(b4, g4, r4, a4)` without expansion.
    #[inline]
    pub const fn fields(self) -> (u16, u16, u16, u16) {
        (
            self.bits & 0xf,
            (self.bits >> 4) & 0xf,
            (self.bits >> 8) & 0xf,
            self.bits >> 12,
        )
    }

    /// Encodes straight 8-bit channels by truncation.
    #[inline]
    pub const fn from_bgra8(b: u8, g: u8, r: u8, a: u8) -> Self {
        Self::pack((b >> 4) as u16, (g >> 4) as u16, (r >> 4) as u16, (a >> 4) as u16)
    }

    /// Expanded 8-bit channels `[b, g, r, a]`.
    #[inline]
    pub const fn to_bgra8(self) -> [u8; 4] {
        let (b, g, r, a) = self.fields();
        [expand4(b), expand4(g), expand4(r), expand4(a)]
    }
}

impl PixelFormat for Bgra4444 {
    const CODE: FormatCode = FormatCode::Bgra4444;

    #[inline]
    fn read_bytes(bytes: &[u8]) -> Self {
        Self::from_packed(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    #[inline]
    fn write_bytes(self, out: &mut [u8]) {
        out[..2].copy_from_slice(&self.bits.to_le_bytes());
    }
}
